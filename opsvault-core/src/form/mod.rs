//! The form engine.
//!
//! Builds an editable [`FormState`] from a page schema plus an optional
//! existing record, and collects it back into a wire-ready record. The
//! engine owns values and validation only; rendering and key handling stay
//! with the UI layer.

mod password;
mod state;

pub use password::{generate_password, DEFAULT_PASSWORD_LEN};
pub use state::{CapacityUnit, FieldState, FieldValue, FormState, PortEntry};
