//! Session and data synchronization.
//!
//! [`SessionController`] is the single stateful coordinator per UI session:
//! current page, listing parameters, selection, edit snapshot, and the
//! guarded load pipeline.

mod controller;
mod diff;

pub use controller::{
    LoadOutcome, PendingDelete, SaveOutcome, SaveResult, SessionController, PAGE_SIZE,
};
pub use diff::changed_fields;
