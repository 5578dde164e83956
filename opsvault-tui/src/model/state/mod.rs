//! Per-screen state.

mod login;
mod modal;
mod records;

pub use login::{LoginField, LoginState};
pub use modal::{Modal, ModalState};
pub use records::RecordsState;
