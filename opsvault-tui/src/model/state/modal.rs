//! Modal state.

use opsvault_core::{FormState, PendingDelete};

pub enum Modal {
    /// Create/edit form for the current page.
    Form {
        title: &'static str,
        creating: bool,
        form: FormState,
        /// Raw text of the port list field, parsed into entries on save.
        /// None when the page has no port list.
        ports_text: Option<String>,
    },
    ConfirmDelete {
        pending: PendingDelete,
        /// Whether the Yes button has focus.
        yes_focused: bool,
    },
    /// Path prompt for a CSV import.
    ImportFile { path: String },
    Help,
    Error { message: String },
}

pub struct ModalState {
    pub active: Option<Modal>,
}

impl ModalState {
    #[must_use]
    pub fn new() -> Self {
        Self { active: None }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn close(&mut self) {
        self.active = None;
    }

    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        self.active = Some(Modal::Error {
            message: message.into(),
        });
    }
}

impl Default for ModalState {
    fn default() -> Self {
        Self::new()
    }
}
