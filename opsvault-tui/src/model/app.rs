//! Application root state.

use anyhow::Result;

use crate::backend::Backend;
use crate::i18n::{self, Language};

use super::state::{LoginState, ModalState, RecordsState};
use super::{FocusPanel, NavigationState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Main,
}

pub struct App {
    pub should_quit: bool,
    pub screen: Screen,
    pub focus: FocusPanel,
    pub navigation: NavigationState,
    pub records: RecordsState,
    pub login: LoginState,
    pub modal: ModalState,
    pub status_message: Option<String>,
    pub backend: Backend,
}

impl App {
    /// Build the initial state. A stored credential skips the login
    /// screen and loads the last-visited page immediately.
    pub fn new() -> Result<Self> {
        let backend = Backend::new()?;

        if let Some(language) = backend.stored_language().and_then(|c| Language::from_code(&c)) {
            i18n::set_language(language);
        }

        let screen = if backend.has_session() {
            Screen::Main
        } else {
            Screen::Login
        };

        let mut app = Self {
            should_quit: false,
            screen,
            focus: FocusPanel::Navigation,
            navigation: NavigationState::new(backend.page()),
            records: RecordsState::new(),
            login: LoginState::new(),
            modal: ModalState::new(),
            status_message: None,
            backend,
        };

        if app.screen == Screen::Main {
            let outcome = app.backend.load(1, "");
            app.records.apply(outcome);
        }

        Ok(app)
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Move backend notices into the status line, keeping the last one.
    pub fn sync_notices(&mut self) {
        if let Some((_, message)) = self.backend.drain_notices().into_iter().last() {
            self.status_message = Some(message);
        }
    }

    /// Flip the UI language and persist the choice.
    pub fn switch_language(&mut self) {
        let next = i18n::current_language().next();
        i18n::set_language(next);
        self.backend.store_language(next.code());
    }
}
