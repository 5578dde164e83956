//! Top-level application messages.

use super::{ContentMessage, LoginMessage, ModalMessage, NavigationMessage};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    Quit,
    /// Tab between the navigation and content panels.
    ToggleFocus,
    Navigation(NavigationMessage),
    Content(ContentMessage),
    Modal(ModalMessage),
    Login(LoginMessage),
    /// Esc: close the modal or cancel the search input.
    GoBack,
    /// Reload the current listing.
    Refresh,
    ShowHelp,
    /// Cycle the UI language and persist the choice.
    SwitchLanguage,
    Noop,
}
