//! Navigation panel messages.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationMessage {
    SelectPrevious,
    SelectNext,
    SelectFirst,
    SelectLast,
    /// Enter: open the selected page (or log out).
    Confirm,
}
