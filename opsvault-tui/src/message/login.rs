//! Login screen messages.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginMessage {
    NextField,
    PrevField,
    Input(char),
    Backspace,
    Submit,
}
