//! Modal messages.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalMessage {
    Close,
    NextField,
    PrevField,
    Input(char),
    Backspace,
    /// Save the form, confirm the delete, or run the import.
    Confirm,
    /// Alt+s: toggle visibility of masked fields.
    ToggleSecrets,
    /// Alt+g: fill the focused password field with a random value.
    GeneratePassword,
    /// Cycle the focused field's option (storage unit or logo choice).
    PrevOption,
    NextOption,
    ToggleDeleteFocus,
}
