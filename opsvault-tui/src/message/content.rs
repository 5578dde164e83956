//! Records panel messages.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentMessage {
    SelectPrevious,
    SelectNext,
    SelectFirst,
    SelectLast,
    /// Move the cell cursor left/right within the row.
    PrevColumn,
    NextColumn,
    PrevPage,
    NextPage,
    Add,
    Edit,
    /// Delete the row under the cursor.
    Delete,
    /// Delete every selected row.
    BatchDelete,
    /// Space: toggle the cursor row's selection.
    ToggleSelect,
    ToggleSelectAll,
    /// Reveal or re-mask the cell under the cursor.
    ToggleSecret,
    Copy,
    Import,
    Export,
    SearchStart,
    SearchInput(char),
    SearchBackspace,
    SearchSubmit,
    SearchCancel,
}
