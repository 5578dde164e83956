//! Records page state.

use opsvault_core::{LoadOutcome, TableView};

/// The rendered listing plus the cursors over it.
pub struct RecordsState {
    pub view: Option<TableView>,
    /// Row cursor into `view.rows`.
    pub cursor: usize,
    /// Cell cursor into the row, for reveal/copy.
    pub col: usize,
    /// Empty-state message shown when the last load failed.
    pub failure: Option<String>,
    /// Live search input; None when the search line is closed.
    pub search: Option<String>,
}

impl RecordsState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            view: None,
            cursor: 0,
            col: 0,
            failure: None,
            search: None,
        }
    }

    /// Fold a load outcome in. Skipped and stale loads leave the current
    /// view untouched.
    pub fn apply(&mut self, outcome: LoadOutcome) {
        match outcome {
            LoadOutcome::Table(view) => self.set_view(view),
            LoadOutcome::Failed { message } => self.set_failed(message),
            LoadOutcome::Skipped | LoadOutcome::Stale => {}
        }
    }

    pub fn set_view(&mut self, view: TableView) {
        self.cursor = self.cursor.min(view.rows.len().saturating_sub(1));
        self.col = self.col.min(view.headers.len().saturating_sub(1));
        self.view = Some(view);
        self.failure = None;
    }

    pub fn set_failed(&mut self, message: String) {
        self.view = None;
        self.cursor = 0;
        self.failure = Some(message);
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.view.as_ref().map_or(0, |v| v.rows.len())
    }

    #[must_use]
    pub fn column_count(&self) -> usize {
        self.view.as_ref().map_or(0, |v| v.headers.len())
    }

    /// Identity of the row under the cursor.
    #[must_use]
    pub fn cursor_id(&self) -> Option<i64> {
        self.view.as_ref()?.rows.get(self.cursor)?.id
    }

    pub fn select_previous(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn select_next(&mut self) {
        if self.cursor + 1 < self.row_count() {
            self.cursor += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.cursor = 0;
    }

    pub fn select_last(&mut self) {
        self.cursor = self.row_count().saturating_sub(1);
    }

    pub fn prev_column(&mut self) {
        if self.col > 0 {
            self.col -= 1;
        }
    }

    pub fn next_column(&mut self) {
        if self.col + 1 < self.column_count() {
            self.col += 1;
        }
    }
}

impl Default for RecordsState {
    fn default() -> Self {
        Self::new()
    }
}
