use serde_json::Value;

use opsvault_client::{record_id, Record};

use crate::schema::PageSchema;

use super::formatters::format_cell;
use super::pager::Pager;

/// One render-ready cell.
#[derive(Debug, Clone)]
pub struct Cell {
    pub display: String,
    /// Raw value offered by the copy action; None disables copying.
    pub raw: Option<String>,
    /// Target URL when the cell doubles as a link.
    pub link: Option<String>,
    /// Hidden value behind a masked cell.
    pub secret: Option<String>,
    pub revealed: bool,
}

impl Cell {
    #[must_use]
    pub fn is_secret(&self) -> bool {
        self.secret.is_some()
    }

    /// Text to draw right now, honoring the reveal toggle.
    #[must_use]
    pub fn text(&self) -> &str {
        match (&self.secret, self.revealed) {
            (Some(secret), true) => secret,
            _ => &self.display,
        }
    }
}

/// One row plus the record it came from, kept for edit prefill.
#[derive(Debug, Clone)]
pub struct TableRow {
    pub id: Option<i64>,
    pub cells: Vec<Cell>,
    pub record: Record,
}

/// Render-ready table for one page of results.
#[derive(Debug, Clone)]
pub struct TableView {
    /// Header label keys in column order.
    pub headers: Vec<&'static str>,
    /// Preferred column widths, parallel to `headers`.
    pub widths: Vec<Option<u16>>,
    pub rows: Vec<TableRow>,
    pub page_num: u32,
    pub page_size: u32,
    pub total: u64,
    pub pager: Option<Pager>,
}

fn raw_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl TableView {
    /// Format one page of records against a schema.
    #[must_use]
    pub fn build(
        schema: &PageSchema,
        items: Vec<Record>,
        page_num: u32,
        total: u64,
        page_size: u32,
    ) -> Self {
        let rows = items
            .into_iter()
            .map(|record| {
                let cells = schema
                    .columns
                    .iter()
                    .map(|column| {
                        let parts = format_cell(column, &record);
                        let raw = if column.copyable {
                            record.get(column.key).map(raw_text).filter(|s| !s.is_empty())
                        } else {
                            None
                        };
                        Cell {
                            display: parts.display,
                            raw,
                            link: parts.link,
                            secret: parts.secret,
                            revealed: false,
                        }
                    })
                    .collect();
                TableRow {
                    id: record_id(&record),
                    cells,
                    record,
                }
            })
            .collect();

        Self {
            headers: schema.columns.iter().map(|c| c.label).collect(),
            widths: schema.columns.iter().map(|c| c.width).collect(),
            rows,
            page_num,
            page_size,
            total,
            pager: Pager::build(page_num, total, page_size),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Identities of the rows on this page, for select-all events.
    #[must_use]
    pub fn row_ids(&self) -> Vec<i64> {
        self.rows.iter().filter_map(|r| r.id).collect()
    }

    /// Toggle a masked cell between dots and its secret.
    pub fn toggle_secret(&mut self, row: usize, col: usize) {
        if let Some(cell) = self.rows.get_mut(row).and_then(|r| r.cells.get_mut(col)) {
            if cell.is_secret() {
                cell.revealed = !cell.revealed;
            }
        }
    }

    /// Raw value behind a copyable cell. Secrets copy their hidden value
    /// regardless of the reveal state.
    #[must_use]
    pub fn copy_value(&self, row: usize, col: usize) -> Option<String> {
        let cell = self.rows.get(row)?.cells.get(col)?;
        cell.raw.clone()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use crate::schema::{schema, PageKind};
    use crate::table::SECRET_MASK;

    use super::*;

    fn account(id: i64, platform: &str, url: &str) -> Record {
        let Value::Object(map) = json!({
            "ID": id,
            "platform": platform,
            "platform_url": url,
            "username": "octo",
            "password": "s3cret",
            "security_email": "",
            "remark": null,
            "CreatedAt": "2026-03-01T09:30:05+00:00",
        }) else {
            unreachable!()
        };
        map
    }

    #[test]
    fn builds_linked_and_masked_cells() {
        let items = vec![account(1, "GitHub", "https://github.com")];
        let view = TableView::build(schema(PageKind::Accounts), items, 1, 1, 10);
        assert_eq!(view.rows.len(), 1);
        assert!(view.pager.is_none());

        let row = &view.rows[0];
        assert_eq!(row.id, Some(1));
        // columns: ID, platform, username, password, email, phone, remark, created, updated
        assert_eq!(row.cells[1].display, "GitHub");
        assert_eq!(row.cells[1].link.as_deref(), Some("https://github.com"));
        assert_eq!(row.cells[3].text(), SECRET_MASK);
        assert_eq!(row.cells[4].display, "-");
        assert_eq!(row.cells[6].display, "-");
        assert_eq!(row.cells[7].display, "2026-03-01 09:30:05");
    }

    #[test]
    fn toggle_secret_reveals_and_restores() {
        let items = vec![account(1, "GitHub", "https://github.com")];
        let mut view = TableView::build(schema(PageKind::Accounts), items, 1, 1, 10);
        view.toggle_secret(0, 3);
        assert_eq!(view.rows[0].cells[3].text(), "s3cret");
        view.toggle_secret(0, 3);
        assert_eq!(view.rows[0].cells[3].text(), SECRET_MASK);
        // non-secret cells ignore the toggle
        view.toggle_secret(0, 1);
        assert!(!view.rows[0].cells[1].revealed);
    }

    #[test]
    fn copy_respects_column_configuration() {
        let items = vec![account(1, "GitHub", "https://github.com")];
        let view = TableView::build(schema(PageKind::Accounts), items, 1, 1, 10);
        // password column is copyable and copies the raw secret
        assert_eq!(view.copy_value(0, 3).as_deref(), Some("s3cret"));
        // platform column is not copyable
        assert_eq!(view.copy_value(0, 1), None);
        // empty copyable cell yields nothing
        assert_eq!(view.copy_value(0, 4), None);
    }

    #[test]
    fn row_ids_skip_records_without_identity() {
        let mut anon = account(7, "A", "");
        anon.remove("ID");
        let items = vec![account(1, "B", ""), anon];
        let view = TableView::build(schema(PageKind::Accounts), items, 1, 2, 10);
        assert_eq!(view.row_ids(), vec![1]);
    }

    #[test]
    fn multi_page_results_get_a_pager() {
        let items: Vec<Record> = (1..=10)
            .map(|i| account(i, "P", "https://p.example"))
            .collect();
        let view = TableView::build(schema(PageKind::Accounts), items, 5, 47, 10);
        let pager = view.pager.unwrap();
        assert_eq!(pager.range_start, 41);
        assert_eq!(pager.range_end, 47);
    }
}
