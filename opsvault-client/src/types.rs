//! Shared data types crossing the client boundary.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One row of a resource collection: an opaque field-name → value mapping
/// owned by the backend. The client only ever holds transient copies.
pub type Record = serde_json::Map<String, Value>;

/// Extract a record's numeric identity, whichever casing the backend used.
#[must_use]
pub fn record_id(record: &Record) -> Option<i64> {
    record
        .get("ID")
        .or_else(|| record.get("id"))
        .and_then(Value::as_i64)
}

/// One page of a paginated listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListPage {
    /// Records on this page.
    pub items: Vec<Record>,
    /// Total number of records across all pages.
    pub total: u64,
}

impl ListPage {
    /// Decode the `data` payload of a `list`/`find` envelope. Accepts either
    /// an `items` or a `list` array; missing fields decode as empty.
    #[must_use]
    pub fn from_data(data: Option<&Value>) -> Self {
        let Some(data) = data else {
            return Self::default();
        };
        let items = data
            .get("items")
            .or_else(|| data.get("list"))
            .and_then(Value::as_array)
            .map(|rows| {
                rows.iter()
                    .filter_map(|v| v.as_object().cloned())
                    .collect()
            })
            .unwrap_or_default();
        let total = data.get("total").and_then(Value::as_u64).unwrap_or(0);
        Self { items, total }
    }
}

/// Exported CSV blob plus the suggested download filename.
#[derive(Debug, Clone)]
pub struct CsvExport {
    /// `<resource>_<ISO-date>.csv`
    pub filename: String,
    /// Raw CSV bytes as streamed by the backend.
    pub bytes: Vec<u8>,
}

/// Result summary of a CSV import. A non-zero `failed_count` is partial
/// success, not an error: some records landed and the listing must be
/// reloaded either way.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ImportSummary {
    /// Records imported successfully.
    #[serde(default)]
    pub success_count: u64,
    /// Records rejected by the backend.
    #[serde(default)]
    pub failed_count: u64,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn record_id_accepts_both_casings() {
        let upper: Record = serde_json::from_value(json!({"ID": 7})).unwrap();
        let lower: Record = serde_json::from_value(json!({"id": 7})).unwrap();
        let none: Record = serde_json::from_value(json!({"name": "x"})).unwrap();
        assert_eq!(record_id(&upper), Some(7));
        assert_eq!(record_id(&lower), Some(7));
        assert_eq!(record_id(&none), None);
    }

    #[test]
    fn list_page_decodes_items_or_list() {
        let data = json!({"items": [{"ID": 1}], "total": 47});
        let page = ListPage::from_data(Some(&data));
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.total, 47);

        let data = json!({"list": [{"ID": 1}, {"ID": 2}], "total": 2});
        let page = ListPage::from_data(Some(&data));
        assert_eq!(page.items.len(), 2);
    }

    #[test]
    fn list_page_tolerates_missing_data() {
        let page = ListPage::from_data(None);
        assert!(page.items.is_empty());
        assert_eq!(page.total, 0);
    }

    #[test]
    fn import_summary_defaults_missing_counts() {
        let s: ImportSummary = serde_json::from_str(r#"{"success_count": 8}"#).unwrap();
        assert_eq!(s.success_count, 8);
        assert_eq!(s.failed_count, 0);
    }
}
