//! Field-level change detection for edit saves.

use serde_json::Value;

use opsvault_client::Record;

fn is_composite(value: &Value) -> bool {
    value.is_object() || value.is_array()
}

fn normalize(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn differs(new_value: &Value, old_value: &Value) -> bool {
    if is_composite(new_value) || is_composite(old_value) {
        new_value != old_value
    } else {
        // scalar comparison is string-normalized so null and "" coincide
        normalize(new_value) != normalize(old_value)
    }
}

/// Fields of `edited` that differ from `original`. Composite values
/// compare structurally; scalars compare as normalized strings. Returns
/// None when nothing changed, which suppresses the update call entirely.
#[must_use]
pub fn changed_fields(edited: &Record, original: &Record) -> Option<Record> {
    let mut changes = Record::new();
    for (key, new_value) in edited {
        let old_value = original.get(key).unwrap_or(&Value::Null);
        if differs(new_value, old_value) {
            changes.insert(key.clone(), new_value.clone());
        }
    }
    if changes.is_empty() {
        None
    } else {
        Some(changes)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    fn record(value: Value) -> Record {
        let Value::Object(map) = value else {
            panic!("fixture must be an object");
        };
        map
    }

    #[test]
    fn null_and_empty_string_are_equivalent() {
        let original = record(json!({"remark": null}));
        let edited = record(json!({"remark": ""}));
        assert!(changed_fields(&edited, &original).is_none());
    }

    #[test]
    fn scalar_change_is_detected() {
        let original = record(json!({"remark": "", "username": "octo"}));
        let edited = record(json!({"remark": "x", "username": "octo"}));
        let changes = changed_fields(&edited, &original).unwrap();
        assert_eq!(changes.len(), 1);
        assert_eq!(changes.get("remark"), Some(&json!("x")));
    }

    #[test]
    fn number_and_string_forms_coincide() {
        let original = record(json!({"cpu_num": 4}));
        let edited = record(json!({"cpu_num": "4"}));
        assert!(changed_fields(&edited, &original).is_none());
    }

    #[test]
    fn objects_compare_structurally() {
        let original = record(json!({"ports": {"22": "ssh", "80": "http"}}));
        let same = record(json!({"ports": {"22": "ssh", "80": "http"}}));
        assert!(changed_fields(&same, &original).is_none());

        let edited = record(json!({"ports": {"22": "ssh"}}));
        let changes = changed_fields(&edited, &original).unwrap();
        assert_eq!(changes.get("ports"), Some(&json!({"22": "ssh"})));
    }

    #[test]
    fn missing_original_field_counts_as_empty() {
        let original = record(json!({}));
        let edited = record(json!({"remark": ""}));
        assert!(changed_fields(&edited, &original).is_none());

        let edited = record(json!({"remark": "new"}));
        assert!(changed_fields(&edited, &original).is_some());
    }
}
