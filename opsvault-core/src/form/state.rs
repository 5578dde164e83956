use serde_json::Value;

use opsvault_client::Record;

use crate::convert::capacity::{
    display_storage, encode_cores, encode_storage, trim_decimal, StorageUnit,
};
use crate::convert::{datetime, ports};
use crate::error::{CoreError, CoreResult};
use crate::schema::{CapacityKind, FieldDef, FieldItem, FieldType, PageSchema};

pub use crate::convert::ports::PortEntry;

/// Unit selector state for a capacity field. Core counts have no selectable
/// unit; storage amounts cycle MB/GB/TB.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacityUnit {
    Cores,
    Storage(StorageUnit),
}

impl CapacityUnit {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Cores => "cores",
            Self::Storage(unit) => unit.label(),
        }
    }
}

/// Live value of one field in the form.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// All plain text editors. `masked` marks password fields; `revealed`
    /// temporarily lifts the mask.
    Text {
        buffer: String,
        masked: bool,
        revealed: bool,
    },
    /// JSON object edited as text, parsed on collect.
    Json { buffer: String },
    /// Numeric buffer plus unit selector.
    Capacity { buffer: String, unit: CapacityUnit },
    /// Port-to-service rows.
    Ports { entries: Vec<PortEntry> },
    /// Icon picker. `options` come from the icon subsystem; `enabled`
    /// tracks the dependency field.
    Logo {
        value: String,
        options: Vec<String>,
        enabled: bool,
    },
    /// Server-managed value shown but never collected.
    ReadOnly { display: String },
}

/// One field plus its validation state.
#[derive(Debug, Clone)]
pub struct FieldState {
    pub def: &'static FieldDef,
    pub value: FieldValue,
    /// Label key of the failed validation, set by [`FormState::validate`].
    pub error: Option<String>,
}

impl FieldState {
    fn is_empty(&self) -> bool {
        match &self.value {
            FieldValue::Text { buffer, .. }
            | FieldValue::Json { buffer }
            | FieldValue::Capacity { buffer, .. } => buffer.trim().is_empty(),
            FieldValue::Ports { entries } => ports::collect(entries).is_empty(),
            FieldValue::Logo { value, .. } => value.trim().is_empty(),
            FieldValue::ReadOnly { .. } => true,
        }
    }
}

/// Editable state of one record.
///
/// Rows mirror the schema's layout: a group's fields share a row, singles
/// get their own. Indices in `rows` point into `fields`.
pub struct FormState {
    pub fields: Vec<FieldState>,
    pub rows: Vec<Vec<usize>>,
    pub focus: usize,
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn initial_value(def: &'static FieldDef, record: Option<&Record>) -> FieldValue {
    let raw = record.and_then(|r| r.get(def.key));
    match def.field_type {
        FieldType::Password => FieldValue::Text {
            buffer: raw.map(value_text).unwrap_or_default(),
            masked: true,
            revealed: false,
        },
        FieldType::Text
        | FieldType::Email
        | FieldType::Tel
        | FieldType::Url
        | FieldType::Number
        | FieldType::Textarea => FieldValue::Text {
            buffer: raw.map(value_text).unwrap_or_default(),
            masked: false,
            revealed: false,
        },
        FieldType::Json => {
            let buffer = raw
                .filter(|v| v.is_object())
                .and_then(|v| serde_json::to_string_pretty(v).ok())
                .unwrap_or_default();
            FieldValue::Json { buffer }
        }
        FieldType::PortList => {
            let map = raw.map(ports::from_value).unwrap_or_default();
            FieldValue::Ports {
                entries: ports::to_entries(&map),
            }
        }
        FieldType::Capacity(kind) => {
            let stored = raw.and_then(Value::as_i64);
            let (buffer, unit) = match (kind, stored) {
                (CapacityKind::Cores, Some(n)) => (n.to_string(), CapacityUnit::Cores),
                (CapacityKind::Cores, None) => (String::new(), CapacityUnit::Cores),
                (CapacityKind::Storage, Some(mb)) => {
                    let (value, unit) = display_storage(mb);
                    (trim_decimal(value), CapacityUnit::Storage(unit))
                }
                (CapacityKind::Storage, None) => {
                    (String::new(), CapacityUnit::Storage(StorageUnit::Mb))
                }
            };
            FieldValue::Capacity { buffer, unit }
        }
        FieldType::Logo { depends_on, .. } => {
            let enabled = record
                .and_then(|r| r.get(depends_on))
                .is_some_and(|v| !value_text(v).trim().is_empty());
            FieldValue::Logo {
                value: raw.map(value_text).unwrap_or_default(),
                options: Vec::new(),
                enabled,
            }
        }
        FieldType::DateTime => FieldValue::ReadOnly {
            display: raw
                .and_then(|v| datetime::format_datetime(v))
                .unwrap_or_else(|| "-".to_string()),
        },
    }
}

impl FormState {
    /// Build form state from a schema, prefilled from `record` when editing.
    #[must_use]
    pub fn build(schema: &'static PageSchema, record: Option<&Record>) -> Self {
        let mut fields = Vec::new();
        let mut rows = Vec::new();
        for item in &schema.fields {
            match item {
                FieldItem::Single(def) => {
                    rows.push(vec![fields.len()]);
                    fields.push(FieldState {
                        def,
                        value: initial_value(def, record),
                        error: None,
                    });
                }
                FieldItem::Group {
                    fields: group_fields,
                    ..
                } => {
                    let row = (fields.len()..fields.len() + group_fields.len()).collect();
                    rows.push(row);
                    for def in group_fields {
                        fields.push(FieldState {
                            def,
                            value: initial_value(def, record),
                            error: None,
                        });
                    }
                }
            }
        }
        Self {
            fields,
            rows,
            focus: 0,
        }
    }

    pub fn field_by_key(&self, key: &str) -> Option<&FieldState> {
        self.fields.iter().find(|f| f.def.key == key)
    }

    fn text_of(&self, key: &str) -> Option<&str> {
        match &self.field_by_key(key)?.value {
            FieldValue::Text { buffer, .. } => Some(buffer.as_str()),
            _ => None,
        }
    }

    /// Move focus and clear the target field's validation error.
    pub fn set_focus(&mut self, index: usize) {
        if index < self.fields.len() {
            self.focus = index;
            self.fields[index].error = None;
        }
    }

    /// Recompute each logo field's enabled flag from the current value of
    /// its dependency. Called after any text edit.
    pub fn refresh_logo_enabled(&mut self) {
        for i in 0..self.fields.len() {
            let FieldType::Logo { depends_on, .. } = self.fields[i].def.field_type else {
                continue;
            };
            let enabled = self
                .text_of(depends_on)
                .is_some_and(|t| !t.trim().is_empty());
            if let FieldValue::Logo {
                enabled: flag,
                value,
                ..
            } = &mut self.fields[i].value
            {
                *flag = enabled;
                if !enabled {
                    value.clear();
                }
            }
        }
    }

    /// Install the icon filename list fetched for a logo field.
    pub fn set_logo_options(&mut self, key: &str, names: Vec<String>) {
        if let Some(field) = self.fields.iter_mut().find(|f| f.def.key == key) {
            if let FieldValue::Logo { options, .. } = &mut field.value {
                *options = names;
            }
        }
    }

    /// Check every required field, recording an error on each empty one.
    /// Returns true when the form is clean.
    pub fn validate(&mut self) -> bool {
        let mut ok = true;
        for field in &mut self.fields {
            if field.def.required && field.is_empty() {
                field.error = Some(field.def.label.to_string());
                ok = false;
            } else {
                field.error = None;
            }
        }
        ok
    }

    /// Collect field values into a wire-ready record.
    ///
    /// Every empty required field raises with the field's label. Optional
    /// empty text fields are omitted; logo fields are always included so a
    /// cleared logo reaches the update diff as an empty string. Capacity
    /// fields always contribute their floor-encoded value. Raises on
    /// unparsable JSON.
    pub fn collect(&self) -> CoreResult<Record> {
        let mut data = Record::new();
        for field in &self.fields {
            let def = field.def;
            if def.required && field.is_empty() {
                return Err(CoreError::Validation {
                    label: def.label.to_string(),
                });
            }
            match (&field.value, def.field_type) {
                (FieldValue::Ports { entries }, _) => {
                    data.insert(
                        def.key.to_string(),
                        ports::to_value(&ports::collect(entries)),
                    );
                }
                (FieldValue::Capacity { buffer, unit }, _) => {
                    let amount: f64 = buffer.trim().parse().unwrap_or(0.0);
                    let encoded = match unit {
                        CapacityUnit::Cores => encode_cores(amount),
                        CapacityUnit::Storage(u) => encode_storage(amount, *u),
                    };
                    data.insert(def.key.to_string(), Value::from(encoded));
                }
                (FieldValue::Json { buffer }, _) => {
                    let text = buffer.trim();
                    if !text.is_empty() {
                        let value: Value =
                            serde_json::from_str(text).map_err(|_| CoreError::InvalidJson {
                                label: def.label.to_string(),
                            })?;
                        data.insert(def.key.to_string(), value);
                    }
                }
                (FieldValue::Text { buffer, .. }, FieldType::Number) => {
                    let text = buffer.trim();
                    if !text.is_empty() {
                        let n: i64 = text.parse().unwrap_or(0);
                        data.insert(def.key.to_string(), Value::from(n));
                    }
                }
                (FieldValue::Text { buffer, .. }, _) => {
                    let text = buffer.trim();
                    if !text.is_empty() {
                        data.insert(def.key.to_string(), Value::String(text.to_string()));
                    }
                }
                (FieldValue::Logo { value, .. }, _) => {
                    data.insert(def.key.to_string(), Value::String(value.trim().to_string()));
                }
                (FieldValue::ReadOnly { .. }, _) => {}
            }
        }
        Ok(data)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use crate::schema::{schema, PageKind};

    use super::*;

    fn host_record() -> Record {
        let Value::Object(map) = json!({
            "ID": 3,
            "provider": "Hetzner",
            "provider_url": "https://hetzner.com",
            "address": "10.0.0.7",
            "ports": {"22": "ssh", "443": "https"},
            "username": "root",
            "password": "hunter2",
            "hostname": "db-1",
            "os": "Debian",
            "ram_size": 2560,
            "disk_size": 0,
            "cpu_num": 4,
        }) else {
            unreachable!()
        };
        map
    }

    #[test]
    fn groups_share_a_row() {
        let form = FormState::build(schema(PageKind::Hosts), None);
        let grouped: Vec<&Vec<usize>> = form.rows.iter().filter(|r| r.len() > 1).collect();
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].len(), 2);
        assert_eq!(grouped[1].len(), 3);
    }

    #[test]
    fn prefill_converts_storage_for_display() {
        let record = host_record();
        let form = FormState::build(schema(PageKind::Hosts), Some(&record));
        let Some(FieldState {
            value: FieldValue::Capacity { buffer, unit },
            ..
        }) = form.field_by_key("ram_size")
        else {
            panic!("ram_size should be a capacity field");
        };
        assert_eq!(buffer, "2.5");
        assert_eq!(*unit, CapacityUnit::Storage(StorageUnit::Gb));

        let Some(FieldState {
            value: FieldValue::Capacity { buffer, unit },
            ..
        }) = form.field_by_key("disk_size")
        else {
            panic!("disk_size should be a capacity field");
        };
        assert_eq!(buffer, "0");
        assert_eq!(*unit, CapacityUnit::Storage(StorageUnit::Mb));
    }

    #[test]
    fn collect_encodes_capacity_and_ports() {
        let record = host_record();
        let form = FormState::build(schema(PageKind::Hosts), Some(&record));
        let data = form.collect().unwrap();
        assert_eq!(data.get("ram_size"), Some(&json!(2560)));
        assert_eq!(data.get("cpu_num"), Some(&json!(4)));
        assert_eq!(
            data.get("ports"),
            Some(&json!({"22": "ssh", "443": "https"}))
        );
        assert_eq!(data.get("password"), Some(&json!("hunter2")));
        assert!(!data.contains_key("ID"));
    }

    #[test]
    fn empty_required_port_list_fails_collect() {
        let mut form = FormState::build(schema(PageKind::Hosts), None);
        for field in &mut form.fields {
            match &mut field.value {
                FieldValue::Text { buffer, .. } => *buffer = "x".to_string(),
                FieldValue::Ports { entries } => entries.clear(),
                _ => {}
            }
        }
        let err = form.collect().unwrap_err();
        match err {
            CoreError::Validation { label } => assert_eq!(label, "hosts.ports"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_required_fields_fail_collect() {
        let form = FormState::build(schema(PageKind::Accounts), None);
        let err = form.collect().unwrap_err();
        match err {
            CoreError::Validation { label } => assert_eq!(label, "accounts.platform"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn validate_flags_every_empty_required_field() {
        let mut form = FormState::build(schema(PageKind::Accounts), None);
        assert!(!form.validate());
        let flagged: Vec<&str> = form
            .fields
            .iter()
            .filter(|f| f.error.is_some())
            .map(|f| f.def.key)
            .collect();
        assert_eq!(flagged, ["platform", "platform_url", "username", "password"]);
    }

    #[test]
    fn optional_empty_fields_are_omitted() {
        let mut form = FormState::build(schema(PageKind::Accounts), None);
        for field in &mut form.fields {
            if let FieldValue::Text { buffer, .. } = &mut field.value {
                if field.def.required {
                    *buffer = "x".to_string();
                }
            }
        }
        let data = form.collect().unwrap();
        assert!(!data.contains_key("security_email"));
        assert!(!data.contains_key("remark"));
        // logo is always collected so a cleared value survives the diff
        assert_eq!(data.get("logo"), Some(&json!("")));
    }

    #[test]
    fn cleared_logo_collects_as_empty_string() {
        let Value::Object(record) = json!({
            "ID": 7,
            "name": "wiki",
            "url": "https://wiki.example.com",
            "logo": "old.png",
        }) else {
            unreachable!()
        };
        let mut form = FormState::build(schema(PageKind::Sites), Some(&record));
        for field in &mut form.fields {
            if let FieldValue::Logo { value, .. } = &mut field.value {
                value.clear();
            }
        }
        let data = form.collect().unwrap();
        assert_eq!(data.get("logo"), Some(&json!("")));
    }

    #[test]
    fn logo_enabled_follows_dependency() {
        let mut form = FormState::build(schema(PageKind::Sites), None);
        let logo = form.field_by_key("logo").map(|f| f.value.clone());
        assert!(matches!(logo, Some(FieldValue::Logo { enabled: false, .. })));

        for field in &mut form.fields {
            if field.def.key == "name" {
                if let FieldValue::Text { buffer, .. } = &mut field.value {
                    *buffer = "wiki".to_string();
                }
            }
        }
        form.refresh_logo_enabled();
        let logo = form.field_by_key("logo").map(|f| f.value.clone());
        assert!(matches!(logo, Some(FieldValue::Logo { enabled: true, .. })));
    }

    static JSON_DEF: FieldDef = FieldDef::new("meta", "x.meta", FieldType::Json);

    fn json_only_form(buffer: &str) -> FormState {
        FormState {
            fields: vec![FieldState {
                def: &JSON_DEF,
                value: FieldValue::Json {
                    buffer: buffer.to_string(),
                },
                error: None,
            }],
            rows: vec![vec![0]],
            focus: 0,
        }
    }

    #[test]
    fn invalid_json_is_rejected_with_label() {
        let err = json_only_form("{broken").collect().unwrap_err();
        match err {
            CoreError::InvalidJson { label } => assert_eq!(label, "x.meta"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn valid_json_is_parsed_into_the_record() {
        let data = json_only_form("{\"a\": 1}").collect().unwrap();
        assert_eq!(data.get("meta"), Some(&json!({"a": 1})));
        let data = json_only_form("").collect().unwrap();
        assert!(!data.contains_key("meta"));
    }
}
