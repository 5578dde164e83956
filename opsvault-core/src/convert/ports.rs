//! Port mapping conversion.
//!
//! Hosts carry a `ports` object mapping a port number to a service name.
//! The editor works on loose `(port, service)` rows; collection drops
//! incomplete rows and lets the last occurrence of a duplicate port win.

use std::collections::BTreeMap;

use serde_json::Value;

/// Canonical port mapping, ordered by port number.
pub type PortMap = BTreeMap<u16, String>;

/// One editable row in the port list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortEntry {
    pub port: String,
    pub service: String,
}

impl PortEntry {
    #[must_use]
    pub fn new(port: impl Into<String>, service: impl Into<String>) -> Self {
        Self {
            port: port.into(),
            service: service.into(),
        }
    }
}

fn parse_port(raw: &str) -> Option<u16> {
    let port: u16 = raw.trim().parse().ok()?;
    if port == 0 {
        None
    } else {
        Some(port)
    }
}

/// Collect edited rows into a map. Rows with a missing side or an invalid
/// port number are skipped; duplicate ports keep the last row entered.
#[must_use]
pub fn collect(entries: &[PortEntry]) -> PortMap {
    let mut map = PortMap::new();
    for entry in entries {
        let service = entry.service.trim();
        if service.is_empty() {
            continue;
        }
        if let Some(port) = parse_port(&entry.port) {
            map.insert(port, service.to_string());
        }
    }
    map
}

/// Parse a record's `ports` value. Tolerates both an object and its
/// JSON-string form; anything else yields an empty map.
#[must_use]
pub fn from_value(value: &Value) -> PortMap {
    let object = match value {
        Value::Object(map) => Some(map.clone()),
        Value::String(s) => serde_json::from_str::<Value>(s)
            .ok()
            .and_then(|v| v.as_object().cloned()),
        _ => None,
    };
    let mut map = PortMap::new();
    if let Some(object) = object {
        for (key, val) in object {
            if let (Some(port), Some(service)) = (parse_port(&key), val.as_str()) {
                map.insert(port, service.to_string());
            }
        }
    }
    map
}

/// Expand a stored map back into editable rows.
#[must_use]
pub fn to_entries(map: &PortMap) -> Vec<PortEntry> {
    map.iter()
        .map(|(port, service)| PortEntry::new(port.to_string(), service.clone()))
        .collect()
}

/// Serialize for the wire: object with stringified port keys.
#[must_use]
pub fn to_value(map: &PortMap) -> Value {
    let object: serde_json::Map<String, Value> = map
        .iter()
        .map(|(port, service)| (port.to_string(), Value::String(service.clone())))
        .collect();
    Value::Object(object)
}

/// Table-side rendering: `22:ssh, 80:http`.
#[must_use]
pub fn format(map: &PortMap) -> String {
    map.iter()
        .map(|(port, service)| format!("{port}:{service}"))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn incomplete_rows_are_dropped() {
        let entries = vec![
            PortEntry::new("22", "ssh"),
            PortEntry::new("", "orphan"),
            PortEntry::new("80", ""),
            PortEntry::new("not-a-port", "x"),
            PortEntry::new("70000", "x"),
        ];
        let map = collect(&entries);
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&22).map(String::as_str), Some("ssh"));
    }

    #[test]
    fn duplicate_ports_keep_last_entry() {
        let entries = vec![
            PortEntry::new("443", "https"),
            PortEntry::new("443", "h2"),
        ];
        let map = collect(&entries);
        assert_eq!(map.get(&443).map(String::as_str), Some("h2"));
    }

    #[test]
    fn parses_object_and_string_forms() {
        let map = from_value(&json!({"22": "ssh", "80": "http"}));
        assert_eq!(map.len(), 2);
        let map = from_value(&json!("{\"22\":\"ssh\"}"));
        assert_eq!(map.get(&22).map(String::as_str), Some("ssh"));
        assert!(from_value(&json!(42)).is_empty());
    }

    #[test]
    fn formats_ordered_by_port() {
        let entries = vec![PortEntry::new("443", "https"), PortEntry::new("22", "ssh")];
        assert_eq!(format(&collect(&entries)), "22:ssh, 443:https");
    }
}
