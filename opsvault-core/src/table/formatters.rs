//! Cell formatting, one deterministic function per column format.

use serde_json::Value;

use opsvault_client::Record;

use crate::convert::capacity::format_storage;
use crate::convert::{datetime, ports};
use crate::schema::{Column, ColumnFormat};

/// Placeholder for absent or empty values.
pub const PLACEHOLDER: &str = "-";

/// Mask shown for secret cells until revealed.
pub const SECRET_MASK: &str = "\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}";

pub(crate) struct CellParts {
    pub display: String,
    pub link: Option<String>,
    pub secret: Option<String>,
}

impl CellParts {
    fn plain(display: String) -> Self {
        Self {
            display,
            link: None,
            secret: None,
        }
    }

    fn placeholder() -> Self {
        Self::plain(PLACEHOLDER.to_string())
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn is_absent(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

fn json_summary(value: &Value) -> String {
    if let Value::Object(map) = value {
        if map.is_empty() {
            return PLACEHOLDER.to_string();
        }
        map.iter()
            .map(|(k, v)| format!("{k}:{}", value_text(v)))
            .collect::<Vec<_>>()
            .join(", ")
    } else {
        value_text(value)
    }
}

fn storage_text(value: Option<&Value>) -> Option<String> {
    let mb = value.and_then(Value::as_i64).filter(|mb| *mb != 0)?;
    Some(format_storage(mb))
}

fn hardware_summary(record: &Record, cpu_key: &str, ram_key: &str, disk_key: &str) -> CellParts {
    let cpu = record
        .get(cpu_key)
        .and_then(Value::as_i64)
        .filter(|n| *n != 0)
        .map(|n| format!("{n}C"));
    let ram = storage_text(record.get(ram_key));
    let disk = storage_text(record.get(disk_key));
    let parts: Vec<String> = [cpu, ram, disk].into_iter().flatten().collect();
    if parts.is_empty() {
        CellParts::placeholder()
    } else {
        CellParts::plain(parts.join(" / "))
    }
}

/// Format one cell. Synthetic formats read sibling keys off the record;
/// everything else formats the column's own value, with empty values
/// collapsing to the placeholder.
pub(crate) fn format_cell(column: &Column, record: &Record) -> CellParts {
    if let Some(ColumnFormat::HardwareSpecs {
        cpu_key,
        ram_key,
        disk_key,
    }) = column.format
    {
        return hardware_summary(record, cpu_key, ram_key, disk_key);
    }

    let value = record.get(column.key);
    if is_absent(value) {
        return CellParts::placeholder();
    }
    let Some(value) = value else {
        return CellParts::placeholder();
    };

    match column.format {
        None => CellParts::plain(value_text(value)),
        Some(ColumnFormat::DateTime) => CellParts::plain(
            datetime::format_datetime(value).unwrap_or_else(|| PLACEHOLDER.to_string()),
        ),
        Some(ColumnFormat::Date) => CellParts::plain(
            datetime::format_date(value).unwrap_or_else(|| PLACEHOLDER.to_string()),
        ),
        Some(ColumnFormat::Password) => CellParts {
            display: SECRET_MASK.to_string(),
            link: None,
            secret: Some(value_text(value)),
        },
        Some(ColumnFormat::PlatformLink { url_key }) => {
            let link = record
                .get(url_key)
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_string);
            CellParts {
                display: value_text(value),
                link,
                secret: None,
            }
        }
        Some(ColumnFormat::Json) => CellParts::plain(json_summary(value)),
        Some(ColumnFormat::Storage) => CellParts::plain(
            storage_text(Some(value)).unwrap_or_else(|| PLACEHOLDER.to_string()),
        ),
        Some(ColumnFormat::PortMapping) => {
            let map = ports::from_value(value);
            if map.is_empty() {
                CellParts::placeholder()
            } else {
                CellParts::plain(ports::format(&map))
            }
        }
        Some(ColumnFormat::HardwareSpecs { .. }) => CellParts::placeholder(),
    }
}
