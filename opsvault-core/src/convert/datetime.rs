//! Timestamp rendering.
//!
//! Backend timestamps arrive either as RFC 3339 strings (record metadata)
//! or as second-resolution unix numbers. Both render as
//! `YYYY-MM-DD HH:mm:ss`; anything unparsable falls back to the caller's
//! placeholder.

use chrono::{DateTime, NaiveDateTime};
use serde_json::Value;

const OUTPUT: &str = "%Y-%m-%d %H:%M:%S";

fn parse_str(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    for pattern in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, pattern) {
            return Some(dt);
        }
    }
    None
}

fn parse(value: &Value) -> Option<NaiveDateTime> {
    match value {
        Value::Number(n) => {
            let secs = n.as_i64()?;
            Some(DateTime::from_timestamp(secs, 0)?.naive_utc())
        }
        Value::String(s) if !s.is_empty() => parse_str(s),
        _ => None,
    }
}

/// Full `YYYY-MM-DD HH:mm:ss` rendering, or None when absent/invalid.
#[must_use]
pub fn format_datetime(value: &Value) -> Option<String> {
    Some(parse(value)?.format(OUTPUT).to_string())
}

/// Date part only.
#[must_use]
pub fn format_date(value: &Value) -> Option<String> {
    Some(parse(value)?.format("%Y-%m-%d").to_string())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn renders_rfc3339_strings() {
        assert_eq!(
            format_datetime(&json!("2026-03-01T09:30:05+08:00")),
            Some("2026-03-01 09:30:05".to_string())
        );
    }

    #[test]
    fn renders_unix_seconds() {
        assert_eq!(
            format_datetime(&json!(0)),
            Some("1970-01-01 00:00:00".to_string())
        );
    }

    #[test]
    fn date_only_variant() {
        assert_eq!(
            format_date(&json!("2026-03-01 09:30:05")),
            Some("2026-03-01".to_string())
        );
    }

    #[test]
    fn invalid_inputs_yield_none() {
        assert_eq!(format_datetime(&json!("")), None);
        assert_eq!(format_datetime(&json!("soon")), None);
        assert_eq!(format_datetime(&Value::Null), None);
        assert_eq!(format_datetime(&json!(true)), None);
    }
}
