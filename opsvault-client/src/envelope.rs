//! The backend's uniform response envelope and its result-code ranges.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Standard response envelope: `{ code?, data?, info? }`.
///
/// Non-JSON responses are normalized into this shape by wrapping the raw
/// body text as `info`, so error extraction downstream never branches on
/// content type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Envelope {
    /// Application-level result code; absent on older endpoints, in which
    /// case the HTTP status decides success/failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<i64>,
    /// Response payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    /// Human-readable message (primary field).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
    /// Alternate message field used by some endpoints.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Alternate message field used by proxy/error middlewares.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Envelope {
    /// Wrap a non-JSON body as a uniform envelope.
    #[must_use]
    pub fn from_text(text: &str, status: u16) -> Self {
        let info = if text.trim().is_empty() {
            format!("Request failed ({status})")
        } else {
            text.to_string()
        };
        Self {
            info: Some(info),
            ..Self::default()
        }
    }

    /// Best available message: `info` > `message` > `error` > generic
    /// fallback.
    #[must_use]
    pub fn best_message(&self) -> String {
        self.info
            .as_deref()
            .or(self.message.as_deref())
            .or(self.error.as_deref())
            .unwrap_or("Request failed")
            .to_string()
    }
}

/// Result codes the backend emits, mirrored from its constant table.
pub mod info_code {
    pub const INTERNAL_ERROR: i64 = 110_001;
    pub const FAILED_TO_IMPORT: i64 = 110_002;
    pub const SUCCESSFUL_IMPORT: i64 = 100_002;
    pub const FAILED_TO_EXPORT: i64 = 110_003;
    pub const SUCCESSFUL_EXPORT: i64 = 100_003;

    pub const INVALID_REQUEST_HEADER: i64 = 110_011;
    pub const INVALID_REQUEST_PARAMS: i64 = 110_012;

    pub const EXPIRED_TOKEN: i64 = 110_023;
    pub const INVALID_TOKEN: i64 = 110_024;
    pub const FAILED_TO_LOGIN: i64 = 110_025;
    pub const SUCCESSFUL_LOGIN: i64 = 100_025;
    pub const FAILED_TO_LOGOUT: i64 = 110_026;
    pub const SUCCESSFUL_LOGOUT: i64 = 100_026;

    pub const FAILED_TO_CREATE: i64 = 110_031;
    pub const SUCCESSFUL_CREATE: i64 = 100_031;
    pub const FAILED_TO_DELETE: i64 = 110_032;
    pub const SUCCESSFUL_DELETE: i64 = 100_032;
    pub const FAILED_TO_UPDATE: i64 = 110_033;
    pub const SUCCESSFUL_UPDATE: i64 = 100_033;
    pub const FAILED_TO_FIND: i64 = 110_034;
    pub const SUCCESSFUL_FIND: i64 = 100_034;
    pub const FAILED_TO_UPLOAD: i64 = 110_035;
    pub const SUCCESSFUL_UPLOAD: i64 = 100_035;

    pub const RECORD_NOT_FOUND: i64 = 210_001;
    pub const USERNAME_ALREADY_EXISTS: i64 = 210_002;
}

/// Success codes live in `[100000, 110000)`.
#[must_use]
pub fn is_success_code(code: i64) -> bool {
    (100_000..110_000).contains(&code)
}

/// Error codes live in `[110000, ∞)` or the advisory band `[210000, 220000)`.
#[must_use]
pub fn is_error_code(code: i64) -> bool {
    code >= 110_000 || (210_000..220_000).contains(&code)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn code_ranges() {
        assert!(is_success_code(info_code::SUCCESSFUL_CREATE));
        assert!(is_success_code(100_000));
        assert!(!is_success_code(110_000));
        assert!(is_error_code(info_code::FAILED_TO_CREATE));
        assert!(is_error_code(info_code::RECORD_NOT_FOUND));
        assert!(!is_error_code(100_034));
        assert!(!is_error_code(99_999));
    }

    #[test]
    fn best_message_priority() {
        let e = Envelope {
            info: Some("from info".into()),
            message: Some("from message".into()),
            error: Some("from error".into()),
            ..Envelope::default()
        };
        assert_eq!(e.best_message(), "from info");

        let e = Envelope {
            message: Some("from message".into()),
            error: Some("from error".into()),
            ..Envelope::default()
        };
        assert_eq!(e.best_message(), "from message");

        let e = Envelope {
            error: Some("from error".into()),
            ..Envelope::default()
        };
        assert_eq!(e.best_message(), "from error");

        assert_eq!(Envelope::default().best_message(), "Request failed");
    }

    #[test]
    fn from_text_wraps_raw_body() {
        let e = Envelope::from_text("upstream exploded", 502);
        assert_eq!(e.info.as_deref(), Some("upstream exploded"));
        assert!(e.code.is_none());
    }

    #[test]
    fn from_text_empty_body_falls_back_to_status() {
        let e = Envelope::from_text("  ", 404);
        assert_eq!(e.info.as_deref(), Some("Request failed (404)"));
    }

    #[test]
    fn deserialize_typical_envelope() {
        let e: Envelope = serde_json::from_str(
            r#"{"code":100034,"data":{"items":[],"total":0},"info":"ok"}"#,
        )
        .unwrap();
        assert_eq!(e.code, Some(info_code::SUCCESSFUL_FIND));
        assert!(e.data.is_some());
    }
}
