use serde::{Deserialize, Serialize};

/// Unified error type for all backend API operations.
///
/// Three failure classes matter to callers (and to the UI layer that
/// eventually surfaces them):
///
/// - [`Unauthorized`](Self::Unauthorized) — the session has expired and was
///   already torn down by the transport; terminal, never retried in place.
/// - [`Business`](Self::Business) — an application-level rejection carried in
///   the response envelope; already shown to the user as a toast, so it must
///   not be diagnostic-logged again.
/// - everything else — transport/system faults that *are* diagnostic-logged.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ClientError {
    /// A network-level failure (DNS, connection refused, malformed response
    /// stream).
    Network {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Error details.
        detail: String,
    },

    /// HTTP 401 on a call without `skip_auth_check`: the stored credential
    /// was cleared and the caller must return to the login surface.
    Unauthorized,

    /// A business-rule rejection signaled by an error-range result code, or
    /// by a non-2xx status with no code at all.
    Business {
        /// Application result code, if the envelope carried one.
        code: Option<i64>,
        /// Message extracted from the envelope (`info` > `message` > `error`).
        message: String,
    },

    /// Failed to parse a response body that claimed to be JSON.
    Parse {
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to serialize a request body.
    Serialization {
        /// Details about the serialization failure.
        detail: String,
    },

    /// Local file I/O failed (CSV import/export staging).
    Io {
        /// Error details.
        detail: String,
    },
}

impl ClientError {
    /// Whether this failure is expected user-visible behavior rather than a
    /// system fault. Expected failures were already surfaced via toast and
    /// must not be logged at `error` level.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::Business { .. } | Self::Unauthorized)
    }
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Network { detail } => write!(f, "Network error: {detail}"),
            Self::Timeout { detail } => write!(f, "Request timeout: {detail}"),
            Self::Unauthorized => write!(f, "Unauthorized"),
            Self::Business { code, message } => {
                if let Some(code) = code {
                    write!(f, "[{code}] {message}")
                } else {
                    write!(f, "{message}")
                }
            }
            Self::Parse { detail } => write!(f, "Parse error: {detail}"),
            Self::Serialization { detail } => write!(f, "Serialization error: {detail}"),
            Self::Io { detail } => write!(f, "I/O error: {detail}"),
        }
    }
}

impl std::error::Error for ClientError {}

/// Convenience type alias for `Result<T, ClientError>`.
pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn display_business_with_code() {
        let e = ClientError::Business {
            code: Some(110031),
            message: "failed to create".to_string(),
        };
        assert_eq!(e.to_string(), "[110031] failed to create");
    }

    #[test]
    fn display_business_without_code() {
        let e = ClientError::Business {
            code: None,
            message: "nope".to_string(),
        };
        assert_eq!(e.to_string(), "nope");
    }

    #[test]
    fn expected_errors_are_not_system_faults() {
        assert!(ClientError::Unauthorized.is_expected());
        assert!(ClientError::Business {
            code: None,
            message: "x".into()
        }
        .is_expected());
        assert!(!ClientError::Network {
            detail: "x".into()
        }
        .is_expected());
        assert!(!ClientError::Parse {
            detail: "x".into()
        }
        .is_expected());
    }

    #[test]
    fn serialize_round_trip() {
        let e = ClientError::Business {
            code: Some(210001),
            message: "record not found".to_string(),
        };
        let json = serde_json::to_string(&e).unwrap();
        let back: ClientError = serde_json::from_str(&json).unwrap();
        assert_eq!(back.to_string(), e.to_string());
    }
}
