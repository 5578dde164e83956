//! Unified error type for the engine layer.

use thiserror::Error;

pub use opsvault_client::ClientError;

/// Engine-layer error type.
///
/// Validation failures are raised before any network call and surface
/// field-adjacent; client errors pass through unchanged since the transport
/// already displayed them.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A required field is empty. Carries the field's label key so the UI
    /// can name it.
    #[error("{label} is required")]
    Validation { label: String },

    /// A JSON field failed to parse.
    #[error("{label} has invalid format")]
    InvalidJson { label: String },

    /// Error raised by the API client (already user-visible via toast).
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Local persistence failure.
    #[error("Store error: {0}")]
    Store(String),
}

impl CoreError {
    /// Whether this is expected user-facing behavior (validation or a
    /// business rejection) rather than a system fault.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Validation { .. } | Self::InvalidJson { .. } => true,
            Self::Client(e) => e.is_expected(),
            Self::Store(_) => false,
        }
    }
}

/// Convenience type alias for `Result<T, CoreError>`.
pub type CoreResult<T> = std::result::Result<T, CoreError>;
