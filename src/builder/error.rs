//! Classification errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors reported by a [`Classifier`](super::Classifier).
///
/// [`DetectError::UnsupportedChaincodeType`] is not a failure of the builder:
/// it tells the peer to try the next one. Callers tell it apart with
/// [`DetectError::is_unsupported_chaincode_type`], never by message text.
#[derive(Debug, Error)]
pub enum DetectError {
    #[error("unsupported chaincode type: {found}")]
    UnsupportedChaincodeType { found: String },

    #[error("failed to read chaincode metadata: {}", .path.display())]
    ReadMetadata {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid chaincode metadata: {}", .path.display())]
    ParseMetadata {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("detection cancelled")]
    Cancelled,

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type for classifier operations.
pub type DetectResult<T> = Result<T, DetectError>;

impl DetectError {
    /// Whether this is the routine "not mine" condition.
    pub fn is_unsupported_chaincode_type(&self) -> bool {
        matches!(self, DetectError::UnsupportedChaincodeType { .. })
    }
}
