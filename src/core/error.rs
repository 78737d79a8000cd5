use std::path::PathBuf;

use thiserror::Error;

/// Result type for charnum operations.
pub type EncodeResult<T> = Result<T, EncodeError>;

/// Error type for charnum operations.
///
/// Encoding itself never fails on input text; these cover configuration and
/// character map persistence.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Output dimensions that cannot produce a meaningful array
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// A character map that cannot be loaded as given
    #[error("Invalid char map: {0}")]
    InvalidCharMap(String),

    /// Filesystem failure while reading or writing a char map
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed char map JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
