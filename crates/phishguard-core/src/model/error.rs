//! Model loading errors.

use std::path::PathBuf;

/// Why a model artifact could not be loaded. Every variant is fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("cannot read model artifact {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("model artifact {} is not valid JSON: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("model artifact is inconsistent: {0}")]
    Invalid(String),
    #[error("model artifact {} has SHA-256 {actual}, expected {expected}", .path.display())]
    ChecksumMismatch {
        path: PathBuf,
        expected: String,
        actual: String,
    },
}
