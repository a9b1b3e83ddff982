/// Planner error types
use std::path::PathBuf;
use thiserror::Error;

pub type PlanResult<T> = Result<T, PlanError>;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("Failed to read manifest at {path}: {error}")]
    ManifestReadError { path: PathBuf, error: String },

    #[error("Invalid manifest: {0}")]
    InvalidManifest(String),

    #[error("Unsupported platform kind: {0}")]
    UnsupportedPlatform(String),

    #[error("Toolchain query failed: {0}")]
    QueryError(String),

    #[error("Failed to serialize plan: {0}")]
    SerializeError(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PlanError {
    /// Create a manifest read error
    pub fn manifest_read(path: impl Into<PathBuf>, error: impl ToString) -> Self {
        Self::ManifestReadError {
            path: path.into(),
            error: error.to_string(),
        }
    }

    /// Create an invalid manifest error
    pub fn invalid_manifest(message: impl Into<String>) -> Self {
        Self::InvalidManifest(message.into())
    }

    /// Create an unsupported platform error
    pub fn unsupported_platform(name: impl Into<String>) -> Self {
        Self::UnsupportedPlatform(name.into())
    }

    /// Create a toolchain query error
    pub fn query(message: impl Into<String>) -> Self {
        Self::QueryError(message.into())
    }
}
