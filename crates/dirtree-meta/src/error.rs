//! Error types for dirtree-meta

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] dirtree_fs::Error),

    #[error("Configuration not found at {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Failed to parse structure config: {message}")]
    Parse { message: String },

    #[error("Invalid configuration at {location}: {message}")]
    ConfigShape { location: String, message: String },
}

impl Error {
    pub(crate) fn shape(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ConfigShape {
            location: location.into(),
            message: message.into(),
        }
    }
}
