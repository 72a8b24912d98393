//! Error types for dirtree-core

/// Result type for dirtree-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a run before any directory is walked
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Config rule keys differ from the registered rules
    #[error(
        "Config rules and implemented rules are different: config declares {declared:?}, implemented rules are {expected:?}"
    )]
    ConfigMismatch {
        declared: Vec<String>,
        expected: Vec<String>,
    },

    /// Structure config could not be loaded
    #[error(transparent)]
    Meta(#[from] dirtree_meta::Error),
}
