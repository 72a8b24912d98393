//! Filesystem abstraction for dirtree
//!
//! Provides the read-only filesystem probe used by the tree walker and
//! format-agnostic loading of structure configuration files.

pub mod config;
pub mod error;
pub mod io;
pub mod probe;

pub use config::ConfigStore;
pub use error::{Error, Result};
pub use probe::{DirEntries, expand_user, is_directory, list_entries};
