//! Declared directory structure for dirtree.
//!
//! This crate turns a structure configuration document into the in-memory
//! tree the walker consumes: global rule defaults plus the ordered forest
//! of declared directories.

pub mod error;
pub mod loader;
pub mod structure;

pub use error::{Error, Result};
pub use loader::load_structure;
pub use structure::{DirectoryNode, RulesConfig, StructureConfig};
