//! Shared test utilities for the dirtree workspace.
//!
//! This crate provides scratch directory trees and structure config
//! snippets so crate test suites don't each rebuild them. It is a
//! dev-dependency only and never published.
//!
//! # Modules
//!
//! - [`tree`]: [`TestTree`] builder for on-disk fixtures
//! - [`config`]: YAML snippets for structure configs

pub mod config;
pub mod tree;

pub use config::{RULE_KEYS, rules_yaml, structure_yaml};
pub use tree::TestTree;
