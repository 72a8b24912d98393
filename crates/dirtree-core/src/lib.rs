//! Rule checking and tree walking engine for dirtree
//!
//! Given a [`StructureConfig`](dirtree_meta::StructureConfig), the walker
//! visits every declared directory, checks that it exists, optionally runs
//! the structural rules against it, and records what it found as a list of
//! [`Event`]s plus a [`WalkSummary`]. Rendering is left to a [`Renderer`].
//!
//! ```text
//!   dirtree-cli
//!        |
//!   dirtree-core   (rules, check, walk, report)
//!        |
//!   dirtree-meta   (structure config)
//!        |
//!   dirtree-fs     (probe, config files)
//! ```
//!
//! # Example
//!
//! ```no_run
//! use dirtree_core::{WalkOptions, walk};
//! use dirtree_meta::StructureConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = StructureConfig::from_yaml_str(&std::fs::read_to_string("structure.yml")?)?;
//! let report = walk(&config, WalkOptions { check_rules: true })?;
//! println!("all rules pass: {}", report.summary.all_rules_pass);
//! # Ok(())
//! # }
//! ```

pub mod check;
pub mod error;
pub mod report;
pub mod rules;
pub mod walk;

use std::path::Path;

pub use check::{check_node, evaluate, rule_enabled};
pub use error::{Error, Result};
pub use report::{Event, Renderer, RuleOutcome, WalkReport, WalkSummary};
pub use rules::{DIRECTORY_MISSING, Rule, RuleRegistry};
pub use walk::{ROOT_LABEL, WalkOptions, glyphs, resolve_path, walk};

/// Load the structure config at `path` and walk it.
pub fn check_structure_file(path: &Path, options: WalkOptions) -> Result<WalkReport> {
    let config = dirtree_meta::load_structure(path)?;
    walk(&config, options)
}
