//! Structural rules and the fixed registry that orders them
//!
//! Rule keys in a structure config must match the registry one for one,
//! in the same order.

mod registry;
mod rule;

pub use registry::RuleRegistry;
pub use rule::{DIRECTORY_MISSING, Rule};
