//! Rule registry
//!
//! The registry is the fixed, ordered list of every rule. A structure
//! config must declare exactly these keys in exactly this order.

use super::rule::Rule;
use crate::{Error, Result};
use dirtree_meta::RulesConfig;

/// Ordered collection of all rules.
#[derive(Debug, Clone)]
pub struct RuleRegistry {
    rules: Vec<Rule>,
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl RuleRegistry {
    /// Registry holding every rule in its canonical order.
    pub fn builtin() -> Self {
        Self {
            rules: Rule::ALL.to_vec(),
        }
    }

    /// All rules in registry order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Rule keys in registry order.
    pub fn keys(&self) -> Vec<&'static str> {
        self.rules.iter().map(Rule::key).collect()
    }

    /// Look up a rule by its config key.
    pub fn get(&self, key: &str) -> Option<Rule> {
        self.rules.iter().copied().find(|rule| rule.key() == key)
    }

    /// Check if a key names a registered rule.
    pub fn is_known(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Ensure `rules` declares exactly the registered keys, in order.
    ///
    /// Missing, extra and reordered keys are all rejected.
    pub fn validate_against(&self, rules: &RulesConfig) -> Result<()> {
        let declared: Vec<&str> = rules.keys().collect();
        let expected = self.keys();

        if declared != expected {
            return Err(Error::ConfigMismatch {
                declared: declared.into_iter().map(String::from).collect(),
                expected: expected.into_iter().map(String::from).collect(),
            });
        }

        Ok(())
    }
}
