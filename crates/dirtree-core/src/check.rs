//! Directory node checker
//!
//! Runs every registered rule against one declared directory, honouring
//! per-directory overrides, and records one event per rule.

use std::path::Path;

use dirtree_meta::{DirectoryNode, RulesConfig};

use crate::report::{Event, RuleOutcome};
use crate::rules::{Rule, RuleRegistry};

/// Whether `rule` is enabled for `node`.
///
/// A node override wins over the global default. A key missing from both
/// counts as enabled; registry validation makes that unreachable in a
/// normal run.
pub fn rule_enabled(rule: Rule, node: &DirectoryNode, rules: &RulesConfig) -> bool {
    node.rule_override(rule.key())
        .or_else(|| rules.get(rule.key()))
        .unwrap_or(true)
}

/// Evaluate one rule on one directory.
pub fn evaluate(
    rule: Rule,
    node: &DirectoryNode,
    resolved: &Path,
    rules: &RulesConfig,
) -> RuleOutcome {
    if rule_enabled(rule, node, rules) {
        RuleOutcome::from_violations(rule.check(node, resolved))
    } else {
        RuleOutcome::Disabled
    }
}

/// Check every rule of `registry` on `node`, in registry order, pushing a
/// [`Event::RuleResult`] per rule.
///
/// `resolved` must already be home-expanded. Returns true when no enabled
/// rule reported a violation.
pub fn check_node(
    node: &DirectoryNode,
    resolved: &Path,
    registry: &RuleRegistry,
    rules: &RulesConfig,
    prefix: &str,
    events: &mut Vec<Event>,
) -> bool {
    let mut all_passed = true;

    for &rule in registry.rules() {
        let outcome = evaluate(rule, node, resolved, rules);
        tracing::trace!(
            directory = %node.name,
            rule = rule.key(),
            ?outcome,
            "rule evaluated"
        );

        all_passed &= outcome.passed();
        events.push(Event::RuleResult {
            rule_key: rule.key(),
            rule_name: rule.name(),
            outcome,
            prefix: prefix.to_string(),
        });
    }

    all_passed
}
