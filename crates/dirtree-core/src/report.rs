//! Walk output: structural events, the run summary and the renderer contract
//!
//! The walker only records what it saw. Turning events into text, colors or
//! JSON is the job of a [`Renderer`].

use serde::Serialize;

/// Result of one rule on one directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "violations", rename_all = "snake_case")]
pub enum RuleOutcome {
    Passed,
    Failed(Vec<String>),
    /// The rule is switched off for this directory and counts as passed.
    Disabled,
}

impl RuleOutcome {
    /// Build an outcome from the violations a rule reported.
    pub fn from_violations(violations: Vec<String>) -> Self {
        if violations.is_empty() {
            Self::Passed
        } else {
            Self::Failed(violations)
        }
    }

    pub fn passed(&self) -> bool {
        !matches!(self, Self::Failed(_))
    }

    pub fn violations(&self) -> &[String] {
        match self {
            Self::Failed(violations) => violations,
            _ => &[],
        }
    }
}

/// Global invariants folded over a whole walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WalkSummary {
    pub all_directories_exist: bool,
    pub all_rules_pass: bool,
    pub rule_checking_enabled: bool,
}

/// One structural event, in the order the walk produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    Root {
        label: String,
    },
    DirectoryHeader {
        name: String,
        prefix: String,
        exists: bool,
    },
    DirectoryInfo {
        desc: String,
        path: String,
        prefix: String,
    },
    RuleResult {
        rule_key: &'static str,
        rule_name: &'static str,
        outcome: RuleOutcome,
        prefix: String,
    },
    /// Closes a directory's block; renders as a padding line.
    NodeEnd {
        prefix: String,
    },
    Summary(WalkSummary),
}

impl Event {
    /// Forward this event to the matching renderer call.
    pub fn dispatch<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        match self {
            Self::Root { label } => renderer.render_root(label),
            Self::DirectoryHeader {
                name,
                prefix,
                exists,
            } => renderer.render_directory_header(name, prefix, *exists),
            Self::DirectoryInfo { desc, path, prefix } => {
                renderer.render_directory_info(desc, path, prefix)
            }
            Self::RuleResult {
                rule_name,
                outcome,
                prefix,
                ..
            } => renderer.render_rule_result(rule_name, outcome, prefix),
            Self::NodeEnd { prefix } => renderer.render_node_end(prefix),
            Self::Summary(summary) => renderer.render_global_summary(
                summary.all_directories_exist,
                summary.all_rules_pass,
                summary.rule_checking_enabled,
            ),
        }
    }
}

/// Consumer of walk events. One call per event.
pub trait Renderer {
    fn render_root(&mut self, label: &str);

    fn render_directory_header(&mut self, name: &str, prefix: &str, exists: bool);

    fn render_directory_info(&mut self, desc: &str, path: &str, prefix: &str);

    /// Only called when rule checking is enabled.
    fn render_rule_result(&mut self, rule_name: &str, outcome: &RuleOutcome, prefix: &str);

    fn render_node_end(&mut self, prefix: &str);

    fn render_global_summary(
        &mut self,
        all_directories_exist: bool,
        all_rules_pass: bool,
        rule_checking_enabled: bool,
    );
}

/// Everything one walk produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WalkReport {
    pub events: Vec<Event>,
    pub summary: WalkSummary,
}

impl WalkReport {
    /// Replay every event into `renderer`.
    pub fn render<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        for event in &self.events {
            event.dispatch(renderer);
        }
    }

    /// Outcomes recorded for `rule_key`, in walk order.
    pub fn outcomes_for(&self, rule_key: &str) -> Vec<&RuleOutcome> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::RuleResult {
                    rule_key: key,
                    outcome,
                    ..
                } if *key == rule_key => Some(outcome),
                _ => None,
            })
            .collect()
    }

    /// Names of declared directories, in walk order.
    pub fn visited(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::DirectoryHeader { name, .. } => Some(name.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Resolved (unexpanded) paths of declared directories, in walk order.
    pub fn resolved_paths(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::DirectoryInfo { path, .. } => Some(path.as_str()),
                _ => None,
            })
            .collect()
    }
}
