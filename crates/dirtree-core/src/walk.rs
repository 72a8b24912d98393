//! Tree walker
//!
//! Walks the declared forest depth-first in declaration order, probing each
//! resolved path and folding the results into the two global invariants.
//! All mutable state lives in a [`WalkAccumulator`] created by [`walk`], so
//! separate walks never share anything.

use dirtree_fs::{expand_user, is_directory};
use dirtree_meta::{DirectoryNode, RulesConfig, StructureConfig};

use crate::Result;
use crate::check::check_node;
use crate::report::{Event, WalkReport, WalkSummary};
use crate::rules::RuleRegistry;

/// Label of the synthetic root above the declared directories.
pub const ROOT_LABEL: &str = "My directories";

/// Tree drawing pieces, as used by `tree`.
pub mod glyphs {
    /// Prefix continuation below a last child.
    pub const SPACE: &str = "    ";
    /// Prefix continuation below a child with later siblings.
    pub const BRANCH: &str = "│   ";
    /// Pointer for a child with later siblings.
    pub const TEE: &str = "├── ";
    /// Pointer for the last child.
    pub const LAST: &str = "└── ";
    /// Info-line pointer for a directory that has sub-directories.
    pub const HAS_CHILDREN: &str = "│ ";
    /// Info-line pointer for a leaf directory.
    pub const LEAF: &str = "  ";
}

/// Options for one walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkOptions {
    /// Evaluate rules at every directory.
    pub check_rules: bool,
}

/// Global invariants, only ever folded from true to false.
#[derive(Debug, Clone, Copy)]
struct WalkState {
    all_directories_exist: bool,
    all_rules_pass: bool,
}

impl WalkState {
    fn new() -> Self {
        Self {
            all_directories_exist: true,
            all_rules_pass: true,
        }
    }
}

/// Mutable state threaded through the recursion.
struct WalkAccumulator {
    state: WalkState,
    events: Vec<Event>,
}

/// Read-only inputs shared by every level of the recursion.
struct WalkContext<'a> {
    registry: &'a RuleRegistry,
    rules: &'a RulesConfig,
    options: WalkOptions,
}

/// Resolve a declared segment against its parent's resolved path.
///
/// Plain concatenation: no separator is inserted or removed.
pub fn resolve_path(parent: &str, segment: &str) -> String {
    format!("{parent}{segment}")
}

/// Validate the rule set, then walk the whole declared structure.
///
/// # Errors
///
/// Fails with [`crate::Error::ConfigMismatch`] before touching the
/// filesystem when the config's rule keys differ from the registry.
/// Missing directories and rule violations are never errors; they are
/// recorded in the report.
pub fn walk(config: &StructureConfig, options: WalkOptions) -> Result<WalkReport> {
    let registry = RuleRegistry::builtin();
    registry.validate_against(&config.rules)?;

    let ctx = WalkContext {
        registry: &registry,
        rules: &config.rules,
        options,
    };
    let mut acc = WalkAccumulator {
        state: WalkState::new(),
        events: vec![Event::Root {
            label: ROOT_LABEL.to_string(),
        }],
    };

    tracing::debug!(
        directories = config.directories.len(),
        check_rules = options.check_rules,
        "walk started"
    );

    walk_nodes(&config.directories, "", "", &ctx, &mut acc);

    let summary = WalkSummary {
        all_directories_exist: acc.state.all_directories_exist,
        all_rules_pass: acc.state.all_rules_pass,
        rule_checking_enabled: options.check_rules,
    };
    acc.events.push(Event::Summary(summary));

    tracing::debug!(?summary, "walk finished");

    Ok(WalkReport {
        events: acc.events,
        summary,
    })
}

fn walk_nodes(
    nodes: &[DirectoryNode],
    prefix: &str,
    parent_path: &str,
    ctx: &WalkContext<'_>,
    acc: &mut WalkAccumulator,
) {
    let count = nodes.len();

    for (i, node) in nodes.iter().enumerate() {
        let (name_prefix, child_prefix) = if i + 1 == count {
            (
                format!("{prefix}{}", glyphs::LAST),
                format!("{prefix}{}", glyphs::SPACE),
            )
        } else {
            (
                format!("{prefix}{}", glyphs::TEE),
                format!("{prefix}{}", glyphs::BRANCH),
            )
        };

        walk_node(node, &name_prefix, &child_prefix, parent_path, ctx, acc);
    }
}

fn walk_node(
    node: &DirectoryNode,
    name_prefix: &str,
    child_prefix: &str,
    parent_path: &str,
    ctx: &WalkContext<'_>,
    acc: &mut WalkAccumulator,
) {
    let resolved = resolve_path(parent_path, &node.path);
    let exists = is_directory(&resolved);
    acc.state.all_directories_exist &= exists;

    tracing::debug!(directory = %node.name, path = %resolved, exists, "visiting");

    let pointer = if node.subdirs.is_empty() {
        glyphs::LEAF
    } else {
        glyphs::HAS_CHILDREN
    };
    let info_prefix = format!("{child_prefix}{pointer}");

    acc.events.push(Event::DirectoryHeader {
        name: node.name.clone(),
        prefix: name_prefix.to_string(),
        exists,
    });
    acc.events.push(Event::DirectoryInfo {
        desc: node.desc.clone(),
        path: resolved.clone(),
        prefix: info_prefix.clone(),
    });

    if ctx.options.check_rules {
        warn_unknown_overrides(node, ctx.registry);

        let expanded = expand_user(&resolved);
        let passed = check_node(
            node,
            &expanded,
            ctx.registry,
            ctx.rules,
            &info_prefix,
            &mut acc.events,
        );
        acc.state.all_rules_pass &= passed;
    }

    acc.events.push(Event::NodeEnd {
        prefix: info_prefix,
    });

    walk_nodes(&node.subdirs, child_prefix, &resolved, ctx, acc);
}

fn warn_unknown_overrides(node: &DirectoryNode, registry: &RuleRegistry) {
    for key in node.rule_overrides.keys() {
        if !registry.is_known(key) {
            tracing::warn!(
                directory = %node.name,
                key = %key,
                "ignoring override for unknown rule"
            );
        }
    }
}
