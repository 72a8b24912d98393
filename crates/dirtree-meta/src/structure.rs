//! Declared structure types and their conversion from a config document
//!
//! A structure config has two top-level keys:
//!
//! ```yaml
//! rules:
//!   noUnknownDirectories: true
//!   noHiddenDirectories: false
//!   noVisibleFiles: true
//!   noHiddenFiles: false
//! directories:
//!   - name: Documents
//!     path: ~/docs
//!     desc: Everything written by hand
//!     rules:
//!       noVisibleFiles: false
//!     subdirs:
//!       - name: Notes
//!         path: /notes
//!         desc: Plain text notes
//! ```
//!
//! The document is parsed into a [`serde_yaml::Value`] first so that key
//! order survives and every shape problem can be reported with its location.

use std::collections::BTreeMap;

use serde_yaml::{Mapping, Value};

use crate::{Error, Result};

/// Node keys accepted for per-directory rule overrides.
const OVERRIDE_KEYS: [&str; 2] = ["rule-overrides", "rules"];

/// Global rule defaults, in declaration order.
///
/// Order matters: the rule registry compares it positionally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RulesConfig {
    entries: Vec<(String, bool)>,
}

impl RulesConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<String>, enabled: bool) -> Self {
        self.insert(key, enabled);
        self
    }

    /// Set a rule default. An existing key keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, enabled: bool) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = enabled,
            None => self.entries.push((key, enabled)),
        }
    }

    pub fn get(&self, key: &str) -> Option<bool> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, enabled)| *enabled)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.entries.iter().map(|(k, enabled)| (k.as_str(), *enabled))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, bool)> for RulesConfig {
    fn from_iter<I: IntoIterator<Item = (K, bool)>>(iter: I) -> Self {
        let mut rules = Self::new();
        for (key, enabled) in iter {
            rules.insert(key, enabled);
        }
        rules
    }
}

/// One declared directory.
///
/// `path` is appended verbatim to the parent's resolved path, so it must
/// carry its own separator (`/notes`, not `notes`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryNode {
    pub name: String,
    pub path: String,
    pub desc: String,
    pub subdirs: Vec<DirectoryNode>,
    pub rule_overrides: BTreeMap<String, bool>,
}

impl DirectoryNode {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            desc: String::new(),
            subdirs: Vec::new(),
            rule_overrides: BTreeMap::new(),
        }
    }

    pub fn with_desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = desc.into();
        self
    }

    pub fn with_subdir(mut self, subdir: DirectoryNode) -> Self {
        self.subdirs.push(subdir);
        self
    }

    pub fn with_override(mut self, key: impl Into<String>, enabled: bool) -> Self {
        self.rule_overrides.insert(key.into(), enabled);
        self
    }

    /// Override for `key` declared on this node, if any.
    pub fn rule_override(&self, key: &str) -> Option<bool> {
        self.rule_overrides.get(key).copied()
    }

    /// Last `/`-separated component of `path`.
    ///
    /// This is the name the directory is expected to have inside its parent.
    /// A trailing separator yields an empty segment.
    pub fn final_segment(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }
}

/// A whole structure config: rule defaults plus the declared forest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructureConfig {
    pub rules: RulesConfig,
    pub directories: Vec<DirectoryNode>,
}

impl StructureConfig {
    /// Parse a YAML document.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let value: Value = serde_yaml::from_str(content).map_err(|e| Error::Parse {
            message: e.to_string(),
        })?;
        Self::from_value(&value)
    }

    /// Convert an already parsed document, checking its shape.
    pub fn from_value(value: &Value) -> Result<Self> {
        let root = as_mapping(value, "<root>")?;

        let rules = match root.get("rules") {
            Some(rules) => RulesConfig {
                entries: parse_bool_map(rules, "rules")?,
            },
            None => return Err(Error::shape("rules", "missing required key")),
        };

        let directories = match root.get("directories") {
            Some(directories) => parse_nodes(directories, "directories")?,
            None => return Err(Error::shape("directories", "missing required key")),
        };

        Ok(Self { rules, directories })
    }

    /// Total number of declared directories, at every depth.
    pub fn node_count(&self) -> usize {
        fn count(nodes: &[DirectoryNode]) -> usize {
            nodes.iter().map(|n| 1 + count(&n.subdirs)).sum()
        }
        count(&self.directories)
    }
}

fn parse_nodes(value: &Value, location: &str) -> Result<Vec<DirectoryNode>> {
    let Value::Sequence(items) = value else {
        return Err(Error::shape(
            location,
            format!("expected a sequence, found {}", kind(value)),
        ));
    };

    items
        .iter()
        .enumerate()
        .map(|(i, item)| parse_node(item, &format!("{location}[{i}]")))
        .collect()
}

fn parse_node(value: &Value, location: &str) -> Result<DirectoryNode> {
    let map = as_mapping(value, location)?;

    let name = required_string(map, "name", location)?;
    let path = required_string(map, "path", location)?;
    let desc = match map.get("desc") {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(desc)) => desc.clone(),
        Some(other) => {
            return Err(Error::shape(
                format!("{location}.desc"),
                format!("expected a string, found {}", kind(other)),
            ));
        }
    };

    let subdirs = match map.get("subdirs") {
        Some(subdirs) => parse_nodes(subdirs, &format!("{location}.subdirs"))?,
        None => Vec::new(),
    };

    let mut rule_overrides = BTreeMap::new();
    for key in OVERRIDE_KEYS {
        if let Some(overrides) = map.get(key) {
            let entries = parse_bool_map(overrides, &format!("{location}.{key}"))?;
            rule_overrides.extend(entries);
        }
    }

    Ok(DirectoryNode {
        name,
        path,
        desc,
        subdirs,
        rule_overrides,
    })
}

fn parse_bool_map(value: &Value, location: &str) -> Result<Vec<(String, bool)>> {
    let map = as_mapping(value, location)?;

    let mut entries = Vec::with_capacity(map.len());
    for (key, enabled) in map {
        let Value::String(key) = key else {
            return Err(Error::shape(
                location,
                format!("rule keys must be strings, found {}", kind(key)),
            ));
        };
        let Value::Bool(enabled) = enabled else {
            return Err(Error::shape(
                format!("{location}.{key}"),
                format!("expected a boolean, found {}", kind(enabled)),
            ));
        };
        entries.push((key.clone(), *enabled));
    }

    Ok(entries)
}

fn required_string(map: &Mapping, key: &str, location: &str) -> Result<String> {
    match map.get(key) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(Error::shape(
            format!("{location}.{key}"),
            format!("expected a string, found {}", kind(other)),
        )),
        None => Err(Error::shape(
            format!("{location}.{key}"),
            "missing required key",
        )),
    }
}

fn as_mapping<'a>(value: &'a Value, location: &str) -> Result<&'a Mapping> {
    match value {
        Value::Mapping(map) => Ok(map),
        other => Err(Error::shape(
            location,
            format!("expected a mapping, found {}", kind(other)),
        )),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
