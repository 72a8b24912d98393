//! The four structural rules
//!
//! Each rule looks at one declared directory and the immediate children of
//! its real counterpart, and returns the offending names. An empty list
//! means the rule holds.

use std::collections::BTreeSet;
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::Path;

use dirtree_fs::list_entries;
use dirtree_meta::DirectoryNode;

/// Violation reported by every rule when the directory is missing.
pub const DIRECTORY_MISSING: &str = "Directory doesn't exist.";

/// A structural rule applied to a single declared directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// Every real subdirectory must be declared as a sub-node.
    UnknownDirectories,
    /// No subdirectory name may start with `.`.
    HiddenDirectories,
    /// Every file name must start with `.`.
    VisibleFiles,
    /// No file name may start with `.`.
    HiddenFiles,
}

impl Rule {
    /// All rules in registry order.
    pub const ALL: [Rule; 4] = [
        Rule::UnknownDirectories,
        Rule::HiddenDirectories,
        Rule::VisibleFiles,
        Rule::HiddenFiles,
    ];

    /// Identifier used in structure configs.
    pub fn key(&self) -> &'static str {
        match self {
            Self::UnknownDirectories => "noUnknownDirectories",
            Self::HiddenDirectories => "noHiddenDirectories",
            Self::VisibleFiles => "noVisibleFiles",
            Self::HiddenFiles => "noHiddenFiles",
        }
    }

    /// Human readable label.
    pub fn name(&self) -> &'static str {
        match self {
            Self::UnknownDirectories => "No unknown directories",
            Self::HiddenDirectories => "No hidden directories",
            Self::VisibleFiles => "No visible files",
            Self::HiddenFiles => "No hidden files",
        }
    }

    /// Check `node` against the directory at `resolved`.
    ///
    /// `resolved` must already be home-expanded. Names come back sorted by
    /// their raw OS form; names that are not valid UTF-8 are shown lossily
    /// but never merged.
    ///
    /// A missing directory yields [`DIRECTORY_MISSING`]; an unreadable one
    /// yields a single `Cannot read directory` reason instead of an error,
    /// so one bad directory never stops the walk.
    pub fn check(&self, node: &DirectoryNode, resolved: &Path) -> Vec<String> {
        let entries = match list_entries(resolved) {
            Ok(entries) => entries,
            Err(dirtree_fs::Error::NotADirectory { .. }) => {
                return vec![DIRECTORY_MISSING.to_string()];
            }
            Err(dirtree_fs::Error::Io { source, .. }) => {
                tracing::warn!(
                    path = %resolved.display(),
                    error = %source,
                    "cannot list directory"
                );
                return vec![format!("Cannot read directory: {source}")];
            }
            Err(other) => return vec![format!("Cannot read directory: {other}")],
        };

        let offending: Vec<&OsString> = match self {
            Self::UnknownDirectories => {
                let declared: BTreeSet<&OsStr> = node
                    .subdirs
                    .iter()
                    .map(|sub| OsStr::new(sub.final_segment()))
                    .collect();
                entries
                    .directories
                    .iter()
                    .filter(|name| !declared.contains(name.as_os_str()))
                    .collect()
            }
            Self::HiddenDirectories => entries
                .directories
                .iter()
                .filter(|name| is_hidden(name))
                .collect(),
            Self::VisibleFiles => entries
                .files
                .iter()
                .filter(|name| !is_hidden(name))
                .collect(),
            Self::HiddenFiles => entries
                .files
                .iter()
                .filter(|name| is_hidden(name))
                .collect(),
        };

        offending
            .into_iter()
            .map(|name| name.to_string_lossy().into_owned())
            .collect()
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

fn is_hidden(name: &OsStr) -> bool {
    name.as_encoded_bytes().starts_with(b".")
}
