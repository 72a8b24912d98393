//! Read-only filesystem probe used by the tree walker
//!
//! Paths declared in a structure config are plain strings that may start
//! with `~`. Everything here reads from disk and never writes.

use std::collections::BTreeSet;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Immediate children of a directory, partitioned by filesystem type.
///
/// Names are the raw OS names, kept in sorted sets so every consumer sees
/// them in the same order. Names that are not valid UTF-8 stay distinct.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirEntries {
    pub directories: BTreeSet<OsString>,
    pub files: BTreeSet<OsString>,
}

/// Expand a leading `~` to the current user's home directory.
///
/// Only `~` on its own or followed by `/` is expanded. Anything else,
/// including `~name` forms, is returned unchanged, as is every path when
/// the home directory cannot be determined.
pub fn expand_user(path: &str) -> PathBuf {
    let rest = match path.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
        _ => return PathBuf::from(path),
    };

    let Some(home) = dirs::home_dir() else {
        return PathBuf::from(path);
    };

    let home = home.to_string_lossy();
    let expanded = format!("{}{}", home.trim_end_matches('/'), rest);
    if expanded.is_empty() {
        PathBuf::from("/")
    } else {
        PathBuf::from(expanded)
    }
}

/// Return true if `path`, after home expansion, is an existing directory.
///
/// Missing paths and paths that cannot be inspected yield `false`.
pub fn is_directory(path: &str) -> bool {
    expand_user(path).is_dir()
}

/// List the immediate children of `path`.
///
/// Symlinks are classified by what they point to. Entries that are neither
/// a directory nor a regular file (dangling links, sockets, fifos) are
/// skipped.
///
/// # Errors
///
/// Returns [`Error::NotADirectory`] when `path` is not a directory and
/// [`Error::Io`] when the directory cannot be read.
pub fn list_entries(path: &Path) -> Result<DirEntries> {
    if !path.is_dir() {
        return Err(Error::NotADirectory {
            path: path.to_path_buf(),
        });
    }

    let read_dir = fs::read_dir(path).map_err(|e| Error::io(path, e))?;

    let mut entries = DirEntries::default();
    for entry in read_dir {
        let entry = entry.map_err(|e| Error::io(path, e))?;
        let name = entry.file_name();
        let child = entry.path();

        if child.is_dir() {
            entries.directories.insert(name);
        } else if child.is_file() {
            entries.files.insert(name);
        } else {
            tracing::trace!(path = %child.display(), "skipping special entry");
        }
    }

    Ok(entries)
}
