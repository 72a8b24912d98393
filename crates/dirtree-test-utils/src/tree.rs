//! [`TestTree`] builder for filesystem fixtures.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory with helpers for laying out fixture trees.
///
/// # Example
///
/// ```rust,no_run
/// use dirtree_test_utils::TestTree;
///
/// let tree = TestTree::new();
/// tree.dir("docs/notes").file("docs/.keep").file("docs/notes.txt");
/// tree.assert_dir_exists("docs/notes");
/// ```
pub struct TestTree {
    temp_dir: TempDir,
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}

impl TestTree {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Root path as a string, the way declared paths are written.
    pub fn root_str(&self) -> String {
        self.root().to_string_lossy().into_owned()
    }

    /// Absolute path of `rel` inside the tree.
    pub fn path(&self, rel: &str) -> PathBuf {
        self.root().join(rel)
    }

    /// Create directory `rel` and any missing parents.
    pub fn dir(&self, rel: &str) -> &Self {
        fs::create_dir_all(self.path(rel)).unwrap();
        self
    }

    /// Create an empty file at `rel`, creating parent directories.
    pub fn file(&self, rel: &str) -> &Self {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, "").unwrap();
        self
    }

    /// Write a structure config named `name` at the tree root and return its path.
    pub fn write_config(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path(name);
        fs::write(&path, content).unwrap();
        path
    }

    /// Assert that directory `rel` exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if it does not.
    pub fn assert_dir_exists(&self, rel: &str) {
        let full_path = self.path(rel);
        assert!(
            full_path.is_dir(),
            "Expected directory to exist: {}",
            full_path.display()
        );
    }

    /// Snapshot of every path under the root, relative and sorted.
    ///
    /// Used to show that a run left the filesystem untouched.
    pub fn listing(&self) -> Vec<String> {
        fn collect(root: &Path, dir: &Path, out: &mut Vec<String>) {
            for entry in fs::read_dir(dir).unwrap() {
                let path = entry.unwrap().path();
                out.push(
                    path.strip_prefix(root)
                        .unwrap()
                        .to_string_lossy()
                        .into_owned(),
                );
                if path.is_dir() {
                    collect(root, &path, out);
                }
            }
        }

        let mut out = Vec::new();
        collect(self.root(), self.root(), &mut out);
        out.sort();
        out
    }
}
