//! Shared test utilities for the docdex test suite.
//!
//! Provides a docs-tree fixture builder plus lookup helpers over the
//! scan-stage [`Index`].
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let fx = docs_fixture();
//! fx.add_note("guide", "intro.md", "# Getting Started\n\nBody.");
//!
//! let index = scan(&fx.root()).unwrap();
//! let guide = find_topic(&index, "guide");
//! assert_eq!(entry_titles(guide), vec!["Getting Started"]);
//! ```

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use crate::scan::RESERVED_DIR;
use crate::types::{Index, Topic};

/// A temporary docs tree with the reserved `.vuepress` directory in place.
///
/// The docs root lives at `<tmp>/docs` so that absolute note paths contain
/// the default site-root segment. Dropping the fixture removes the tree.
pub struct DocsFixture {
    tmp: TempDir,
}

/// Create an empty docs tree ready for scanning.
pub fn docs_fixture() -> DocsFixture {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("docs");
    fs::create_dir_all(root.join(RESERVED_DIR)).unwrap();
    DocsFixture { tmp }
}

impl DocsFixture {
    /// Absolute path of the docs root.
    pub fn root(&self) -> PathBuf {
        self.tmp.path().join("docs")
    }

    /// Create an empty topic directory.
    pub fn add_topic(&self, topic: &str) -> PathBuf {
        let dir = self.root().join(topic);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    /// Write a note file under a topic, creating the topic if needed.
    pub fn add_note(&self, topic: &str, file: &str, content: &str) -> PathBuf {
        let dir = self.add_topic(topic);
        let path = dir.join(file);
        fs::write(&path, content).unwrap();
        path
    }
}

// =========================================================================
// Index lookups — panic with a clear message on miss
// =========================================================================

/// Find a topic by name. Panics if not found.
pub fn find_topic<'a>(index: &'a Index, name: &str) -> &'a Topic {
    index
        .topics
        .iter()
        .find(|t| t.name == name)
        .unwrap_or_else(|| {
            let names = topic_names(index);
            panic!("topic '{name}' not found. Available: {names:?}")
        })
}

/// All topic names in enumeration order.
pub fn topic_names(index: &Index) -> Vec<&str> {
    index.topics.iter().map(|t| t.name.as_str()).collect()
}

/// All entry titles of a topic, in order.
pub fn entry_titles(topic: &Topic) -> Vec<&str> {
    topic.entries.iter().map(|e| e.title.as_str()).collect()
}
