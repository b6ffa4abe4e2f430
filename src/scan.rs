//! Docs-root scanning.
//!
//! Stage 1 of the docdex pipeline. Walks the immediate children of the docs
//! root and produces an [`Index`] that the generate stage serializes.
//!
//! ## Directory Structure
//!
//! docdex expects a flat topic layout, one level deep:
//!
//! ```text
//! docs/                            # Docs root
//! ├── .vuepress/                   # Reserved site tooling (never indexed)
//! ├── config.toml                  # docdex config (optional)
//! ├── directory.md                 # Generated output (plain file, skipped)
//! ├── guide/                       # Topic → "## guide" heading
//! │   ├── intro.md                 # First line "# Getting Started"
//! │   └── faq.md
//! ├── algorithms/                  # Another topic
//! │   └── sorting.md
//! └── drafts/                      # Empty topic → placeholder entry
//! ```
//!
//! ## Rules
//!
//! - The reserved `.vuepress` directory must exist and is excluded.
//! - Children that are plain files are skipped, not errors.
//! - Topics appear in the filesystem's native enumeration order; no sorting.
//! - Any read failure aborts the whole run with a typed [`ScanError`].

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::{self, ConfigError};
use crate::list;
use crate::types::{Index, Topic};

/// Reserved site-tooling directory, always excluded from indexing.
///
/// Deliberately not configurable: the docs tree this tool serves keeps its
/// VuePress configuration here, and indexing it would leak tooling files
/// into the table of contents.
pub const RESERVED_DIR: &str = ".vuepress";

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("reserved directory '{dir}' not found in {root}")]
    ReservedEntryMissing { dir: String, root: PathBuf },
    #[error("failed to read {path}: {source}")]
    ReadFailure {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("no '{segment}' segment in path: {path}")]
    PathOutsideRoot { path: PathBuf, segment: String },
}

/// Scan the docs root into an [`Index`].
///
/// Enumerates immediate children, removes the reserved entry, and delegates
/// each remaining child to [`list::list_entries`]. Children for which the
/// lister answers `None` (plain files) are dropped; everything else becomes
/// a topic keyed by its directory name.
pub fn scan(root: &Path) -> Result<Index, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::NotADirectory(root.to_path_buf()));
    }
    // Work on absolute paths so the site_root segment is present in derived
    // note paths no matter how the root was passed on the command line.
    let root = fs::canonicalize(root)?;
    let config = config::load_config(&root)?;

    let read_failure = |source| ScanError::ReadFailure {
        path: root.clone(),
        source,
    };

    let mut children = Vec::new();
    for entry in fs::read_dir(&root).map_err(read_failure)? {
        let entry = entry.map_err(read_failure)?;
        let name = entry.file_name().to_string_lossy().into_owned();
        children.push((name, entry.path()));
    }

    if !children.iter().any(|(name, _)| name == RESERVED_DIR) {
        return Err(ScanError::ReservedEntryMissing {
            dir: RESERVED_DIR.to_string(),
            root,
        });
    }

    let mut topics = Vec::new();
    for (name, path) in children {
        if name == RESERVED_DIR {
            continue;
        }
        if let Some(entries) = list::list_entries(&path, &config.site_root)? {
            topics.push(Topic { name, entries });
        }
    }

    Ok(Index { topics, config })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use crate::types::Entry;

    #[test]
    fn scan_finds_all_topics() {
        let fx = docs_fixture();
        fx.add_note("guide", "intro.md", "# Getting Started\n\nBody.");
        fx.add_note("guide", "faq.md", "# FAQ");
        fx.add_note("algorithms", "sorting.md", "# Sorting");

        let index = scan(&fx.root()).unwrap();
        let mut names = topic_names(&index);
        names.sort_unstable();
        assert_eq!(names, vec!["algorithms", "guide"]);
    }

    #[test]
    fn reserved_directory_is_excluded() {
        let fx = docs_fixture();
        fx.add_note("guide", "intro.md", "# Intro");

        let index = scan(&fx.root()).unwrap();
        assert!(!topic_names(&index).contains(&RESERVED_DIR));
    }

    #[test]
    fn missing_reserved_directory_is_error() {
        let fx = docs_fixture();
        fx.add_note("guide", "intro.md", "# Intro");
        std::fs::remove_dir_all(fx.root().join(RESERVED_DIR)).unwrap();

        let result = scan(&fx.root());
        assert!(matches!(
            result,
            Err(ScanError::ReservedEntryMissing { .. })
        ));
    }

    #[test]
    fn root_must_be_a_directory() {
        let fx = docs_fixture();
        let file = fx.root().join("stray.txt");
        std::fs::write(&file, "not a root").unwrap();

        assert!(matches!(scan(&file), Err(ScanError::NotADirectory(_))));
    }

    #[test]
    fn missing_root_is_error() {
        let fx = docs_fixture();
        let gone = fx.root().join("no-such-dir");
        assert!(matches!(scan(&gone), Err(ScanError::NotADirectory(_))));
    }

    #[test]
    fn plain_file_children_are_skipped() {
        let fx = docs_fixture();
        fx.add_note("guide", "intro.md", "# Intro");
        std::fs::write(fx.root().join("README.md"), "# Readme").unwrap();
        std::fs::write(fx.root().join("directory.md"), "## old output").unwrap();

        let index = scan(&fx.root()).unwrap();
        assert_eq!(topic_names(&index), vec!["guide"]);
    }

    #[test]
    fn empty_topic_gets_placeholder_entry() {
        let fx = docs_fixture();
        fx.add_topic("drafts");

        let index = scan(&fx.root()).unwrap();
        let drafts = find_topic(&index, "drafts");
        assert_eq!(drafts.entries, vec![Entry::placeholder()]);
    }

    #[test]
    fn entry_title_and_inner_path_derived() {
        let fx = docs_fixture();
        fx.add_note("guide", "intro.md", "# Getting Started\n\nSome body.");

        let index = scan(&fx.root()).unwrap();
        let guide = find_topic(&index, "guide");
        assert_eq!(
            guide.entries,
            vec![Entry {
                title: "Getting Started".to_string(),
                inner_path: "/guide/intro.md".to_string(),
            }]
        );
    }

    #[test]
    fn all_inner_paths_start_with_slash() {
        let fx = docs_fixture();
        fx.add_note("guide", "intro.md", "# Intro");
        fx.add_note("api", "ref.md", "# Reference");
        fx.add_topic("drafts");

        let index = scan(&fx.root()).unwrap();
        for topic in &index.topics {
            for entry in &topic.entries {
                assert!(
                    entry.inner_path.starts_with('/'),
                    "inner_path '{}' must start with /",
                    entry.inner_path
                );
            }
        }
    }

    #[test]
    fn relative_root_still_yields_site_relative_paths() {
        let fx = docs_fixture();
        fx.add_note("guide", "intro.md", "# Intro");

        // Scan via a path that ends in ".." hops; canonicalization inside
        // scan must still find the docs segment.
        let indirect = fx.root().join("guide").join("..");
        let index = scan(&indirect).unwrap();
        let guide = find_topic(&index, "guide");
        assert_eq!(guide.entries[0].inner_path, "/guide/intro.md");
    }

    #[test]
    fn config_loaded_from_root() {
        let fx = docs_fixture();
        fx.add_note("guide", "intro.md", "# Intro");
        std::fs::write(
            fx.root().join("config.toml"),
            r#"output_file = "toc.md""#,
        )
        .unwrap();

        let index = scan(&fx.root()).unwrap();
        assert_eq!(index.config.output_file, "toc.md");
        // config.toml itself must not become a topic
        assert_eq!(topic_names(&index), vec!["guide"]);
    }

    #[test]
    fn scan_twice_is_stable() {
        let fx = docs_fixture();
        fx.add_note("guide", "intro.md", "# Intro");
        fx.add_note("api", "ref.md", "# Reference");

        let first = scan(&fx.root()).unwrap();
        let second = scan(&fx.root()).unwrap();
        assert_eq!(first, second);
    }
}
