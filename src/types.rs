//! Shared types carried between the scan and generate stages.
//!
//! The scan stage produces an [`Index`]; the generate stage serializes it to
//! Markdown. `scan --json` emits the same structures as JSON, so everything
//! here derives serde both ways.

use serde::{Deserialize, Serialize};

use crate::config::SiteConfig;

/// Title used for the placeholder entry of an empty topic directory.
pub const PLACEHOLDER_TITLE: &str = "nothing yet";

/// One indexed note: display title plus site-relative link target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// First line of the note with the `# ` heading prefix stripped.
    /// Empty when the first line is shorter than the prefix.
    pub title: String,
    /// Site-relative path, always starting with `/` (e.g. `/guide/intro.md`).
    pub inner_path: String,
}

impl Entry {
    /// The placeholder entry emitted for a topic directory with no files.
    pub fn placeholder() -> Self {
        Entry {
            title: PLACEHOLDER_TITLE.to_string(),
            inner_path: "/".to_string(),
        }
    }
}

/// A topic: one immediate subdirectory of the docs root and its entries.
///
/// The directory name is used verbatim as the `##` heading in the output.
/// Entries preserve filesystem enumeration order; a topic is never empty —
/// an empty directory carries exactly the placeholder entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub name: String,
    pub entries: Vec<Entry>,
}

/// Output of the scan stage: every topic in enumeration order, plus the
/// effective site configuration (stock defaults merged with `config.toml`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Index {
    pub topics: Vec<Topic>,
    pub config: SiteConfig,
}

impl Index {
    /// Total number of link lines the serialized document will contain.
    pub fn entry_count(&self) -> usize {
        self.topics.iter().map(|t| t.entries.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_entry_shape() {
        let e = Entry::placeholder();
        assert_eq!(e.title, "nothing yet");
        assert_eq!(e.inner_path, "/");
    }

    #[test]
    fn entry_count_sums_across_topics() {
        let index = Index {
            topics: vec![
                Topic {
                    name: "guide".into(),
                    entries: vec![Entry::placeholder()],
                },
                Topic {
                    name: "api".into(),
                    entries: vec![
                        Entry {
                            title: "A".into(),
                            inner_path: "/api/a.md".into(),
                        },
                        Entry {
                            title: "B".into(),
                            inner_path: "/api/b.md".into(),
                        },
                    ],
                },
            ],
            config: Default::default(),
        };
        assert_eq!(index.entry_count(), 3);
    }
}
