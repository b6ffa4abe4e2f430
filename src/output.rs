//! CLI output formatting for both pipeline stages.
//!
//! Output is information-centric, not file-centric: each topic leads with a
//! positional index and its name, with link targets shown as indented
//! context lines.
//!
//! ## Scan
//!
//! ```text
//! Topics
//! 001 guide (2 notes)
//!     001 Getting Started
//!         Link: /guide/intro.md
//!     002 FAQ
//!         Link: /guide/faq.md
//! 002 drafts (1 notes)
//!     001 nothing yet
//!         Link: /
//!
//! Config
//!     site_root: docs
//!     output_file: directory.md
//! ```
//!
//! ## Build
//!
//! ```text
//! 001 guide → ## guide (2 links)
//! 002 drafts → ## drafts (1 links)
//! Wrote 2 topics, 3 links → docs/directory.md
//! ```
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.

use std::path::Path;

use crate::types::Index;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Topic header: positional index + name + note count.
///
/// ```text
/// 001 guide (2 notes)
/// ```
fn topic_header(index: usize, name: &str, count: usize) -> String {
    format!("{} {} ({} notes)", format_index(index), name, count)
}

/// Entry line: titled entries show the title, untitled ones show the link
/// target in parens, which is the only identity they have.
fn entry_line(index: usize, title: &str, inner_path: &str) -> String {
    if title.is_empty() {
        format!("{} ({})", format_index(index), inner_path)
    } else {
        format!("{} {}", format_index(index), title)
    }
}

// ============================================================================
// Stage 1: Scan output
// ============================================================================

/// Format scan stage output showing the discovered topic structure.
pub fn format_scan_output(index: &Index) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Topics".to_string());
    for (t, topic) in index.topics.iter().enumerate() {
        lines.push(topic_header(t + 1, &topic.name, topic.entries.len()));
        for (e, entry) in topic.entries.iter().enumerate() {
            lines.push(format!(
                "    {}",
                entry_line(e + 1, &entry.title, &entry.inner_path)
            ));
            lines.push(format!("        Link: {}", entry.inner_path));
        }
    }

    lines.push(String::new());
    lines.push("Config".to_string());
    lines.push(format!("    site_root: {}", index.config.site_root));
    lines.push(format!("    output_file: {}", index.config.output_file));

    lines
}

/// Print scan output to stdout.
pub fn print_scan_output(index: &Index) {
    for line in format_scan_output(index) {
        println!("{}", line);
    }
}

// ============================================================================
// Stage 2: Build output
// ============================================================================

/// Format build stage output showing what was written where.
pub fn format_build_output(index: &Index, output_path: &Path) -> Vec<String> {
    let mut lines = Vec::new();

    for (t, topic) in index.topics.iter().enumerate() {
        lines.push(format!(
            "{} {} \u{2192} ## {} ({} links)",
            format_index(t + 1),
            topic.name,
            topic.name,
            topic.entries.len()
        ));
    }

    lines.push(format!(
        "Wrote {} topics, {} links \u{2192} {}",
        index.topics.len(),
        index.entry_count(),
        output_path.display()
    ));

    lines
}

/// Print build output to stdout.
pub fn print_build_output(index: &Index, output_path: &Path) {
    for line in format_build_output(index, output_path) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
