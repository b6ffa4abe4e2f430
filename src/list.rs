//! File listing and per-note metadata extraction.
//!
//! Second half of the scan stage. Given one candidate child of the docs root,
//! [`list_entries`] decides whether it is a topic directory at all and, if so,
//! turns every file inside it into an [`Entry`].
//!
//! ## Title Derivation
//!
//! A note's display title is its first line with the two-character `# `
//! heading prefix stripped. Only the first line is read; note bodies are
//! never loaded. A first line shorter than the prefix yields an empty title.
//!
//! ## Link Derivation
//!
//! The link target (`inner_path`) is the portion of the note's absolute path
//! after the first `docs` path segment (configurable via `site_root`),
//! re-joined with `/` and prefixed with `/`:
//!
//! ```text
//! /home/me/notes/docs/guide/intro.md  →  /guide/intro.md
//! ```
//!
//! A path with no such segment is a [`ScanError::PathOutsideRoot`]; links
//! would not resolve under the site, so the run aborts.

use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Component, Path};

use crate::scan::ScanError;
use crate::types::Entry;

/// Length of the stripped heading prefix (`# `).
const TITLE_PREFIX_LEN: usize = 2;

/// List the entries of one candidate topic directory.
///
/// Returns `Ok(None)` when `dir` is not a directory; the scanner skips such
/// children (a plain file in the docs root is not an error). An empty
/// directory yields exactly one placeholder entry. Entries preserve the
/// filesystem's native enumeration order, one per file, no deduplication
/// and no sorting.
pub fn list_entries(dir: &Path, site_root: &str) -> Result<Option<Vec<Entry>>, ScanError> {
    if !dir.is_dir() {
        return Ok(None);
    }

    let read_failure = |source| ScanError::ReadFailure {
        path: dir.to_path_buf(),
        source,
    };

    // Single level only: nested directories inside a topic are not descended
    // into and do not produce entries.
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_failure)? {
        let path = entry.map_err(read_failure)?.path();
        if path.is_file() {
            files.push(path);
        }
    }

    if files.is_empty() {
        return Ok(Some(vec![Entry::placeholder()]));
    }

    let mut entries = Vec::with_capacity(files.len());
    for path in &files {
        let line = first_line(path)?;
        entries.push(Entry {
            title: title_from_first_line(&line),
            inner_path: inner_path(path, site_root)?,
        });
    }
    Ok(Some(entries))
}

/// Read the first line of a file, without the trailing `\n` (and `\r`).
///
/// Only the first line is pulled through the buffer; the rest of the file is
/// never read.
fn first_line(path: &Path) -> Result<String, ScanError> {
    let read_failure = |source| ScanError::ReadFailure {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(read_failure)?;
    let mut line = String::new();
    BufReader::new(file)
        .read_line(&mut line)
        .map_err(read_failure)?;

    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(line)
}

/// Strip the `# ` heading prefix from a note's first line.
///
/// Character-based, so a multibyte first line cannot split a UTF-8 boundary.
/// Lines shorter than the prefix produce an empty title.
fn title_from_first_line(line: &str) -> String {
    line.chars().skip(TITLE_PREFIX_LEN).collect()
}

/// Derive the site-relative link target from an absolute note path.
///
/// Takes everything after the first path component equal to `site_root` and
/// joins it with `/`, prefixed with `/`.
pub fn inner_path(path: &Path, site_root: &str) -> Result<String, ScanError> {
    let mut components = path
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy()),
            _ => None,
        })
        .skip_while(|s| s.as_ref() != site_root);

    // Drop the site_root segment itself; None means it never appeared.
    if components.next().is_none() {
        return Err(ScanError::PathOutsideRoot {
            path: path.to_path_buf(),
            segment: site_root.to_string(),
        });
    }

    let rest: Vec<_> = components.collect();
    if rest.is_empty() {
        return Err(ScanError::PathOutsideRoot {
            path: path.to_path_buf(),
            segment: site_root.to_string(),
        });
    }
    Ok(format!("/{}", rest.join("/")))
}
