//! Markdown serialization of the index document.
//!
//! Stage 2 of the docdex pipeline. Takes the scanned [`Index`] and writes the
//! flat `directory.md` table of contents:
//!
//! ```text
//! ## guide
//! - [Getting Started](/guide/intro.md)
//! - [FAQ](/guide/faq.md)
//! ## algorithms
//! - [Sorting](/algorithms/sorting.md)
//! ```
//!
//! The file is fully overwritten on every run. Lines are streamed through a
//! buffered writer and flushed on success; there is no atomic rename, since
//! the document is a regenerated convenience artifact rather than durable
//! state.
//!
//! [`parse_index`] is the inverse direction: it re-reads a generated document
//! into topics using [pulldown-cmark](https://docs.rs/pulldown-cmark), which
//! is what `docdex check` uses to detect a stale file.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};
use thiserror::Error;

use crate::types::{Entry, Index, Topic};

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// The `## <name>` heading line for a topic.
fn heading_line(topic: &Topic) -> String {
    format!("## {}", topic.name)
}

/// The `- [<title>](<inner_path>)` link line for an entry.
fn link_line(entry: &Entry) -> String {
    format!("- [{}]({})", entry.title, entry.inner_path)
}

/// Render the full document as a string. Pure, used by tests and by the
/// staleness check; the build path streams the same lines via [`write_index`].
pub fn render_index(index: &Index) -> String {
    let mut out = String::new();
    for topic in &index.topics {
        out.push_str(&heading_line(topic));
        out.push('\n');
        for entry in &topic.entries {
            out.push_str(&link_line(entry));
            out.push('\n');
        }
    }
    out
}

/// Write the document to `path`, overwriting any previous version.
///
/// Lines are streamed in order; the writer is flushed after the final line.
pub fn write_index(index: &Index, path: &Path) -> Result<(), GenerateError> {
    let mut out = BufWriter::new(File::create(path)?);
    for topic in &index.topics {
        writeln!(out, "{}", heading_line(topic))?;
        for entry in &topic.entries {
            writeln!(out, "{}", link_line(entry))?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Parse a generated document back into its topics.
///
/// Recognizes `##` headings as topic boundaries and links as entries; link
/// lines before the first heading are ignored. Heading and link text is
/// sliced out of the source by byte span rather than reassembled from the
/// rendered inline events, so a title that happens to contain Markdown
/// syntax (`*`, `_`, backticks) comes back verbatim. Round-trips the output
/// of [`render_index`] exactly.
pub fn parse_index(markdown: &str) -> Vec<Topic> {
    let mut topics: Vec<Topic> = Vec::new();
    // Byte span of the inline content seen so far inside the open heading
    // or link; the inner Option stays None until the first content event.
    let mut heading: Option<Option<(usize, usize)>> = None;
    let mut link: Option<(Option<(usize, usize)>, String)> = None;

    for (event, range) in Parser::new(markdown).into_offset_iter() {
        match event {
            Event::Start(Tag::Heading {
                level: HeadingLevel::H2,
                ..
            }) => heading = Some(None),
            Event::End(TagEnd::Heading(HeadingLevel::H2)) => {
                if let Some(span) = heading.take() {
                    topics.push(Topic {
                        name: slice_span(markdown, span),
                        entries: Vec::new(),
                    });
                }
            }
            Event::Start(Tag::Link { dest_url, .. }) => {
                link = Some((None, dest_url.to_string()));
            }
            Event::End(TagEnd::Link) => {
                if let (Some((span, inner_path)), Some(topic)) =
                    (link.take(), topics.last_mut())
                {
                    topic.entries.push(Entry {
                        title: slice_span(markdown, span),
                        inner_path,
                    });
                }
            }
            // Any other event inside an open link or heading widens the
            // content span; the spans of nested inline markup cover its
            // delimiter characters, so they survive the round trip.
            _ => {
                if let Some((span, _)) = link.as_mut() {
                    widen_span(span, range.start, range.end);
                } else if let Some(span) = heading.as_mut() {
                    widen_span(span, range.start, range.end);
                }
            }
        }
    }
    topics
}

fn widen_span(span: &mut Option<(usize, usize)>, start: usize, end: usize) {
    match span {
        Some((lo, hi)) => {
            *lo = (*lo).min(start);
            *hi = (*hi).max(end);
        }
        None => *span = Some((start, end)),
    }
}

fn slice_span(markdown: &str, span: Option<(usize, usize)>) -> String {
    span.map(|(lo, hi)| markdown[lo..hi].to_string())
        .unwrap_or_default()
}
