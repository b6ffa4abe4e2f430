//! # docdex
//!
//! A table-of-contents generator for VuePress-style docs trees. Your
//! filesystem is the data source: each immediate subdirectory of the docs
//! root is a topic, each file inside a topic is a note whose first line
//! carries its display title, and the output is a flat `directory.md` with
//! one heading per topic and one link line per note.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! ```text
//! 1. Scan      docs/  →  Index          (filesystem → structured data)
//! 2. Generate  Index  →  directory.md   (Markdown serialization)
//! ```
//!
//! The stages are independent pure-ish functions over an in-memory [`Index`],
//! so unit tests can exercise rendering without touching the filesystem, and
//! `docdex scan --json` can dump the intermediate structure for inspection.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Stage 1 — enumerates the docs root, excludes the reserved `.vuepress` entry, collects topics |
//! | [`list`] | Per-topic file listing: first-line titles and site-relative link derivation |
//! | [`generate`] | Stage 2 — renders and writes `directory.md`; re-parses it for staleness checks |
//! | [`config`] | `config.toml` loading and validation |
//! | [`types`] | Shared types serialized between stages (`Entry`, `Topic`, `Index`) |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## First Lines Only
//!
//! A note's title is its first line with the `# ` heading prefix stripped.
//! Only that line is read through a buffered reader; note bodies are never
//! loaded, so indexing cost scales with file count, not tree size.
//!
//! ## Enumeration Order Is the Order
//!
//! Topics and entries keep the filesystem's native enumeration order. No
//! sorting, no dedup: the generated document mirrors what `read_dir`
//! returns, and re-running over an unchanged tree is byte-identical.
//!
//! ## Typed Errors Over Crashes
//!
//! The fragile points of this kind of script (a missing `.vuepress`
//! directory, a note outside the site root, an unreadable file) are explicit
//! [`scan::ScanError`] variants. Every one of them aborts the whole run; the
//! only skip-and-continue case is a plain-file child of the root, which is
//! simply not a topic.
//!
//! ## Markdown Out, Markdown Back In
//!
//! `directory.md` is regenerated from scratch on every run, never patched.
//! The [`generate::parse_index`] inverse (via pulldown-cmark) lets
//! `docdex check` compare the file on disk against a fresh scan and report
//! staleness without writing anything.

pub mod config;
pub mod generate;
pub mod list;
pub mod output;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
