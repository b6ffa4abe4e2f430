//! Site configuration module.
//!
//! Handles loading and validating the optional `config.toml` in the docs
//! root. Config files are sparse: stock defaults apply for anything the user
//! does not override, and unknown keys are rejected to catch typos early.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! site_root = "docs"            # Path segment that anchors inner_path links
//! output_file = "directory.md"  # Output filename, relative to the root
//! ```
//!
//! The `.vuepress` exclusion is deliberately not configurable; the reserved
//! directory name is fixed (see [`crate::scan::RESERVED_DIR`]).

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have defaults that reproduce the historical behavior of the
/// generator, so a tree without a config file indexes exactly as before.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Path segment that marks the site root inside absolute note paths.
    /// Everything after the first occurrence of this segment becomes the
    /// link target, prefixed with `/`.
    pub site_root: String,
    /// Name of the generated Markdown file, relative to the docs root.
    pub output_file: String,
}

fn default_site_root() -> String {
    "docs".to_string()
}

fn default_output_file() -> String {
    "directory.md".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_root: default_site_root(),
            output_file: default_output_file(),
        }
    }
}

impl SiteConfig {
    /// Validate config values.
    ///
    /// Both fields name a single path component, so separators are rejected.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site_root.is_empty() {
            return Err(ConfigError::Validation("site_root must not be empty".into()));
        }
        if self.site_root.contains('/') || self.site_root.contains('\\') {
            return Err(ConfigError::Validation(
                "site_root must be a single path segment".into(),
            ));
        }
        if self.output_file.is_empty() {
            return Err(ConfigError::Validation(
                "output_file must not be empty".into(),
            ));
        }
        if self.output_file.contains('/') || self.output_file.contains('\\') {
            return Err(ConfigError::Validation(
                "output_file must be a plain filename".into(),
            ));
        }
        Ok(())
    }
}

/// Load the site config from `<root>/config.toml`, falling back to stock
/// defaults when the file does not exist.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let config_path = root.join("config.toml");
    let config = if config_path.exists() {
        let content = fs::read_to_string(&config_path)?;
        toml::from_str(&content)?
    } else {
        SiteConfig::default()
    };
    config.validate()?;
    Ok(config)
}
