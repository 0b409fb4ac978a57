//! `[build]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [build]
//! content = "content"
//! output = "dist"
//! base = "/my-blog"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Markdown content directory (relative to the config file).
    pub content: PathBuf,
    /// Output directory for generated data files.
    pub output: PathBuf,
    /// Deployment base path for subdirectory hosting (e.g. "/my-blog").
    ///
    /// Derived from the path of `site.url` when left empty.
    pub base: String,
    /// Remove the output directory before building.
    #[serde(skip)]
    pub clean: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            content: "content".into(),
            output: "dist".into(),
            base: String::new(),
            clean: false,
        }
    }
}
