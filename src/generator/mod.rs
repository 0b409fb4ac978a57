//! Build-time data generators.
//!
//! - **RSS**: per-locale feed (`rss.xml`)
//! - **Search**: per-locale plain-text index (`search-index.json`)
//!
//! Both read the scanned content entries and the loaded `SiteConfig`;
//! neither touches the host's rendered pages.

pub mod rss;
pub mod search;

use anyhow::{Context, Result};
use serde::Serialize;
use std::{fs, path::Path};

/// Serialize `value` as JSON into `path`, creating parent directories.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))
}
