//! Content directory scanning.

use super::{ContentEntry, frontmatter::{FrontmatterError, MetaExtractor}};
use crate::debug;
use jwalk::WalkDir;
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Markdown extensions recognised as content.
const CONTENT_EXTENSIONS: &[&str] = &["md", "mdx"];

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content directory not found: {0}")]
    MissingDir(PathBuf),
    #[error("failed to read {0}")]
    Io(PathBuf, #[source] io::Error),
    #[error("failed to walk content directory")]
    Walk(#[from] jwalk::Error),
    #[error("{path}: {source}")]
    Frontmatter {
        path: PathBuf,
        #[source]
        source: FrontmatterError,
    },
}

/// Load every Markdown file under `dir`, sorted by id.
pub fn scan_content(dir: &Path) -> Result<Vec<ContentEntry>, ContentError> {
    if !dir.is_dir() {
        return Err(ContentError::MissingDir(dir.to_path_buf()));
    }

    let mut entries = Vec::new();
    for item in WalkDir::new(dir).skip_hidden(true) {
        let item = item?;
        if !item.file_type().is_file() {
            continue;
        }
        let path = item.path();
        let Some(id) = entry_id(dir, &path) else {
            continue;
        };
        entries.push(load_entry(id, &path)?);
    }

    entries.sort_by(|a, b| a.id.cmp(&b.id));
    debug!("content"; "loaded {} entries from {}", entries.len(), dir.display());
    Ok(entries)
}

fn load_entry(id: String, path: &Path) -> Result<ContentEntry, ContentError> {
    let content =
        fs::read_to_string(path).map_err(|err| ContentError::Io(path.to_path_buf(), err))?;
    let (meta, body) =
        MetaExtractor
            .extract(&content)
            .map_err(|source| ContentError::Frontmatter {
                path: path.to_path_buf(),
                source,
            })?;
    Ok(ContentEntry::new(id, meta, body))
}

/// `posts/Hello.md` → `posts/Hello`; `None` for non-content files.
fn entry_id(root: &Path, path: &Path) -> Option<String> {
    let ext = path.extension()?.to_str()?;
    if !CONTENT_EXTENSIONS.iter().any(|e| e.eq_ignore_ascii_case(ext)) {
        return None;
    }
    let relative = path.strip_prefix(root).ok()?.with_extension("");
    let segments: Vec<_> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect();
    Some(segments.join("/"))
}
