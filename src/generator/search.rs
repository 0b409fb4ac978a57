//! Client-side search index.
//!
//! Each locale gets a `search-index.json` array with one record per
//! non-draft entry. `content` is the Markdown body reduced to plain text.

use crate::{
    config::SiteConfig,
    content::ContentEntry,
    i18n::{filter_by_locale, locale_prefix},
    log,
};
use anyhow::{Context, Result};
use regex::Regex;
use serde::Serialize;
use std::{fs, path::Path, sync::LazyLock};

/// One searchable record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchEntry {
    pub title: String,
    pub description: String,
    /// Site-relative URL including base and locale prefix.
    pub url: String,
    pub content: String,
    pub tags: Vec<String>,
    pub categories: Vec<String>,
}

/// Strip rules in application order: `(pattern, replacement)`.
static STRIP_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        // fenced code
        (r"```[\s\S]*?```", ""),
        // inline code
        (r"`[^`]*`", ""),
        // html tags
        (r"<[^>]*>", ""),
        // images
        (r"!\[.*?\]\(.*?\)", ""),
        // links keep their text
        (r"\[([^\]]*)\]\([^)]*\)", "${1}"),
        (r"(?m)^#{1,6}\s+", ""),
        (r"\*\*([^*]*)\*\*", "${1}"),
        (r"\*([^*]*)\*", "${1}"),
        (r"__([^_]*)__", "${1}"),
        (r"_([^_]*)_", "${1}"),
        // blockquotes
        (r"(?m)^>\s+", ""),
        // list markers
        (r"(?m)^[\s]*[-*+]\s+", ""),
        (r"(?m)^[\s]*\d+\.\s+", ""),
        // horizontal rules
        (r"(?m)^[-*_]{3,}$", ""),
        (r"\n{3,}", "\n\n"),
    ]
    .into_iter()
    .map(|(pattern, rep)| (Regex::new(pattern).unwrap(), rep))
    .collect()
});

/// Reduce Markdown to plain text for indexing.
pub fn extract_plain_text(markdown: &str) -> String {
    // line-anchored rules expect bare `\n` endings
    let mut text = markdown.replace("\r\n", "\n");
    for (re, rep) in STRIP_RULES.iter() {
        if re.is_match(&text) {
            text = re.replace_all(&text, *rep).into_owned();
        }
    }
    text.trim().to_string()
}

/// Build the index records of `locale`, in entry order.
pub fn build_search_index(
    config: &SiteConfig,
    locale: &str,
    entries: &[ContentEntry],
) -> Vec<SearchEntry> {
    let posts_url = format!(
        "{}/posts",
        locale_prefix(locale, &config.i18n, Some(config.base()))
    );

    filter_by_locale(entries, locale, &config.i18n, |e| e.id.as_str())
        .into_iter()
        .filter(|e| !e.is_draft())
        .map(|entry| SearchEntry {
            title: entry.title().to_string(),
            description: entry.description().to_string(),
            url: format!("{posts_url}/{}", entry.id.to_lowercase()),
            content: extract_plain_text(&entry.body),
            tags: entry.meta.tags.clone(),
            categories: entry.meta.categories.clone(),
        })
        .collect()
}

/// Build the index of `locale` and write it as JSON to `path`.
pub fn write_search_index(
    config: &SiteConfig,
    locale: &str,
    entries: &[ContentEntry],
    path: &Path,
) -> Result<()> {
    let index = build_search_index(config, locale, entries);
    let json = serde_json::to_string(&index)?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;

    log!("search"; "{} ({} entries, {})", path.display(), index.len(), locale);
    Ok(())
}
