//! Aggregations behind the sidebar widgets and taxonomy pages.

use super::ContentEntry;
use rustc_hash::FxHashMap;
use regex::Regex;
use serde::Serialize;
use std::{cmp::Reverse, sync::LazyLock};

/// Tag or category with its usage count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermCount {
    pub name: String,
    pub count: usize,
    pub slug: String,
}

/// Number of entries published in one month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ArchiveBucket {
    pub year: u16,
    pub month: u8,
    pub count: usize,
}

/// Which frontmatter list a taxonomy is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Taxonomy {
    Tags,
    Categories,
}

impl Taxonomy {
    fn terms(self, entry: &ContentEntry) -> &[String] {
        match self {
            Self::Tags => &entry.meta.tags,
            Self::Categories => &entry.meta.categories,
        }
    }
}

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// URL slug of a term: lowercase, each whitespace run replaced by `-`.
///
/// Edge whitespace is kept as `-`, so `" Rust"` and `"Rust"` differ.
pub fn term_slug(name: &str) -> String {
    WHITESPACE.replace_all(&name.to_lowercase(), "-").into_owned()
}

/// Dated entries, newest first.
pub fn recent_posts(entries: &[ContentEntry], count: usize) -> Vec<&ContentEntry> {
    let mut dated: Vec<_> = entries.iter().filter(|e| e.meta.pub_date.is_some()).collect();
    dated.sort_by_key(|e| Reverse(e.date_or_epoch()));
    dated.truncate(count);
    dated
}

/// Most used terms of `taxonomy`, by count then first appearance.
pub fn taxonomy(entries: &[ContentEntry], taxonomy: Taxonomy) -> Vec<TermCount> {
    let mut order: Vec<&str> = Vec::new();
    let mut counts: FxHashMap<&str, usize> = FxHashMap::default();

    for entry in entries {
        for term in taxonomy.terms(entry) {
            let count = counts.entry(term.as_str()).or_insert_with(|| {
                order.push(term.as_str());
                0
            });
            *count += 1;
        }
    }

    let mut terms: Vec<_> = order
        .into_iter()
        .map(|name| TermCount {
            name: name.to_string(),
            count: counts[name],
            slug: term_slug(name),
        })
        .collect();
    // Stable: ties keep first-seen order
    terms.sort_by_key(|t| Reverse(t.count));
    terms
}

/// Top `count` tags.
pub fn popular_tags(entries: &[ContentEntry], count: usize) -> Vec<TermCount> {
    let mut tags = taxonomy(entries, Taxonomy::Tags);
    tags.truncate(count);
    tags
}

/// Month buckets of dated entries, newest first.
pub fn archives(entries: &[ContentEntry], count: usize) -> Vec<ArchiveBucket> {
    let mut buckets: FxHashMap<(u16, u8), usize> = FxHashMap::default();
    for date in entries.iter().filter_map(|e| e.meta.pub_date) {
        *buckets.entry((date.year, date.month)).or_default() += 1;
    }

    let mut archives: Vec<_> = buckets
        .into_iter()
        .map(|((year, month), count)| ArchiveBucket { year, month, count })
        .collect();
    archives.sort_by_key(|a| Reverse((a.year, a.month)));
    archives.truncate(count);
    archives
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::EntryMeta;
    use crate::utils::date::DateTimeUtc;

    fn entry(id: &str, date: Option<(u16, u8, u8)>, tags: &[&str]) -> ContentEntry {
        let meta = EntryMeta {
            pub_date: date.map(|(y, m, d)| DateTimeUtc::from_ymd(y, m, d)),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            categories: vec!["Notes".into()],
            ..EntryMeta::default()
        };
        ContentEntry::new(id, meta, "")
    }

    fn sample() -> Vec<ContentEntry> {
        vec![
            entry("a", Some((2024, 1, 15)), &["Rust", "Web Dev"]),
            entry("b", Some((2024, 3, 1)), &["Rust"]),
            entry("c", None, &["Astro", "Web Dev", "Rust"]),
            entry("d", Some((2023, 12, 31)), &[]),
            entry("e", Some((2024, 1, 2)), &["Astro"]),
        ]
    }

    #[test]
    fn test_recent_posts() {
        let entries = sample();
        let recent: Vec<_> = recent_posts(&entries, 3).iter().map(|e| e.id.as_str()).collect();
        assert_eq!(recent, vec!["b", "a", "e"]);
        assert_eq!(recent_posts(&entries, 10).len(), 4);
    }

    #[test]
    fn test_popular_tags() {
        let entries = sample();
        let tags = popular_tags(&entries, 2);
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0].name, "Rust");
        assert_eq!(tags[0].count, 3);
        assert_eq!(tags[0].slug, "rust");
        assert_eq!(tags[1].name, "Web Dev");
        assert_eq!(tags[1].slug, "web-dev");
    }

    #[test]
    fn test_categories() {
        let entries = sample();
        let categories = taxonomy(&entries, Taxonomy::Categories);
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].count, 5);
    }

    #[test]
    fn test_archives() {
        let entries = sample();
        let buckets = archives(&entries, 6);
        assert_eq!(
            buckets,
            vec![
                ArchiveBucket { year: 2024, month: 3, count: 1 },
                ArchiveBucket { year: 2024, month: 1, count: 2 },
                ArchiveBucket { year: 2023, month: 12, count: 1 },
            ]
        );
        assert_eq!(archives(&entries, 1).len(), 1);
    }

    #[test]
    fn test_term_slug() {
        assert_eq!(term_slug("Web  Dev\tTools"), "web-dev-tools");
        assert_eq!(term_slug("rust"), "rust");
        assert_eq!(term_slug(" Web Dev "), "-web-dev-");
    }
}
