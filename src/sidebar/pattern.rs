//! Segment patterns for scan filters and path globs for group visibility.

use crate::config::SidebarGroup;
use regex::Regex;

/// Compiled `exclude`/`include` pattern, matched against one id segment.
///
/// - `*` matches every segment
/// - a pattern containing `*` is a case-insensitive anchored glob
/// - anything else is case-insensitive equality
#[derive(Debug, Clone)]
pub enum SegmentPattern {
    Any,
    Glob(Regex),
    Exact(String),
}

impl SegmentPattern {
    pub fn new(pattern: &str) -> Self {
        if pattern == "*" {
            return Self::Any;
        }
        if pattern.contains('*') {
            let body = pattern
                .split('*')
                .map(regex::escape)
                .collect::<Vec<_>>()
                .join(".*");
            if let Ok(re) = Regex::new(&format!("(?i)^{body}$")) {
                return Self::Glob(re);
            }
        }
        Self::Exact(pattern.to_lowercase())
    }

    pub fn compile(patterns: &[String]) -> Vec<Self> {
        patterns.iter().map(|p| Self::new(p)).collect()
    }

    pub fn matches(&self, segment: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Glob(re) => re.is_match(segment),
            Self::Exact(lower) => segment.to_lowercase() == *lower,
        }
    }
}

/// One-shot form of [`SegmentPattern::matches`].
pub fn match_pattern(segment: &str, pattern: &str) -> bool {
    SegmentPattern::new(pattern).matches(segment)
}

/// Match a page path against a visibility glob.
///
/// - `/posts/tech/**` matches `/posts/tech` and everything below it
/// - `/posts/tech/*` matches `/posts/tech` and its direct children
/// - anything else must match exactly
///
/// Comparison ignores case and a trailing slash.
pub fn match_path_pattern(path: &str, pattern: &str) -> bool {
    let path = path.strip_suffix('/').unwrap_or(path).to_lowercase();
    let pattern = pattern.strip_suffix('/').unwrap_or(pattern).to_lowercase();

    if let Some(base) = pattern.strip_suffix("/**") {
        return path == base || is_below(&path, base);
    }

    if let Some(base) = pattern.strip_suffix("/*") {
        return path == base
            || path
                .strip_prefix(base)
                .and_then(|rest| rest.strip_prefix('/'))
                .is_some_and(|rest| !rest.contains('/'));
    }

    path == pattern
}

fn is_below(path: &str, base: &str) -> bool {
    path.strip_prefix(base)
        .is_some_and(|rest| rest.starts_with('/'))
}

/// Hide rules win; a non-empty show list requires a match.
pub fn should_show_group(group: &SidebarGroup, path: &str) -> bool {
    let (show, hide) = group.path_rules();

    if hide.iter().any(|p| match_path_pattern(path, p)) {
        return false;
    }
    show.is_empty() || show.iter().any(|p| match_path_pattern(path, p))
}

/// Groups visible at `path`, in configuration order.
pub fn filter_groups_by_path<'a>(groups: &'a [SidebarGroup], path: &str) -> Vec<&'a SidebarGroup> {
    groups.iter().filter(|g| should_show_group(g, path)).collect()
}
