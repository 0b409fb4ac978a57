//! `[sidebar]` section configuration.
//!
//! Groups are tagged by `type`:
//!
//! ```toml
//! [sidebar]
//! enabled = true
//!
//! [[sidebar.groups]]
//! type = "scan"
//! title = "Guides"
//! scan_path = "guides"
//! exclude = ["draft*"]
//! sort_by = "title"
//! hide_for_paths = ["/slides/**"]
//!
//! [[sidebar.groups]]
//! type = "divider"
//! title = "More"
//!
//! [[sidebar.groups]]
//! type = "manual"
//! title = "Links"
//! items = [{ title = "GitHub", link = "https://github.com" }]
//!
//! [[sidebar.groups]]
//! type = "mixed"
//! title = "Docs"
//! sections = [
//!     { type = "scan", title = "API", scan_path = "docs/api" },
//!     { type = "manual", title = "Extra", items = [{ title = "FAQ", slug = "faq" }] },
//! ]
//! ```

use crate::config::merge::{Merge, pick};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SidebarConfig {
    /// Render the sidebar at all.
    pub enabled: bool,
    pub groups: Vec<SidebarGroup>,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            groups: vec![SidebarGroup::Scan(ScanGroup {
                title: "Posts".into(),
                ..ScanGroup::default()
            })],
        }
    }
}

/// One configured sidebar section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SidebarGroup {
    /// Tree built by scanning content entries.
    Scan(ScanGroup),
    /// Explicit item list.
    Manual(ManualGroup),
    /// Named sub-groups, each rendered as a folder.
    Mixed(MixedGroup),
    /// Label-only separator.
    Divider(DividerGroup),
    /// Any `type` this version does not know.
    #[serde(other)]
    Unknown,
}

impl SidebarGroup {
    pub fn title(&self) -> &str {
        match self {
            Self::Scan(g) => &g.title,
            Self::Manual(g) => &g.title,
            Self::Mixed(g) => &g.title,
            Self::Divider(g) => g.title.as_deref().unwrap_or_default(),
            Self::Unknown => "",
        }
    }

    pub fn icon(&self) -> Option<&str> {
        match self {
            Self::Scan(g) => g.icon.as_deref(),
            Self::Manual(g) => g.icon.as_deref(),
            Self::Mixed(g) => g.icon.as_deref(),
            Self::Divider(_) | Self::Unknown => None,
        }
    }

    pub fn collapsed(&self) -> bool {
        match self {
            Self::Scan(g) => g.collapsed,
            Self::Manual(g) => g.collapsed,
            Self::Mixed(g) => g.collapsed,
            Self::Divider(_) | Self::Unknown => false,
        }
    }

    /// `(show_for_paths, hide_for_paths)`.
    pub fn path_rules(&self) -> (&[String], &[String]) {
        match self {
            Self::Scan(g) => (&g.show_for_paths, &g.hide_for_paths),
            Self::Manual(g) => (&g.show_for_paths, &g.hide_for_paths),
            Self::Mixed(g) => (&g.show_for_paths, &g.hide_for_paths),
            Self::Divider(g) => (&g.show_for_paths, &g.hide_for_paths),
            Self::Unknown => (&[], &[]),
        }
    }
}

/// `type = "scan"`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanGroup {
    pub title: String,
    pub icon: Option<String>,
    pub collapsed: bool,
    /// Content id prefix to scan; empty scans everything.
    pub scan_path: String,
    /// Skip entries nested deeper than this many segments below `scan_path`.
    pub max_depth: Option<usize>,
    /// Segment patterns to drop (`*` wildcard).
    pub exclude: Vec<String>,
    /// Segment patterns of which at least one must match.
    pub include: Vec<String>,
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
    pub show_for_paths: Vec<String>,
    pub hide_for_paths: Vec<String>,
}

/// `type = "manual"`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManualGroup {
    pub title: String,
    pub icon: Option<String>,
    pub collapsed: bool,
    pub items: Vec<SidebarItem>,
    pub show_for_paths: Vec<String>,
    pub hide_for_paths: Vec<String>,
}

/// `type = "mixed"`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MixedGroup {
    pub title: String,
    pub icon: Option<String>,
    pub collapsed: bool,
    pub sections: Vec<SidebarGroup>,
    pub show_for_paths: Vec<String>,
    pub hide_for_paths: Vec<String>,
}

/// `type = "divider"`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DividerGroup {
    pub title: Option<String>,
    pub show_for_paths: Vec<String>,
    pub hide_for_paths: Vec<String>,
}

/// Entry of a manual group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SidebarItem {
    pub title: String,
    /// Content id this item points at.
    pub slug: Option<String>,
    /// External or absolute link, used instead of `slug`.
    pub link: Option<String>,
    pub icon: Option<String>,
    pub badge: Option<String>,
    pub badge_type: Option<BadgeType>,
    pub collapsed: Option<bool>,
    pub children: Vec<SidebarItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeType {
    Info,
    Success,
    Warning,
    Error,
}

/// Sort key for scanned trees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// Natural order on the path segment.
    #[default]
    #[serde(alias = "date", alias = "custom")]
    Name,
    /// Display title, then title, then segment.
    Title,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Locale override for `[sidebar]`.
///
/// Fields override shallowly; omitted `groups` keep the base groups.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SidebarPatch {
    pub enabled: Option<bool>,
    pub groups: Option<Vec<SidebarGroup>>,
}

impl Merge for SidebarConfig {
    type Patch = SidebarPatch;

    fn merged(&self, patch: &SidebarPatch) -> Self {
        Self {
            enabled: pick(&self.enabled, patch.enabled.as_ref()),
            groups: pick(&self.groups, patch.groups.as_ref()),
        }
    }
}
