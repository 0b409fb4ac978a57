//! `[site]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "My Blog"
//! description = "A personal blog"
//! author = "Alice"
//! url = "https://example.com"
//!
//! [site.social]
//! github = "https://github.com/alice"
//!
//! [site.layout]
//! content_width = "wide"
//!
//! [[site.menu]]
//! name = "Home"
//! href = "/"
//! icon = "home"
//!
//! [site.extra]
//! analytics = { provider = "plausible" }
//! ```

use crate::config::merge::{Merge, merge_tables, pick};
use serde::{Deserialize, Serialize};

/// Site metadata shared by every locale unless overridden.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfoConfig {
    /// Site title.
    pub title: String,
    /// Site description.
    pub description: String,
    /// Author name.
    pub author: String,
    /// Author email.
    pub email: String,
    /// Avatar image path.
    pub avatar: String,
    /// Absolute site URL (e.g., "https://example.com/blog"). Required for RSS.
    pub url: Option<String>,
    pub social: SocialConfig,
    /// Top navigation menu.
    pub menu: Vec<MenuItem>,
    pub layout: LayoutConfig,
    /// Free-form values passed through to templates.
    pub extra: toml::Table,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            title: "My Blog".into(),
            description: String::new(),
            author: "Author".into(),
            email: String::new(),
            avatar: String::new(),
            url: None,
            social: SocialConfig::default(),
            menu: MenuItem::defaults(),
            layout: LayoutConfig::default(),
            extra: toml::Table::new(),
        }
    }
}

/// Social profile links.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialConfig {
    pub github: String,
    pub twitter: String,
    pub linkedin: String,
    pub email: String,
}

/// Navigation menu entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MenuItem>,
}

impl MenuItem {
    fn new(name: &str, href: &str, icon: &str) -> Self {
        Self {
            name: name.into(),
            href: href.into(),
            icon: Some(icon.into()),
            children: Vec::new(),
        }
    }

    fn defaults() -> Vec<Self> {
        vec![
            Self::new("Home", "/", "home"),
            Self::new("Blog", "/posts", "posts"),
            Self::new("About", "/about", "about"),
        ]
    }
}

/// Page layout settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// `narrow` (768px), `normal` (1024px), `wide` (1280px), `full` (100%),
    /// or any CSS width such as `900px`.
    pub content_width: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            content_width: "normal".into(),
        }
    }
}

impl LayoutConfig {
    /// Resolve the named widths to CSS values; custom values pass through.
    pub fn css_width(&self) -> &str {
        match self.content_width.as_str() {
            "narrow" => "768px",
            "normal" => "1024px",
            "wide" => "1280px",
            "full" => "100%",
            custom => custom,
        }
    }
}

// ============================================================================
// patches
// ============================================================================

/// Locale override for `[site]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SitePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub author: Option<String>,
    pub email: Option<String>,
    pub avatar: Option<String>,
    pub url: Option<String>,
    pub social: Option<SocialPatch>,
    pub menu: Option<Vec<MenuItem>>,
    pub layout: Option<LayoutPatch>,
    pub extra: Option<toml::Table>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialPatch {
    pub github: Option<String>,
    pub twitter: Option<String>,
    pub linkedin: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutPatch {
    pub content_width: Option<String>,
}

impl Merge for SiteInfoConfig {
    type Patch = SitePatch;

    fn merged(&self, patch: &SitePatch) -> Self {
        Self {
            title: pick(&self.title, patch.title.as_ref()),
            description: pick(&self.description, patch.description.as_ref()),
            author: pick(&self.author, patch.author.as_ref()),
            email: pick(&self.email, patch.email.as_ref()),
            avatar: pick(&self.avatar, patch.avatar.as_ref()),
            url: patch.url.clone().or_else(|| self.url.clone()),
            social: self.social.merged_opt(patch.social.as_ref()),
            menu: pick(&self.menu, patch.menu.as_ref()),
            layout: self.layout.merged_opt(patch.layout.as_ref()),
            extra: match &patch.extra {
                Some(extra) => merge_tables(&self.extra, extra),
                None => self.extra.clone(),
            },
        }
    }
}

impl Merge for SocialConfig {
    type Patch = SocialPatch;

    fn merged(&self, patch: &SocialPatch) -> Self {
        Self {
            github: pick(&self.github, patch.github.as_ref()),
            twitter: pick(&self.twitter, patch.twitter.as_ref()),
            linkedin: pick(&self.linkedin, patch.linkedin.as_ref()),
            email: pick(&self.email, patch.email.as_ref()),
        }
    }
}

impl Merge for LayoutConfig {
    type Patch = LayoutPatch;

    fn merged(&self, patch: &LayoutPatch) -> Self {
        Self {
            content_width: pick(&self.content_width, patch.content_width.as_ref()),
        }
    }
}
