//! `[footer]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [footer]
//! copyright = "© 2024 Alice"
//! show_powered_by = false
//!
//! [[footer.links]]
//! name = "Privacy"
//! href = "/privacy"
//! ```

use crate::config::merge::{Merge, pick};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterConfig {
    /// Copyright line; empty hides it.
    pub copyright: String,
    /// Show the "powered by" credit.
    pub show_powered_by: bool,
    /// Render social links from `[site.social]`.
    pub show_social: bool,
    pub links: Vec<FooterLink>,
}

impl Default for FooterConfig {
    fn default() -> Self {
        Self {
            copyright: String::new(),
            show_powered_by: true,
            show_social: true,
            links: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FooterLink {
    pub name: String,
    pub href: String,
}

/// Locale override for `[footer]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterPatch {
    pub copyright: Option<String>,
    pub show_powered_by: Option<bool>,
    pub show_social: Option<bool>,
    pub links: Option<Vec<FooterLink>>,
}

impl Merge for FooterConfig {
    type Patch = FooterPatch;

    fn merged(&self, patch: &FooterPatch) -> Self {
        Self {
            copyright: pick(&self.copyright, patch.copyright.as_ref()),
            show_powered_by: pick(&self.show_powered_by, patch.show_powered_by.as_ref()),
            show_social: pick(&self.show_social, patch.show_social.as_ref()),
            links: pick(&self.links, patch.links.as_ref()),
        }
    }
}
