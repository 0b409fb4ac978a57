//! `[routes]` section configuration.
//!
//! Every route family is enabled unless switched off:
//!
//! ```toml
//! [routes]
//! slides = false
//! rss = true
//! ```
//!
//! The catch-all content route is always injected and has no toggle.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutesConfig {
    pub posts: bool,
    pub tags: bool,
    pub categories: bool,
    pub archives: bool,
    pub slides: bool,
    pub search: bool,
    pub rss: bool,
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            posts: true,
            tags: true,
            categories: true,
            archives: true,
            slides: true,
            search: true,
            rss: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.routes, RoutesConfig::default());
        assert!(config.routes.rss);
    }

    #[test]
    fn test_partial_override() {
        let config = test_parse_config("[routes]\nslides = false\n");
        assert!(!config.routes.slides);
        assert!(config.routes.posts);
    }
}
