//! `[widgets]` section configuration.
//!
//! Sizes of the side widgets written to `widgets.json`.
//!
//! ```toml
//! [widgets]
//! recent_posts = 5
//! popular_tags = 8
//! archives = 6
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetsConfig {
    pub recent_posts: usize,
    pub popular_tags: usize,
    pub archives: usize,
}

impl Default for WidgetsConfig {
    fn default() -> Self {
        Self {
            recent_posts: 5,
            popular_tags: 8,
            archives: 6,
        }
    }
}
