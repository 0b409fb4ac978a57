//! Sidebar navigation built from configuration and content entries.
//!
//! Scan groups run filter → README promotion → trie → sort; manual groups
//! map their items directly; mixed groups nest each section as a folder.
//! Visibility per page comes from `show_for_paths` / `hide_for_paths`.

mod collate;
mod group;
mod pattern;
mod tree;

pub use group::{ProcessedGroup, manual_items_to_tree, process_group, process_sidebar};
pub use pattern::{
    SegmentPattern, filter_groups_by_path, match_path_pattern, match_pattern, should_show_group,
};
pub use tree::{TreeNode, build_tree};
