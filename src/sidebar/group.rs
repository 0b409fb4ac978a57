//! Sidebar group processing.

use super::{filter_groups_by_path, tree::build_tree, TreeNode};
use crate::{
    config::{SidebarConfig, SidebarGroup, SidebarItem},
    content::ContentEntry,
    log,
};
use serde::Serialize;

/// Render-ready form of a configured group.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ProcessedGroup {
    Tree {
        title: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        icon: Option<String>,
        collapsed: bool,
        tree: Vec<TreeNode>,
    },
    Divider {
        title: String,
    },
}

impl ProcessedGroup {
    pub fn title(&self) -> &str {
        match self {
            Self::Tree { title, .. } | Self::Divider { title } => title,
        }
    }

    /// Nodes of a tree group; empty for dividers.
    pub fn tree(&self) -> &[TreeNode] {
        match self {
            Self::Tree { tree, .. } => tree,
            Self::Divider { .. } => &[],
        }
    }
}

/// Convert manual items to nodes, keeping their order.
pub fn manual_items_to_tree(items: &[SidebarItem]) -> Vec<TreeNode> {
    items
        .iter()
        .map(|item| TreeNode {
            name: item.title.clone(),
            slug: item.slug.clone(),
            title: Some(item.title.clone()),
            display_name: Some(item.title.clone()),
            icon: item.icon.clone(),
            badge: item.badge.clone(),
            badge_type: item.badge_type,
            link: item.link.clone(),
            collapsed: item.collapsed,
            children: manual_items_to_tree(&item.children),
            is_folder: !item.children.is_empty(),
            is_readme: false,
        })
        .collect()
}

/// Process one group; `None` for groups that render nothing.
pub fn process_group(group: &SidebarGroup, entries: &[&ContentEntry]) -> Option<ProcessedGroup> {
    let tree = match group {
        SidebarGroup::Scan(scan) => build_tree(entries, scan),
        SidebarGroup::Manual(manual) => manual_items_to_tree(&manual.items),
        SidebarGroup::Mixed(mixed) => mixed
            .sections
            .iter()
            .filter_map(|section| section_folder(section, entries))
            .collect(),
        SidebarGroup::Divider(divider) => {
            return Some(ProcessedGroup::Divider {
                title: divider.title.clone().unwrap_or_default(),
            });
        }
        SidebarGroup::Unknown => {
            log!("warning"; "sidebar: dropping group with unknown type");
            return None;
        }
    };

    Some(ProcessedGroup::Tree {
        title: group.title().to_string(),
        icon: group.icon().map(String::from),
        collapsed: group.collapsed(),
        tree,
    })
}

/// A mixed-group section wrapped as a folder named after its title.
///
/// Dividers and sections with an empty tree are left out.
fn section_folder(section: &SidebarGroup, entries: &[&ContentEntry]) -> Option<TreeNode> {
    if matches!(section, SidebarGroup::Divider(_)) {
        return None;
    }
    let tree = match process_group(section, entries)? {
        ProcessedGroup::Tree { tree, .. } if !tree.is_empty() => tree,
        _ => return None,
    };
    Some(TreeNode {
        name: section.title().to_string(),
        display_name: Some(section.title().to_string()),
        icon: section.icon().map(String::from),
        collapsed: Some(section.collapsed()),
        children: tree,
        is_folder: true,
        ..TreeNode::default()
    })
}

/// Process the groups of `config` visible at `current_path`.
///
/// Without a path every group is processed. A disabled sidebar is empty.
pub fn process_sidebar(
    config: &SidebarConfig,
    entries: &[&ContentEntry],
    current_path: Option<&str>,
) -> Vec<ProcessedGroup> {
    if !config.enabled {
        return Vec::new();
    }
    let groups: Vec<&SidebarGroup> = match current_path {
        Some(path) => filter_groups_by_path(&config.groups, path),
        None => config.groups.iter().collect(),
    };
    groups
        .into_iter()
        .filter_map(|group| process_group(group, entries))
        .collect()
}
