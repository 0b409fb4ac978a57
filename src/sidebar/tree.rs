//! Navigation tree construction from flat content ids.
//!
//! ```text
//! guides/README        ─┐ title/icon of `guides`
//! guides/intro          ├─▶ guides/ (display_name from README)
//! guides/setup/linux    │     ├─ setup/
//! about                ─┘     │    └─ linux
//!                             └─ intro
//!                        about
//! ```

use super::{
    collate::{compare_natural, compare_text},
    pattern::SegmentPattern,
};
use crate::{
    config::{BadgeType, ScanGroup, SortBy, SortOrder},
    content::ContentEntry,
    i18n::id_under_prefix,
    log,
};
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::cmp::Ordering;

/// One sidebar node, either a folder or a leaf.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeNode {
    /// Path segment, or item title for manual nodes.
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge_type: Option<BadgeType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<bool>,
    pub children: Vec<TreeNode>,
    pub is_folder: bool,
    #[serde(skip)]
    pub is_readme: bool,
}

impl TreeNode {
    /// Label shown in the sidebar.
    pub fn label(&self) -> &str {
        self.display_name
            .as_deref()
            .or(self.title.as_deref())
            .unwrap_or(&self.name)
    }

    fn find_child_mut(&mut self, name: &str) -> Option<&mut TreeNode> {
        find_mut(&mut self.children, name)
    }
}

fn find_mut<'a>(nodes: &'a mut [TreeNode], name: &str) -> Option<&'a mut TreeNode> {
    let lower = name.to_lowercase();
    nodes.iter_mut().find(|n| n.name.to_lowercase() == lower)
}

fn is_readme_segment(segment: &str) -> bool {
    let lower = segment.to_lowercase();
    lower == "readme" || lower == "readme.md"
}

/// Title and icon hoisted from README entries, keyed by lowercased folder path.
#[derive(Default)]
struct FolderMeta {
    titles: FxHashMap<String, String>,
    icons: FxHashMap<String, String>,
}

impl FolderMeta {
    fn collect(entries: &[&ContentEntry]) -> Self {
        let mut meta = Self::default();
        for entry in entries {
            let Some((folder, file)) = entry.id.rsplit_once('/') else {
                continue;
            };
            if folder.is_empty() || !is_readme_segment(file) {
                continue;
            }
            let key = folder.to_lowercase();
            if let Some(title) = &entry.meta.title {
                meta.titles.insert(key.clone(), title.clone());
            }
            if let Some(icon) = &entry.meta.icon {
                meta.icons.insert(key, icon.clone());
            }
        }
        meta
    }

    fn apply(&self, node: &mut TreeNode, folder_path: &str) {
        let key = folder_path.to_lowercase();
        if let Some(title) = self.titles.get(&key) {
            node.display_name = Some(title.clone());
        }
        if let Some(icon) = self.icons.get(&key) {
            node.icon = Some(icon.clone());
        }
    }
}

/// Entries of a scan group after scan path, exclude and include filters.
fn filter_entries<'a>(entries: &[&'a ContentEntry], scan: &ScanGroup) -> Vec<&'a ContentEntry> {
    let exclude = SegmentPattern::compile(&scan.exclude);
    let include = SegmentPattern::compile(&scan.include);

    entries
        .iter()
        .copied()
        .filter(|entry| scan.scan_path.is_empty() || id_under_prefix(&entry.id, &scan.scan_path))
        .filter(|entry| {
            !entry
                .id
                .split('/')
                .any(|seg| exclude.iter().any(|p| p.matches(seg)))
        })
        .filter(|entry| {
            include.is_empty()
                || entry
                    .id
                    .split('/')
                    .any(|seg| include.iter().any(|p| p.matches(seg)))
        })
        .collect()
}

/// Id relative to `scan_path`; an id equal to it keeps only its last segment.
fn relative_id<'a>(id: &'a str, scan_path: &str) -> &'a str {
    if scan_path.is_empty() {
        return id;
    }
    let last = || id.rsplit('/').next().unwrap_or(id);
    if id.len() > scan_path.len() && id_under_prefix(id, scan_path) {
        id.get(scan_path.len() + 1..).unwrap_or_else(last)
    } else {
        last()
    }
}

/// Build the sorted tree of a scan group.
pub fn build_tree(entries: &[&ContentEntry], scan: &ScanGroup) -> Vec<TreeNode> {
    let filtered = filter_entries(entries, scan);
    let folders = FolderMeta::collect(&filtered);

    let mut root = TreeNode::default();
    for entry in filtered {
        let relative = relative_id(&entry.id, &scan.scan_path);
        let parts: Vec<&str> = relative.split('/').collect();
        if scan.max_depth.is_some_and(|max| parts.len() > max) {
            continue;
        }
        insert(&mut root, entry, &parts, &scan.scan_path, &folders);
    }

    sort_nodes(root.children, scan.sort_by, scan.sort_order)
}

/// Insert one entry, creating folders along its path.
///
/// A leaf and a folder with the same name never merge: the later entry is
/// skipped with a warning.
fn insert(
    root: &mut TreeNode,
    entry: &ContentEntry,
    parts: &[&str],
    scan_path: &str,
    folders: &FolderMeta,
) {
    let Some((leaf, dirs)) = parts.split_last() else {
        return;
    };

    let mut current = root;
    let mut folder_path = scan_path.to_string();
    for dir in dirs {
        if folder_path.is_empty() {
            folder_path.push_str(dir);
        } else {
            folder_path.push('/');
            folder_path.push_str(dir);
        }

        if current.find_child_mut(dir).is_some_and(|n| !n.is_folder) {
            log!("warning"; "sidebar: `{}` is both a page and a folder, skipping it", entry.id);
            return;
        }
        if current.find_child_mut(dir).is_none() {
            current.children.push(TreeNode {
                name: (*dir).to_string(),
                slug: Some(folder_path.to_lowercase()),
                is_folder: true,
                ..TreeNode::default()
            });
        }
        let Some(node) = current.find_child_mut(dir) else {
            return;
        };
        folders.apply(node, &folder_path);
        current = node;
    }

    let is_readme = is_readme_segment(leaf);
    match current.find_child_mut(leaf) {
        Some(existing) if existing.is_folder => {
            log!("warning"; "sidebar: `{}` is both a page and a folder, skipping it", entry.id);
        }
        Some(existing) => {
            // Duplicate leaf: last write wins, the first display name stays
            existing.slug = Some(entry.id.clone());
            existing.title.clone_from(&entry.meta.title);
            existing.icon.clone_from(&entry.meta.icon);
            existing.is_readme = is_readme;
        }
        None => current.children.push(TreeNode {
            name: (*leaf).to_string(),
            slug: Some(entry.id.clone()),
            title: entry.meta.title.clone(),
            display_name: entry.meta.title.clone(),
            icon: entry.meta.icon.clone(),
            is_readme,
            ..TreeNode::default()
        }),
    }
}

/// Sort every level and drop README nodes.
fn sort_nodes(nodes: Vec<TreeNode>, sort_by: SortBy, order: SortOrder) -> Vec<TreeNode> {
    let mut nodes: Vec<TreeNode> = nodes
        .into_iter()
        .filter(|n| !n.is_readme)
        .map(|mut n| {
            n.children = sort_nodes(std::mem::take(&mut n.children), sort_by, order);
            n
        })
        .collect();

    nodes.sort_by(|a, b| {
        // Folders first, regardless of direction
        b.is_folder.cmp(&a.is_folder).then_with(|| {
            let ord = compare_nodes(a, b, sort_by);
            match order {
                SortOrder::Asc => ord,
                SortOrder::Desc => ord.reverse(),
            }
        })
    });
    nodes
}

fn compare_nodes(a: &TreeNode, b: &TreeNode, sort_by: SortBy) -> Ordering {
    match sort_by {
        SortBy::Name => compare_natural(&a.name, &b.name),
        SortBy::Title => compare_text(a.label(), b.label()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::EntryMeta;

    fn entry(id: &str, title: Option<&str>) -> ContentEntry {
        let meta = EntryMeta {
            title: title.map(String::from),
            ..EntryMeta::default()
        };
        ContentEntry::new(id, meta, "")
    }

    fn build(entries: &[ContentEntry], scan: &ScanGroup) -> Vec<TreeNode> {
        let refs: Vec<&ContentEntry> = entries.iter().collect();
        build_tree(&refs, scan)
    }

    fn names(nodes: &[TreeNode]) -> Vec<&str> {
        nodes.iter().map(|n| n.name.as_str()).collect()
    }

    fn contains_name(nodes: &[TreeNode], pred: &dyn Fn(&str) -> bool) -> bool {
        nodes
            .iter()
            .any(|n| pred(&n.name) || contains_name(&n.children, pred))
    }

    #[test]
    fn test_readme_promotion() {
        let entries = vec![
            entry("a/readme.md", Some("A Folder")),
            entry("a/y", None),
            entry("a/x", None),
            entry("b", None),
        ];
        let tree = build(&entries, &ScanGroup::default());

        assert_eq!(names(&tree), vec!["a", "b"]);
        let a = &tree[0];
        assert!(a.is_folder);
        assert_eq!(a.display_name.as_deref(), Some("A Folder"));
        assert_eq!(a.slug.as_deref(), Some("a"));
        assert_eq!(names(&a.children), vec!["x", "y"]);
        assert!(!tree[1].is_folder);
        assert_eq!(tree[1].slug.as_deref(), Some("b"));

        assert!(!contains_name(&tree, &|n| is_readme_segment(n)));
    }

    #[test]
    fn test_readme_before_folder_exists() {
        let entries = vec![entry("docs/guide/README", Some("Guide")), entry("docs/guide/one", None)];
        let tree = build(&entries, &ScanGroup::default());
        let guide = &tree[0].children[0];
        assert_eq!(guide.display_name.as_deref(), Some("Guide"));
        assert_eq!(names(&guide.children), vec!["one"]);
    }

    #[test]
    fn test_exclude_pattern() {
        let entries = vec![
            entry("posts/Draft-one", None),
            entry("posts/drafts/two", None),
            entry("posts/published", None),
        ];
        let scan = ScanGroup {
            exclude: vec!["draft*".into()],
            ..ScanGroup::default()
        };
        let tree = build(&entries, &scan);
        assert!(!contains_name(&tree, &|n| n.to_lowercase().starts_with("draft")));
        assert_eq!(names(&tree[0].children), vec!["published"]);
    }

    #[test]
    fn test_include_pattern() {
        let entries = vec![entry("rust/a", None), entry("go/b", None), entry("misc/rust", None)];
        let scan = ScanGroup {
            include: vec!["rust".into()],
            ..ScanGroup::default()
        };
        let tree = build(&entries, &scan);
        assert_eq!(names(&tree), vec!["misc", "rust"]);
    }

    #[test]
    fn test_scan_path() {
        let entries = vec![
            entry("Guides/intro", Some("Intro")),
            entry("guides/setup/linux", None),
            entry("guidesx/other", None),
            entry("guides", Some("Top")),
            entry("blog/post", None),
        ];
        let scan = ScanGroup {
            scan_path: "guides".into(),
            ..ScanGroup::default()
        };
        let tree = build(&entries, &scan);

        assert_eq!(names(&tree), vec!["setup", "guides", "intro"]);
        assert_eq!(tree[0].slug.as_deref(), Some("guides/setup"));
        assert_eq!(tree[2].slug.as_deref(), Some("Guides/intro"));
        assert_eq!(tree[2].display_name.as_deref(), Some("Intro"));
    }

    #[test]
    fn test_unmatched_scan_path_is_empty() {
        let entries = vec![entry("a/b", None)];
        let scan = ScanGroup {
            scan_path: "nope".into(),
            ..ScanGroup::default()
        };
        assert!(build(&entries, &scan).is_empty());
    }

    #[test]
    fn test_max_depth() {
        let entries = vec![entry("a", None), entry("b/c", None), entry("d/e/f", None)];
        let scan = ScanGroup {
            max_depth: Some(2),
            ..ScanGroup::default()
        };
        let tree = build(&entries, &scan);
        assert_eq!(names(&tree), vec!["b", "a"]);
    }

    #[test]
    fn test_case_insensitive_merge() {
        let entries = vec![entry("Docs/a", None), entry("docs/b", None)];
        let tree = build(&entries, &ScanGroup::default());
        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].name, "Docs");
        assert_eq!(tree[0].children.len(), 2);
    }

    #[test]
    fn test_leaf_folder_collision_skipped() {
        let entries = vec![entry("a", Some("Leaf")), entry("a/child", None), entry("b/x", None), entry("B", None)];
        let tree = build(&entries, &ScanGroup::default());

        assert_eq!(names(&tree), vec!["b", "a"]);
        assert!(!tree[1].is_folder);
        assert_eq!(tree[1].title.as_deref(), Some("Leaf"));
        assert!(tree[1].children.is_empty());
        assert_eq!(names(&tree[0].children), vec!["x"]);
    }

    #[test]
    fn test_duplicate_leaf_last_wins() {
        let entries = vec![entry("Note", Some("First")), entry("note", Some("Second"))];
        let tree = build(&entries, &ScanGroup::default());
        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].title.as_deref(), Some("Second"));
        assert_eq!(tree[0].slug.as_deref(), Some("note"));
        assert_eq!(tree[0].display_name.as_deref(), Some("First"));
        assert_eq!(tree[0].name, "Note");
    }

    #[test]
    fn test_sort_folders_first_and_desc() {
        let entries = vec![
            entry("2-b", None),
            entry("10-c", None),
            entry("z/inner", None),
            entry("1-a", None),
        ];
        let tree = build(&entries, &ScanGroup::default());
        assert_eq!(names(&tree), vec!["z", "1-a", "2-b", "10-c"]);

        let scan = ScanGroup {
            sort_order: SortOrder::Desc,
            ..ScanGroup::default()
        };
        let tree = build(&entries, &scan);
        assert_eq!(names(&tree), vec!["z", "10-c", "2-b", "1-a"]);
    }

    #[test]
    fn test_sort_by_title() {
        let entries = vec![
            entry("a", Some("Zebra")),
            entry("b", Some("apple")),
            entry("c", None),
        ];
        let scan = ScanGroup {
            sort_by: SortBy::Title,
            ..ScanGroup::default()
        };
        let tree = build(&entries, &scan);
        assert_eq!(names(&tree), vec!["b", "c", "a"]);
    }
}
