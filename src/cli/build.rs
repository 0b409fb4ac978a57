//! Build command orchestration.
//!
//! Build phases:
//! - **Clean** - Remove the output directory when `--clean` is set
//! - **Scan** - Load Markdown entries from the content directory
//! - **Routes** - Write `routes.json` at the output root
//! - **Locales** - Per locale, under `output/{locale prefix}`:
//!   `config.json`, `sidebar.json`, `widgets.json`, `rss.xml`,
//!   `search-index.json`
//! - **Finalize** - Log a summary

use crate::{
    config::SiteConfig,
    content::{
        ArchiveBucket, ContentEntry, Taxonomy, TermCount, archives, popular_tags, recent_posts,
        scan_content, taxonomy,
    },
    debug,
    generator::{rss::write_rss, search::write_search_index, write_json},
    i18n::{filter_by_locale, locale_config, locale_prefix},
    log,
    routes::route_table,
    sidebar::process_sidebar,
};
use anyhow::{Context, Result};
use serde::Serialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Data behind the sidebar widgets of one locale.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Widgets<'a> {
    pub recent_posts: Vec<&'a ContentEntry>,
    pub popular_tags: Vec<TermCount>,
    pub categories: Vec<TermCount>,
    pub archives: Vec<ArchiveBucket>,
}

impl<'a> Widgets<'a> {
    pub fn collect(config: &SiteConfig, published: &'a [ContentEntry]) -> Self {
        let sizes = &config.widgets;
        Self {
            recent_posts: recent_posts(published, sizes.recent_posts),
            popular_tags: popular_tags(published, sizes.popular_tags),
            categories: taxonomy(published, Taxonomy::Categories),
            archives: archives(published, sizes.archives),
        }
    }
}

/// What a build produced.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BuildSummary {
    pub entries: usize,
    pub routes: usize,
    pub locales: usize,
    pub files: Vec<PathBuf>,
}

/// Load the content directory, with the path in the error chain.
pub fn load_entries(config: &SiteConfig) -> Result<Vec<ContentEntry>> {
    scan_content(&config.build.content)
        .with_context(|| format!("failed to load content from {}", config.build.content.display()))
}

/// Build every data file into `config.build.output`.
pub fn build_site(config: &SiteConfig) -> Result<BuildSummary> {
    let output = &config.build.output;
    if config.build.clean && output.exists() {
        fs::remove_dir_all(output)
            .with_context(|| format!("failed to clean {}", output.display()))?;
        debug!("build"; "cleaned {}", output.display());
    }

    let entries = load_entries(config)?;
    let mut summary = BuildSummary {
        entries: entries.len(),
        ..BuildSummary::default()
    };

    let routes = route_table(config);
    summary.routes = routes.len();
    summary.files.push(write_file(&output.join("routes.json"), &routes)?);

    for locale in &config.i18n.locales {
        build_locale(config, &locale.code, &entries, &mut summary)?;
        summary.locales += 1;
    }

    log!("build"; "{} entries, {} routes, {} locales -> {}",
        summary.entries, summary.routes, summary.locales, output.display());
    Ok(summary)
}

fn build_locale(
    config: &SiteConfig,
    code: &str,
    entries: &[ContentEntry],
    summary: &mut BuildSummary,
) -> Result<()> {
    let dir = locale_dir(config, code);
    let merged = locale_config(code, config);

    // sidebar scan paths select their own locale subtree
    let visible: Vec<&ContentEntry> = entries.iter().filter(|e| !e.is_draft()).collect();
    let sidebar = process_sidebar(&merged.sidebar, &visible, None);

    let published: Vec<ContentEntry> = filter_by_locale(entries, code, &config.i18n, |e| e.id.as_str())
        .into_iter()
        .filter(|e| !e.is_draft())
        .cloned()
        .collect();
    let widgets = Widgets::collect(config, &published);

    summary.files.push(write_file(&dir.join("config.json"), &merged)?);
    summary.files.push(write_file(&dir.join("sidebar.json"), &sidebar)?);
    summary.files.push(write_file(&dir.join("widgets.json"), &widgets)?);

    if config.routes.rss {
        let path = dir.join("rss.xml");
        write_rss(config, code, entries, &path)?;
        summary.files.push(path);
    }
    if config.routes.search {
        let path = dir.join("search-index.json");
        write_search_index(config, code, entries, &path)?;
        summary.files.push(path);
    }

    debug!("build"; "{}: {} published entries, {} sidebar groups",
        code, published.len(), sidebar.len());
    Ok(())
}

/// Output directory of `code`: the root for unprefixed locales.
fn locale_dir(config: &SiteConfig, code: &str) -> PathBuf {
    let prefix = locale_prefix(code, &config.i18n, None);
    config.build.output.join(prefix.trim_start_matches('/'))
}

fn write_file<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<PathBuf> {
    write_json(path, value, false)?;
    debug!("build"; "wrote {}", path.display());
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const MULTI: &str = r#"
[i18n]
default_locale = "en"
[[i18n.locales]]
code = "en"
[[i18n.locales]]
code = "zh-CN"
[i18n.locale_configs.zh-CN]
content_path_prefix = "zh"
site = { title = "测试" }
"#;

    fn site(extra: &str) -> (TempDir, SiteConfig) {
        let dir = tempfile::Builder::new().prefix("site").tempdir().unwrap();
        let content = dir.path().join("content");
        fs::create_dir_all(content.join("zh")).unwrap();
        fs::write(
            content.join("hello.md"),
            "---\ntitle: Hello\npubDate: 2024-01-15\ntags: [rust, astro]\n---\n# Hello\nworld",
        )
        .unwrap();
        fs::write(
            content.join("draft.md"),
            "---\ntitle: WIP\ndraft: true\n---\nsecret",
        )
        .unwrap();
        fs::write(
            content.join("zh/nihao.md"),
            "---\ntitle: 你好\ndate: 2024-02-01\n---\n正文",
        )
        .unwrap();

        let mut config = SiteConfig::from_str(&format!(
            "[site]\ntitle = \"Test\"\nurl = \"https://example.com\"\n{extra}"
        ))
        .unwrap();
        config.finalize(dir.path());
        (dir, config)
    }

    fn read_json(path: &Path) -> serde_json::Value {
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
    }

    #[test]
    fn test_build_single_locale() {
        let (dir, config) = site("");
        let summary = build_site(&config).unwrap();
        let out = dir.path().join("dist");

        assert_eq!(summary.entries, 3);
        assert_eq!(summary.locales, 1);
        for file in ["routes.json", "config.json", "sidebar.json", "widgets.json", "rss.xml", "search-index.json"] {
            assert!(out.join(file).is_file(), "missing {file}");
        }

        let index = read_json(&out.join("search-index.json"));
        let urls: Vec<_> = index
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["url"].as_str().unwrap())
            .collect();
        assert_eq!(urls, vec!["/posts/hello", "/posts/zh/nihao"]);

        let widgets = read_json(&out.join("widgets.json"));
        assert_eq!(widgets["recentPosts"][0]["id"], "zh/nihao");
        assert_eq!(widgets["popularTags"][0]["slug"], "rust");
        assert_eq!(widgets["archives"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_build_locales() {
        let (dir, config) = site(MULTI);
        let summary = build_site(&config).unwrap();
        let out = dir.path().join("dist");
        assert_eq!(summary.locales, 2);

        let zh_config = read_json(&out.join("zh-CN/config.json"));
        assert_eq!(zh_config["site"]["title"], "测试");
        assert_eq!(zh_config["locale"]["code"], "zh-CN");

        let zh_index = read_json(&out.join("zh-CN/search-index.json"));
        assert_eq!(zh_index.as_array().unwrap().len(), 1);
        assert_eq!(zh_index[0]["url"], "/zh-CN/posts/zh/nihao");

        let rss = fs::read_to_string(out.join("zh-CN/rss.xml")).unwrap();
        assert!(rss.contains("https://example.com/zh-CN/posts/zh/nihao/"));

        let routes = read_json(&out.join("routes.json"));
        assert!(routes.as_array().unwrap().iter().any(|r| r["pattern"] == "/zh-CN/rss.xml"));
    }

    #[test]
    fn test_disabled_generators() {
        let (dir, config) = site("[routes]\nrss = false\nsearch = false\n");
        build_site(&config).unwrap();
        let out = dir.path().join("dist");
        assert!(!out.join("rss.xml").exists());
        assert!(!out.join("search-index.json").exists());
        assert!(out.join("sidebar.json").is_file());
    }

    #[test]
    fn test_clean_removes_stale_files() {
        let (dir, mut config) = site("");
        let out = dir.path().join("dist");
        fs::create_dir_all(&out).unwrap();
        fs::write(out.join("stale.txt"), "old").unwrap();

        config.build.clean = true;
        build_site(&config).unwrap();
        assert!(!out.join("stale.txt").exists());
        assert!(out.join("routes.json").is_file());
    }

    #[test]
    fn test_missing_content_dir() {
        let (dir, config) = site("");
        fs::remove_dir_all(dir.path().join("content")).unwrap();
        let err = build_site(&config).unwrap_err();
        assert!(format!("{err:#}").contains("content directory not found"));
    }
}
