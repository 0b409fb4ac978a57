//! UI string translations.
//!
//! Lookup order for a locale code, later layers winning:
//!
//! 1. English built-ins
//! 2. built-ins of the exact code, else of a built-in sharing the language
//!    subtag (`zh-TW` → `zh-CN`)
//! 3. `[i18n.ui.<code>]` from `lectern.toml`

use crate::config::I18nConfig;
use rustc_hash::FxHashMap;

pub type UiStrings = FxHashMap<String, String>;

const EN: &[(&str, &str)] = &[
    ("home", "Home"),
    ("posts", "Posts"),
    ("allPosts", "All Posts"),
    ("tags", "Tags"),
    ("allTags", "All Tags"),
    ("categories", "Categories"),
    ("allCategories", "All Categories"),
    ("archives", "Archives"),
    ("slides", "Slides"),
    ("about", "About"),
    ("search", "Search"),
    ("searchPlaceholder", "Search posts..."),
    ("searchNoResults", "No results found"),
    ("readMore", "Read more"),
    ("publishedOn", "Published on"),
    ("updatedOn", "Updated on"),
    ("minuteRead", "min read"),
    ("previousPost", "Previous"),
    ("nextPost", "Next"),
    ("tableOfContents", "Table of Contents"),
    ("recentPosts", "Recent Posts"),
    ("popularTags", "Popular Tags"),
    ("postCount", "posts"),
    ("page", "Page"),
    ("backToTop", "Back to top"),
    ("copyCode", "Copy"),
    ("copied", "Copied!"),
    ("toggleTheme", "Toggle theme"),
    ("language", "Language"),
    ("notFound", "Page not found"),
    ("poweredBy", "Powered by"),
    ("rssFeed", "RSS Feed"),
];

const ZH_CN: &[(&str, &str)] = &[
    ("home", "首页"),
    ("posts", "文章"),
    ("allPosts", "全部文章"),
    ("tags", "标签"),
    ("allTags", "全部标签"),
    ("categories", "分类"),
    ("allCategories", "全部分类"),
    ("archives", "归档"),
    ("slides", "幻灯片"),
    ("about", "关于"),
    ("search", "搜索"),
    ("searchPlaceholder", "搜索文章..."),
    ("searchNoResults", "没有找到结果"),
    ("readMore", "阅读更多"),
    ("publishedOn", "发布于"),
    ("updatedOn", "更新于"),
    ("minuteRead", "分钟阅读"),
    ("previousPost", "上一篇"),
    ("nextPost", "下一篇"),
    ("tableOfContents", "目录"),
    ("recentPosts", "最新文章"),
    ("popularTags", "热门标签"),
    ("postCount", "篇文章"),
    ("page", "页"),
    ("backToTop", "回到顶部"),
    ("copyCode", "复制"),
    ("copied", "已复制!"),
    ("toggleTheme", "切换主题"),
    ("language", "语言"),
    ("notFound", "页面未找到"),
    ("poweredBy", "技术支持"),
    ("rssFeed", "RSS 订阅"),
];

const BUILT_IN: &[(&str, &[(&str, &str)])] = &[("en", EN), ("zh-CN", ZH_CN)];

fn language_subtag(code: &str) -> &str {
    code.split(['-', '_']).next().unwrap_or(code)
}

/// Built-in table for `code`, by exact code then by language subtag.
fn built_in(code: &str) -> Option<&'static [(&'static str, &'static str)]> {
    BUILT_IN
        .iter()
        .find(|(c, _)| c.eq_ignore_ascii_case(code))
        .or_else(|| {
            let lang = language_subtag(code);
            BUILT_IN
                .iter()
                .find(|(c, _)| language_subtag(c).eq_ignore_ascii_case(lang))
        })
        .map(|(_, table)| *table)
}

/// Full translation table for `locale`.
pub fn translations(locale: &str, config: &I18nConfig) -> UiStrings {
    let mut strings: UiStrings = EN
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();

    if let Some(table) = built_in(locale) {
        strings.extend(table.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())));
    }
    if let Some(user) = config.ui.get(locale) {
        strings.extend(user.iter().map(|(k, v)| (k.clone(), v.clone())));
    }
    strings
}

/// Translate `key`; the key itself when no table defines it.
pub fn t(key: &str, locale: &str, config: &I18nConfig) -> String {
    if let Some(value) = config.ui.get(locale).and_then(|user| user.get(key)) {
        return value.clone();
    }
    let lookup = |table: &[(&str, &'static str)]| {
        table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
    };
    built_in(locale)
        .and_then(lookup)
        .or_else(|| lookup(EN))
        .unwrap_or(key)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_ui() -> I18nConfig {
        toml::from_str(
            r#"
[[locales]]
code = "en"
[[locales]]
code = "zh-CN"
[ui.zh-CN]
readMore = "继续阅读"
custom = "自定义"
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_builtin_lookup() {
        let config = I18nConfig::default();
        assert_eq!(t("readMore", "en", &config), "Read more");
        assert_eq!(t("readMore", "zh-CN", &config), "阅读更多");
    }

    #[test]
    fn test_language_subtag_fallback() {
        let config = I18nConfig::default();
        assert_eq!(t("tags", "zh-TW", &config), "标签");
        assert_eq!(t("tags", "en-GB", &config), "Tags");
        assert_eq!(t("tags", "fr", &config), "Tags");
    }

    #[test]
    fn test_missing_key_returns_key() {
        assert_eq!(t("noSuchKey", "en", &I18nConfig::default()), "noSuchKey");
    }

    #[test]
    fn test_user_overrides() {
        let config = config_with_ui();
        assert_eq!(t("readMore", "zh-CN", &config), "继续阅读");
        assert_eq!(t("custom", "zh-CN", &config), "自定义");
        assert_eq!(t("custom", "en", &config), "custom");

        let table = translations("zh-CN", &config);
        assert_eq!(table["readMore"], "继续阅读");
        assert_eq!(table["home"], "首页");
        assert_eq!(table.len(), EN.len() + 1);
    }

    #[test]
    fn test_tables_have_same_keys() {
        for (key, _) in EN {
            assert!(ZH_CN.iter().any(|(k, _)| k == key), "zh-CN missing {key}");
        }
        assert_eq!(EN.len(), ZH_CN.len());
    }
}
