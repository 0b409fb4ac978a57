//! Locale resolution over URL paths.
//!
//! With `default_locale = "en"`, locales `en` + `zh-CN` and the default
//! prefix omitted:
//!
//! ```text
//! /posts/hello        → en,    stripped /posts/hello
//! /zh-CN/posts/hello  → zh-CN, stripped /posts/hello
//! /zh-CN              → zh-CN, stripped /
//! ```

use crate::config::{I18nConfig, Locale, TextDirection};
use serde::Serialize;

/// One hreflang alternate of a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlternateLink {
    /// Locale code, or `x-default`.
    pub locale: String,
    pub url: String,
    pub hreflang: String,
}

const X_DEFAULT: &str = "x-default";

/// Locale code owning `path`; the default locale when no prefix matches.
pub fn locale_from_path<'a>(path: &str, config: &'a I18nConfig) -> &'a str {
    let path = path.strip_prefix('/').unwrap_or(path);
    let first = path.split('/').next().unwrap_or_default();
    config
        .locales
        .iter()
        .find(|l| l.code == first)
        .map_or(config.default_locale.as_str(), |l| l.code.as_str())
}

pub fn locale_by_code<'a>(code: &str, config: &'a I18nConfig) -> Option<&'a Locale> {
    config.locales.iter().find(|l| l.code == code)
}

/// Whether `code` is the default locale and its URLs carry no prefix.
fn is_unprefixed(code: &str, config: &I18nConfig) -> bool {
    code == config.default_locale && !config.routing.prefix_default_locale
}

/// Remove the leading `/{locale}` segment, if the path carries one.
pub fn strip_locale_prefix(path: &str, config: &I18nConfig) -> String {
    let locale = locale_from_path(path, config);
    if is_unprefixed(locale, config) {
        return path.to_string();
    }

    let prefix = format!("/{locale}");
    match path.strip_prefix(&prefix) {
        Some("") => "/".to_string(),
        Some(rest) if rest.starts_with('/') => rest.to_string(),
        _ => path.to_string(),
    }
}

/// Rewrite `path` for `target`, replacing any existing locale prefix.
pub fn localized_path(path: &str, target: &str, config: &I18nConfig) -> String {
    let base = strip_locale_prefix(path, config);
    if is_unprefixed(target, config) {
        base
    } else if base == "/" {
        format!("/{target}")
    } else {
        format!("/{target}{base}")
    }
}

/// One absolute URL per configured locale, then the `x-default` entry.
pub fn alternate_links(path: &str, base_url: &str, config: &I18nConfig) -> Vec<AlternateLink> {
    let base_url = base_url.trim_end_matches('/');

    let mut links: Vec<_> = config
        .locales
        .iter()
        .map(|locale| AlternateLink {
            locale: locale.code.clone(),
            url: format!("{base_url}{}", localized_path(path, &locale.code, config)),
            hreflang: locale.html_lang.clone(),
        })
        .collect();

    let default_path = localized_path(path, &config.default_locale, config);
    links.push(AlternateLink {
        locale: X_DEFAULT.into(),
        url: format!("{base_url}{default_path}"),
        hreflang: X_DEFAULT.into(),
    });
    links
}

/// URL prefix for routes of `locale`, optionally under a deployment base.
///
/// ```ignore
/// locale_prefix("en", cfg, None)              // ""
/// locale_prefix("zh-CN", cfg, None)           // "/zh-CN"
/// locale_prefix("zh-CN", cfg, Some("/blog/")) // "/blog/zh-CN"
/// ```
pub fn locale_prefix(locale: &str, config: &I18nConfig, base: Option<&str>) -> String {
    let base = base.unwrap_or_default().trim_end_matches('/');
    if is_unprefixed(locale, config) {
        base.to_string()
    } else {
        format!("{base}/{locale}")
    }
}

pub fn is_rtl(locale: &str, config: &I18nConfig) -> bool {
    text_direction(locale, config) == TextDirection::Rtl
}

/// Direction of a configured locale; unknown codes are `ltr`.
pub fn text_direction(locale: &str, config: &I18nConfig) -> TextDirection {
    locale_by_code(locale, config).map_or(TextDirection::Ltr, |l| l.direction)
}

pub fn is_multi_language(config: &I18nConfig) -> bool {
    config.locales.len() > 1
}

/// Content id prefix owning the entries of `locale`, if configured.
pub fn content_path_prefix<'a>(locale: &str, config: &'a I18nConfig) -> Option<&'a str> {
    config
        .overrides(locale)
        .and_then(|o| o.content_path_prefix.as_deref())
        .filter(|p| !p.is_empty())
}

/// Whether `id` lies under `prefix` (case-insensitive, on `/` boundaries).
pub fn id_under_prefix(id: &str, prefix: &str) -> bool {
    let id = id.to_lowercase();
    let prefix = prefix.to_lowercase();
    id == prefix || id.strip_prefix(&prefix).is_some_and(|rest| rest.starts_with('/'))
}

/// Entries belonging to `locale`; all of them when it has no content prefix.
pub fn filter_by_locale<'e, T, F>(entries: &'e [T], locale: &str, config: &I18nConfig, id: F) -> Vec<&'e T>
where
    F: Fn(&T) -> &str,
{
    match content_path_prefix(locale, config) {
        Some(prefix) => entries.iter().filter(|e| id_under_prefix(id(e), prefix)).collect(),
        None => entries.iter().collect(),
    }
}

/// Prefix `path` with a subdirectory deployment base.
///
/// ```ignore
/// with_base("/posts", "/blog/") // "/blog/posts"
/// with_base("/", "/blog")       // "/blog/"
/// with_base("/posts", "/")      // "/posts"
/// ```
pub fn with_base(path: &str, base: &str) -> String {
    let base = base.trim_end_matches('/');
    if base.is_empty() {
        return path.to_string();
    }
    match path {
        "" | "/" => format!("{base}/"),
        p if p.starts_with('/') => format!("{base}{p}"),
        p => format!("{base}/{p}"),
    }
}

/// Inverse of [`with_base`]; paths outside the base pass through.
pub fn remove_base(path: &str, base: &str) -> String {
    let base = base.trim_end_matches('/');
    if base.is_empty() {
        return path.to_string();
    }
    match path.strip_prefix(base) {
        Some("") => "/".to_string(),
        Some(rest) => rest.to_string(),
        None => path.to_string(),
    }
}

#[cfg(test)]
pub(crate) fn test_i18n(prefix_default: bool) -> I18nConfig {
    let mut config: I18nConfig = toml::from_str(&format!(
        r#"
default_locale = "en"

[[locales]]
code = "en"
name = "English"
html_lang = "en-US"

[[locales]]
code = "zh-CN"
name = "简体中文"

[[locales]]
code = "ar"
direction = "rtl"

[routing]
prefix_default_locale = {prefix_default}

[locale_configs.zh-CN]
content_path_prefix = "zh"
"#
    ))
    .unwrap();
    config.normalize();
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_from_path() {
        let config = test_i18n(false);
        assert_eq!(locale_from_path("/zh-CN/posts", &config), "zh-CN");
        assert_eq!(locale_from_path("/zh-CN", &config), "zh-CN");
        assert_eq!(locale_from_path("/posts/zh-CN", &config), "en");
        assert_eq!(locale_from_path("/zh-cn/posts", &config), "en");
        assert_eq!(locale_from_path("/", &config), "en");
        assert_eq!(locale_from_path("", &config), "en");
    }

    #[test]
    fn test_strip_locale_prefix() {
        let config = test_i18n(false);
        assert_eq!(strip_locale_prefix("/zh-CN/posts/a", &config), "/posts/a");
        assert_eq!(strip_locale_prefix("/zh-CN", &config), "/");
        assert_eq!(strip_locale_prefix("/posts", &config), "/posts");

        let config = test_i18n(true);
        assert_eq!(strip_locale_prefix("/en/posts", &config), "/posts");
        assert_eq!(strip_locale_prefix("/en", &config), "/");
    }

    #[test]
    fn test_locale_prefix_needs_whole_segment() {
        let config = test_i18n(true);
        assert_eq!(locale_from_path("/english/x", &config), "en");
        assert_eq!(strip_locale_prefix("/english/x", &config), "/english/x");
        assert_eq!(strip_locale_prefix("/arabic", &config), "/arabic");
        assert_eq!(localized_path("/english/x", "zh-CN", &config), "/zh-CN/english/x");

        let config = test_i18n(false);
        assert_eq!(locale_from_path("/zh-CNx/a", &config), "en");
        assert_eq!(strip_locale_prefix("/ar-x/a", &config), "/ar-x/a");
    }

    #[test]
    fn test_localized_path() {
        let config = test_i18n(false);
        assert_eq!(localized_path("/posts", "zh-CN", &config), "/zh-CN/posts");
        assert_eq!(localized_path("/zh-CN/posts", "en", &config), "/posts");
        assert_eq!(localized_path("/zh-CN/posts", "ar", &config), "/ar/posts");
        assert_eq!(localized_path("/", "zh-CN", &config), "/zh-CN");

        let config = test_i18n(true);
        assert_eq!(localized_path("/zh-CN/posts", "en", &config), "/en/posts");
    }

    #[test]
    fn test_localized_path_round_trip() {
        for prefix_default in [false, true] {
            let config = test_i18n(prefix_default);
            let mut paths = vec!["/zh-CN/posts/a", "/zh-CN", "/ar/tags/rust", "/ar"];
            if prefix_default {
                paths.extend(["/en/posts", "/en"]);
            } else {
                paths.extend(["/posts", "/", "/about/me"]);
            }
            for path in paths {
                let locale = locale_from_path(path, &config);
                let stripped = strip_locale_prefix(path, &config);
                assert_eq!(localized_path(&stripped, locale, &config), path, "{path}");
            }
        }
    }

    #[test]
    fn test_alternate_links() {
        let config = test_i18n(false);
        let links = alternate_links("/zh-CN/posts", "https://example.com/", &config);

        assert_eq!(links.len(), config.locales.len() + 1);
        assert_eq!(links[0].url, "https://example.com/posts");
        assert_eq!(links[0].hreflang, "en-US");
        assert_eq!(links[1].url, "https://example.com/zh-CN/posts");
        assert_eq!(links[1].hreflang, "zh-CN");
        assert_eq!(links[2].locale, "ar");

        let last = links.last().unwrap();
        assert_eq!(last.locale, "x-default");
        assert_eq!(last.hreflang, "x-default");
        assert_eq!(last.url, "https://example.com/posts");
    }

    #[test]
    fn test_locale_prefix() {
        let config = test_i18n(false);
        assert_eq!(locale_prefix("en", &config, None), "");
        assert_eq!(locale_prefix("zh-CN", &config, None), "/zh-CN");
        assert_eq!(locale_prefix("en", &config, Some("/blog/")), "/blog");
        assert_eq!(locale_prefix("zh-CN", &config, Some("/blog")), "/blog/zh-CN");
        assert_eq!(locale_prefix("zh-CN", &config, Some("/")), "/zh-CN");

        let config = test_i18n(true);
        assert_eq!(locale_prefix("en", &config, None), "/en");
    }

    #[test]
    fn test_direction_and_lookup() {
        let config = test_i18n(false);
        assert!(is_rtl("ar", &config));
        assert!(!is_rtl("en", &config));
        assert_eq!(text_direction("xx", &config), TextDirection::Ltr);
        assert!(locale_by_code("xx", &config).is_none());
        assert!(is_multi_language(&config));
        assert!(!is_multi_language(&I18nConfig::default()));
    }

    #[test]
    fn test_filter_by_locale() {
        let config = test_i18n(false);
        let ids = ["zh/hello", "ZH/World", "zh", "zhx/nope", "en/hello"];

        let zh = filter_by_locale(&ids, "zh-CN", &config, |s| *s);
        assert_eq!(zh, vec![&"zh/hello", &"ZH/World", &"zh"]);

        let en = filter_by_locale(&ids, "en", &config, |s| *s);
        assert_eq!(en.len(), ids.len());
    }

    #[test]
    fn test_with_and_remove_base() {
        assert_eq!(with_base("/posts", "/blog/"), "/blog/posts");
        assert_eq!(with_base("/", "/blog"), "/blog/");
        assert_eq!(with_base("posts", "/blog"), "/blog/posts");
        assert_eq!(with_base("/posts", "/"), "/posts");

        assert_eq!(remove_base("/blog/posts", "/blog"), "/posts");
        assert_eq!(remove_base("/blog", "/blog/"), "/");
        assert_eq!(remove_base("/other", "/blog"), "/other");
        assert_eq!(remove_base("/posts", ""), "/posts");
    }
}
