//! Per-locale view of the site configuration.

use super::{locale_by_code, ui::{UiStrings, translations}};
use crate::config::{
    FooterConfig, Locale, MenuItem, SidebarConfig, SiteConfig, SiteInfoConfig, merge::Merge,
};
use serde::Serialize;

/// Site configuration with one locale's overrides applied.
#[derive(Debug, Clone, Serialize)]
pub struct MergedLocaleConfig {
    pub locale: Locale,
    pub site: SiteInfoConfig,
    pub menu: Vec<MenuItem>,
    pub footer: FooterConfig,
    pub sidebar: SidebarConfig,
    pub ui: UiStrings,
}

/// Merge the base configuration with the overrides of `locale`.
///
/// Unknown codes get a synthesized `ltr` locale and the base configuration.
pub fn locale_config(locale: &str, config: &SiteConfig) -> MergedLocaleConfig {
    let i18n = &config.i18n;
    let overrides = i18n.overrides(locale);

    let locale_info = locale_by_code(locale, i18n)
        .cloned()
        .unwrap_or_else(|| Locale::fallback(locale));

    let site = config
        .site
        .merged_opt(overrides.and_then(|o| o.site.as_ref()));
    let menu = overrides
        .and_then(|o| o.menu.clone())
        .unwrap_or_else(|| site.menu.clone());
    let footer = config
        .footer
        .merged_opt(overrides.and_then(|o| o.footer.as_ref()));
    let sidebar = config
        .sidebar
        .merged_opt(overrides.and_then(|o| o.sidebar.as_ref()));

    MergedLocaleConfig {
        locale: locale_info,
        site,
        menu,
        footer,
        sidebar,
        ui: translations(locale, i18n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SidebarGroup, test_parse_config};

    fn config() -> SiteConfig {
        test_parse_config(
            r#"
[footer]
copyright = "© Alice"

[i18n]
default_locale = "en"

[[i18n.locales]]
code = "en"
name = "English"

[[i18n.locales]]
code = "zh-CN"
name = "简体中文"
date_locale = "zh-CN"

[i18n.locale_configs.zh-CN]
content_path_prefix = "zh"
site = { title = "测试", social = { twitter = "weibo" } }
footer = { show_powered_by = false }
sidebar = { enabled = false }
menu = [{ name = "首页", href = "/" }]
"#,
        )
    }

    #[test]
    fn test_default_locale_is_base() {
        let config = config();
        let merged = locale_config("en", &config);
        assert_eq!(merged.locale.name, "English");
        assert_eq!(merged.site, config.site);
        assert_eq!(merged.menu, config.site.menu);
        assert_eq!(merged.footer, config.footer);
        assert_eq!(merged.ui["readMore"], "Read more");
    }

    #[test]
    fn test_overrides_applied() {
        let config = config();
        let merged = locale_config("zh-CN", &config);

        assert_eq!(merged.site.title, "测试");
        assert_eq!(merged.site.social.twitter, "weibo");
        assert_eq!(merged.site.url, config.site.url);

        assert_eq!(merged.menu.len(), 1);
        assert_eq!(merged.menu[0].name, "首页");

        assert_eq!(merged.footer.copyright, "© Alice");
        assert!(!merged.footer.show_powered_by);

        // groups fall back to the base groups
        assert!(!merged.sidebar.enabled);
        assert_eq!(merged.sidebar.groups, config.sidebar.groups);
        assert!(matches!(merged.sidebar.groups[0], SidebarGroup::Scan(_)));

        assert_eq!(merged.ui["readMore"], "阅读更多");
    }

    #[test]
    fn test_base_is_not_mutated() {
        let config = config();
        let before = config.site.clone();
        let _ = locale_config("zh-CN", &config);
        assert_eq!(config.site, before);
    }

    #[test]
    fn test_unknown_locale_synthesized() {
        let config = config();
        let merged = locale_config("fr", &config);
        assert_eq!(merged.locale.code, "fr");
        assert_eq!(merged.locale.name, "fr");
        assert_eq!(merged.locale.html_lang, "fr");
        assert_eq!(merged.locale.date_locale, "fr");
        assert_eq!(merged.site, config.site);
    }
}
