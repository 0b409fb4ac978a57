//! `[i18n]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [i18n]
//! default_locale = "en"
//!
//! [[i18n.locales]]
//! code = "en"
//! name = "English"
//! html_lang = "en"
//! date_locale = "en-US"
//!
//! [[i18n.locales]]
//! code = "zh-CN"
//! name = "简体中文"
//!
//! [i18n.routing]
//! prefix_default_locale = false
//!
//! [i18n.locale_configs.zh-CN]
//! content_path_prefix = "zh"
//! site = { title = "我的博客" }
//!
//! [i18n.ui.zh-CN]
//! readMore = "继续阅读"
//! ```

use super::{FooterPatch, MenuItem, SidebarPatch, SitePatch};
use crate::config::{ConfigDiagnostics, FieldPath};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct I18nConfig {
    /// Locale used when a path carries no locale prefix.
    pub default_locale: String,
    /// Configured locales, in display order.
    pub locales: Vec<Locale>,
    pub routing: RoutingConfig,
    /// Per-locale overrides keyed by locale code.
    pub locale_configs: FxHashMap<String, LocaleOverrides>,
    /// Per-locale UI string overrides keyed by locale code.
    pub ui: FxHashMap<String, FxHashMap<String, String>>,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_locale: "en".into(),
            locales: vec![Locale::new("en", "English")],
            routing: RoutingConfig::default(),
            locale_configs: FxHashMap::default(),
            ui: FxHashMap::default(),
        }
    }
}

/// A language/region plus its display and formatting metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locale {
    /// Unique identifier, also the URL prefix (e.g. "en", "zh-CN").
    pub code: String,
    /// Display name in the locale switcher.
    #[serde(default)]
    pub name: String,
    /// Value for `<html lang>` and hreflang; defaults to `code`.
    #[serde(default)]
    pub html_lang: String,
    /// Locale used for date formatting; defaults to `code`.
    #[serde(default)]
    pub date_locale: String,
    #[serde(default)]
    pub direction: TextDirection,
}

impl Locale {
    pub fn new(code: &str, name: &str) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            html_lang: code.into(),
            date_locale: code.into(),
            direction: TextDirection::Ltr,
        }
    }

    /// Stand-in for a code that is not configured.
    pub fn fallback(code: &str) -> Self {
        Self::new(code, code)
    }

    /// Fill omitted optional fields from `code`.
    fn fill_defaults(&mut self) {
        if self.name.is_empty() {
            self.name.clone_from(&self.code);
        }
        if self.html_lang.is_empty() {
            self.html_lang.clone_from(&self.code);
        }
        if self.date_locale.is_empty() {
            self.date_locale.clone_from(&self.code);
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

impl TextDirection {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutingConfig {
    /// Also prefix default-locale URLs with `/{code}`.
    pub prefix_default_locale: bool,
}

/// Locale-specific fragments layered over the base configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleOverrides {
    pub site: Option<SitePatch>,
    pub footer: Option<FooterPatch>,
    pub sidebar: Option<SidebarPatch>,
    /// Replaces the menu wholesale.
    pub menu: Option<Vec<MenuItem>>,
    /// Content id prefix owning this locale's entries (e.g. "zh").
    pub content_path_prefix: Option<String>,
}

impl I18nConfig {
    const DEFAULT_LOCALE: &'static str = "i18n.default_locale";
    const LOCALES: &'static str = "i18n.locales";
    const LOCALE_CONFIGS: &'static str = "i18n.locale_configs";
    const UI: &'static str = "i18n.ui";

    /// Fill per-locale defaults after deserialization.
    pub fn normalize(&mut self) {
        for locale in &mut self.locales {
            locale.fill_defaults();
        }
    }

    /// Check the structural invariants of the locale set.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.locales.is_empty() {
            diag.error_with_hint(
                Self::LOCALES,
                "at least one locale must be configured",
                "add [[i18n.locales]] with code = \"en\"",
            );
        }

        let mut seen = FxHashSet::default();
        for locale in &self.locales {
            if locale.code.is_empty() || locale.code.contains('/') {
                diag.error(
                    Self::LOCALES,
                    format!("invalid locale code `{}`", locale.code),
                );
            }
            if !seen.insert(locale.code.as_str()) {
                diag.error(
                    Self::LOCALES,
                    format!("duplicate locale code `{}`", locale.code),
                );
            }
        }

        if !self.locales.is_empty() && !seen.contains(self.default_locale.as_str()) {
            diag.error_with_hint(
                Self::DEFAULT_LOCALE,
                format!(
                    "default locale `{}` is not in the configured locales",
                    self.default_locale
                ),
                format!("configured: {}", self.codes().collect::<Vec<_>>().join(", ")),
            );
        }

        let base = FieldPath::from(Self::LOCALE_CONFIGS);
        for code in sorted_keys(&self.locale_configs) {
            if !seen.contains(code) {
                diag.error(base.join(code), format!("override for unknown locale `{code}`"));
            }
        }
        let base = FieldPath::from(Self::UI);
        for code in sorted_keys(&self.ui) {
            if !seen.contains(code) {
                diag.warn(base.join(code), format!("translations for unknown locale `{code}`"));
            }
        }
    }

    /// Locale codes in configuration order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.locales.iter().map(|l| l.code.as_str())
    }

    pub fn overrides(&self, code: &str) -> Option<&LocaleOverrides> {
        self.locale_configs.get(code)
    }
}

fn sorted_keys<V>(map: &FxHashMap<String, V>) -> Vec<&str> {
    let mut keys: Vec<&str> = map.keys().map(String::as_str).collect();
    keys.sort_unstable();
    keys
}
