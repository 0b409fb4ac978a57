//! Internationalization: locale paths, merged locale configs, UI strings.
//!
//! | Module    | Purpose                                             |
//! |-----------|-----------------------------------------------------|
//! | `locale`  | Locale resolution, prefixes, hreflang alternates    |
//! | `resolve` | `locale_config`: base config + locale overrides     |
//! | `ui`      | Built-in and user UI string tables                  |
//! | `format`  | Locale date formatting                              |

mod format;
mod locale;
mod resolve;
mod ui;

#[cfg(test)]
pub(crate) use locale::test_i18n;

pub use format::{format_date, format_date_short};
pub use locale::{
    AlternateLink, alternate_links, content_path_prefix, filter_by_locale, id_under_prefix,
    is_multi_language, is_rtl, locale_by_code, locale_from_path, locale_prefix, localized_path,
    remove_base, strip_locale_prefix, text_direction, with_base,
};
pub use resolve::{MergedLocaleConfig, locale_config};
pub use ui::{UiStrings, t, translations};
