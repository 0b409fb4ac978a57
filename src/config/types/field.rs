//! Config field path used in diagnostics.

use owo_colors::OwoColorize;
use std::fmt;

/// Dotted path of a config field, e.g. `i18n.default_locale`.
///
/// Static paths are declared as constants next to the section they
/// describe; paths into keyed tables (`i18n.locale_configs.<code>`) are
/// built at validation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath(String);

impl FieldPath {
    #[inline]
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Append a child key: `i18n.ui` + `fr` -> `i18n.ui.fr`.
    pub fn join(&self, key: &str) -> Self {
        Self(format!("{}.{}", self.0, key))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FieldPath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for FieldPath {
    fn from(path: String) -> Self {
        Self(path)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join() {
        let base = FieldPath::from("i18n.locale_configs");
        assert_eq!(base.join("fr").as_str(), "i18n.locale_configs.fr");
    }
}
