//! Override merging for locale-specific configuration.
//!
//! Typed sections merge field by field through [`Merge`]: a patch value
//! replaces the base value, except for nested records, which merge
//! recursively. Lists and scalars always replace wholesale. Free-form
//! tables (`site.extra`) go through [`deep_merge`], which applies the same
//! rule to `toml::Value` trees.
//!
//! Merging never mutates its inputs; the base configuration stays the
//! shared default for every locale.

use toml::{Table, Value};

/// A configuration record that can absorb a partial override.
pub trait Merge: Sized {
    /// Partial form of `Self`: every field optional.
    type Patch;

    /// Return a new value with `patch` applied on top of `self`.
    fn merged(&self, patch: &Self::Patch) -> Self;

    /// Apply an optional patch; `None` yields an unchanged copy.
    fn merged_opt(&self, patch: Option<&Self::Patch>) -> Self
    where
        Self: Clone,
    {
        match patch {
            Some(patch) => self.merged(patch),
            None => self.clone(),
        }
    }
}

/// Patch value if present, else the base value.
#[inline]
pub fn pick<T: Clone>(base: &T, patch: Option<&T>) -> T {
    patch.unwrap_or(base).clone()
}

/// Recursively merge two TOML values.
///
/// Tables merge key by key; anything else in `patch` replaces `base`.
/// Keys missing from `patch` keep their base value.
pub fn deep_merge(base: &Value, patch: &Value) -> Value {
    match (base, patch) {
        (Value::Table(base), Value::Table(patch)) => Value::Table(merge_tables(base, patch)),
        _ => patch.clone(),
    }
}

/// Table form of [`deep_merge`].
pub fn merge_tables(base: &Table, patch: &Table) -> Table {
    let mut merged = base.clone();
    for (key, value) in patch {
        let next = match base.get(key) {
            Some(existing) => deep_merge(existing, value),
            None => value.clone(),
        };
        merged.insert(key.clone(), next);
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(src: &str) -> Table {
        toml::from_str(src).unwrap()
    }

    #[test]
    fn test_nested_tables_merge() {
        let base = table("[social]\ngithub = \"gh\"\ntwitter = \"tw\"\n");
        let patch = table("[social]\ntwitter = \"new\"\n");
        let merged = merge_tables(&base, &patch);

        let social = merged["social"].as_table().unwrap();
        assert_eq!(social["github"].as_str(), Some("gh"));
        assert_eq!(social["twitter"].as_str(), Some("new"));
    }

    #[test]
    fn test_arrays_replace() {
        let base = table("tags = [\"a\", \"b\"]\n");
        let patch = table("tags = [\"c\"]\n");
        let merged = merge_tables(&base, &patch);
        assert_eq!(merged["tags"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_scalar_replaces_table_and_back() {
        let base = table("[layout]\nwidth = \"wide\"\n");
        let patch = table("layout = \"none\"\n");
        assert_eq!(merge_tables(&base, &patch)["layout"].as_str(), Some("none"));

        let base = table("layout = \"none\"\n");
        let patch = table("[layout]\nwidth = \"wide\"\n");
        assert!(merge_tables(&base, &patch)["layout"].is_table());
    }

    #[test]
    fn test_absent_keys_never_overwrite() {
        let base = table("title = \"Base\"\ncount = 3\n");
        let patch = table("count = 4\n");
        let merged = merge_tables(&base, &patch);
        assert_eq!(merged["title"].as_str(), Some("Base"));
        assert_eq!(merged["count"].as_integer(), Some(4));
    }

    #[test]
    fn test_inputs_untouched() {
        let base = table("a = 1\n");
        let patch = table("a = 2\n");
        let _ = merge_tables(&base, &patch);
        assert_eq!(base["a"].as_integer(), Some(1));
    }

    #[test]
    fn test_pick() {
        assert_eq!(pick(&1, Some(&2)), 2);
        assert_eq!(pick(&1, None), 1);
    }
}
