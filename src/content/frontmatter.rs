//! Frontmatter extraction: YAML-like (`---`) or TOML (`+++`) blocks.
//!
//! The YAML dialect is small: `key: value` lines, inline
//! `[a, b]` arrays, comma lists, and `- item` block lists. Both formats
//! are first lowered into a JSON object, which then deserializes into
//! [`EntryMeta`].

use super::entry::{EntryMeta, JsonMap, KEY_ALIASES};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FrontmatterError {
    #[error("invalid TOML frontmatter: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid frontmatter field: {0}")]
    Field(#[from] serde_json::Error),
}

/// Markdown metadata extractor from YAML (`---`) or TOML (`+++`) frontmatter
pub struct MetaExtractor;

impl MetaExtractor {
    /// Split `content` into metadata and body.
    ///
    /// Content without frontmatter yields default metadata and the whole
    /// content as body.
    pub fn extract<'a>(&self, content: &'a str) -> Result<(EntryMeta, &'a str), FrontmatterError> {
        let Some((fm, body, is_toml)) = Self::detect_frontmatter(content) else {
            return Ok((EntryMeta::default(), content));
        };

        let fields = if is_toml {
            Self::parse_toml(fm)?
        } else {
            Self::parse_yaml_like(fm)
        };
        let meta = serde_json::from_value(Value::Object(canonical_keys(fields)))?;
        Ok((meta, body))
    }

    /// Parse simple YAML-like frontmatter (key: value).
    fn parse_yaml_like(content: &str) -> JsonMap {
        let mut fields = JsonMap::new();
        // Key whose value is an indented `- item` list
        let mut list_key: Option<String> = None;

        for raw in content.lines() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some(key) = &list_key
                && let Some(item) = line.strip_prefix("- ").or((line == "-").then_some(""))
            {
                if let Some(Value::Array(items)) = fields.get_mut(key) {
                    items.push(Value::String(unquote(item.trim()).to_string()));
                }
                continue;
            }
            list_key = None;

            if let Some((key, value)) = line.split_once(':') {
                let key = key.trim().to_string();
                let value = value.trim();
                if value.is_empty() {
                    fields.insert(key.clone(), Value::Array(Vec::new()));
                    list_key = Some(key);
                } else if is_text_field(&key) {
                    fields.insert(key, Value::String(unquote(value).to_string()));
                } else {
                    fields.insert(key, parse_yaml_value(value));
                }
            }
        }

        // Keys that never received list items were empty scalars
        fields
            .into_iter()
            .map(|(k, v)| match v {
                Value::Array(items) if items.is_empty() => (k, Value::Null),
                v => (k, v),
            })
            .collect()
    }

    /// Parse TOML frontmatter.
    fn parse_toml(content: &str) -> Result<JsonMap, toml::de::Error> {
        let table: toml::Table = toml::from_str(content)?;
        Ok(table
            .into_iter()
            .map(|(k, v)| (k, toml_to_json(v)))
            .collect())
    }

    /// Detect and extract frontmatter.
    /// Returns `(frontmatter, body, is_toml)` if found.
    fn detect_frontmatter(content: &str) -> Option<(&str, &str, bool)> {
        let trimmed = content.trim_start_matches('\u{feff}').trim_start();

        for (fence, is_toml) in [("---", false), ("+++", true)] {
            if let Some(rest) = trimmed.strip_prefix(fence)
                && let Some(end) = rest.find(&format!("\n{fence}"))
            {
                let fm = rest[..end].trim();
                let body = rest[end + 1 + fence.len()..].trim_start_matches(['\r', '\n']);
                return Some((fm, body, is_toml));
            }
        }
        None
    }
}

/// Text fields that must stay strings even when they look like numbers.
const TEXT_FIELDS: &[&str] = &["title", "description", "icon", "author"];

fn is_text_field(key: &str) -> bool {
    let key = key.to_ascii_lowercase();
    TEXT_FIELDS.contains(&key.as_str()) || key == "summary"
}

/// Rename alias keys (`date`, `pub_date`, ...) to their canonical names.
///
/// The first spelling seen wins; later duplicates are dropped.
fn canonical_keys(fields: JsonMap) -> JsonMap {
    let mut out = JsonMap::new();
    for (key, value) in fields {
        let lower = key.to_ascii_lowercase();
        let canonical = KEY_ALIASES
            .iter()
            .find(|(alias, _)| *alias == lower)
            .map_or(key, |(_, name)| (*name).to_string());
        let value = match value {
            Value::Number(_) | Value::Bool(_) if TEXT_FIELDS.contains(&canonical.as_str()) => {
                Value::String(value.to_string())
            }
            value => value,
        };
        if !out.contains_key(&canonical) {
            out.insert(canonical, value);
        }
    }
    out
}

/// Strip one pair of matching surrounding quotes.
fn unquote(s: &str) -> &str {
    for q in ['"', '\''] {
        if let Some(inner) = s.strip_prefix(q).and_then(|s| s.strip_suffix(q)) {
            return inner;
        }
    }
    s
}

/// Parse a YAML-like value string to JSON value
///
/// Supports:
/// - Booleans: `true`, `false`
/// - Null: `null`, `~`
/// - Numbers: `123`, `3.14`
/// - Arrays: `[a, "b"]` or `a, b, c`
/// - Quoted strings: `"a: b"` -> `a: b`
/// - Strings: everything else
fn parse_yaml_value(s: &str) -> Value {
    if s.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if s.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }
    if s.eq_ignore_ascii_case("null") || s == "~" {
        return Value::Null;
    }

    if let Ok(n) = s.parse::<i64>() {
        return Value::Number(n.into());
    }
    if let Ok(n) = s.parse::<f64>()
        && let Some(num) = serde_json::Number::from_f64(n)
    {
        return Value::Number(num);
    }

    if s.len() >= 2 && (s.starts_with('"') || s.starts_with('\'')) && unquote(s) != s {
        return Value::String(unquote(s).to_string());
    }

    let list = s.strip_prefix('[').and_then(|s| s.strip_suffix(']'));
    if list.is_some() || s.contains(',') {
        let items = list.unwrap_or(s);
        return Value::Array(
            items
                .split(',')
                .map(|item| unquote(item.trim()))
                .filter(|item| !item.is_empty())
                .map(|item| Value::String(item.to_string()))
                .collect(),
        );
    }

    Value::String(s.to_string())
}

/// Lower a TOML value to JSON; datetimes become their RFC 3339 text.
fn toml_to_json(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::Number(i.into()),
        toml::Value::Float(f) => serde_json::Number::from_f64(f).map_or(Value::Null, Value::Number),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Array(items.into_iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => Value::Object(
            table
                .into_iter()
                .map(|(k, v)| (k, toml_to_json(v)))
                .collect(),
        ),
    }
}
