//! Content entries loaded from Markdown files.

use crate::utils::date::DateTimeUtc;
use serde::{Deserialize, Deserializer, Serialize};

pub type JsonMap = serde_json::Map<String, serde_json::Value>;

/// One piece of content.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentEntry {
    /// Path relative to the content directory, `/`-separated, no extension.
    pub id: String,
    #[serde(rename = "data")]
    pub meta: EntryMeta,
    /// Markdown body without frontmatter.
    #[serde(skip)]
    pub body: String,
}

impl ContentEntry {
    pub fn new(id: impl Into<String>, meta: EntryMeta, body: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            meta,
            body: body.into(),
        }
    }

    pub fn title(&self) -> &str {
        self.meta.title.as_deref().unwrap_or_default()
    }

    pub fn description(&self) -> &str {
        self.meta.description.as_deref().unwrap_or_default()
    }

    /// Publish date; undated entries order as the epoch.
    pub fn date_or_epoch(&self) -> DateTimeUtc {
        self.meta.pub_date.unwrap_or(DateTimeUtc::EPOCH)
    }

    pub fn is_draft(&self) -> bool {
        self.meta.draft
    }
}

/// Frontmatter metadata.
///
/// # Standard Fields
///
/// | Field         | Aliases            | Type           |
/// |---------------|--------------------|----------------|
/// | `title`       |                    | `String`       |
/// | `description` | `summary`          | `String`       |
/// | `icon`        |                    | `String`       |
/// | `pubDate`     | `pub_date`, `date` | date           |
/// | `updatedDate` | `updated_date`     | date           |
/// | `tags`        |                    | `Vec<String>`  |
/// | `categories`  |                    | `Vec<String>`  |
/// | `author`      |                    | `String`       |
/// | `draft`       |                    | `bool`         |
///
/// Any other field is kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EntryMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pub_date: Option<DateTimeUtc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_date: Option<DateTimeUtc>,
    #[serde(deserialize_with = "deserialize_list")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "deserialize_list")]
    pub categories: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub draft: bool,
    #[serde(flatten)]
    pub extra: JsonMap,
}

/// Frontmatter key spellings mapped to their canonical field name.
pub(super) const KEY_ALIASES: &[(&str, &str)] = &[
    ("pub_date", "pubDate"),
    ("pubdate", "pubDate"),
    ("date", "pubDate"),
    ("updated_date", "updatedDate"),
    ("updateddate", "updatedDate"),
    ("summary", "description"),
];

/// Accept a list, a single string, or `null`.
fn deserialize_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        Some(OneOrMany::One(s)) if s.trim().is_empty() => Vec::new(),
        Some(OneOrMany::One(s)) => vec![s.trim().to_string()],
        Some(OneOrMany::Many(v)) => v,
        None => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_default() {
        let meta = EntryMeta::default();
        assert!(meta.title.is_none());
        assert!(!meta.draft);
        assert!(meta.tags.is_empty());
    }

    #[test]
    fn test_meta_deserialize() {
        let json = r#"{"title": "Hello", "draft": true, "tags": ["rust"], "categories": "notes",
                       "pubDate": "2024-01-15", "custom": 42}"#;
        let meta: EntryMeta = serde_json::from_str(json).unwrap();
        assert_eq!(meta.title.as_deref(), Some("Hello"));
        assert!(meta.draft);
        assert_eq!(meta.tags, vec!["rust"]);
        assert_eq!(meta.categories, vec!["notes"]);
        assert_eq!(meta.pub_date, Some(DateTimeUtc::from_ymd(2024, 1, 15)));
        assert_eq!(meta.extra.get("custom").and_then(|v| v.as_i64()), Some(42));
    }

    #[test]
    fn test_meta_null_tags() {
        let meta: EntryMeta = serde_json::from_str(r#"{"tags": null}"#).unwrap();
        assert!(meta.tags.is_empty());
    }

    #[test]
    fn test_entry_serializes_without_body() {
        let entry = ContentEntry::new("a/b", EntryMeta::default(), "# secret");
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"id\":\"a/b\""));
        assert!(json.contains("\"data\""));
        assert!(!json.contains("secret"));
    }

    #[test]
    fn test_date_or_epoch() {
        let entry = ContentEntry::new("a", EntryMeta::default(), "");
        assert_eq!(entry.date_or_epoch(), DateTimeUtc::EPOCH);
    }
}
