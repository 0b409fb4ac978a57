//! RSS 2.0 feed generation.
//!
//! One feed per locale, built from the non-draft entries under the locale's
//! content prefix. Item links are absolute, so `site.url` must be set.

use crate::{
    config::SiteConfig,
    content::ContentEntry,
    i18n::{filter_by_locale, locale_config, locale_prefix},
    log,
    utils::date::DateTimeUtc,
};
use anyhow::{Context, Result, anyhow};
use rss::{
    Category, CategoryBuilder, Channel, ChannelBuilder, GuidBuilder, Item, ItemBuilder,
    validation::Validate,
};
use std::{cmp::Reverse, fs, path::Path};

/// Build the feed channel of `locale`.
///
/// `now` stands in for missing dates: items without `pubDate` and the
/// `lastBuildDate` of an empty or undated feed.
pub fn build_rss(
    config: &SiteConfig,
    locale: &str,
    entries: &[ContentEntry],
    now: DateTimeUtc,
) -> Result<Channel> {
    RssFeed::new(config, locale, entries, now).into_channel()
}

/// Build, validate and write the feed of `locale` to `path`.
pub fn write_rss(
    config: &SiteConfig,
    locale: &str,
    entries: &[ContentEntry],
    path: &Path,
) -> Result<()> {
    let channel = build_rss(config, locale, entries, DateTimeUtc::now())?;
    let items = channel.items().len();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(path, channel.to_string())
        .with_context(|| format!("failed to write {}", path.display()))?;

    log!("rss"; "{} ({} items, {})", path.display(), items, locale);
    Ok(())
}

struct RssFeed<'a> {
    config: &'a SiteConfig,
    locale: &'a str,
    entries: Vec<&'a ContentEntry>,
    now: DateTimeUtc,
}

impl<'a> RssFeed<'a> {
    fn new(
        config: &'a SiteConfig,
        locale: &'a str,
        entries: &'a [ContentEntry],
        now: DateTimeUtc,
    ) -> Self {
        let mut entries: Vec<_> = filter_by_locale(entries, locale, &config.i18n, |e| e.id.as_str())
            .into_iter()
            .filter(|e| !e.is_draft())
            .collect();
        // stable: equal dates keep id order
        entries.sort_by_key(|e| Reverse(e.date_or_epoch()));

        Self {
            config,
            locale,
            entries,
            now,
        }
    }

    /// Absolute URL prefix of this locale's posts.
    fn posts_url(&self) -> String {
        format!(
            "{}{}/posts",
            self.config.site_url(),
            locale_prefix(self.locale, &self.config.i18n, None)
        )
    }

    fn last_build_date(&self) -> DateTimeUtc {
        self.entries
            .iter()
            .filter_map(|e| e.meta.pub_date)
            .max()
            .unwrap_or(self.now)
    }

    fn into_channel(self) -> Result<Channel> {
        let merged = locale_config(self.locale, self.config);
        let posts_url = self.posts_url();

        let items: Vec<Item> = self
            .entries
            .iter()
            .map(|entry| entry_to_item(entry, &posts_url, self.now))
            .collect();

        let channel = ChannelBuilder::default()
            .title(merged.site.title)
            .link(format!("{}/", self.config.site_url()))
            .description(merged.site.description)
            .language(Some(merged.locale.html_lang))
            .last_build_date(Some(self.last_build_date().to_rfc2822()))
            .generator(Some(format!("lectern {}", env!("CARGO_PKG_VERSION"))))
            .items(items)
            .build();

        channel
            .validate()
            .map_err(|e| anyhow!("RSS validation failed for `{}`: {e}", self.locale))?;
        Ok(channel)
    }
}

fn entry_to_item(entry: &ContentEntry, posts_url: &str, now: DateTimeUtc) -> Item {
    let link = format!("{posts_url}/{}/", entry.id.to_lowercase());
    let pub_date = entry.meta.pub_date.unwrap_or(now);

    let categories: Vec<Category> = entry
        .meta
        .categories
        .iter()
        .chain(&entry.meta.tags)
        .map(|name| CategoryBuilder::default().name(name.clone()).build())
        .collect();

    ItemBuilder::default()
        .title(Some(entry.title().to_string()))
        .link(Some(link.clone()))
        .guid(Some(GuidBuilder::default().permalink(true).value(link).build()))
        .description(Some(entry.description().to_string()))
        .pub_date(Some(pub_date.to_rfc2822()))
        .author(entry.meta.author.clone())
        .categories(categories)
        .build()
}
