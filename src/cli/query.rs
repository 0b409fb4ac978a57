//! Inspection commands: `routes`, `sidebar` and `locale`.
//!
//! Each command renders to a string first so the output can be tested
//! without capturing stdout.

use super::build::load_entries;
use crate::{
    config::SiteConfig,
    content::ContentEntry,
    i18n::{
        AlternateLink, alternate_links, locale_config, locale_from_path, remove_base,
        strip_locale_prefix, text_direction,
    },
    log,
    routes::route_table,
    sidebar::{ProcessedGroup, process_sidebar},
};
use anyhow::Result;
use std::fmt::Write;

/// Print the route table.
pub fn run_routes(config: &SiteConfig, json: bool) -> Result<()> {
    println!("{}", render_routes(config, json)?);
    Ok(())
}

fn render_routes(config: &SiteConfig, json: bool) -> Result<String> {
    let routes = route_table(config);
    if json {
        return Ok(serde_json::to_string_pretty(&routes)?);
    }

    let width = routes.iter().map(|r| r.pattern.len()).max().unwrap_or_default();
    let mut out = String::new();
    for route in &routes {
        writeln!(out, "{:<width$}  {:<8}  {}", route.pattern, route.locale, route.entrypoint)?;
    }
    write!(out, "{} routes", routes.len())?;
    Ok(out)
}

/// Print the sidebar visible at `path`.
pub fn run_sidebar(
    config: &SiteConfig,
    path: Option<&str>,
    locale: Option<&str>,
    pretty: bool,
) -> Result<()> {
    let entries = load_entries(config)?;
    let groups = sidebar_at(config, &entries, path, locale);
    if groups.is_empty() {
        log!("sidebar"; "no groups visible");
    }
    let json = if pretty {
        serde_json::to_string_pretty(&groups)?
    } else {
        serde_json::to_string(&groups)?
    };
    println!("{json}");
    Ok(())
}

/// Groups for `path` in `locale`, or in the locale resolved from `path`.
fn sidebar_at(
    config: &SiteConfig,
    entries: &[ContentEntry],
    path: Option<&str>,
    locale: Option<&str>,
) -> Vec<ProcessedGroup> {
    let path = path.map(|p| remove_base(p, config.base()));
    let locale = locale.unwrap_or_else(|| match &path {
        Some(p) => locale_from_path(p, &config.i18n),
        None => config.i18n.default_locale.as_str(),
    });
    // visibility rules are written against unprefixed paths
    let page = path.as_deref().map(|p| strip_locale_prefix(p, &config.i18n));

    let visible: Vec<&ContentEntry> = entries.iter().filter(|e| !e.is_draft()).collect();
    let merged = locale_config(locale, config);
    process_sidebar(&merged.sidebar, &visible, page.as_deref())
}

/// Resolved locale information of one path.
#[derive(Debug)]
struct LocaleReport {
    locale: String,
    direction: &'static str,
    path: String,
    alternates: Vec<AlternateLink>,
}

impl LocaleReport {
    fn resolve(config: &SiteConfig, path: &str, base_url: Option<&str>) -> Self {
        let path = remove_base(path, config.base());
        let i18n = &config.i18n;
        let locale = locale_from_path(&path, i18n);
        let base_url = base_url.unwrap_or_else(|| config.site_url());

        Self {
            locale: locale.to_string(),
            direction: text_direction(locale, i18n).as_str(),
            path: strip_locale_prefix(&path, i18n),
            alternates: alternate_links(&path, base_url, i18n),
        }
    }

    fn render(&self) -> Result<String> {
        let mut out = String::new();
        writeln!(out, "locale:    {} ({})", self.locale, self.direction)?;
        writeln!(out, "path:      {}", self.path)?;
        write!(out, "alternate:")?;
        for link in &self.alternates {
            write!(out, "\n  {:<10} {}", link.hreflang, link.url)?;
        }
        Ok(out)
    }
}

/// Print the locale, stripped path and alternates of `path`.
pub fn run_locale(config: &SiteConfig, path: &str, base_url: Option<&str>) -> Result<()> {
    println!("{}", LocaleReport::resolve(config, path, base_url).render()?);
    Ok(())
}
