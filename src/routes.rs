//! Route table: one entry per route family pattern × configured locale.
//!
//! | Family       | Patterns                                                   |
//! |--------------|------------------------------------------------------------|
//! | `posts`      | `/posts`, `/posts/page/[page]`, `/posts/[...slug]`         |
//! | `tags`       | `/tags`, `/tags/[tag]`, `/tags/[tag]/page/[page]`          |
//! | `categories` | `/categories`, `/categories/[category]`, `.../page/[page]` |
//! | `archives`   | `/archives`, `/archives/[year]/[month]`, `.../page/[page]` |
//! | `slides`     | `/slides`, `/slides/[...slug]`                             |
//! | `search`     | `/search`, `/search-index.json`                            |
//! | `rss`        | `/rss.xml`                                                 |
//! | `content`    | `/[...slug]` (always on)                                   |
//!
//! Every pattern is prefixed with the locale prefix, so the default locale
//! gets `/posts` and `zh-CN` gets `/zh-CN/posts`.

use crate::{
    config::{RoutesConfig, SiteConfig},
    debug,
    i18n::locale_prefix,
};
use serde::Serialize;

/// Group of related pages toggled together under `[routes]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteFamily {
    Posts,
    Tags,
    Categories,
    Archives,
    Slides,
    Search,
    Rss,
    Content,
}

impl RouteFamily {
    /// Injection order.
    pub const ALL: [Self; 8] = [
        Self::Posts,
        Self::Tags,
        Self::Categories,
        Self::Archives,
        Self::Slides,
        Self::Search,
        Self::Rss,
        Self::Content,
    ];

    /// `(pattern, entrypoint)` pairs, patterns without locale prefix.
    pub const fn routes(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Posts => &[
                ("/posts", "posts/index.astro"),
                ("/posts/page/[page]", "posts/page/[page].astro"),
                ("/posts/[...slug]", "posts/[...slug].astro"),
            ],
            Self::Tags => &[
                ("/tags", "tags/index.astro"),
                ("/tags/[tag]", "tags/[tag].astro"),
                ("/tags/[tag]/page/[page]", "tags/[tag]/page/[page].astro"),
            ],
            Self::Categories => &[
                ("/categories", "categories/index.astro"),
                ("/categories/[category]", "categories/[category].astro"),
                (
                    "/categories/[category]/page/[page]",
                    "categories/[category]/page/[page].astro",
                ),
            ],
            Self::Archives => &[
                ("/archives", "archives/index.astro"),
                ("/archives/[year]/[month]", "archives/[year]/[month].astro"),
                (
                    "/archives/[year]/[month]/page/[page]",
                    "archives/[year]/[month]/page/[page].astro",
                ),
            ],
            Self::Slides => &[
                ("/slides", "slides/index.astro"),
                ("/slides/[...slug]", "slides/[...slug].astro"),
            ],
            Self::Search => &[
                ("/search", "search.astro"),
                ("/search-index.json", "search-index.json.ts"),
            ],
            Self::Rss => &[("/rss.xml", "rss.xml.ts")],
            Self::Content => &[("/[...slug]", "[...slug].astro")],
        }
    }

    pub fn enabled(self, routes: &RoutesConfig) -> bool {
        match self {
            Self::Posts => routes.posts,
            Self::Tags => routes.tags,
            Self::Categories => routes.categories,
            Self::Archives => routes.archives,
            Self::Slides => routes.slides,
            Self::Search => routes.search,
            Self::Rss => routes.rss,
            Self::Content => true,
        }
    }
}

/// One route handed to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InjectedRoute {
    /// Locale-prefixed URL pattern.
    pub pattern: String,
    /// Page template relative to the theme's page directory.
    pub entrypoint: &'static str,
    pub locale: String,
    pub family: RouteFamily,
}

/// Receiver of injected routes.
pub trait RouteSink {
    fn inject(&mut self, route: InjectedRoute);
}

impl RouteSink for Vec<InjectedRoute> {
    fn inject(&mut self, route: InjectedRoute) {
        self.push(route);
    }
}

/// Inject every enabled family, pattern by pattern, for each locale.
///
/// Returns the number of routes injected.
pub fn inject_routes(config: &SiteConfig, sink: &mut impl RouteSink) -> usize {
    let mut count = 0;
    for family in RouteFamily::ALL {
        if !family.enabled(&config.routes) {
            debug!("routes"; "{:?} disabled", family);
            continue;
        }
        for &(pattern, entrypoint) in family.routes() {
            for locale in &config.i18n.locales {
                let prefix = locale_prefix(&locale.code, &config.i18n, None);
                sink.inject(InjectedRoute {
                    pattern: format!("{prefix}{pattern}"),
                    entrypoint,
                    locale: locale.code.clone(),
                    family,
                });
                count += 1;
            }
        }
    }
    debug!("routes"; "injected {} routes for {} locales", count, config.i18n.locales.len());
    count
}

/// Collect the route table into a `Vec`.
pub fn route_table(config: &SiteConfig) -> Vec<InjectedRoute> {
    let mut routes = Vec::new();
    inject_routes(config, &mut routes);
    routes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    const TWO_LOCALES: &str = r#"
[i18n]
default_locale = "en"
[[i18n.locales]]
code = "en"
[[i18n.locales]]
code = "zh-CN"
"#;

    #[test]
    fn test_single_locale_table() {
        let config = test_parse_config("");
        let routes = route_table(&config);

        let total: usize = RouteFamily::ALL.iter().map(|f| f.routes().len()).sum();
        assert_eq!(routes.len(), total);
        assert_eq!(routes[0].pattern, "/posts");
        assert_eq!(routes[0].entrypoint, "posts/index.astro");
        assert_eq!(routes.last().unwrap().pattern, "/[...slug]");
        assert!(routes.iter().all(|r| r.locale == "en"));
    }

    #[test]
    fn test_locale_prefixes() {
        let config = test_parse_config(TWO_LOCALES);
        let routes = route_table(&config);

        assert_eq!(routes[0].pattern, "/posts");
        assert_eq!(routes[1].pattern, "/zh-CN/posts");
        assert_eq!(routes[1].locale, "zh-CN");
        assert!(routes.iter().any(|r| r.pattern == "/zh-CN/rss.xml"));
        assert!(routes.iter().any(|r| r.pattern == "/zh-CN/[...slug]"));
    }

    #[test]
    fn test_prefix_default_locale() {
        let config = test_parse_config(&format!(
            "{TWO_LOCALES}[i18n.routing]\nprefix_default_locale = true\n"
        ));
        let routes = route_table(&config);
        assert_eq!(routes[0].pattern, "/en/posts");
    }

    #[test]
    fn test_disabled_families() {
        let config = test_parse_config("[routes]\nslides = false\nsearch = false\nrss = false\n");
        let routes = route_table(&config);

        assert!(!routes.iter().any(|r| r.pattern.starts_with("/slides")));
        assert!(!routes.iter().any(|r| r.pattern == "/search-index.json"));
        assert!(!routes.iter().any(|r| r.pattern == "/rss.xml"));
        assert!(routes.iter().any(|r| r.family == RouteFamily::Content));
    }

    #[test]
    fn test_custom_sink() {
        struct Counter(usize);
        impl RouteSink for Counter {
            fn inject(&mut self, _route: InjectedRoute) {
                self.0 += 1;
            }
        }

        let config = test_parse_config(TWO_LOCALES);
        let mut counter = Counter(0);
        let count = inject_routes(&config, &mut counter);
        assert_eq!(count, counter.0);
        assert_eq!(count, route_table(&config).len());
    }
}
