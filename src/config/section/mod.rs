//! Configuration section definitions.
//!
//! Each module corresponds to a section in `lectern.toml`:
//!
//! | Module    | TOML Section  | Purpose                                   |
//! |-----------|---------------|-------------------------------------------|
//! | `build`   | `[build]`     | Content/output paths, deployment base     |
//! | `footer`  | `[footer]`    | Footer text and links                     |
//! | `i18n`    | `[i18n]`      | Locales, routing policy, overrides        |
//! | `routes`  | `[routes]`    | Route family toggles                      |
//! | `sidebar` | `[sidebar]`   | Sidebar groups                            |
//! | `site`    | `[site]`      | Site metadata, social, menu, layout       |
//! | `widgets` | `[widgets]`   | Recent posts / tags / archive widget size |

mod build;
mod footer;
mod i18n;
mod routes;
mod sidebar;
mod site;
mod widgets;

pub use build::BuildConfig;
pub use footer::{FooterConfig, FooterLink, FooterPatch};
pub use i18n::{I18nConfig, Locale, LocaleOverrides, RoutingConfig, TextDirection};
pub use routes::RoutesConfig;
pub use sidebar::{
    BadgeType, DividerGroup, ManualGroup, MixedGroup, ScanGroup, SidebarConfig, SidebarGroup,
    SidebarItem, SidebarPatch, SortBy, SortOrder,
};
pub use site::{
    LayoutConfig, LayoutPatch, MenuItem, SiteInfoConfig, SitePatch, SocialConfig, SocialPatch,
};
pub use widgets::WidgetsConfig;
