//! Lectern - build-time data layer for a multilingual blog theme.
//!
//! | Module      | Purpose                                             |
//! |-------------|-----------------------------------------------------|
//! | `config`    | `lectern.toml` loading, validation, locale patches  |
//! | `i18n`      | Locale resolution, merged locale configs, UI text   |
//! | `content`   | Markdown entries, frontmatter, widget aggregations  |
//! | `sidebar`   | Sidebar groups and navigation trees                 |
//! | `routes`    | Per-locale route table handed to the host           |
//! | `generator` | RSS feeds and search indexes                        |
//! | `cli`       | Command-line definitions and commands               |

pub mod cli;
pub mod config;
pub mod content;
pub mod generator;
pub mod i18n;
pub mod logger;
pub mod routes;
pub mod sidebar;
pub mod utils;
