//! Site configuration management for `lectern.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! ├── types/         # ConfigError, ConfigDiagnostics, FieldPath
//! ├── merge.rs       # Merge trait + deep_merge for locale overrides
//! ├── util.rs        # Config discovery, URL helpers
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section        | Purpose                                        |
//! |----------------|------------------------------------------------|
//! | `[site]`       | Site metadata, social links, menu, layout      |
//! | `[footer]`     | Footer text and links                          |
//! | `[sidebar]`    | Sidebar groups (scan, manual, mixed, divider)  |
//! | `[i18n]`       | Locales, routing policy, per-locale overrides  |
//! | `[routes]`     | Which route families are injected              |
//! | `[build]`      | Content/output directories, deployment base    |
//! | `[widgets]`    | Widget sizes                                   |
//!
//! The loaded `SiteConfig` is never mutated after `load`; locale views are
//! produced by merging (see [`crate::i18n::locale_config`]).

pub mod merge;
pub mod section;
pub mod types;
mod util;

use util::{extract_url_path, find_config_file};

pub use section::*;
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};

use crate::{
    cli::{BuildArgs, Cli, Commands},
    log,
};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing lectern.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    pub site: SiteInfoConfig,
    pub footer: FooterConfig,
    pub sidebar: SidebarConfig,
    pub i18n: I18nConfig,
    pub routes: RoutesConfig,
    pub build: BuildConfig,
    pub widgets: WidgetsConfig,
}

impl SiteConfig {
    const SITE_URL: &'static str = "site.url";
    const BUILD_BASE: &'static str = "build.base";

    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd to find the config file. The project root
    /// is the config file's parent directory.
    pub fn load(cli: &Cli) -> Result<Self> {
        let config_path = find_config_file(&cli.config).with_context(|| {
            format!(
                "config file '{}' not found in the current directory or any parent",
                cli.config.display()
            )
        })?;

        let mut config = Self::from_path(&config_path)?;
        config.config_path = config_path;

        let root = config
            .config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        config.apply_cli(cli);
        config.finalize(&root);
        config.validate()?;

        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply command-specific configuration options.
    fn apply_cli(&mut self, cli: &Cli) {
        Self::update_option(&mut self.build.content, cli.content.as_ref());
        Self::update_option(&mut self.build.output, cli.output.as_ref());

        if let Commands::Build { build_args } = &cli.command {
            self.apply_build_args(build_args);
        }
    }

    /// Apply build arguments from CLI.
    fn apply_build_args(&mut self, args: &BuildArgs) {
        self.build.clean = args.clean;
        Self::update_option(&mut self.routes.rss, args.rss.as_ref());
        Self::update_option(&mut self.routes.search, args.search.as_ref());

        // Override site URL if provided via CLI; base is derived from it
        // in sync_base_from_url()
        if let Some(ref url) = args.site_url {
            self.site.url = Some(url.clone());
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // normalization
    // ========================================================================

    /// Resolve paths against `root` and fill derived defaults.
    pub fn finalize(&mut self, root: &Path) {
        self.root = root.to_path_buf();
        self.build.content = Self::resolve_path(&self.build.content, root);
        self.build.output = Self::resolve_path(&self.build.output, root);
        self.sync_base_from_url();
        self.i18n.normalize();
    }

    /// Expand `~` and join relative paths onto the project root.
    fn resolve_path(path: &Path, root: &Path) -> PathBuf {
        let expanded = shellexpand::tilde(&path.to_string_lossy()).into_owned();
        let path = PathBuf::from(expanded);
        if path.is_relative() {
            root.join(path)
        } else {
            path
        }
    }

    /// Derive `build.base` from the path component of `site.url`.
    ///
    /// `https://example.github.io/my-blog` deploys under `/my-blog`.
    fn sync_base_from_url(&mut self) {
        if !self.build.base.is_empty() {
            return;
        }
        if let Some(ref url) = self.site.url
            && let Some(path) = extract_url_path(url)
            && !path.is_empty()
        {
            self.build.base = format!("/{path}");
        }
    }

    /// Deployment base without trailing slash; empty for root deployments.
    pub fn base(&self) -> &str {
        self.build.base.trim_end_matches('/')
    }

    /// Absolute site origin + base, without trailing slash.
    pub fn site_url(&self) -> &str {
        self.site
            .url
            .as_deref()
            .unwrap_or_default()
            .trim_end_matches('/')
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration, collecting all errors before failing.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.i18n.validate(&mut diag);
        self.validate_site_url(&mut diag);

        if !self.build.base.is_empty() && !self.build.base.starts_with('/') {
            diag.error_with_hint(
                Self::BUILD_BASE,
                format!("base `{}` must start with `/`", self.build.base),
                format!("use \"/{}\"", self.build.base),
            );
        }

        diag.print_warnings();
        match diag.into_result() {
            Ok(()) => Ok(()),
            Err(diag) => bail!(ConfigError::Diagnostics(diag)),
        }
    }

    /// RSS links are absolute, so the feed needs a valid `site.url`.
    fn validate_site_url(&self, diag: &mut ConfigDiagnostics) {
        let Some(url_str) = &self.site.url else {
            if self.routes.rss {
                diag.error_with_hint(
                    Self::SITE_URL,
                    "`routes.rss` is enabled but `site.url` is not configured",
                    "set site.url, e.g.: \"https://example.com\", or disable routes.rss",
                );
            }
            return;
        };

        match url::Url::parse(url_str) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        Self::SITE_URL,
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://example.com",
                    );
                }
                if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        Self::SITE_URL,
                        "URL must have a valid host",
                        "use format like https://example.com",
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    Self::SITE_URL,
                    format!("invalid URL: {}", e),
                    "use format like https://example.com",
                );
            }
        }
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with a minimal `[site]` table.
/// Panics on unknown fields to catch config typos in tests.
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!("[site]\ntitle = \"Test\"\nurl = \"https://example.com\"\n{extra}");
    let (mut parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed.finalize(Path::new("/site"));
    parsed
}

// ============================================================================
// tests
// ============================================================================
