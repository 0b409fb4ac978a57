//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Lectern blog theme data generator CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Output directory path (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Content directory path (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub content: Option<PathBuf>,

    /// Config file path (default: lectern.toml)
    #[arg(short = 'C', long, default_value = "lectern.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Generate feeds, search indexes and theme data for every locale
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },

    /// Print the injected route table
    #[command(visible_alias = "r")]
    Routes {
        /// Print JSON instead of a table
        #[arg(short, long)]
        json: bool,
    },

    /// Print the sidebar visible at a page path
    #[command(visible_alias = "s")]
    Sidebar {
        /// Page path used for group visibility (all groups when omitted)
        path: Option<String>,

        /// Locale whose sidebar to print (default: resolved from PATH)
        #[arg(short, long)]
        locale: Option<String>,

        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Resolve the locale of a page path
    #[command(visible_alias = "l")]
    Locale {
        /// Page path, e.g. /zh-CN/posts/hello
        path: String,

        /// Site origin used for alternate links (default: site.url)
        #[arg(short = 'U', long = "base-url", value_hint = clap::ValueHint::Url)]
        base_url: Option<String>,
    },
}

/// Build command arguments
#[derive(clap::Args, Debug, Clone)]
pub struct BuildArgs {
    /// Clean output directory completely before building
    #[arg(short, long)]
    pub clean: bool,

    /// Enable RSS feed generation
    #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub rss: Option<bool>,

    /// Enable search index generation
    #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub search: Option<bool>,

    /// Override site URL for deployment.
    ///
    /// Useful for CI/CD deployments where the production URL differs from
    /// local development, without modifying lectern.toml.
    ///
    /// The path component becomes `build.base` for subdirectory deployments.
    ///
    /// Example: deploying to a GitHub Pages project site:
    ///   lectern build --site-url "https://me.github.io/blog"
    #[arg(short = 'U', long = "site-url", value_hint = clap::ValueHint::Url)]
    pub site_url: Option<String>,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

impl Cli {
    /// `--verbose` of the build command.
    pub fn verbose(&self) -> bool {
        matches!(self.command, Commands::Build { ref build_args } if build_args.verbose)
    }
}
