//! Lectern command-line entry point.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use lectern::{
    cli::{self, Cli, Commands},
    config::SiteConfig,
    logger,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose());

    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Build { .. } => cli::build::build_site(&config).map(|_| ()),
        Commands::Routes { json } => cli::query::run_routes(&config, *json),
        Commands::Sidebar {
            path,
            locale,
            pretty,
        } => cli::query::run_sidebar(&config, path.as_deref(), locale.as_deref(), *pretty),
        Commands::Locale { path, base_url } => {
            cli::query::run_locale(&config, path, base_url.as_deref())
        }
    }
}
