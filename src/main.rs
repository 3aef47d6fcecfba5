//! docsite - typed site configuration for the docs generator.

#![allow(dead_code)]

mod cli;
mod config;
mod logger;
mod utils;

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::{DEFAULT_CONFIG_NAME, ProcessEnv, SiteConfig};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    if !cli.needs_config() {
        return cli::env::run_env(&ProcessEnv);
    }

    let config = load_config(&cli)?;

    match &cli.command {
        Commands::Export { args } => cli::export::run_export(args, &config),
        Commands::Validate => cli::validate::validate_site(&config),
        Commands::Env => cli::env::run_env(&ProcessEnv),
    }
}

/// Load the record once; it is passed explicitly to every command.
fn load_config(cli: &Cli) -> Result<SiteConfig> {
    let cwd = std::env::current_dir().context("Failed to get current working directory")?;
    let path = SiteConfig::resolve_path(cli.config.as_deref(), &cwd)?;

    match &path {
        Some(path) => debug!("config"; "using {}", path.display()),
        None => debug!("config"; "no {} found, using built-in defaults", DEFAULT_CONFIG_NAME),
    }

    SiteConfig::load(path.as_deref(), &ProcessEnv)
}
