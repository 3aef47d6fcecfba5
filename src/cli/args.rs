//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Site configuration tool for the docs generator
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config overlay path (default: docsite.toml, searched upward)
    #[arg(short = 'C', long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the site config as JSON for the generator
    #[command(visible_alias = "e")]
    Export {
        #[command(flatten)]
        args: ExportArgs,
    },

    /// Check links, branding fields and search credentials
    #[command(visible_alias = "v")]
    Validate,

    /// Show which search environment variables are set
    Env,
}

/// Export command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ExportArgs {
    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Keep the admin search key (build-time indexing only, never ship to clients)
    #[arg(long)]
    pub include_secrets: bool,

    /// Refuse to export when validation finds errors
    #[arg(short, long)]
    pub strict: bool,
}

impl Cli {
    /// Whether the command needs the site record loaded.
    pub const fn needs_config(&self) -> bool {
        !matches!(self.command, Commands::Env)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_export_flags() {
        let cli = Cli::try_parse_from([
            "docsite",
            "-C",
            "site/docsite.toml",
            "export",
            "--pretty",
            "--include-secrets",
            "-o",
            "config.json",
        ])
        .unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("site/docsite.toml")));
        match cli.command {
            Commands::Export { args } => {
                assert!(args.pretty);
                assert!(args.include_secrets);
                assert!(!args.strict);
                assert_eq!(args.output, Some(PathBuf::from("config.json")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["docsite", "validate", "--verbose", "--color", "never"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.color, ColorChoice::Never));
        assert!(cli.needs_config());
    }

    #[test]
    fn test_verbose_short_flag_is_lowercase() {
        let cli = Cli::try_parse_from(["docsite", "-v", "env"]).unwrap();
        assert!(cli.verbose);
        assert!(Cli::try_parse_from(["docsite", "-V"]).is_err());
    }

    #[test]
    fn test_env_needs_no_config() {
        let cli = Cli::try_parse_from(["docsite", "env"]).unwrap();
        assert!(!cli.needs_config());
    }
}
