//! asset-lint CLI tool.
//!
//! Usage:
//! ```bash
//! asset-lint check [OPTIONS] [PATH]
//! asset-lint list-checks
//! asset-lint init
//! ```

use anyhow::Result;
use asset_lint_checks::Preset;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

/// Validator for interactive map assets: type registry, locations and media files
#[derive(Parser)]
#[command(name = "asset-lint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the type registry, the location dataset and media files
    Check {
        /// Project root; media references resolve against it (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Type registry file (default: <PATH>/assets/types.json)
        #[arg(long)]
        types: Option<PathBuf>,

        /// Location dataset file (default: <PATH>/assets/locations.json)
        #[arg(long)]
        locations: Option<PathBuf>,

        /// Skip media existence checks and unused-media detection
        #[arg(
            long = "no-files",
            visible_alias = "skip-file-checks",
            env = "ASSET_LINT_SKIP_FILE_CHECKS"
        )]
        no_files: bool,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Check preset to run
        #[arg(long, default_value = "full", conflicts_with = "checks")]
        preset: PresetArg,

        /// Only run specific checks (comma-separated names or codes)
        #[arg(long)]
        checks: Option<String>,
    },

    /// List available checks
    ListChecks,

    /// Initialize configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

/// Output format for validation reports.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text report with summary.
    #[default]
    Text,
    /// One diagnostic per issue, rendered with miette.
    Pretty,
    /// JSON output.
    Json,
    /// One-line-per-issue compact format.
    Compact,
}

/// Check preset selection.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum PresetArg {
    /// Every check (AV001, AV002, AV003).
    #[default]
    Full,
    /// Document checks only (AV001, AV002).
    Structural,
}

impl From<PresetArg> for Preset {
    fn from(arg: PresetArg) -> Self {
        match arg {
            PresetArg::Full => Self::Full,
            PresetArg::Structural => Self::Structural,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Check {
            path,
            types,
            locations,
            no_files,
            format,
            preset,
            checks,
        } => {
            let source = config_resolver::resolve(&path, cli.config.as_deref());
            let args = commands::check::CheckArgs {
                root: path,
                types,
                locations,
                no_files,
                format,
                preset: preset.into(),
                checks,
            };
            commands::check::run(&args, &source)
        }
        Commands::ListChecks => {
            commands::list_checks::run();
            Ok(())
        }
        Commands::Init { force } => commands::init::run(force),
    }
}
