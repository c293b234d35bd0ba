//! Check command implementation.

use anyhow::Result;
use asset_lint_checks::{find_check, select_checks, Preset};
use asset_lint_core::{CheckBox, ValidateError, Validator};
use std::path::PathBuf;

use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// Exit status when the run finds issues.
const EXIT_ISSUES: i32 = 1;

/// Exit status when the run cannot complete.
const EXIT_FATAL: i32 = 2;

/// Arguments of the check command.
pub struct CheckArgs {
    /// Project root.
    pub root: PathBuf,
    /// Type registry override.
    pub types: Option<PathBuf>,
    /// Location dataset override.
    pub locations: Option<PathBuf>,
    /// Disables media checks.
    pub no_files: bool,
    /// Report format.
    pub format: OutputFormat,
    /// Check preset, used when no filter is given.
    pub preset: Preset,
    /// Comma-separated check filter.
    pub checks: Option<String>,
}

/// Runs the check command.
///
/// Exits with status 1 when issues are found and status 2 when the config
/// or a document cannot be loaded or the media directory cannot be scanned.
pub fn run(args: &CheckArgs, source: &ConfigSource) -> Result<()> {
    let config = match source.load() {
        Ok(config) => config,
        Err(err) => fatal(err),
    };

    let mut builder = Validator::builder().root(&args.root).config(config);

    if let Some(types) = &args.types {
        builder = builder.types_path(types);
    }
    if let Some(locations) = &args.locations {
        builder = builder.locations_path(locations);
    }
    if args.no_files {
        builder = builder.check_files(false);
    }

    let checks = match &args.checks {
        Some(filter) => filter_checks(filter),
        None => args.preset.checks(),
    };
    for check in checks {
        builder = builder.check_box(check);
    }

    let validator = match builder.build() {
        Ok(validator) => validator,
        Err(err) => fatal(err),
    };

    tracing::info!(
        "Validating {} with {} check(s){}",
        validator.root().display(),
        validator.check_count(),
        if validator.checks_files() {
            ""
        } else {
            " (file checks off)"
        }
    );

    let report = match validator.validate() {
        Ok(report) => report,
        Err(err) => fatal(err),
    };

    super::output::print(&report, args.format)?;

    if report.has_issues() {
        std::process::exit(EXIT_ISSUES);
    }

    Ok(())
}

fn fatal(err: ValidateError) -> ! {
    eprintln!("{:?}", miette::Report::new(err));
    std::process::exit(EXIT_FATAL);
}

/// Selects the requested checks in run order, each at most once.
fn filter_checks(filter: &str) -> Vec<CheckBox> {
    let requested: Vec<&str> = filter
        .split(',')
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .collect();

    for name in &requested {
        if find_check(name).is_none() {
            tracing::warn!("Unknown check: {}", name);
        }
    }

    select_checks(&requested)
}
