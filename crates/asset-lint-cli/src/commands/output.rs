//! Shared output formatting for validation reports.

use anyhow::Result;
use asset_lint_core::{IssueDiagnostic, ValidationReport};

use crate::OutputFormat;

/// Print a validation report in the specified format.
pub fn print(report: &ValidationReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print!("{}", report.format_report()),
        OutputFormat::Pretty => print_pretty(report),
        OutputFormat::Json => return print_json(report),
        OutputFormat::Compact => print!("{}", format_compact(report)),
    }
    Ok(())
}

fn print_pretty(report: &ValidationReport) {
    for issue in &report.issues {
        let diagnostic = miette::Report::new(IssueDiagnostic::from(issue));
        println!("{diagnostic:?}");
    }

    let summary_color = if report.has_issues() {
        "\x1b[31m"
    } else {
        "\x1b[32m"
    };
    let missing = report.missing_file_count();

    println!(
        "{}Found {} problem(s) ({} missing media file(s)) in {} type(s) and {} location(s)\x1b[0m",
        summary_color,
        report.issues.len(),
        missing,
        report.types_checked,
        report.locations_checked
    );
}

fn print_json(report: &ValidationReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    println!("{json}");
    Ok(())
}

fn format_compact(report: &ValidationReport) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    for issue in &report.issues {
        let _ = writeln!(out, "[{}] {}: {}", issue.code, issue.subject, issue.message);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use asset_lint_core::{Issue, IssueKind, Subject};

    #[test]
    fn compact_is_one_line_per_issue() {
        let mut report = ValidationReport::new();
        report.issues.push(Issue::new(
            "type.zoom.missing",
            "type-registry",
            IssueKind::Schema,
            Subject::of_type("camp"),
            "field 'zoom' is missing",
        ));
        report.issues.push(Issue::new(
            "media.unused",
            "unused-media",
            IssueKind::UnusedMedia,
            Subject::file("assets/old.png"),
            "media file is never referenced",
        ));

        assert_eq!(
            format_compact(&report),
            "[type.zoom.missing] type 'camp': field 'zoom' is missing\n\
             [media.unused] assets/old.png: media file is never referenced\n"
        );
    }

    #[test]
    fn compact_is_empty_without_issues() {
        assert!(format_compact(&ValidationReport::new()).is_empty());
    }
}
