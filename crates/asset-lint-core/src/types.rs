//! Core types for validation issues and results.

use miette::Diagnostic;
use serde::{Deserialize, Serialize};

/// Category of a validation issue.
///
/// There are no severity levels: every issue fails the run. The kind only
/// drives the summary counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueKind {
    /// A field is missing or has the wrong shape.
    Schema,
    /// A referenced media file does not exist on disk.
    MissingFile,
    /// A location name is used more than once.
    Duplicate,
    /// A location references a type absent from the registry.
    UnknownType,
    /// A legacy field that must be migrated is still present.
    Legacy,
    /// A file under the media directory is never referenced.
    UnusedMedia,
}

impl std::fmt::Display for IssueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Schema => write!(f, "schema"),
            Self::MissingFile => write!(f, "missing-file"),
            Self::Duplicate => write!(f, "duplicate"),
            Self::UnknownType => write!(f, "unknown-type"),
            Self::Legacy => write!(f, "legacy"),
            Self::UnusedMedia => write!(f, "unused-media"),
        }
    }
}

/// What an issue is about, with enough context to find it in the documents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "scope", rename_all = "lowercase")]
pub enum Subject {
    /// An entry of the type registry.
    Type {
        /// Registry key.
        name: String,
    },
    /// A continent of the location dataset as a whole.
    Continent {
        /// Continent key as written in the dataset.
        name: String,
    },
    /// A single location entry.
    Entry {
        /// Continent the entry belongs to.
        continent: String,
        /// Zero-based position inside the continent list.
        index: usize,
        /// Trimmed entry name, when one could be read.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    },
    /// A file on disk, relative to the project root.
    File {
        /// Normalized `/`-separated path.
        path: String,
    },
}

impl Subject {
    /// Creates a type subject.
    #[must_use]
    pub fn of_type(name: impl Into<String>) -> Self {
        Self::Type { name: name.into() }
    }

    /// Creates a continent subject.
    #[must_use]
    pub fn continent(name: impl Into<String>) -> Self {
        Self::Continent { name: name.into() }
    }

    /// Creates an entry subject.
    #[must_use]
    pub fn entry(continent: impl Into<String>, index: usize, name: Option<&str>) -> Self {
        Self::Entry {
            continent: continent.into(),
            index,
            name: name.map(str::to_string),
        }
    }

    /// Creates a file subject.
    #[must_use]
    pub fn file(path: impl Into<String>) -> Self {
        Self::File { path: path.into() }
    }
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Type { name } => write!(f, "type '{name}'"),
            Self::Continent { name } => write!(f, "continent '{name}'"),
            Self::Entry {
                continent,
                index,
                name: Some(name),
            } => write!(f, "{continent}[{index}] '{name}'"),
            Self::Entry {
                continent,
                index,
                name: None,
            } => write!(f, "{continent}[{index}]"),
            Self::File { path } => write!(f, "{path}"),
        }
    }
}

/// A validation problem found during a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Stable issue code (e.g., "location.type.unknown").
    pub code: String,
    /// Name of the check that raised it (e.g., "locations").
    pub check: String,
    /// Issue category.
    pub kind: IssueKind,
    /// What the issue is about.
    pub subject: Subject,
    /// Human-readable message.
    pub message: String,
}

impl Issue {
    /// Creates a new issue.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        check: impl Into<String>,
        kind: IssueKind,
        subject: Subject,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            check: check.into(),
            kind,
            subject,
            message: message.into(),
        }
    }

    /// Returns true if the issue reports a referenced file that is missing.
    #[must_use]
    pub fn is_missing_file(&self) -> bool {
        self.kind == IssueKind::MissingFile
    }
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.subject, self.message)
    }
}

/// Renders an issue through miette for rich terminal output.
#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("{subject}: {message}")]
#[diagnostic(code(asset_lint::issue))]
pub struct IssueDiagnostic {
    subject: String,
    message: String,
    #[help]
    help: Option<String>,
}

impl From<&Issue> for IssueDiagnostic {
    fn from(issue: &Issue) -> Self {
        Self {
            subject: issue.subject.to_string(),
            message: issue.message.clone(),
            help: Some(format!("[{}] raised by check '{}'", issue.code, issue.check)),
        }
    }
}

/// Result of a validation run.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    /// All issues, in pass order then document order.
    pub issues: Vec<Issue>,
    /// Number of entries in the type registry.
    pub types_checked: usize,
    /// Number of location entries across all well-formed continents.
    pub locations_checked: usize,
    /// Whether media existence checks were enabled for this run.
    pub files_checked: bool,
}

impl ValidationReport {
    /// Creates a new empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the run found no issue.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.issues.is_empty()
    }

    /// Returns true if there are any issues.
    #[must_use]
    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }

    /// Counts issues that report a missing media file.
    #[must_use]
    pub fn missing_file_count(&self) -> usize {
        self.issues.iter().filter(|i| i.is_missing_file()).count()
    }

    /// Returns issues of a given kind.
    #[must_use]
    pub fn by_kind(&self, kind: IssueKind) -> Vec<&Issue> {
        self.issues.iter().filter(|i| i.kind == kind).collect()
    }

    /// Returns issues with a given code.
    #[must_use]
    pub fn by_code(&self, code: &str) -> Vec<&Issue> {
        self.issues.iter().filter(|i| i.code == code).collect()
    }

    /// Formats the plain-text report: issue list or confirmation, then summary.
    #[must_use]
    pub fn format_report(&self) -> String {
        use std::fmt::Write;

        let mut report = String::new();
        if self.issues.is_empty() {
            let _ = writeln!(report, "No problems found");
        } else {
            let _ = writeln!(report, "Problems found ({}):", self.issues.len());
            for issue in &self.issues {
                let _ = writeln!(report, " - {issue}");
            }
        }
        let _ = writeln!(report, "{}", self.summary_line());
        let missing = self.missing_file_count();
        if missing > 0 {
            let _ = writeln!(report, "- {missing} missing media file(s)");
        }
        report
    }

    /// One-line numeric summary.
    #[must_use]
    pub fn summary_line(&self) -> String {
        format!(
            "Summary: {} type(s), {} location(s) analyzed.",
            self.types_checked, self.locations_checked
        )
    }
}
