//! Check for type registry entries.
//!
//! # Detected Problems
//!
//! - entry that is not an object
//! - `icon` missing, not a string, or blank
//! - `icon` not found on disk (file checks only)
//! - `zoom` missing, not numeric, or not strictly positive
//!
//! Every condition is reported on its own, so one entry may raise several issues.

use asset_lint_core::document::{Field, TypeShape};
use asset_lint_core::{Check, Issue, IssueKind, Subject, ValidationContext};

/// Check code for type-registry.
pub const CODE: &str = "AV001";

/// Check name for type-registry.
pub const NAME: &str = "type-registry";

/// Validates every entry of the type registry.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistryCheck;

impl TypeRegistryCheck {
    /// Creates a new check.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Check for TypeRegistryCheck {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Validates icon and zoom of every location type"
    }

    fn check(&self, ctx: &ValidationContext) -> Vec<Issue> {
        let mut issues = Vec::new();

        for (name, shape) in ctx.registry.iter() {
            let definition = match shape {
                TypeShape::Definition(definition) => definition,
                TypeShape::NotRecord(value) => {
                    issues.push(issue(
                        "type.invalid",
                        IssueKind::Schema,
                        name,
                        format!("definition must be an object (got {value})"),
                    ));
                    continue;
                }
            };

            match definition.icon.non_empty() {
                None => issues.push(issue(
                    "type.icon.invalid",
                    IssueKind::Schema,
                    name,
                    "field 'icon' is missing or invalid",
                )),
                Some(icon) if ctx.should_check_file(icon) && !ctx.media_exists(icon) => {
                    issues.push(issue(
                        "type.icon.not_found",
                        IssueKind::MissingFile,
                        name,
                        format!("icon not found ({icon})"),
                    ));
                }
                Some(_) => {}
            }

            match &definition.zoom {
                Field::Absent => issues.push(issue(
                    "type.zoom.missing",
                    IssueKind::Schema,
                    name,
                    "field 'zoom' is missing",
                )),
                Field::Malformed(value) => issues.push(issue(
                    "type.zoom.type",
                    IssueKind::Schema,
                    name,
                    format!("field 'zoom' must be numeric (got {value})"),
                )),
                Field::Present(zoom) if *zoom <= 0.0 => issues.push(issue(
                    "type.zoom.range",
                    IssueKind::Schema,
                    name,
                    format!("field 'zoom' must be strictly positive (got {zoom})"),
                )),
                Field::Present(_) => {}
            }
        }

        issues
    }
}

fn issue(code: &str, kind: IssueKind, type_name: &str, message: impl Into<String>) -> Issue {
    Issue::new(code, NAME, kind, Subject::of_type(type_name), message)
}
