//! The check trait for defining validation passes.

use crate::context::ValidationContext;
use crate::types::Issue;

/// A validation pass over the loaded documents.
///
/// Checks never stop at the first problem: every issue found is returned, in
/// document order, and the validator concatenates the results of all checks.
///
/// # Example
///
/// ```ignore
/// use asset_lint_core::{Check, Issue, IssueKind, Subject, ValidationContext};
///
/// pub struct NoEmptyRegistry;
///
/// impl Check for NoEmptyRegistry {
///     fn name(&self) -> &'static str { "no-empty-registry" }
///     fn code(&self) -> &'static str { "AV100" }
///
///     fn check(&self, ctx: &ValidationContext) -> Vec<Issue> {
///         if ctx.registry.is_empty() {
///             vec![Issue::new(
///                 "registry.empty",
///                 self.name(),
///                 IssueKind::Schema,
///                 Subject::file("assets/types.json"),
///                 "registry has no types",
///             )]
///         } else {
///             vec![]
///         }
///     }
/// }
/// ```
pub trait Check: Send + Sync {
    /// Returns the kebab-case name of this check (e.g., "locations").
    fn name(&self) -> &'static str;

    /// Returns the check code (e.g., "AV002").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this check verifies.
    fn description(&self) -> &'static str {
        ""
    }

    /// Whether this check only makes sense with media file checks enabled.
    fn requires_files(&self) -> bool {
        false
    }

    /// Runs the check and returns every issue found.
    fn check(&self, ctx: &ValidationContext) -> Vec<Issue>;
}

/// Type alias for boxed Check trait objects.
pub type CheckBox = Box<dyn Check>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{LocationDataset, TypeRegistry};
    use crate::types::{IssueKind, Subject};
    use std::path::Path;

    struct TestCheck;

    impl Check for TestCheck {
        fn name(&self) -> &'static str {
            "test-check"
        }
        fn code(&self) -> &'static str {
            "TEST001"
        }
        fn description(&self) -> &'static str {
            "A test check"
        }

        fn check(&self, ctx: &ValidationContext) -> Vec<Issue> {
            vec![Issue::new(
                "test.issue",
                self.name(),
                IssueKind::Schema,
                Subject::file(ctx.root.display().to_string()),
                "Test issue",
            )]
        }
    }

    #[test]
    fn test_check_trait() {
        let check = TestCheck;
        assert_eq!(check.name(), "test-check");
        assert_eq!(check.code(), "TEST001");
        assert!(!check.requires_files());

        let registry = TypeRegistry::default();
        let dataset = LocationDataset::default();
        let ctx = ValidationContext::new(Path::new("root"), &registry, &dataset);
        let issues = check.check(&ctx);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].check, "test-check");
    }
}
