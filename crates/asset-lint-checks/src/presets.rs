//! Check presets.

use crate::{LocationsCheck, TypeRegistryCheck, UnusedMediaCheck};
use asset_lint_core::{Check, CheckBox};

/// Preset check selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Every built-in check.
    Full,
    /// Document checks only, without the media inventory.
    Structural,
}

impl Preset {
    /// Returns the checks for this preset.
    #[must_use]
    pub fn checks(self) -> Vec<CheckBox> {
        match self {
            Self::Full => all_checks(),
            Self::Structural => structural_checks(),
        }
    }
}

/// Returns every built-in check in run order.
///
/// - `type-registry` (AV001)
/// - `locations` (AV002)
/// - `unused-media` (AV003)
#[must_use]
pub fn all_checks() -> Vec<CheckBox> {
    vec![
        Box::new(TypeRegistryCheck::new()),
        Box::new(LocationsCheck::new()),
        Box::new(UnusedMediaCheck::new()),
    ]
}

/// Returns the checks that only read the documents.
#[must_use]
pub fn structural_checks() -> Vec<CheckBox> {
    vec![
        Box::new(TypeRegistryCheck::new()),
        Box::new(LocationsCheck::new()),
    ]
}

/// Looks up a built-in check by name or code.
#[must_use]
pub fn find_check(name_or_code: &str) -> Option<CheckBox> {
    all_checks()
        .into_iter()
        .find(|check| is_named(&**check, name_or_code))
}

/// Returns the built-in checks matching any requested name or code.
///
/// The result keeps run order and holds each check at most once, whatever
/// the order or repetition of `requested`.
#[must_use]
pub fn select_checks(requested: &[&str]) -> Vec<CheckBox> {
    all_checks()
        .into_iter()
        .filter(|check| requested.iter().any(|name| is_named(&**check, name)))
        .collect()
}

fn is_named(check: &dyn Check, name_or_code: &str) -> bool {
    check.name() == name_or_code || check.code().eq_ignore_ascii_case(name_or_code)
}
