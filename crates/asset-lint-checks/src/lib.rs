//! # asset-lint-checks
//!
//! Built-in validation passes for asset-lint.
//!
//! ## Available Checks
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | AV001 | `type-registry` | Icon and zoom of every location type |
//! | AV002 | `locations` | Names, types, coordinates and media fields of every location |
//! | AV003 | `unused-media` | Files under the media directory that nothing references |
//!
//! ## Usage
//!
//! ```ignore
//! use asset_lint_core::Validator;
//! use asset_lint_checks::{LocationsCheck, TypeRegistryCheck};
//!
//! let validator = Validator::builder()
//!     .root("./site")
//!     .check(TypeRegistryCheck::new())
//!     .check(LocationsCheck::new())
//!     .build()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod locations;
mod presets;
mod type_registry;
mod unused_media;

pub use locations::LocationsCheck;
pub use presets::{all_checks, find_check, select_checks, structural_checks, Preset};
pub use type_registry::TypeRegistryCheck;
pub use unused_media::{declared_media, UnusedMediaCheck};

/// Re-export core types for convenience.
pub use asset_lint_core::{Check, Issue, IssueKind};
