//! # asset-lint-core
//!
//! Core framework for validating the assets of an interactive map: a registry
//! of location types and a continent-grouped dataset of locations.
//!
//! This crate provides the foundational types for building validation passes.
//! It includes:
//!
//! - [`TypeRegistry`] and [`LocationDataset`], loaded with a shape layer that
//!   keeps malformed values for reporting
//! - [`Check`] trait for validation passes
//! - [`Validator`] for orchestrating a run
//! - [`Issue`] and [`ValidationReport`] for representing findings
//!
//! ## Example
//!
//! ```ignore
//! use asset_lint_core::Validator;
//!
//! let validator = Validator::builder()
//!     .root(".")
//!     .check(MyCheck::new())
//!     .build()?;
//!
//! let report = validator.validate()?;
//! print!("{}", report.format_report());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod check;
mod config;
mod context;
mod types;
mod validator;

/// Shape-checked document model.
pub mod document;

/// Utility modules for check implementations.
pub mod utils;

pub use check::{Check, CheckBox};
pub use config::{CheckConfig, Config, ConfigError, DocumentsConfig, MediaConfig, DEFAULT_TYPE_MARKER};
pub use context::{MediaPolicy, ValidationContext};
pub use document::{LoadError, LocationDataset, TypeRegistry};
pub use types::{Issue, IssueDiagnostic, IssueKind, Subject, ValidationReport};
pub use validator::{ValidateError, Validator, ValidatorBuilder};
