//! Validator orchestrating document loading and check execution.

use crate::check::{Check, CheckBox};
use crate::config::{Config, ConfigError};
use crate::context::{MediaPolicy, ValidationContext};
use crate::document::{LoadError, LocationDataset, TypeRegistry};
use crate::types::ValidationReport;
use crate::utils::paths::relative_media_path;

use miette::Diagnostic;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Errors that abort a validation run.
#[derive(Debug, Error, Diagnostic)]
pub enum ValidateError {
    /// The configuration file could not be read or parsed.
    #[error("Failed to load config: {path}")]
    #[diagnostic(
        code(asset_lint::config::load),
        help("fix the file or point --config at another one")
    )]
    Config {
        /// Configuration file path.
        path: PathBuf,
        /// Underlying config error.
        source: ConfigError,
    },

    /// A document could not be loaded.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Load(#[from] LoadError),

    /// IO error resolving paths.
    #[error("IO error: {0}")]
    #[diagnostic(code(asset_lint::io))]
    Io(#[from] std::io::Error),

    /// Error walking the media directory.
    #[error("Failed to scan media directory: {0}")]
    #[diagnostic(code(asset_lint::media::walk))]
    Walk(#[from] walkdir::Error),

    /// Invalid media exclude pattern.
    #[error("Invalid glob pattern: {0}")]
    #[diagnostic(code(asset_lint::config::glob))]
    Glob(#[from] glob::PatternError),
}

/// Builder for configuring a [`Validator`].
#[derive(Default)]
pub struct ValidatorBuilder {
    root: Option<PathBuf>,
    checks: Vec<CheckBox>,
    types_path: Option<PathBuf>,
    locations_path: Option<PathBuf>,
    check_files: Option<bool>,
    config: Option<Config>,
}

impl ValidatorBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the project root that media references resolve against.
    #[must_use]
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.root = Some(path.into());
        self
    }

    /// Adds a check to the validator.
    #[must_use]
    pub fn check<C: Check + 'static>(mut self, check: C) -> Self {
        self.checks.push(Box::new(check));
        self
    }

    /// Adds a boxed check to the validator.
    #[must_use]
    pub fn check_box(mut self, check: CheckBox) -> Self {
        self.checks.push(check);
        self
    }

    /// Overrides the type registry path (used as given, not joined to the root).
    #[must_use]
    pub fn types_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.types_path = Some(path.into());
        self
    }

    /// Overrides the location dataset path (used as given, not joined to the root).
    #[must_use]
    pub fn locations_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.locations_path = Some(path.into());
        self
    }

    /// Overrides whether media files must exist on disk.
    #[must_use]
    pub fn check_files(mut self, enabled: bool) -> Self {
        self.check_files = Some(enabled);
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the validator.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be read or a media
    /// exclude pattern is invalid.
    pub fn build(self) -> Result<Validator, ValidateError> {
        let config = self.config.unwrap_or_default();

        let root = self.root.unwrap_or_else(|| PathBuf::from("."));
        let root = if root.is_absolute() {
            root
        } else {
            std::env::current_dir()?.join(&root)
        };

        let types_path = self
            .types_path
            .unwrap_or_else(|| root.join(&config.documents.types));
        let locations_path = self
            .locations_path
            .unwrap_or_else(|| root.join(&config.documents.locations));

        let media_excludes = config
            .media
            .exclude
            .iter()
            .map(String::as_str)
            .map(glob::Pattern::new)
            .collect::<Result<Vec<_>, _>>()?;

        let media = MediaPolicy {
            check_files: self.check_files.unwrap_or(config.media.check_files),
            allow_remote: config.media.allow_remote,
        };

        Ok(Validator {
            root,
            checks: self.checks,
            types_path,
            locations_path,
            media,
            media_excludes,
            config,
        })
    }
}

/// The main validator that loads documents and runs checks.
///
/// Use [`Validator::builder()`] to construct an instance. Each call to
/// [`Validator::validate`] loads the documents afresh.
pub struct Validator {
    root: PathBuf,
    checks: Vec<CheckBox>,
    types_path: PathBuf,
    locations_path: PathBuf,
    media: MediaPolicy,
    media_excludes: Vec<glob::Pattern>,
    config: Config,
}

impl Validator {
    /// Creates a new builder for configuring a validator.
    #[must_use]
    pub fn builder() -> ValidatorBuilder {
        ValidatorBuilder::new()
    }

    /// Returns the project root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the resolved type registry path.
    #[must_use]
    pub fn types_path(&self) -> &Path {
        &self.types_path
    }

    /// Returns the resolved location dataset path.
    #[must_use]
    pub fn locations_path(&self) -> &Path {
        &self.locations_path
    }

    /// Returns the number of registered checks.
    #[must_use]
    pub fn check_count(&self) -> usize {
        self.checks.len()
    }

    /// Returns true if media files must exist on disk.
    #[must_use]
    pub fn checks_files(&self) -> bool {
        self.media.check_files
    }

    /// Loads both documents and runs every enabled check in order.
    ///
    /// # Errors
    ///
    /// Returns an error if a document cannot be loaded or the media directory
    /// cannot be scanned. Content problems are reported as issues instead.
    pub fn validate(&self) -> Result<ValidationReport, ValidateError> {
        info!("Starting validation at {:?}", self.root);

        let registry = TypeRegistry::load(&self.types_path)?;
        let dataset = LocationDataset::load(&self.locations_path)?;

        debug!(
            "Loaded {} types and {} continents",
            registry.len(),
            dataset.continents().len()
        );

        let runnable: Vec<&CheckBox> = self
            .checks
            .iter()
            .filter(|check| self.should_run(&***check))
            .collect();

        let media_files = if self.media.check_files && runnable.iter().any(|c| c.requires_files())
        {
            self.discover_media_files()?
        } else {
            Vec::new()
        };

        let ctx = ValidationContext::new(&self.root, &registry, &dataset)
            .with_default_type(&self.config.default_type)
            .with_media(self.media)
            .with_media_files(media_files);

        let mut report = ValidationReport::new();
        report.types_checked = registry.len();
        report.locations_checked = dataset.location_count();
        report.files_checked = self.media.check_files;

        for check in runnable {
            let issues = check.check(&ctx);
            debug!("{} ({}): {} issue(s)", check.name(), check.code(), issues.len());
            report.issues.extend(issues);
        }

        info!(
            "Validation complete: {} issue(s) across {} types and {} locations",
            report.issues.len(),
            report.types_checked,
            report.locations_checked
        );

        Ok(report)
    }

    fn should_run(&self, check: &dyn Check) -> bool {
        if !self.config.is_check_enabled(check.name()) {
            debug!("Skipping disabled check: {}", check.name());
            return false;
        }
        if check.requires_files() && !self.media.check_files {
            debug!("Skipping {}: file checks are off", check.name());
            return false;
        }
        true
    }

    /// Lists regular files under the media directory in canonical form.
    ///
    /// Structured-data files and excluded patterns are left out. The walk is
    /// sorted so repeated runs list files in the same order.
    fn discover_media_files(&self) -> Result<Vec<String>, ValidateError> {
        let dir = self.root.join(&self.config.media.directory);
        if !dir.is_dir() {
            debug!("Media directory {} not found", dir.display());
            return Ok(Vec::new());
        }

        let data_suffix = format!(".{}", self.config.media.data_extension);
        let mut files = Vec::new();

        for entry in WalkDir::new(&dir).sort_by_file_name() {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }

            let Some(relative) = relative_media_path(&self.root, entry.path()) else {
                warn!("Skipping unrepresentable path: {}", entry.path().display());
                continue;
            };

            if relative.ends_with(&data_suffix) {
                continue;
            }
            if self.is_excluded(&relative) {
                debug!("Excluding: {}", relative);
                continue;
            }

            files.push(relative);
        }

        debug!("Found {} media files under {}", files.len(), dir.display());
        Ok(files)
    }

    /// Checks if a canonical media path matches an exclude pattern.
    fn is_excluded(&self, relative: &str) -> bool {
        self.media_excludes
            .iter()
            .any(|pattern| pattern.matches(relative))
    }
}
