//! Context types for check execution.

use crate::document::{LocationDataset, TypeRegistry};
use crate::utils::paths::is_remote;
use std::path::Path;

/// Media-related switches for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaPolicy {
    /// Whether referenced media must exist on disk.
    pub check_files: bool,
    /// Whether `http(s)://` references skip the disk check.
    pub allow_remote: bool,
}

impl Default for MediaPolicy {
    fn default() -> Self {
        Self {
            check_files: true,
            allow_remote: true,
        }
    }
}

/// Context provided to checks.
///
/// Holds the loaded documents for one run, plus the on-disk inventory of the
/// media directory when file checks are enabled.
#[derive(Debug, Clone)]
pub struct ValidationContext<'a> {
    /// Project root; media references resolve against it.
    pub root: &'a Path,
    /// Loaded type registry.
    pub registry: &'a TypeRegistry,
    /// Loaded location dataset.
    pub dataset: &'a LocationDataset,
    /// Type name accepted without a registry entry.
    pub default_type: &'a str,
    /// Media switches.
    pub media: MediaPolicy,
    /// Files under the media directory, in canonical reference form.
    pub media_files: Vec<String>,
}

impl<'a> ValidationContext<'a> {
    /// Creates a context with file checks enabled and an empty inventory.
    #[must_use]
    pub fn new(root: &'a Path, registry: &'a TypeRegistry, dataset: &'a LocationDataset) -> Self {
        Self {
            root,
            registry,
            dataset,
            default_type: crate::config::DEFAULT_TYPE_MARKER,
            media: MediaPolicy::default(),
            media_files: Vec::new(),
        }
    }

    /// Sets the default type marker.
    #[must_use]
    pub fn with_default_type(mut self, marker: &'a str) -> Self {
        self.default_type = marker;
        self
    }

    /// Sets the media policy.
    #[must_use]
    pub fn with_media(mut self, media: MediaPolicy) -> Self {
        self.media = media;
        self
    }

    /// Sets the on-disk media inventory.
    #[must_use]
    pub fn with_media_files(mut self, files: Vec<String>) -> Self {
        self.media_files = files;
        self
    }

    /// Returns true if this reference should be looked up on disk.
    #[must_use]
    pub fn should_check_file(&self, reference: &str) -> bool {
        self.media.check_files && !(self.media.allow_remote && is_remote(reference))
    }

    /// Returns true if the reference resolves to an existing regular file.
    ///
    /// Each call queries the filesystem.
    #[must_use]
    pub fn media_exists(&self, reference: &str) -> bool {
        self.root.join(reference.trim()).is_file()
    }

    /// Returns true if the type name is the default marker or a registry key.
    #[must_use]
    pub fn is_known_type(&self, name: &str) -> bool {
        name == self.default_type || self.registry.contains(name)
    }
}
