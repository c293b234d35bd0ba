//! Check for media files that no document references.
//!
//! The declared set is every type `icon` plus every location `audio` and
//! `images` element, normalized to the canonical relative form. Videos are
//! URLs and never count. Each file of the media inventory that is not in the
//! declared set raises exactly one issue.

use asset_lint_core::document::{Field, TypeShape};
use asset_lint_core::utils::{is_remote, normalize_media_path};
use asset_lint_core::{Check, Issue, IssueKind, Subject, ValidationContext};
use std::collections::HashSet;
use tracing::debug;

/// Check code for unused-media.
pub const CODE: &str = "AV003";

/// Check name for unused-media.
pub const NAME: &str = "unused-media";

/// Reports files under the media directory that nothing references.
///
/// Only runs with file checks enabled.
#[derive(Debug, Clone, Default)]
pub struct UnusedMediaCheck;

impl UnusedMediaCheck {
    /// Creates a new check.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Check for UnusedMediaCheck {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Reports media files that no type or location references"
    }

    fn requires_files(&self) -> bool {
        true
    }

    fn check(&self, ctx: &ValidationContext) -> Vec<Issue> {
        let declared = declared_media(ctx);
        debug!(
            "{} declared media path(s), {} file(s) on disk",
            declared.len(),
            ctx.media_files.len()
        );

        ctx.media_files
            .iter()
            .filter(|file| !declared.contains(file.as_str()))
            .map(|file| {
                Issue::new(
                    "media.unused",
                    NAME,
                    IssueKind::UnusedMedia,
                    Subject::file(file.as_str()),
                    "media file is never referenced",
                )
            })
            .collect()
    }
}

/// Collects every local media path declared by the documents.
///
/// Blank and remote references are skipped. Wrongly shaped values are
/// ignored here; the other checks report them.
#[must_use]
pub fn declared_media(ctx: &ValidationContext) -> HashSet<String> {
    let mut declared = HashSet::new();
    let mut declare = |reference: &str| {
        if reference.trim().is_empty() || is_remote(reference) {
            return;
        }
        declared.insert(normalize_media_path(reference));
    };

    for (_, shape) in ctx.registry.iter() {
        if let TypeShape::Definition(definition) = shape {
            if let Some(icon) = definition.icon.present() {
                declare(icon);
            }
        }
    }

    for (_, _, entry) in ctx.dataset.records() {
        if let Some(audio) = entry.audio.present() {
            declare(audio);
        }
        if let Field::Present(images) = &entry.images {
            images.iter().filter_map(Field::present).for_each(|image| declare(image));
        }
    }

    declared
}
