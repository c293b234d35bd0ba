//! Path utilities for media references.
//!
//! Declared references and files found on disk are both reduced to the same
//! canonical form: `/`-separated, relative to the project root, with `.`
//! segments dropped and `..` segments folded.

use std::path::{Component, Path};

/// Normalizes a media reference as written in a document.
///
/// Backslashes are treated as separators, leading `./` and `/` are dropped.
///
/// # Example
///
/// ```ignore
/// assert_eq!(normalize_media_path("./assets\\img/../icons/a.png"), "assets/icons/a.png");
/// ```
#[must_use]
pub fn normalize_media_path(reference: &str) -> String {
    let unified = reference.trim().replace('\\', "/");
    let mut parts: Vec<&str> = Vec::new();

    for segment in unified.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                parts.pop();
            }
            literal => parts.push(literal),
        }
    }

    parts.join("/")
}

/// Converts a file found under `root` to the canonical reference form.
///
/// Returns `None` if `path` is not inside `root` or is not valid UTF-8.
#[must_use]
pub fn relative_media_path(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let mut parts = Vec::new();
    for component in relative.components() {
        match component {
            Component::Normal(segment) => parts.push(segment.to_str()?),
            Component::CurDir => {}
            Component::ParentDir => {
                parts.pop();
            }
            Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    Some(parts.join("/"))
}

/// Checks if a reference points to a remote `http(s)` resource.
#[must_use]
pub fn is_remote(reference: &str) -> bool {
    let lower = reference.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}
