//! Utility functions for check implementations.

pub mod paths;

#[doc(inline)]
pub use paths::{is_remote, normalize_media_path, relative_media_path};
