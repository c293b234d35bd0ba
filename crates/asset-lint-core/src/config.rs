//! Configuration types for asset-lint.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Marker used by locations that do not belong to a registered type.
pub const DEFAULT_TYPE_MARKER: &str = "default";

/// Top-level configuration for asset-lint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Type name accepted without a registry entry.
    #[serde(default = "default_type_marker")]
    pub default_type: String,

    /// Locations of the two documents.
    #[serde(default)]
    pub documents: DocumentsConfig,

    /// Media existence and orphan detection settings.
    #[serde(default)]
    pub media: MediaConfig,

    /// Per-check configurations.
    #[serde(default)]
    pub checks: HashMap<String, CheckConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_type: default_type_marker(),
            documents: DocumentsConfig::default(),
            media: MediaConfig::default(),
            checks: HashMap::new(),
        }
    }
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Checks if a check is enabled.
    #[must_use]
    pub fn is_check_enabled(&self, check_name: &str) -> bool {
        self.checks
            .get(check_name)
            .map_or(true, |c| c.enabled.unwrap_or(true))
    }
}

/// Where the type registry and location dataset live.
///
/// Relative paths are resolved against the project root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentsConfig {
    /// Type registry path.
    #[serde(default = "default_types_path")]
    pub types: PathBuf,

    /// Location dataset path.
    #[serde(default = "default_locations_path")]
    pub locations: PathBuf,
}

impl Default for DocumentsConfig {
    fn default() -> Self {
        Self {
            types: default_types_path(),
            locations: default_locations_path(),
        }
    }
}

/// Media settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaConfig {
    /// Whether referenced media must exist on disk.
    #[serde(default = "default_true")]
    pub check_files: bool,

    /// Whether `http(s)://` media references are accepted without a disk check.
    #[serde(default = "default_true")]
    pub allow_remote: bool,

    /// Directory scanned for orphaned media, relative to the project root.
    #[serde(default = "default_media_dir")]
    pub directory: PathBuf,

    /// Extension of the structured documents, never reported as media.
    #[serde(default = "default_data_extension")]
    pub data_extension: String,

    /// Glob patterns ignored by orphan detection.
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            check_files: true,
            allow_remote: true,
            directory: default_media_dir(),
            data_extension: default_data_extension(),
            exclude: Vec::new(),
        }
    }
}

fn default_type_marker() -> String {
    DEFAULT_TYPE_MARKER.to_string()
}

fn default_types_path() -> PathBuf {
    PathBuf::from("assets/types.json")
}

fn default_locations_path() -> PathBuf {
    PathBuf::from("assets/locations.json")
}

fn default_media_dir() -> PathBuf {
    PathBuf::from("assets")
}

fn default_data_extension() -> String {
    "json".to_string()
}

fn default_true() -> bool {
    true
}

/// Per-check configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckConfig {
    /// Whether this check is enabled.
    #[serde(default)]
    pub enabled: Option<bool>,
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.default_type, "default");
        assert!(config.media.check_files);
        assert!(config.media.allow_remote);
        assert_eq!(config.media.directory, PathBuf::from("assets"));
        assert_eq!(
            config.documents.locations,
            PathBuf::from("assets/locations.json")
        );
        assert!(config.checks.is_empty());
    }

    #[test]
    fn test_empty_toml_matches_defaults() {
        let config = Config::parse("").expect("empty config should parse");
        assert_eq!(config.default_type, DEFAULT_TYPE_MARKER);
        assert_eq!(config.media.data_extension, "json");
        assert_eq!(config.documents.types, PathBuf::from("assets/types.json"));
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
default_type = "misc"

[documents]
types = "data/types.json"

[media]
check_files = false
exclude = ["**/.gitkeep"]

[checks.unused-media]
enabled = false
"#;

        let config = Config::parse(toml).expect("Failed to parse");
        assert_eq!(config.default_type, "misc");
        assert_eq!(config.documents.types, PathBuf::from("data/types.json"));
        assert_eq!(
            config.documents.locations,
            PathBuf::from("assets/locations.json")
        );
        assert!(!config.media.check_files);
        assert_eq!(config.media.exclude, vec!["**/.gitkeep".to_string()]);
        assert!(!config.is_check_enabled("unused-media"));
        assert!(config.is_check_enabled("locations"));
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let err = Config::parse("media = [").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Config::from_file(std::path::Path::new("/nonexistent/asset-lint.toml"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
