//! Configuration file resolution with global fallback.
//!
//! Resolution order:
//!
//! 1. `--config` flag (explicit path)
//! 2. `{root}/asset-lint.toml` or `{root}/.asset-lint.toml`
//! 3. `$ASSET_LINT_CONFIG_DIR/config.toml`, else `~/.asset-lint/config.toml`
//! 4. No config found → defaults

use asset_lint_core::{Config, ValidateError};
use std::path::{Path, PathBuf};

/// Where the configuration was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Explicitly specified via `--config` flag.
    Explicit(PathBuf),
    /// Found in the project root.
    Project(PathBuf),
    /// Found in the global config directory.
    Global(PathBuf),
    /// No config found; defaults will be used.
    Default,
}

impl ConfigSource {
    /// Returns the resolved path, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Project(p) | Self::Global(p) => Some(p),
            Self::Default => None,
        }
    }

    /// Reads the configuration this source points at.
    ///
    /// # Errors
    ///
    /// Returns [`ValidateError::Config`] if the file cannot be read or parsed,
    /// including an explicit path that does not exist.
    pub fn load(&self) -> Result<Config, ValidateError> {
        let Some(path) = self.path() else {
            tracing::debug!("No config file found, using defaults");
            return Ok(Config::default());
        };

        match self {
            Self::Global(_) => tracing::info!("Using global config: {}", path.display()),
            _ => tracing::debug!("Using config: {}", path.display()),
        }

        Config::from_file(path).map_err(|source| ValidateError::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}

const PROJECT_CONFIG_NAMES: &[&str] = &["asset-lint.toml", ".asset-lint.toml"];

const GLOBAL_CONFIG_NAME: &str = "config.toml";

/// Resolves the configuration file for a project root.
#[must_use]
pub fn resolve(root: &Path, explicit: Option<&Path>) -> ConfigSource {
    resolve_with_global(root, explicit, global_config_dir().as_deref())
}

fn resolve_with_global(root: &Path, explicit: Option<&Path>, global_dir: Option<&Path>) -> ConfigSource {
    if let Some(path) = explicit {
        return ConfigSource::Explicit(path.to_path_buf());
    }

    if let Some(found) = PROJECT_CONFIG_NAMES
        .iter()
        .map(|name| root.join(name))
        .find(|candidate| candidate.is_file())
    {
        tracing::debug!("Found project config: {}", found.display());
        return ConfigSource::Project(found);
    }

    global_dir
        .map(|dir| dir.join(GLOBAL_CONFIG_NAME))
        .filter(|candidate| candidate.is_file())
        .map_or(ConfigSource::Default, ConfigSource::Global)
}

/// Returns the global config directory: `$ASSET_LINT_CONFIG_DIR`, else `~/.asset-lint/`.
#[must_use]
pub fn global_config_dir() -> Option<PathBuf> {
    match std::env::var_os("ASSET_LINT_CONFIG_DIR") {
        Some(dir) => Some(PathBuf::from(dir)),
        None => home::home_dir().map(|h| h.join(".asset-lint")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn explicit_wins_even_if_missing() {
        let project = TempDir::new().unwrap();
        fs::write(project.path().join("asset-lint.toml"), "").unwrap();

        let result = resolve_with_global(project.path(), Some(Path::new("/nonexistent.toml")), None);
        assert_eq!(
            result,
            ConfigSource::Explicit(PathBuf::from("/nonexistent.toml"))
        );
        assert!(result.load().is_err());
    }

    #[test]
    fn project_names_in_priority_order() {
        let project = TempDir::new().unwrap();
        fs::write(project.path().join(".asset-lint.toml"), "").unwrap();
        assert_eq!(
            resolve_with_global(project.path(), None, None),
            ConfigSource::Project(project.path().join(".asset-lint.toml"))
        );

        fs::write(project.path().join("asset-lint.toml"), "").unwrap();
        assert_eq!(
            resolve_with_global(project.path(), None, None),
            ConfigSource::Project(project.path().join("asset-lint.toml"))
        );
    }

    #[test]
    fn global_used_only_without_project_config() {
        let project = TempDir::new().unwrap();
        let global = TempDir::new().unwrap();
        fs::write(
            global.path().join("config.toml"),
            "default_type = \"misc\"\n",
        )
        .unwrap();

        let result = resolve_with_global(project.path(), None, Some(global.path()));
        assert_eq!(result, ConfigSource::Global(global.path().join("config.toml")));
        assert_eq!(result.load().unwrap().default_type, "misc");

        fs::write(project.path().join("asset-lint.toml"), "").unwrap();
        let result = resolve_with_global(project.path(), None, Some(global.path()));
        assert!(matches!(result, ConfigSource::Project(_)));
    }

    #[test]
    fn empty_global_dir_falls_back_to_defaults() {
        let project = TempDir::new().unwrap();
        let global = TempDir::new().unwrap();

        let result = resolve_with_global(project.path(), None, Some(global.path()));
        assert_eq!(result, ConfigSource::Default);
        assert!(result.path().is_none());
        assert_eq!(result.load().unwrap().default_type, "default");
    }

    #[test]
    fn invalid_project_config_fails_to_load() {
        let project = TempDir::new().unwrap();
        fs::write(project.path().join("asset-lint.toml"), "[media\n").unwrap();

        let result = resolve_with_global(project.path(), None, None);
        let err = result.load().unwrap_err();
        assert!(matches!(err, ValidateError::Config { ref path, .. } if path.ends_with("asset-lint.toml")));
    }
}
