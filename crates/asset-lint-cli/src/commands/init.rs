//! Init command implementation.

use anyhow::{bail, Context, Result};
use std::path::Path;

const CONFIG_FILE: &str = "asset-lint.toml";

const DEFAULT_CONFIG: &str = r#"# asset-lint configuration
# Paths are relative to the project root given to `asset-lint check`.

# Location type accepted without a registry entry
default_type = "default"

[documents]
types = "assets/types.json"
locations = "assets/locations.json"

[media]
# Require referenced icons, audio and images to exist on disk
check_files = true

# Accept http(s) references without a disk check
allow_remote = true

# Directory scanned for media that nothing references
directory = "assets"

# Files with this extension are documents, not media
data_extension = "json"

# Glob patterns ignored by unused-media detection
exclude = [
    # "assets/drafts/**",
]

# Check configurations
# Each check can be disabled by name

[checks.type-registry]
enabled = true

[checks.locations]
enabled = true

[checks.unused-media]
enabled = true
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new(CONFIG_FILE);
    write_config(config_path, force)?;

    println!("Created {CONFIG_FILE}");
    println!("\nNext steps:");
    println!("  1. Edit {CONFIG_FILE} to point at your documents");
    println!("  2. Run: asset-lint check");

    Ok(())
}

fn write_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            path.display()
        );
    }

    std::fs::write(path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use asset_lint_core::Config;
    use tempfile::TempDir;

    #[test]
    fn default_config_parses_to_defaults() {
        let config = Config::parse(DEFAULT_CONFIG).unwrap();
        let defaults = Config::default();
        assert_eq!(config.default_type, defaults.default_type);
        assert_eq!(config.documents.types, defaults.documents.types);
        assert_eq!(config.media.directory, defaults.media.directory);
        assert!(config.media.exclude.is_empty());
        assert!(config.is_check_enabled("unused-media"));
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILE);
        std::fs::write(&path, "default_type = \"misc\"\n").unwrap();

        assert!(write_config(&path, false).is_err());
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "default_type = \"misc\"\n"
        );

        write_config(&path, true).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG);
    }
}
