//! Runs the `asset-lint` binary against projects on disk.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const TYPES: &str = r#"{"camp": {"icon": "assets/icons/camp.png", "zoom": 4}}"#;

const LOCATIONS: &str = r#"{"Europe": [
    {"name": "Basecamp", "type": "camp", "x": 1, "y": 2, "images": ["assets/images/basecamp.png"]}
]}"#;

fn project(media: &[&str]) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("assets")).unwrap();
    fs::write(dir.path().join("assets/types.json"), TYPES).unwrap();
    fs::write(dir.path().join("assets/locations.json"), LOCATIONS).unwrap();
    for file in media {
        let path = dir.path().join(file);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"media").unwrap();
    }
    dir
}

fn asset_lint(root: &Path, args: &[&str]) -> Output {
    let global = TempDir::new().unwrap();
    Command::new(env!("CARGO_BIN_EXE_asset-lint"))
        .arg("check")
        .arg(root)
        .args(args)
        .env("ASSET_LINT_CONFIG_DIR", global.path())
        .env_remove("ASSET_LINT_SKIP_FILE_CHECKS")
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn clean_project_exits_zero() {
    let dir = project(&["assets/icons/camp.png", "assets/images/basecamp.png"]);
    let output = asset_lint(dir.path(), &[]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "No problems found\nSummary: 1 type(s), 1 location(s) analyzed.\n"
    );
}

#[test]
fn issues_exit_one_with_report() {
    let dir = project(&["assets/images/basecamp.png"]);
    let output = asset_lint(dir.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output),
        "Problems found (1):\n \
         - type 'camp': icon not found (assets/icons/camp.png)\n\
         Summary: 1 type(s), 1 location(s) analyzed.\n\
         - 1 missing media file(s)\n"
    );
}

#[test]
fn no_files_skips_media_checks() {
    let dir = project(&["assets/orphan.png"]);
    assert_eq!(asset_lint(dir.path(), &[]).status.code(), Some(1));
    assert_eq!(asset_lint(dir.path(), &["--no-files"]).status.code(), Some(0));
    assert_eq!(
        asset_lint(dir.path(), &["--skip-file-checks"]).status.code(),
        Some(0)
    );
}

#[test]
fn skip_flag_reads_environment() {
    let dir = project(&[]);
    let global = TempDir::new().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_asset-lint"))
        .arg("check")
        .arg(dir.path())
        .env("ASSET_LINT_CONFIG_DIR", global.path())
        .env("ASSET_LINT_SKIP_FILE_CHECKS", "true")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn malformed_document_exits_two() {
    let dir = project(&[]);
    fs::write(dir.path().join("assets/locations.json"), "[1, 2").unwrap();

    let output = asset_lint(dir.path(), &[]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid JSON"));
}

#[test]
fn missing_document_exits_two() {
    let dir = project(&[]);
    let output = asset_lint(dir.path(), &["--types", "/nonexistent/types.json"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("File not found"));
}

#[test]
fn malformed_config_exits_two() {
    let dir = project(&["assets/icons/camp.png", "assets/images/basecamp.png"]);
    fs::write(dir.path().join("asset-lint.toml"), "[media\n").unwrap();

    let output = asset_lint(dir.path(), &[]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to load config"));
}

#[test]
fn missing_explicit_config_exits_two() {
    let dir = project(&["assets/icons/camp.png", "assets/images/basecamp.png"]);
    let output = asset_lint(dir.path(), &["--config", "/nonexistent/asset-lint.toml"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn check_filter_runs_each_pass_once_in_order() {
    let dir = project(&[]);
    fs::write(
        dir.path().join("assets/types.json"),
        r#"{"camp": {"icon": "assets/icons/camp.png"}}"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("assets/locations.json"),
        r#"{"Europe": [{"name": "A", "type": "tower", "x": 0, "y": 0}]}"#,
    )
    .unwrap();

    let output = asset_lint(
        dir.path(),
        &["--no-files", "--checks", "locations,type-registry,AV002"],
    );
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output),
        "Problems found (2):\n \
         - type 'camp': field 'zoom' is missing\n \
         - Europe[0] 'A': unknown type 'tower'\n\
         Summary: 1 type(s), 1 location(s) analyzed.\n"
    );
}

#[test]
fn structural_preset_skips_unused_media() {
    let dir = project(&["assets/icons/camp.png", "assets/images/basecamp.png", "assets/old.png"]);
    assert_eq!(asset_lint(dir.path(), &[]).status.code(), Some(1));
    assert_eq!(
        asset_lint(dir.path(), &["--preset", "structural"]).status.code(),
        Some(0)
    );
}

#[test]
fn project_config_disables_check() {
    let dir = project(&["assets/icons/camp.png", "assets/images/basecamp.png", "assets/old.png"]);
    assert_eq!(asset_lint(dir.path(), &[]).status.code(), Some(1));

    fs::write(
        dir.path().join("asset-lint.toml"),
        "[checks.unused-media]\nenabled = false\n",
    )
    .unwrap();
    assert_eq!(asset_lint(dir.path(), &[]).status.code(), Some(0));
}

#[test]
fn json_format_serializes_report() {
    let dir = project(&["assets/icons/camp.png"]);
    let output = asset_lint(dir.path(), &["--format", "json"]);

    assert_eq!(output.status.code(), Some(1));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["issues"][0]["code"], "location.images.not_found");
    assert_eq!(json["issues"][0]["kind"], "missing-file");
    assert_eq!(json["locations_checked"], 1);
}
