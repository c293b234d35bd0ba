//! List checks command implementation.

use asset_lint_checks::all_checks;

/// Runs the list-checks command.
pub fn run() {
    println!("Available checks:\n");
    println!("{:<8} {:<16} {:<10} Description", "Code", "Name", "Files");
    println!("{}", "-".repeat(80));

    for check in all_checks() {
        println!(
            "{:<8} {:<16} {:<10} {}",
            check.code(),
            check.name(),
            if check.requires_files() { "required" } else { "-" },
            check.description()
        );
    }

    println!("\nPresets (--preset):");
    println!("  full        - AV001, AV002, AV003 (default)");
    println!("  structural  - AV001, AV002 (no unused-media scan)");

    println!("\nUse --checks to filter specific checks, e.g.:");
    println!("  asset-lint check --checks locations");
    println!("  asset-lint check --checks AV001,AV003");
}
