//! End-to-end tests for the journal binary.
//!
//! Each test runs `mj` against a database in its own temp directory.

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn mj(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_mj"))
        .env("HOME", home)
        .env("MJ_DATABASE_PATH", home.join("journal.db"))
        .env_remove("XDG_CONFIG_HOME")
        .env_remove("XDG_DATA_HOME")
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("failed to run mj")
}

fn mj_ok(home: &Path, args: &[&str]) -> String {
    let output = mj(home, args);
    assert!(
        output.status.success(),
        "mj {args:?} should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn test_logged_entries_drive_insights() {
    let temp = TempDir::new().unwrap();
    let home = temp.path();

    mj_ok(home, &["meal", "Oatmeal", "--at", "2025-01-15T08:00:00Z"]);
    mj_ok(home, &["mood", "sad", "--at", "2025-01-15T09:30:00Z"]);
    mj_ok(
        home,
        &["meal", "Pizza", "--category", "lunch", "--at", "2025-01-15T13:00:00Z"],
    );
    mj_ok(home, &["mood", "happy", "--at", "2025-01-15T14:30:00Z"]);

    let stdout = mj_ok(home, &["insights", "--json"]);
    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(report["range"], "all");
    assert_eq!(report["mealsLogged"], 2);
    assert_eq!(report["positive"][0]["meal"], "Pizza");
    assert_eq!(report["positive"][0]["emoji"], "😊");
    assert_eq!(report["negative"][0]["meal"], "Oatmeal");
    assert_eq!(report["breakdown"][0]["moodPercentages"]["Happy"], 100.0);
}

#[test]
fn test_recent_lists_newest_first() {
    let temp = TempDir::new().unwrap();
    let home = temp.path();

    for food in ["Apple", "Salad", "Soup", "Curry"] {
        mj_ok(home, &["meal", food, "--category", "snack"]);
    }

    let stdout = mj_ok(home, &["recent"]);
    let meals: Vec<&str> = stdout
        .lines()
        .skip(1)
        .take_while(|line| line.starts_with("- "))
        .collect();

    assert_eq!(meals.len(), 3, "default limit is 3: {stdout}");
    assert!(meals[0].starts_with("- Curry (Snack)"));
    assert!(meals[2].starts_with("- Salad (Snack)"));
    assert!(stdout.contains("No moods logged yet."));
}

#[test]
fn test_empty_food_name_is_rejected() {
    let temp = TempDir::new().unwrap();
    let output = mj(temp.path(), &["meal", "   "]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Please enter a food name"));

    let stdout = mj_ok(temp.path(), &["recent"]);
    assert!(stdout.contains("No meals logged yet."));
}

#[test]
fn test_clear_requires_confirmation() {
    let temp = TempDir::new().unwrap();
    let home = temp.path();

    mj_ok(home, &["meal", "Toast"]);
    mj_ok(home, &["mood", "tired"]);

    let refused = mj(home, &["clear"]);
    assert!(!refused.status.success());
    assert!(mj_ok(home, &["recent"]).contains("Toast"));

    let stdout = mj_ok(home, &["clear", "--yes"]);
    assert!(stdout.contains("All data has been cleared."));

    let stdout = mj_ok(home, &["recent"]);
    assert!(stdout.contains("No meals logged yet."));
    assert!(stdout.contains("No moods logged yet."));
}

#[test]
fn test_config_file_selects_storage_keys() {
    let temp = TempDir::new().unwrap();
    let home = temp.path();
    let config = home.join("custom.toml");
    std::fs::write(&config, "meals_key = \"@meals\"\nmoods_key = \"@moods\"\n").unwrap();
    let config = config.to_str().unwrap();

    mj_ok(home, &["--config", config, "meal", "Bagel"]);

    assert!(mj_ok(home, &["--config", config, "recent"]).contains("Bagel"));
    assert!(mj_ok(home, &["recent"]).contains("No meals logged yet."));
}

#[test]
fn test_negative_window_is_reported_not_panicked() {
    let temp = TempDir::new().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_mj"))
        .env("HOME", temp.path())
        .env("MJ_DATABASE_PATH", temp.path().join("journal.db"))
        .env("MJ_WINDOW_MINUTES", "-5")
        .env_remove("XDG_CONFIG_HOME")
        .env_remove("XDG_DATA_HOME")
        .env_remove("RUST_LOG")
        .arg("insights")
        .output()
        .expect("failed to run mj");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("invalid window_minutes"), "{stderr}");
    assert!(!stderr.contains("panicked"), "{stderr}");
}
