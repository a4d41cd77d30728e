//! Tests for error handling, exit codes and suggestions.

use std::fs;

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn unknown_argument_exits_with_two() {
    let tmp = TempDir::new().unwrap();
    let mut cmd = cargo::cargo_bin_cmd!("mathq-setup");
    cmd.current_dir(tmp.path()).arg("--frobnicate");

    cmd.assert()
        .code(2)
        .stderr(predicate::str::contains("--frobnicate"));

    assert!(!tmp.path().join("Images").exists());
}

#[test]
fn file_blocking_images_root_exits_with_one() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("Images"), "not a directory").unwrap();

    let mut cmd = cargo::cargo_bin_cmd!("mathq-setup");
    cmd.current_dir(tmp.path()).env("NO_COLOR", "1");

    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("Suggestions:"))
        .stderr(predicate::str::contains("Move or rename"));

    assert!(!tmp.path().join("output_data").exists());
}

#[test]
fn absolute_layout_path_exits_with_four() {
    let tmp = TempDir::new().unwrap();

    let mut cmd = cargo::cargo_bin_cmd!("mathq-setup");
    cmd.current_dir(tmp.path())
        .env("NO_COLOR", "1")
        .env("MATHQ_LAYOUT__IMAGES_ROOT", "/etc/mathq");

    cmd.assert()
        .code(4)
        .stderr(predicate::str::contains("Absolute paths not allowed"));

    assert!(!tmp.path().join("folder_contexts.json").exists());
}

#[test]
fn parent_traversal_in_layout_exits_with_four() {
    let tmp = TempDir::new().unwrap();

    let mut cmd = cargo::cargo_bin_cmd!("mathq-setup");
    cmd.current_dir(tmp.path())
        .env("NO_COLOR", "1")
        .env("MATHQ_LAYOUT__OUTPUT_DIR", "../outside");

    cmd.assert()
        .code(4)
        .stderr(predicate::str::contains("Parent traversal not allowed"));
}

#[test]
fn missing_settings_file_exits_with_four() {
    let tmp = TempDir::new().unwrap();

    let mut cmd = cargo::cargo_bin_cmd!("mathq-setup");
    cmd.current_dir(tmp.path())
        .env("NO_COLOR", "1")
        .args(["--settings", "missing.toml"]);

    cmd.assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"))
        .stderr(predicate::str::contains("--settings"));
}

#[test]
fn verbose_error_shows_cause_chain() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("broken.toml"), "[layout\n").unwrap();

    let mut cmd = cargo::cargo_bin_cmd!("mathq-setup");
    cmd.current_dir(tmp.path())
        .env("NO_COLOR", "1")
        .args(["-v", "--settings", "broken.toml"]);

    cmd.assert()
        .code(4)
        .stderr(predicate::str::contains("Caused by:"))
        .stderr(predicate::str::contains("Use -v / --verbose").not());
}
