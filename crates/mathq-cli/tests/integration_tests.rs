//! End-to-end runs of the `mathq-setup` binary in a scratch directory.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;
use walkdir::WalkDir;

fn setup_cmd(dir: &Path) -> Command {
    let mut cmd = cargo::cargo_bin_cmd!("mathq-setup");
    cmd.current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("MATHQ_LAYOUT__IMAGES_ROOT");
    cmd
}

fn image_folders(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir.join("Images"))
        .unwrap()
        .map(|e| e.unwrap())
        .filter(|e| e.path().is_dir())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

fn snapshot(root: &Path) -> BTreeMap<PathBuf, Option<Vec<u8>>> {
    WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .map(|entry| {
            let entry = entry.unwrap();
            let rel = entry.path().strip_prefix(root).unwrap().to_path_buf();
            let contents = entry
                .file_type()
                .is_file()
                .then(|| fs::read(entry.path()).unwrap());
            (rel, contents)
        })
        .collect()
}

#[test]
fn help_flag() {
    let tmp = TempDir::new().unwrap();
    setup_cmd(tmp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Math Question Processor"))
        .stdout(predicate::str::contains("--verbose"));
}

#[test]
fn version_flag() {
    let tmp = TempDir::new().unwrap();
    setup_cmd(tmp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn fresh_directory_gets_full_layout() {
    let tmp = TempDir::new().unwrap();

    setup_cmd(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration"))
        .stdout(predicate::str::contains("GEMINI_API_KEYS"))
        .stdout(predicate::str::contains("Process Math Questions"))
        .stdout(predicate::str::contains("Workflow definition not found"))
        .stdout(predicate::str::contains("├── First/ (0 pages)"));

    assert_eq!(image_folders(tmp.path()), ["First", "Second", "Third"]);
    assert!(tmp.path().join("output_data").is_dir());
    assert!(tmp.path().join(".github/workflows").is_dir());
    assert!(!tmp.path().join(".github/workflows/process_questions.yml").exists());

    let ignore = fs::read_to_string(tmp.path().join(".gitignore")).unwrap();
    assert!(ignore.lines().any(|l| l == "output_data/"));

    let config = fs::read_to_string(tmp.path().join("folder_contexts.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&config).unwrap();
    assert_eq!(json["folders"][0]["name"], "First");
    assert_eq!(json["folders"].as_array().unwrap().len(), 1);
}

#[test]
fn configured_folders_are_created_without_fallback() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("folder_contexts.json"),
        r#"{"folders":[{"name":"Alpha","context":{"chapter":"Vectors"}},{"name":"Beta","context":{"chapter":"Limits"}}]}"#,
    )
    .unwrap();

    setup_cmd(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Using default folders").not());

    assert_eq!(image_folders(tmp.path()), ["Alpha", "Beta"]);
}

#[test]
fn non_object_contexts_keep_configured_folders() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("folder_contexts.json"),
        r#"{"folders":[
            {"name":"Alpha","context":null},
            {"name":"Beta","context":"Vectors"},
            {"name":"Gamma","context":[]}
        ]}"#,
    )
    .unwrap();

    setup_cmd(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Using default folders").not())
        .stdout(predicate::str::contains("Folder 'Alpha' has no context"))
        .stdout(predicate::str::contains("Folder 'Gamma' has no context"))
        .stdout(predicate::str::contains("Folder 'Beta' has no context").not());

    assert_eq!(image_folders(tmp.path()), ["Alpha", "Beta", "Gamma"]);
}

#[test]
fn warnings_are_not_repeated_on_stderr() {
    let tmp = TempDir::new().unwrap();

    setup_cmd(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Using default folders"))
        .stdout(predicate::str::contains("Workflow definition not found"))
        .stderr(predicate::str::contains("fallback folder set").not())
        .stderr(predicate::str::contains("Workflow definition missing").not());
}

#[test]
fn empty_folder_list_uses_fallback() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("folder_contexts.json"), r#"{"folders":[]}"#).unwrap();

    setup_cmd(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Using default folders"));

    assert_eq!(image_folders(tmp.path()), ["First", "Second", "Third"]);
}

#[test]
fn malformed_config_does_not_abort() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("folder_contexts.json"), "{ not json").unwrap();

    setup_cmd(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("configuration is not valid"));

    assert_eq!(image_folders(tmp.path()), ["First", "Second", "Third"]);
    assert!(tmp.path().join("output_data").is_dir());
    assert!(tmp.path().join(".gitignore").is_file());
}

#[test]
fn existing_files_are_byte_for_byte_unchanged() {
    let tmp = TempDir::new().unwrap();
    let config = "{ \"folders\": [ { \"name\": \"Alpha\", \"context\": { \"x\": 1 } } ] }";
    let ignore = "# mine\nsecrets.txt";
    fs::write(tmp.path().join("folder_contexts.json"), config).unwrap();
    fs::write(tmp.path().join(".gitignore"), ignore).unwrap();

    setup_cmd(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Ignore file .gitignore already exists"));

    assert_eq!(
        fs::read_to_string(tmp.path().join("folder_contexts.json")).unwrap(),
        config
    );
    assert_eq!(
        fs::read_to_string(tmp.path().join(".gitignore")).unwrap(),
        ignore
    );
}

#[test]
fn second_run_leaves_identical_tree() {
    let tmp = TempDir::new().unwrap();

    setup_cmd(tmp.path()).assert().success();
    let first = snapshot(tmp.path());

    setup_cmd(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("created 0"));
    let second = snapshot(tmp.path());

    assert_eq!(first, second);
}

#[test]
fn traversal_names_are_skipped() {
    let tmp = TempDir::new().unwrap();
    let project = tmp.path().join("project");
    fs::create_dir(&project).unwrap();
    fs::write(
        project.join("folder_contexts.json"),
        r#"{"folders":[{"name":"../escape","context":{"a":1}},{"name":"Kept","context":{"a":1}}]}"#,
    )
    .unwrap();

    setup_cmd(&project)
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipping folder entry"));

    assert_eq!(image_folders(&project), ["Kept"]);
    assert!(!tmp.path().join("escape").exists());
}

#[test]
fn missing_context_is_warned_about() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("folder_contexts.json"),
        r#"{"folders":[{"name":"Bare"}]}"#,
    )
    .unwrap();

    setup_cmd(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Folder 'Bare' has no context"));

    assert_eq!(image_folders(tmp.path()), ["Bare"]);
}

#[test]
fn summary_counts_page_images() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("folder_contexts.json"),
        r#"{"folders":[{"name":"Alpha","context":{"a":1}}]}"#,
    )
    .unwrap();
    fs::create_dir_all(tmp.path().join("Images/Alpha")).unwrap();
    fs::write(tmp.path().join("Images/Alpha/page_1.jpg"), b"").unwrap();
    fs::write(tmp.path().join("Images/Alpha/page_2.jpg"), b"").unwrap();

    setup_cmd(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("└── Alpha/ (2 pages)"))
        .stdout(predicate::str::contains("page_2.jpg"));
}

#[test]
fn quiet_mode_prints_nothing_on_success() {
    let tmp = TempDir::new().unwrap();

    setup_cmd(tmp.path())
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(tmp.path().join("Images/First").is_dir());
}

#[test]
fn settings_file_changes_layout() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("mathq-setup.toml"),
        "[layout]\nimages_root = \"Scans\"\noutput_dir = \"results\"\n",
    )
    .unwrap();

    setup_cmd(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Scans/"));

    assert!(tmp.path().join("Scans/First").is_dir());
    assert!(tmp.path().join("results").is_dir());
    assert!(!tmp.path().join("Images").exists());
}

#[test]
fn environment_overrides_layout() {
    let tmp = TempDir::new().unwrap();

    setup_cmd(tmp.path())
        .env("MATHQ_LAYOUT__IMAGES_ROOT", "Pages")
        .assert()
        .success();

    assert!(tmp.path().join("Pages/First").is_dir());
}
