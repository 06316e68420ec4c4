//! End-to-end flows for the `lazytodo` binary.
//!
//! Every test points `HOME` at a fresh temp directory, so each run gets its
//! own storage file and log directory.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn lazytodo(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("lazytodo").expect("binary should be built");
    cmd.env("HOME", home.path());
    cmd
}

fn store_path(home: &TempDir) -> PathBuf {
    home.path().join(".local").join("share").join("lazytodo.json")
}

fn seed_store(home: &TempDir, document: &str) {
    let path = store_path(home);
    fs::create_dir_all(path.parent().expect("store path has a parent"))
        .expect("data dir should be created");
    fs::write(path, document).expect("seed write should succeed");
}

#[test]
fn fresh_home_lists_nothing_and_initializes_the_store() {
    let home = TempDir::new().expect("temp home should be created");

    lazytodo(&home).assert().success().stdout("");

    let contents = fs::read_to_string(store_path(&home)).expect("store file should exist");
    let value: serde_json::Value = serde_json::from_str(&contents).expect("document should parse");
    assert_eq!(value["todos"], serde_json::json!([]));
}

#[test]
fn new_then_do_round_trip() {
    let home = TempDir::new().expect("temp home should be created");

    lazytodo(&home)
        .args(["--new", "buy milk"])
        .assert()
        .success()
        .stdout("1. buy milk\n");

    let contents = fs::read_to_string(store_path(&home)).expect("store file should exist");
    let value: serde_json::Value = serde_json::from_str(&contents).expect("document should parse");
    assert_eq!(value["todos"][0]["content"], "buy milk");
    assert_eq!(value["todos"][0]["done"], false);

    lazytodo(&home)
        .args(["--do", "1"])
        .assert()
        .success()
        .stdout("");

    let contents = fs::read_to_string(store_path(&home)).expect("store file should exist");
    let value: serde_json::Value = serde_json::from_str(&contents).expect("document should parse");
    assert_eq!(value["todos"][0]["done"], true);
}

#[test]
fn pending_listing_keeps_absolute_positions() {
    let home = TempDir::new().expect("temp home should be created");
    seed_store(
        &home,
        r#"{"todos":[
            {"content":"a","done":true},
            {"content":"b","done":false},
            {"content":"c","done":false}
        ]}"#,
    );

    lazytodo(&home).assert().success().stdout("2. b\n3. c\n");
}

#[test]
fn all_listing_includes_done_items() {
    let home = TempDir::new().expect("temp home should be created");
    seed_store(
        &home,
        r#"{"todos":[
            {"content":"a","done":true},
            {"content":"b","done":false}
        ]}"#,
    );

    lazytodo(&home)
        .arg("--all")
        .assert()
        .success()
        .stdout("1. [x] a\n2. [ ] b\n");
}

#[test]
fn empty_content_is_a_valid_todo() {
    let home = TempDir::new().expect("temp home should be created");

    lazytodo(&home)
        .args(["--new", ""])
        .assert()
        .success()
        .stdout("1. \n");
}

#[test]
fn out_of_range_position_fails_and_preserves_the_store() {
    let home = TempDir::new().expect("temp home should be created");
    seed_store(&home, r#"{"todos":[{"content":"a","done":false}]}"#);
    let before = fs::read(store_path(&home)).expect("store file should exist");

    lazytodo(&home)
        .args(["--do", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("valid range is 1-1"));

    let after = fs::read(store_path(&home)).expect("store file should exist");
    assert_eq!(before, after);
}

#[test]
fn conflicting_flags_fail_without_touching_the_store() {
    let home = TempDir::new().expect("temp home should be created");
    seed_store(&home, r#"{"todos":[{"content":"a","done":false}]}"#);
    let before = fs::read(store_path(&home)).expect("store file should exist");

    lazytodo(&home)
        .args(["--new", "x", "--do", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Only one operation at a time"));

    let after = fs::read(store_path(&home)).expect("store file should exist");
    assert_eq!(before, after);
}

#[test]
fn conflicting_flags_on_fresh_home_do_not_create_the_store() {
    let home = TempDir::new().expect("temp home should be created");

    lazytodo(&home)
        .args(["--new", "x", "--do", "1"])
        .assert()
        .failure();

    assert!(!store_path(&home).exists());
}

#[test]
fn malformed_store_aborts_with_a_data_error() {
    let home = TempDir::new().expect("temp home should be created");
    seed_store(&home, "not a todo document");

    lazytodo(&home)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid todo data"));
}
