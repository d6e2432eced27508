//! Command-line Test Suite
//!
//! Runs the compiled binary against temporary data files to check the
//! `venues` inspection commands and that `serve` refuses to start on bad data.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

const TWO_VENUES: &str = r#"[{"id":"1","name":"Grand Hall"},{"id":"2","name":"Riverside Room"}]"#;

fn data_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::with_suffix(".json").expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp file");
    file
}

fn venue_catalog() -> Command {
    let mut cmd = Command::cargo_bin("venue-catalog").expect("binary should build");
    cmd.env_remove("VENUE_CATALOG_DATA").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_list_text() {
    let data = data_file(TWO_VENUES);

    venue_catalog()
        .args(["venues", "list", "--data"])
        .arg(data.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Venue Catalog (2 venues)"))
        .stdout(predicate::str::contains("Grand Hall"))
        .stdout(predicate::str::contains("Riverside Room"));
}

#[test]
fn test_list_json_preserves_order() {
    let data = data_file(TWO_VENUES);

    let output = venue_catalog()
        .args(["venues", "list", "--format", "json", "--data"])
        .arg(data.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let listed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(listed, serde_json::from_str::<serde_json::Value>(TWO_VENUES).unwrap());
}

#[test]
fn test_data_path_from_environment() {
    let data = data_file(TWO_VENUES);

    venue_catalog()
        .env("VENUE_CATALOG_DATA", data.path())
        .args(["venues", "list", "--format", "tsv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1\tGrand Hall"))
        .stdout(predicate::str::contains("2\tRiverside Room"));
}

#[test]
fn test_show_existing_venue() {
    let data = data_file(TWO_VENUES);

    venue_catalog()
        .args(["venues", "show", "2", "--format", "json", "--data"])
        .arg(data.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Riverside Room\""))
        .stdout(predicate::str::contains("Grand Hall").not());
}

#[test]
fn test_show_missing_venue_fails() {
    let data = data_file(TWO_VENUES);

    venue_catalog()
        .args(["venues", "show", "99", "--data"])
        .arg(data.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Venue '99' not found"));
}

#[test]
fn test_check_clean_data() {
    let data = data_file(TWO_VENUES);

    venue_catalog()
        .args(["venues", "check", "--data"])
        .arg(data.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Venues: 2"))
        .stdout(predicate::str::contains("No duplicate ids"));
}

#[test]
fn test_check_reports_duplicates() {
    let data = data_file(r#"[{"id":"a"},{"id":"b"},{"id":"a"}]"#);

    venue_catalog()
        .args(["venues", "check", "--data"])
        .arg(data.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("Duplicate ids: a"))
        .stderr(predicate::str::contains("1 duplicate venue id(s)"));
}

#[test]
fn test_serve_fails_on_missing_data() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("venues.json");

    venue_catalog()
        .args(["serve", "--port", "0", "--data"])
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read venue data"));
}

#[test]
fn test_serve_fails_on_malformed_data() {
    let data = data_file(r#"{"venues": "not an array"}"#);

    venue_catalog()
        .args(["serve", "--port", "0", "--data"])
        .arg(data.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("JSON array"));
}

#[test]
fn test_serve_fails_on_record_without_id() {
    let data = data_file(r#"[{"id":"1"},{"name":"Nameless"}]"#);

    venue_catalog()
        .args(["serve", "--port", "0", "--data"])
        .arg(data.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("index 1"));
}
