//! CLI Integration Tests
//!
//! These tests verify the CLI commands work correctly end-to-end.
//! They test the "wiring" between the CLI and the core library.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

fn cli_cmd() -> Command {
    Command::cargo_bin("forge").expect("Failed to find forge binary")
}

/// Write a deck file into a temporary directory
fn write_deck(dir: &TempDir, json: &str) -> std::path::PathBuf {
    let path = dir.path().join("cards.json");
    std::fs::write(&path, json).unwrap();
    path
}

// ============================================================================
// Cards Command Tests
// ============================================================================

#[test]
fn test_cards_lists_bundled_deck() {
    cli_cmd()
        .arg("cards")
        .assert()
        .success()
        .stdout(predicate::str::contains("emberstrike-01  EMBERSTRIKE (High-End, $2,199)"))
        .stdout(predicate::str::contains("Tags: 1440p, Quiet, Intel"))
        .stdout(predicate::str::contains("3 card(s), ids unique"));
}

#[test]
fn test_cards_json_output() {
    let output = cli_cmd().args(["cards", "--json"]).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value.as_array().map(|a| a.len()), Some(3));
    assert_eq!(value[2]["id"], "bang4buck-03");
}

#[test]
fn test_cards_rejects_duplicate_ids() {
    let dir = TempDir::new().unwrap();
    let card = r#"{"id": "dup", "title": "T", "tier": "t", "price": "$1",
                  "frontImage": "/f.jpg", "backImage": "/b.jpg",
                  "destinationLink": "https://example.com"}"#;
    let path = write_deck(&dir, &format!("[{}, {}]", card, card));

    cli_cmd()
        .arg("cards")
        .arg("--file")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Duplicate card id: dup"));
}

#[test]
fn test_cards_missing_file() {
    let dir = TempDir::new().unwrap();

    cli_cmd()
        .arg("cards")
        .arg("--file")
        .arg(dir.path().join("nope.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

// ============================================================================
// Link Command Tests
// ============================================================================

#[test]
fn test_link_preserves_existing_param() {
    cli_cmd()
        .args([
            "link",
            "https://x.example/go?utm_source=existing",
            "--card",
            "card1",
            "--param",
            "utm_source=stored",
        ])
        .assert()
        .success()
        .stdout("https://x.example/go?utm_source=existing&ref_card=card1\n");
}

#[test]
fn test_link_merges_params() {
    cli_cmd()
        .args([
            "link",
            "https://your-short.link/frostcore",
            "--card",
            "frostcore-02",
            "-p",
            "utm_medium=email",
            "-p",
            "utm_source=newsletter",
        ])
        .assert()
        .success()
        .stdout(
            "https://your-short.link/frostcore?utm_source=newsletter&utm_medium=email&ref_card=frostcore-02\n",
        );
}

#[test]
fn test_link_malformed_destination_unchanged() {
    cli_cmd()
        .args(["link", "not a url###", "--card", "card1"])
        .assert()
        .success()
        .stdout("not a url###\n");
}

#[test]
fn test_link_relative_uses_origin() {
    cli_cmd()
        .args(["link", "/builds/value", "--origin", "https://preview.example"])
        .assert()
        .success()
        .stdout("https://preview.example/builds/value\n");
}

#[test]
fn test_link_without_origin() {
    cli_cmd()
        .args(["link", "/builds/value", "--no-origin", "--card", "c"])
        .assert()
        .success()
        .stdout("/builds/value\n");
}

#[test]
fn test_link_rejects_unknown_param() {
    cli_cmd()
        .args(["link", "https://x.example", "--param", "gclid=abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown tracking key 'gclid'"));
}

// ============================================================================
// Capture Command Tests
// ============================================================================

#[test]
fn test_capture_lists_tracking_params() {
    cli_cmd()
        .args([
            "capture",
            "https://pcforge.pages.dev/?utm_campaign=launch&fbclid=x&utm_source=reddit",
        ])
        .assert()
        .success()
        .stdout("utm_source=reddit\nutm_campaign=launch\n");
}

#[test]
fn test_capture_nothing() {
    cli_cmd()
        .args(["capture", "https://pcforge.pages.dev/forge"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No tracking parameters."));
}

#[test]
fn test_capture_json() {
    let output = cli_cmd()
        .args(["capture", "https://pcforge.pages.dev/?utm_term=gpu", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value[0]["key"], "utm_term");
    assert_eq!(value[0]["value"], "gpu");
}

#[test]
fn test_capture_invalid_url() {
    cli_cmd()
        .args(["capture", "no scheme here"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid URL"));
}
