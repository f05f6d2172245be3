//! Integration tests for the Bloomdown CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const BOOK: &str = r#"---
allTitles:
  en: "Test Book"
  es: "Libro de Prueba"
languages:
  en: "English"
  es: "Spanish"
l1: en
l2: es
---

<!-- lang=en -->
Hi

![Picture](picture.png)

<!-- lang=es -->
Hola

<!-- page-break -->

<!-- lang=en -->
The end
"#;

/// Create a markdown file for testing
fn create_test_markdown(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write test file");
    path
}

fn bloomdown() -> Command {
    Command::cargo_bin("bloomdown").unwrap()
}

#[test]
fn test_help() {
    bloomdown()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("convert"))
        .stdout(predicate::str::contains("validate"))
        .stdout(predicate::str::contains("info"));
}

#[test]
fn test_version() {
    bloomdown()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("bloomdown"));
}

#[test]
fn test_convert_missing_input_argument() {
    bloomdown()
        .arg("convert")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_convert_nonexistent_file() {
    bloomdown()
        .args(["convert", "/nonexistent/book.md"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn test_convert_writes_htm_next_to_input() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("picture.png"), b"png").unwrap();
    let input = create_test_markdown(&temp_dir, "story-enriched.md", BOOK);

    bloomdown()
        .args(["convert", input.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pages:       2"));

    let html = fs::read_to_string(temp_dir.path().join("story.htm")).unwrap();
    assert!(html.contains("<title>Test Book</title>"));
    assert!(html.contains(r#"<meta name="Generator" content="bloomdown "#));
    assert!(html.contains(r#"<div class="bloom-editable" lang="es"><p>Hola</p></div>"#));
}

#[test]
fn test_convert_overwrites_existing_output() {
    let temp_dir = TempDir::new().unwrap();
    let input = create_test_markdown(&temp_dir, "story.md", BOOK);
    let output = temp_dir.path().join("out.htm");
    fs::write(&output, "stale content").unwrap();

    bloomdown()
        .args([
            "convert",
            input.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
        ])
        .assert()
        .success();

    let html = fs::read_to_string(&output).unwrap();
    assert!(!html.contains("stale content"));
    assert!(html.starts_with("<!doctype html>"));
}

#[test]
fn test_convert_reports_missing_images() {
    let temp_dir = TempDir::new().unwrap();
    let input = create_test_markdown(&temp_dir, "story.md", BOOK);

    bloomdown()
        .args(["convert", input.to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("Image not found: picture.png (page 1)"));
}

#[test]
fn test_invalid_metadata_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let input = create_test_markdown(
        &temp_dir,
        "broken.md",
        "---\nallTitles:\n  en: Broken\n---\n<!-- lang=en -->\nHi",
    );

    bloomdown()
        .args(["convert", input.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing required field: languages"))
        .stderr(predicate::str::contains("Missing required field: l1"));

    assert!(!temp_dir.path().join("broken.htm").exists());
}

#[test]
fn test_validate() {
    let temp_dir = TempDir::new().unwrap();
    let input = create_test_markdown(&temp_dir, "story.md", BOOK);

    bloomdown()
        .args(["validate", input.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Validation passed"));

    assert!(!temp_dir.path().join("story.htm").exists());
}

#[test]
fn test_info_json() {
    let temp_dir = TempDir::new().unwrap();
    let input = create_test_markdown(&temp_dir, "story.md", BOOK);

    let output = bloomdown()
        .args(["info", input.to_str().unwrap(), "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let info: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(info["title"], "Test Book");
    assert_eq!(info["pages"], 2);
    assert_eq!(info["images"], 1);
    assert_eq!(info["layouts"]["bilingual-text-image-text"], 1);
    assert_eq!(info["layouts"]["text-only"], 1);
}

#[test]
fn test_info_lists_layout_names() {
    let temp_dir = TempDir::new().unwrap();
    let input = create_test_markdown(&temp_dir, "story.md", BOOK);

    bloomdown()
        .args(["info", input.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Title:       Test Book"))
        .stdout(predicate::str::contains("  Text Only: 1"))
        .stdout(predicate::str::contains("  Bilingual Text Image Text: 1"));
}
