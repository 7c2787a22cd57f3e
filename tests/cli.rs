//! End-to-end tests running the `sax` binary over fixture files.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Create a directory with small text fixtures
fn create_fixture_dir() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");

    fs::write(
        dir.path().join("tale.txt"),
        "it was the best of times it was the worst of times\n\
         it was the age of wisdom it was the age of foolishness\n",
    )
    .unwrap();
    fs::write(dir.path().join("abra.txt"), "ABRACADABRA!\n").unwrap();
    fs::write(dir.path().join("a.txt"), "the quick brown fox\n").unwrap();
    fs::write(dir.path().join("b.txt"), "a brown fox jumps\n").unwrap();
    fs::write(dir.path().join("words.txt"), "apple\napply\napricot\nbanana\nband\n").unwrap();
    fs::write(dir.path().join("typos.txt"), "apple\naple\nbanana\nbannana\n").unwrap();

    dir
}

fn run_sax(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sax"))
        .args(args)
        .arg("--color=never")
        .current_dir(dir)
        .output()
        .expect("Failed to run sax")
}

fn stdout_of(dir: &Path, args: &[&str]) -> String {
    let output = run_sax(dir, args);
    assert!(
        output.status.success(),
        "sax {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn test_kwic() {
    let dir = create_fixture_dir();
    let out = stdout_of(dir.path(), &["kwic", "tale.txt", "age", "-c", "4"]);

    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines.iter().all(|l| l.contains("the age of")));
}

#[test]
fn test_kwic_ignore_case_keeps_original_text() {
    let dir = create_fixture_dir();
    let out = stdout_of(dir.path(), &["kwic", "abra.txt", "abra", "-i", "-c", "0"]);

    assert_eq!(out.lines().count(), 2);
    assert!(out.lines().all(|l| l.ends_with("ABRA")));
}

#[test]
fn test_lrs() {
    let dir = create_fixture_dir();
    let out = stdout_of(dir.path(), &["lrs", "abra.txt"]);
    assert_eq!(out.trim(), "LRS: 'ABRA'");
}

#[test]
fn test_lcs() {
    let dir = create_fixture_dir();
    let out = stdout_of(dir.path(), &["lcs", "a.txt", "b.txt"]);
    assert_eq!(out.trim(), "The longest common substring is: ' brown fox'");
}

#[test]
fn test_spell() {
    let dir = create_fixture_dir();
    let out = stdout_of(dir.path(), &["spell", "words.txt", "typos.txt"]);
    assert_eq!(out, "Misspelled words are:\n* aple\n* bannana\n");
}

#[test]
fn test_complete() {
    let dir = create_fixture_dir();
    let out = stdout_of(dir.path(), &["complete", "words.txt", "ap", "-n", "2"]);
    assert_eq!(out, "apple\napply\n");
}

#[test]
fn test_table() {
    let dir = create_fixture_dir();
    let out = stdout_of(dir.path(), &["table", "abra.txt"]);
    let rows: Vec<Vec<&str>> = out.lines().skip(1).map(|l| l.split('\t').collect()).collect();

    assert_eq!(rows.len(), 12);
    assert_eq!(rows[0][..3], ["0", "11", "-"]);
    assert_eq!(rows[3][..4], ["3", "0", "4", "3"]);
    assert_eq!(rows[3][4], "\"ABRACADABRA!\"");
}

#[test]
fn test_stats_json() {
    let dir = create_fixture_dir();
    let out = stdout_of(dir.path(), &["stats", "abra.txt", "--json"]);
    let stats: serde_json::Value = serde_json::from_str(&out).unwrap();

    // Raw mode keeps the trailing newline
    assert_eq!(stats["text_size"], 13);
    assert_eq!(stats["max_lcp"], 4);
    assert_eq!(stats["case_insensitive"], false);
}

#[test]
fn test_config_file() {
    let dir = create_fixture_dir();
    let config: PathBuf = dir.path().join("sax.json");
    fs::write(&config, r#"{ "insertion_cutoff": 2, "case_insensitive": true }"#).unwrap();

    let out = stdout_of(
        dir.path(),
        &["stats", "abra.txt", "--json", "--config", config.to_str().unwrap()],
    );
    let stats: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(stats["insertion_cutoff"], 2);
    assert_eq!(stats["case_insensitive"], true);
}

#[test]
fn test_invalid_config_rejected() {
    let dir = create_fixture_dir();
    fs::write(dir.path().join("bad.json"), r#"{ "insertion_cutoff": 0 }"#).unwrap();

    let output = run_sax(dir.path(), &["stats", "abra.txt", "--config", "bad.json"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("insertion_cutoff"));
}

#[test]
fn test_missing_file() {
    let dir = create_fixture_dir();
    let output = run_sax(dir.path(), &["lrs", "nope.txt"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("nope.txt"));
}
