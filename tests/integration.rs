//! Integration tests for pagetree


use assert_cmd::Command;
use harness::{TestDir, file_url, run_pagetree};
use predicates::prelude::*;

fn sample_dir() -> TestDir {
    let dir = TestDir::new();
    dir.add_file("a.txt", "a");
    dir.add_file("sub/b.txt", "b");
    dir.add_file("sub/deeper/c.txt", "c");
    dir.add_dir("empty");
    dir
}

#[test]
fn test_local_directory_tree() {
    let dir = sample_dir();
    let (stdout, stderr, success) = run_pagetree(dir.path(), &["."]);
    assert!(success, "pagetree should succeed: {stderr}");
    assert_eq!(
        stdout,
        "├──a.txt\n├──empty\n└──sub\n    ├──b.txt\n    └──deeper\n        └──c.txt\n"
    );
}

#[test]
fn test_small_pages_same_entries() {
    let dir = sample_dir();
    let (stdout, _stderr, success) = run_pagetree(dir.path(), &[".", "-n", "1"]);
    assert!(success);
    // With one entry per page every page is full, so no entry is known to be last.
    assert_eq!(
        stdout,
        "├──a.txt\n├──empty\n├──sub\n│   ├──b.txt\n│   ├──deeper\n│   │   ├──c.txt\n"
    );
}

#[test]
fn test_file_url_with_trailing_slash_lists_directory() {
    let dir = sample_dir();
    let url = file_url(&dir, "sub/");
    let (stdout, _stderr, success) = run_pagetree(dir.path(), &[&url]);
    assert!(success);
    assert_eq!(stdout, "├──b.txt\n└──deeper\n    └──c.txt\n");
}

#[test]
fn test_file_url_without_slash_shows_single_entry() {
    let dir = sample_dir();
    let url = file_url(&dir, "sub");
    let (stdout, _stderr, success) = run_pagetree(dir.path(), &[&url]);
    assert!(success);
    assert_eq!(stdout, "└──sub\n    ├──b.txt\n    └──deeper\n        └──c.txt\n");
}

#[test]
fn test_depth_limit() {
    let dir = sample_dir();
    let (stdout, _stderr, success) = run_pagetree(dir.path(), &[".", "-L", "1"]);
    assert!(success);
    assert_eq!(stdout, "├──a.txt\n├──empty\n└──sub\n");
}

#[test]
fn test_depth_limit_logs_unlisted_directories() {
    let dir = sample_dir();
    let (stdout, stderr, success) = run_pagetree(dir.path(), &[".", "-L", "1", "-vv"]);
    assert!(success);
    assert_eq!(stdout, "├──a.txt\n├──empty\n└──sub\n");
    assert_eq!(
        stderr.matches("depth limit reached").count(),
        2,
        "expected one line per unlisted directory: {stderr}"
    );
}

#[test]
fn test_summary() {
    let dir = sample_dir();
    let (stdout, _stderr, success) = run_pagetree(dir.path(), &[".", "--summary"]);
    assert!(success);
    assert!(
        stdout.ends_with("\n3 directories, 3 files\n"),
        "unexpected summary: {stdout}"
    );
}

#[test]
fn test_empty_directory_prints_nothing() {
    let dir = TestDir::new();
    let (stdout, _stderr, success) = run_pagetree(dir.path(), &["."]);
    assert!(success);
    assert!(stdout.is_empty(), "expected no output, got: {stdout}");
}

#[test]
fn test_output_is_repeatable() {
    let dir = sample_dir();
    let (first, _, _) = run_pagetree(dir.path(), &[".", "-n", "2"]);
    let (second, _, _) = run_pagetree(dir.path(), &[".", "-n", "2"]);
    assert_eq!(first, second);
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let dir = sample_dir();
    let (stdout, stderr, success) = run_pagetree(dir.path(), &[".", "-vv"]);
    assert!(success);
    assert!(stderr.contains("listed page"), "expected debug logs: {stderr}");
    assert!(!stdout.contains("listed page"));
}

#[test]
fn test_help() {
    Command::cargo_bin("pagetree")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--page-size"));
}

#[test]
fn test_harness_creates_temp_dir() {
    let dir = TestDir::new();
    assert!(dir.path().exists());
}

#[test]
fn test_harness_add_file() {
    let dir = TestDir::new();
    let file_path = dir.add_file("nested/test.txt", "content");
    assert!(file_path.exists());
}
