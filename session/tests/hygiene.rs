//! Hygiene checks: keep the session crate free of panics and swallowed errors.
//!
//! Session handling runs on every navigation; a panic here takes the whole
//! UI down and a discarded storage error hides a stuck login. Each pattern
//! has a budget of zero.
#![allow(clippy::absurd_extreme_comparisons)]

use std::fs;
use std::path::Path;

// Panics.
const MAX_UNWRAP: usize = 0;
const MAX_EXPECT: usize = 0;
const MAX_PANIC: usize = 0;
const MAX_TODO: usize = 0;

// Silent loss.
const MAX_SILENT_DISCARD: usize = 0;
const MAX_DOT_OK: usize = 0;

// Secrets.
const MAX_TOKEN_AS_STR_IN_LOGS: usize = 0;

struct SourceFile {
    path: String,
    content: String,
}

/// Collect production `.rs` files from `src/`, excluding `*_test.rs`.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

fn count_lines(files: &[SourceFile], matches: impl Fn(&str) -> bool) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| matches(line)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

fn count_in_source(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    count_lines(files, |line| line.contains(pattern))
}

fn total(hits: &[(String, usize)]) -> usize {
    hits.iter().map(|(_, c)| c).sum()
}

fn format_hits(hits: &[(String, usize)]) -> String {
    hits.iter()
        .map(|(path, count)| format!("  {path}: {count}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn assert_budget(name: &str, hits: &[(String, usize)], max: usize) {
    let count = total(hits);
    assert!(count <= max, "{name} budget exceeded: found {count}, max {max}.\n{}", format_hits(hits));
}

#[test]
fn sources_are_found() {
    assert!(source_files().len() >= 4, "expected the session sources under src/");
}

#[test]
fn unwrap_budget() {
    assert_budget(".unwrap()", &count_in_source(&source_files(), ".unwrap()"), MAX_UNWRAP);
}

#[test]
fn expect_budget() {
    assert_budget(".expect()", &count_in_source(&source_files(), ".expect("), MAX_EXPECT);
}

#[test]
fn panic_budget() {
    assert_budget("panic!()", &count_in_source(&source_files(), "panic!("), MAX_PANIC);
}

#[test]
fn todo_budget() {
    assert_budget("todo!()", &count_in_source(&source_files(), "todo!("), MAX_TODO);
}

#[test]
fn silent_discard_budget() {
    assert_budget("let _ =", &count_in_source(&source_files(), "let _ ="), MAX_SILENT_DISCARD);
}

#[test]
fn dot_ok_budget() {
    assert_budget(".ok()", &count_in_source(&source_files(), ".ok()"), MAX_DOT_OK);
}

#[test]
fn tokens_never_reach_log_macros() {
    let hits = count_lines(&source_files(), |line| line.contains("log::") && line.contains("token.as_str()"));
    assert_budget("token in log line", &hits, MAX_TOKEN_AS_STR_IN_LOGS);
}
