//! Hygiene — coding standards for the theme-toggle sources.
//!
//! Library code reports failures as `ThemeError` and logs through `tracing`.
//! These scans keep panics, swallowed errors and stray console output out of
//! `src/`. Budgets are zero and stay zero.

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

/// Production `.rs` files under `src/`, excluding `*_test.rs`.
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
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

fn assert_absent(pattern: &str, why: &str) {
    let files = source_files();
    assert!(!files.is_empty(), "no sources found under src/");
    let found = hits(&files, pattern);
    assert!(
        found.is_empty(),
        "`{pattern}` is not allowed in src/ ({why}):\n{}",
        found
            .iter()
            .map(|(path, count)| format!("  {path}: {count}"))
            .collect::<Vec<_>>()
            .join("\n")
    );
}

#[test]
fn no_unwrap() {
    assert_absent(".unwrap()", "return a ThemeError instead");
}

#[test]
fn no_expect() {
    assert_absent(".expect(", "return a ThemeError instead");
}

#[test]
fn no_panic() {
    assert_absent("panic!(", "return a ThemeError instead");
}

#[test]
fn no_unreachable_or_todo() {
    assert_absent("unreachable!(", "match exhaustively");
    assert_absent("todo!(", "finish the stub");
    assert_absent("unimplemented!(", "finish the stub");
}

#[test]
fn no_silent_discard() {
    assert_absent("let _ =", "propagate or log the error");
    assert_absent(".ok()", "propagate or log the error");
}

#[test]
fn no_console_output() {
    assert_absent("println!(", "log through tracing");
    assert_absent("eprintln!(", "log through tracing");
    assert_absent("dbg!(", "log through tracing");
}
