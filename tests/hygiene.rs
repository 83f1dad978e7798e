//! Hygiene — enforces coding standards at test time
//!
//! Scans the library sources under `src/` (sibling `*_test.rs` files excluded)
//! for patterns that panic in the browser or silently drop errors. Every
//! budget is zero; a click handler that panics takes the whole page's wasm
//! instance down with it.

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

/// (pattern, budget, what it is)
const BUDGETS: &[(&str, usize, &str)] = &[
    (".unwrap()", 0, "unwrap"),
    (".expect(", 0, "expect"),
    ("panic!(", 0, "panic!"),
    ("unreachable!(", 0, "unreachable!"),
    ("todo!(", 0, "todo!"),
    ("unimplemented!(", 0, "unimplemented!"),
    ("let _ =", 0, "silent discard"),
    (".ok()", 0, "error swallowed with .ok()"),
    ("#[allow(dead_code)]", 0, "#[allow(dead_code)]"),
];

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
        .map(|file| (file.path.clone(), file.content.lines().filter(|l| l.contains(pattern)).count()))
        .filter(|(_, count)| *count > 0)
        .collect()
}

#[test]
fn sources_are_found() {
    let files = source_files();
    assert!(files.iter().any(|f| f.path.ends_with("controller.rs")), "run from the crate root");
}

#[test]
fn budgets_hold() {
    let files = source_files();
    let mut failures = Vec::new();
    for (pattern, budget, name) in BUDGETS {
        let found = hits(&files, pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > *budget {
            let detail = found
                .iter()
                .map(|(path, c)| format!("    {path}: {c}"))
                .collect::<Vec<_>>()
                .join("\n");
            failures.push(format!("  {name}: found {count}, max {budget}\n{detail}"));
        }
    }
    assert!(failures.is_empty(), "hygiene budgets exceeded:\n{}", failures.join("\n"));
}
