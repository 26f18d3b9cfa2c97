//! Structural tests for architectural boundary enforcement.
//!
//! These tests scan source files to verify that the layer boundaries hold:
//! domain is pure, the application layer sees only ports, and concrete
//! infrastructure is wired in one place.

use std::path::{Path, PathBuf};

/// Collect all `.rs` files under a directory recursively.
fn collect_rs_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                files.extend(collect_rs_files(&path));
            } else if path.extension().and_then(|e| e.to_str()) == Some("rs") {
                files.push(path);
            }
        }
    }
    files
}

/// Read a file and strip comment lines to avoid false positives.
fn read_non_comment_lines(path: &Path) -> Vec<String> {
    let Ok(content) = std::fs::read_to_string(path) else {
        return Vec::new();
    };
    content
        .lines()
        .filter(|l| {
            let trimmed = l.trim();
            !trimmed.starts_with("//") && !trimmed.starts_with("/*") && !trimmed.starts_with('*')
        })
        .map(String::from)
        .collect()
}

fn src_dir(layer: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("src").join(layer)
}

/// Report every line under `dir` that mentions one of `forbidden`.
fn find_violations(dir: &Path, forbidden: &[&str]) -> Vec<String> {
    let mut violations = Vec::new();
    for file in collect_rs_files(dir) {
        let rel = file
            .strip_prefix(env!("CARGO_MANIFEST_DIR"))
            .unwrap_or(&file)
            .display()
            .to_string();

        for (i, line) in read_non_comment_lines(&file).iter().enumerate() {
            for pattern in forbidden {
                if line.contains(pattern) {
                    violations.push(format!("{rel}:{}: found `{pattern}`: {line}", i + 1));
                }
            }
        }
    }
    violations
}

#[test]
fn domain_is_free_of_io_and_outer_layers() {
    let violations = find_violations(
        &src_dir("domain"),
        &[
            "tokio",
            "std::net",
            "std::process",
            "crate::infra",
            "crate::application",
            "crate::commands",
            "crate::output",
        ],
    );

    assert!(
        violations.is_empty(),
        "Domain layer must stay pure:\n{}",
        violations.join("\n")
    );
}

#[test]
fn application_depends_only_on_domain_and_ports() {
    let violations = find_violations(
        &src_dir("application"),
        &["crate::infra", "crate::commands", "crate::output", "std::net"],
    );

    assert!(
        violations.is_empty(),
        "Application layer must not reach into outer layers:\n{}",
        violations.join("\n")
    );
}

#[test]
fn infra_has_no_imports_from_commands_or_output() {
    let violations = find_violations(&src_dir("infra"), &["crate::commands", "crate::output"]);

    assert!(
        violations.is_empty(),
        "Infra must not depend on presentation:\n{}",
        violations.join("\n")
    );
}

#[test]
fn concrete_infra_is_wired_only_in_commands() {
    let src = Path::new(env!("CARGO_MANIFEST_DIR")).join("src");
    let mut violations = Vec::new();

    for layer in ["application", "domain", "output"] {
        violations.extend(find_violations(
            &src.join(layer),
            &["TcpProbe", "ProcessLauncher"],
        ));
    }

    assert!(
        violations.is_empty(),
        "Concrete probe/launcher referenced outside commands/ — use the port traits:\n{}",
        violations.join("\n")
    );
}
