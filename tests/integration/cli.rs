//! Integration tests for the treeify binary surface.
//!
//! Spawns the compiled binary and checks the stdout/stderr/exit-code
//! contract: result JSON on stdout on success, mapped error on stderr and
//! nothing on stdout on failure.

use std::process::Command;

fn run(args: &[&str]) -> std::process::Output {
    let bin = env!("CARGO_BIN_EXE_treeify");
    Command::new(bin).args(args).output().unwrap()
}

#[test]
fn test_convert_single_blob() {
    let output = run(&["--json", r#"{"tree":[{"path":"a.txt","type":"blob"}]}"#]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "[{\"name\":\"a.txt\",\"fullPath\":\"a.txt\"}]\n"
    );
}

#[test]
fn test_convert_nested_listing() {
    let output = run(&[
        "--json",
        r#"{"tree":[{"path":"src","type":"tree"},{"path":"src/main.rs","type":"blob"},{"path":"README.md","type":"blob"}]}"#,
    ]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim_end(),
        r#"[{"name":"src","files":[{"name":"main.rs","fullPath":"src/main.rs"}]},{"name":"README.md","fullPath":"README.md"}]"#
    );
}

#[test]
fn test_missing_json_flag_fails() {
    let output = run(&[]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("json not provided"));
}

#[test]
fn test_invalid_json_fails() {
    let output = run(&["--json", "{not valid"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to parse json"));
}

#[test]
fn test_wrong_shape_fails() {
    let output = run(&["--json", r#"{"branches":[]}"#]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_verbose_logs_stay_off_stdout() {
    let output = run(&[
        "--verbose",
        "--log-level",
        "debug",
        "--json",
        r#"{"tree":[{"path":"a.txt","type":"blob"}]}"#,
    ]);

    assert!(output.status.success());
    // stdout carries exactly the result line, logs land on stderr
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "[{\"name\":\"a.txt\",\"fullPath\":\"a.txt\"}]\n"
    );
}
