//! End-to-end tests for the text-interpolator binary

use std::io::Write;
use std::process::{Command, Output, Stdio};

use pretty_assertions::assert_eq;

fn run(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_text-interpolator"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn text-interpolator");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn test_help() {
    let output = run(&["--help"], "");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Substitute delimited placeholders"));
    assert!(stdout.contains("--var"));
}

#[test]
fn test_stdin_with_vars() {
    let output = run(
        &["-v", "FAV_ANIMAL=tigers", "--var", " SECOND_FAV =lions"],
        "My favorite animals are {{ FAV_ANIMAL }} and {{ SECOND_FAV }}.\n",
    );
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "My favorite animals are tigers and lions.\n"
    );
}

#[test]
fn test_custom_delims() {
    let output = run(&["-l", "<%", "-r", "%>", "-v", "X=1"], "<% X %> {{ X }}");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "1 {{ X }}");
}

#[test]
fn test_config_file_and_overrides() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("interpolator.toml");
    std::fs::write(
        &config_path,
        r#"
[delimiters]
left = "[["
right = "]]"

[variables]
NAME = "config"
OTHER = "kept"
"#,
    )
    .unwrap();
    let input_path = dir.path().join("input.txt");
    std::fs::write(&input_path, "[[NAME]]/[[OTHER]]").unwrap();

    let output = run(
        &[
            "--config",
            config_path.to_str().unwrap(),
            "--var",
            "NAME=flag",
            input_path.to_str().unwrap(),
        ],
        "",
    );
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "flag/kept");
}

#[test]
fn test_invalid_var_rejected() {
    let output = run(&["--var", "missing-equals"], "");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("expected NAME=VALUE"));
}

#[test]
fn test_missing_config_file() {
    let output = run(&["--config", "/nonexistent/interpolator.toml"], "");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error loading config"));
}

#[test]
fn test_missing_input_file() {
    let output = run(&["/nonexistent/template.txt"], "");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error reading file"));
}
