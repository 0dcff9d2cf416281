//! Runs the `gocount` binary end to end and checks which stream each line
//! lands on and the exit status.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tempfile::tempdir;

/// Run `gocount` with `input` on stdin and XDG dirs pointed into `home`.
fn run_gocount(home: &Path, config_home: &Path, input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_gocount"))
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", config_home)
        .env("XDG_STATE_HOME", home.join("state"))
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn gocount");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    child.wait_with_output().expect("wait for gocount")
}

fn lines(bytes: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(bytes)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn empty_input_prints_only_total() {
    let home = tempdir().unwrap();
    let out = run_gocount(home.path(), &home.path().join("config"), "");
    assert!(out.status.success());
    assert_eq!(lines(&out.stdout), vec!["Total: 0"]);
    assert!(out.stderr.is_empty());
}

#[test]
fn counts_go_to_stdout_and_errors_to_stderr() {
    let home = tempdir().unwrap();
    let good = home.path().join("good.txt");
    std::fs::write(&good, "GoGo").unwrap();
    let missing = home.path().join("missing.txt");

    let input = format!("{}\n{}\n", good.display(), missing.display());
    let out = run_gocount(home.path(), &home.path().join("config"), &input);

    assert!(out.status.success(), "per-source errors must not fail the run");
    assert_eq!(
        lines(&out.stdout),
        vec![format!("Count for {}: 2", good.display()), "Total: 2".to_string()]
    );
    let err = lines(&out.stderr);
    assert_eq!(err.len(), 1);
    assert!(err[0].starts_with(&format!("Error for {}: ", missing.display())));
}

#[test]
fn unusable_config_dir_still_counts() {
    let home = tempdir().unwrap();
    let not_a_dir = home.path().join("notadir");
    std::fs::write(&not_a_dir, "").unwrap();

    let out = run_gocount(home.path(), &not_a_dir, "");
    assert!(out.status.success());
    assert_eq!(lines(&out.stdout), vec!["Total: 0"]);
}

#[test]
fn counting_does_not_create_config_file() {
    let home = tempdir().unwrap();
    let config_home = home.path().join("config");
    let out = run_gocount(home.path(), &config_home, "");
    assert!(out.status.success());
    assert!(!config_home.join("gocount").join("config.toml").exists());
}
