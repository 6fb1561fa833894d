//! End-to-end runs of the `cyclic` binary: output bytes and exit codes.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// `cyclic` with no config file or log filter leaking in from the host
fn cyclic(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("cyclic").unwrap();
    cmd.env_remove("CYCLIC_CONFIG")
        .env_remove("RUST_LOG")
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join("config"));
    cmd
}

#[test]
fn test_generate_default_pattern() {
    let home = TempDir::new().unwrap();
    let output = cyclic(&home).arg("20").output().unwrap();

    assert!(output.status.success());
    // stdout is a pipe here, so no trailing newline
    assert_eq!(output.stdout, b"aaaabaaacaaadaaaeaaa");
    assert!(output.stderr.is_empty());
}

#[test]
fn test_capacity_warning_still_exits_zero() {
    let home = TempDir::new().unwrap();
    cyclic(&home)
        .args(["-a", "ab", "-n", "2", "100"])
        .assert()
        .success()
        .stdout(predicate::eq(&b"aabba"[..]))
        .stderr(predicate::str::contains("Alphabet too small (max length = 5)"));
}

#[test]
fn test_lookup_prints_offset() {
    let home = TempDir::new().unwrap();
    cyclic(&home)
        .args(["-l", "daaa"])
        .assert()
        .success()
        .stdout("12\n");

    cyclic(&home)
        .args(["-o", "0x61616164"])
        .assert()
        .success()
        .stdout("12\n");

    cyclic(&home)
        .args(["-c", "mips", "--offset", "0x64616161"])
        .assert()
        .success()
        .stdout("12\n");
}

#[test]
fn test_lookup_wide_window() {
    let home = TempDir::new().unwrap();
    cyclic(&home)
        .args(["-n", "8", "-l", "aaaabaaa"])
        .assert()
        .success()
        .stdout("4\n");
}

#[test]
fn test_lookup_wrong_length_exits_one() {
    let home = TempDir::new().unwrap();
    cyclic(&home)
        .args(["-l", "aaa"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Subpattern must be 4 bytes, got 3"));
}

#[test]
fn test_lookup_foreign_symbols_exits_one() {
    let home = TempDir::new().unwrap();
    cyclic(&home)
        .args(["-l", "AAAA"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Pattern contains characters not present in the alphabet",
        ));
}

#[test]
fn test_huge_window_exits_one() {
    let home = TempDir::new().unwrap();
    cyclic(&home)
        .args(["-n", "1000000000", "10"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("exceeds the maximum of 4096"));
}

#[test]
fn test_missing_mode_is_usage_error() {
    let home = TempDir::new().unwrap();
    cyclic(&home).assert().code(2);
    cyclic(&home).args(["20", "-l", "aaaa"]).assert().code(2);
}

#[test]
fn test_config_file_applies_and_logs() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("cyclic.toml");
    fs::write(&path, "alphabet = \"ab\"\nlength = 2\n").unwrap();

    let output = cyclic(&home)
        .arg("--config")
        .arg(&path)
        .args(["-v", "5"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(output.stdout, b"aabba");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Loaded config from"),
        "config load should be logged: {}",
        stderr
    );
}

#[test]
fn test_missing_explicit_config_exits_one() {
    let home = TempDir::new().unwrap();
    cyclic(&home)
        .arg("--config")
        .arg(home.path().join("missing.toml"))
        .arg("20")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to read config"));
}
