//! Integration tests for the `fleetreg` CLI binary.
//!
//! These tests validate argument parsing, help output, shell completions,
//! and the offline data path — all without a deployed registry service.
#![allow(clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `fleetreg` binary with env isolation.
///
/// Points HOME and the XDG dirs at a temp directory and clears all
/// `FLEETREG_*` env vars so tests never touch the user's real
/// configuration or session.
fn fleetreg_cmd(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("fleetreg").unwrap();
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("XDG_DATA_HOME", home.join(".local/share"))
        .env_remove("FLEETREG_BASE_URL")
        .env_remove("FLEETREG_PORTAL")
        .env_remove("FLEETREG_OUTPUT")
        .env_remove("FLEETREG_TIMEOUT");
    cmd
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let home = tempfile::tempdir().unwrap();
    let output = fleetreg_cmd(home.path()).output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    let home = tempfile::tempdir().unwrap();
    fleetreg_cmd(home.path()).arg("--help").assert().success().stdout(
        predicate::str::contains("vehicle registry")
            .and(predicate::str::contains("vehicles"))
            .and(predicate::str::contains("violations"))
            .and(predicate::str::contains("dvla")),
    );
}

#[test]
fn test_version_flag() {
    let home = tempfile::tempdir().unwrap();
    fleetreg_cmd(home.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("fleetreg"));
}

#[test]
fn test_unknown_command_fails_with_usage() {
    let home = tempfile::tempdir().unwrap();
    let output = fleetreg_cmd(home.path()).arg("frobnicate").output().unwrap();
    assert_eq!(output.status.code(), Some(2));
}

// ── Shell completions ───────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    let home = tempfile::tempdir().unwrap();
    fleetreg_cmd(home.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

// ── Config commands ─────────────────────────────────────────────────

#[test]
fn test_config_path_prints_a_path() {
    let home = tempfile::tempdir().unwrap();
    fleetreg_cmd(home.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_init_then_show() {
    let home = tempfile::tempdir().unwrap();
    fleetreg_cmd(home.path())
        .args(["config", "init"])
        .assert()
        .success();
    fleetreg_cmd(home.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("base_url").and(predicate::str::contains("offline_fallback")),
        );
}

// ── Offline data path ───────────────────────────────────────────────
//
// With no config and no FLEETREG_BASE_URL, the client targets loopback,
// detects a local origin, and serves the built-in dataset.

#[test]
fn test_vehicles_list_works_offline() {
    let home = tempfile::tempdir().unwrap();
    fleetreg_cmd(home.path())
        .args(["vehicles", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("LD63 KWF").and(predicate::str::contains("Amara Osei")));
}

#[test]
fn test_dvla_vehicles_list_json_offline() {
    let home = tempfile::tempdir().unwrap();
    fleetreg_cmd(home.path())
        .args(["dvla", "vehicles", "list", "-o", "json"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("\"reg_number\"").and(predicate::str::contains("WN08 JDH")),
        );
}

#[test]
fn test_auth_status_starts_anonymous() {
    let home = tempfile::tempdir().unwrap();
    fleetreg_cmd(home.path())
        .args(["auth", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("anonymous"));
}

#[test]
fn test_login_then_status_round_trip_offline() {
    let home = tempfile::tempdir().unwrap();
    fleetreg_cmd(home.path())
        .args(["--portal", "police", "auth", "login", "pc.adeyemi", "--password", "anything"])
        .assert()
        .success();
    fleetreg_cmd(home.path())
        .args(["auth", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("authenticated").and(predicate::str::contains("officer")));
}

#[test]
fn test_officer_stats_offline() {
    let home = tempfile::tempdir().unwrap();
    fleetreg_cmd(home.path())
        .args(["stats", "officers"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PC Adeyemi"));
}

#[test]
fn test_violations_list_plain_output() {
    let home = tempfile::tempdir().unwrap();
    fleetreg_cmd(home.path())
        .args(["violations", "list", "-o", "plain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("7001"));
}
