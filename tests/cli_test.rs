//! Integration tests for the CLI surface.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// A library path that is guaranteed not to exist.
///
/// Probe runs in tests always pass an explicit `--library` so results do not
/// depend on whether the host actually has a VR runtime installed.
fn missing_library() -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("libopenvr_api.so");
    (temp, path)
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("vrprobe"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("smoke probe"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("vrprobe"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_missing_library_fails_with_load_error() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp, library) = missing_library();
    let mut cmd = Command::new(cargo_bin("vrprobe"));
    cmd.arg("--library").arg(&library);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load runtime library"))
        .stdout(predicate::str::contains("on desktop").not());
    Ok(())
}

#[test]
fn cli_banner_prints_before_probing() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp, library) = missing_library();
    let mut cmd = Command::new(cargo_bin("vrprobe"));
    cmd.arg("--library").arg(&library);
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("VR runtime probe"));
    Ok(())
}

#[test]
fn cli_quiet_suppresses_banner() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp, library) = missing_library();
    let mut cmd = Command::new(cargo_bin("vrprobe"));
    cmd.args(["--quiet", "--library"]).arg(&library);
    cmd.assert()
        .failure()
        .stdout(predicate::str::is_empty());
    Ok(())
}

#[test]
fn cli_json_failure_is_structured() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp, library) = missing_library();
    let mut cmd = Command::new(cargo_bin("vrprobe"));
    cmd.args(["--format", "json", "--library"]).arg(&library);
    let assert = cmd.assert().failure();

    let stdout = String::from_utf8(assert.get_output().stdout.clone())?;
    let parsed: serde_json::Value = serde_json::from_str(&stdout)?;
    assert_eq!(parsed["ok"], false);
    assert_eq!(parsed["failed_check"], "load-runtime");
    assert!(parsed["error"]
        .as_str()
        .unwrap()
        .contains("Failed to load runtime library"));
    Ok(())
}

#[test]
fn cli_rejects_unknown_app_type() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("vrprobe"));
    cmd.args(["--app-type", "kiosk"]);
    cmd.assert().failure();
    Ok(())
}

#[test]
fn cli_accepts_every_application_role() -> Result<(), Box<dyn std::error::Error>> {
    for role in ["other", "scene", "overlay", "background", "utility", "monitor"] {
        let (_temp, library) = missing_library();
        let mut cmd = Command::new(cargo_bin("vrprobe"));
        cmd.args(["--app-type", role, "--library"]).arg(&library);
        // Roles all parse; the probe still fails on the missing library.
        cmd.assert()
            .failure()
            .stderr(predicate::str::contains("Failed to load runtime library"));
    }
    Ok(())
}

#[test]
fn cli_debug_flag_accepted() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp, library) = missing_library();
    let mut cmd = Command::new(cargo_bin("vrprobe"));
    cmd.args(["--debug", "--library"]).arg(&library);
    cmd.assert().failure();
    Ok(())
}
