//! # Cachetar CLI Probe Integration Tests
//!
//! File: cli/tests/probe.rs
//!
//! Checks the `cachetar probe` report. Results depend on the host's tar, so
//! only the stable parts of the output are asserted.
//!

mod common;
use common::*;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_probe_reports_tar_and_workspace() {
    if !have_tar() {
        return;
    }
    let dir = tempdir().unwrap();
    let workspace = dir.path().join("ws");
    cachetar_in(dir.path())
        .arg("probe")
        .arg("--workspace")
        .arg(&workspace)
        .assert()
        .success()
        .stdout(predicate::str::contains("tar: "))
        .stdout(predicate::str::contains("compression (auto): "))
        .stdout(predicate::str::contains(format!(
            "working directory: {}",
            workspace.display()
        )));
}

#[cfg(unix)]
#[test]
fn test_probe_never_adds_force_local_off_windows() {
    if !have_tar() {
        return;
    }
    let dir = tempdir().unwrap();
    cachetar_in(dir.path())
        .arg("probe")
        .assert()
        .success()
        .stdout(predicate::str::contains("extra flags: (none)"));
}
