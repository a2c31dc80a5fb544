//! # Cachetar CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Each test file
//! declares `mod common;` and drives the compiled `cachetar` binary through
//! `assert_cmd`.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::Path;

/// # Get Cachetar Command (`cachetar_cmd`)
///
/// Creates an `assert_cmd::Command` for the compiled `cachetar` binary.
///
/// ## Panics
/// Panics if the `cachetar` binary cannot be found via `Command::cargo_bin`.
pub fn cachetar_cmd() -> Command {
    Command::cargo_bin("cachetar").expect("Failed to find cachetar binary for testing")
}

/// # Isolated Cachetar Command (`cachetar_in`)
///
/// Like `cachetar_cmd`, but runs inside `dir` with `GITHUB_WORKSPACE` removed
/// and the user config directory pointed at `dir`, so no configuration from
/// the host leaks into the test.
pub fn cachetar_in(dir: &Path) -> Command {
    let mut cmd = cachetar_cmd();
    cmd.current_dir(dir)
        .env_remove("GITHUB_WORKSPACE")
        .env("XDG_CONFIG_HOME", dir)
        .env("HOME", dir);
    cmd
}

/// Returns `true` if a `tar` binary is available to the tests.
pub fn have_tar() -> bool {
    std::process::Command::new("tar")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}
