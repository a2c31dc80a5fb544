//! # Cachetar Process Execution Utilities (`common::process`)
//!
//! File: cli/src/common/process.rs
//!
//! ## Overview
//!
//! Runs external programs to completion on the tokio runtime. Standard
//! input, output and error are inherited, so the user sees the tool's own
//! diagnostics directly in the terminal.
//!
//! A single attempt is made. Failing to start the program and exiting with a
//! non-zero status both produce `CachetarError::ExternalCommand`, whose
//! message mirrors what the runner saw, e.g.
//! `The process '/usr/bin/tar' failed with exit code 2`.
//!
use crate::core::error::{CachetarError, Result};
use anyhow::anyhow;
use std::path::Path;
use std::process::Stdio;
use tracing::{error, info};

/// # Run External Command (`run_command`)
///
/// Executes `program` with `args`, optionally inside `cwd`, and waits for it
/// to exit.
///
/// ## Errors
///
/// Returns `CachetarError::ExternalCommand` if the process cannot be spawned
/// or exits unsuccessfully.
pub async fn run_command(program: &Path, args: &[String], cwd: Option<&Path>) -> Result<()> {
    info!("Executing command: {} {:?}", program.display(), args);
    let mut command = tokio::process::Command::new(program);
    command.args(args);
    if let Some(dir) = cwd {
        command.current_dir(dir);
        info!("Setting CWD for command to {}", dir.display());
    }
    command.stdin(Stdio::inherit());
    command.stdout(Stdio::inherit());
    command.stderr(Stdio::inherit());

    let status = command.status().await.map_err(|e| {
        error!("Failed to start '{}': {}", program.display(), e);
        anyhow!(CachetarError::ExternalCommand {
            program: program.display().to_string(),
            reason: format!("could not be started: {}", e),
        })
    })?;

    if !status.success() {
        let reason = match status.code() {
            Some(code) => format!("failed with exit code {}", code),
            None => "was terminated by a signal".to_string(),
        };
        error!("Command '{} {:?}' {}", program.display(), args, reason);
        return Err(anyhow!(CachetarError::ExternalCommand {
            program: program.display().to_string(),
            reason,
        }));
    }

    info!("Command '{}' completed successfully.", program.display());
    Ok(())
}
