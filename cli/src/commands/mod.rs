//! # Cachetar Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the subcommands of the cachetar CLI and the
//! arguments they share.
//!
//! ## Command Groups
//!
//! - `create`: Pack paths into a cache archive
//! - `extract`: Unpack a cache archive into the working directory
//! - `probe`: Report how tar would be invoked on this host
//!
//! Every subcommand accepts `--workspace` (falling back to the
//! `GITHUB_WORKSPACE` environment variable). Handlers load the configuration
//! once, resolve the working directory from it and pass the result down in an
//! `ArchiveContext`.
//!
use crate::common::archive::compression::CompressionChoice;
use crate::common::archive::tar::ArchiveContext;
use crate::core::config::{self, Config, WORKSPACE_ENV};
use crate::core::error::Result;
use clap::Args;
use std::path::PathBuf;
use tracing::debug;

/// Subcommand for packing paths into a cache archive.
pub mod create;
/// Subcommand for unpacking a cache archive.
pub mod extract;
/// Subcommand that prints the resolved tar invocation details.
pub mod probe;

/// Working directory selection shared by all subcommands.
#[derive(Args, Debug, Clone, Default)]
pub struct WorkspaceArgs {
    /// Root that archived paths are relative to and archives extract into.
    #[arg(long, value_name = "DIR", env = WORKSPACE_ENV)]
    pub workspace: Option<PathBuf>,
}

impl WorkspaceArgs {
    /// Resolves the working directory once and builds the host archive context.
    pub fn archive_context(&self, config: &Config) -> Result<ArchiveContext> {
        let working_directory =
            config::resolve_working_directory(self.workspace.as_deref(), config)?;
        debug!("Resolved working directory: {}", working_directory.display());
        Ok(ArchiveContext::for_host(working_directory))
    }
}

/// Command-line choice first, then the configured default, then `auto`.
fn compression_choice(
    requested: Option<CompressionChoice>,
    config: &Config,
) -> Result<CompressionChoice> {
    if let Some(choice) = requested {
        return Ok(choice);
    }
    match &config.archive.compression {
        Some(value) => CompressionChoice::parse(value),
        None => Ok(CompressionChoice::Auto),
    }
}
