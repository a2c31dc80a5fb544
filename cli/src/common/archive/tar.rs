//! # Cachetar TAR Archive Operations (`common::archive::tar`)
//!
//! File: cli/src/common/archive/tar.rs
//!
//! ## Overview
//!
//! The two top-level cache operations, `create_tar` and `extract_tar`. Both
//! hand all real work to the system `tar`:
//!
//! 1. (create only) write `manifest.txt` into the creation folder
//! 2. build the argument list for the compression method (`args`)
//! 3. resolve the tar program, which may append flags (`locate`)
//! 4. run it to completion (`common::process`)
//!
//! Steps 3 and 4 report every failure as one `CachetarError::TarFailed`,
//! carrying the underlying message. Manifest and directory errors are
//! passed through as filesystem errors.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::archive::{compression::CompressionMethod, tar};
//! # async fn run() -> crate::core::error::Result<()> {
//! let ctx = tar::ArchiveContext::for_host(std::path::PathBuf::from("/work"));
//! let archive = tar::create_tar(
//!     std::path::Path::new("/tmp/cache-staging"),
//!     &["node_modules".to_string()],
//!     CompressionMethod::Zstd,
//!     &ctx,
//! )
//! .await?;
//! tar::extract_tar(&archive, CompressionMethod::Zstd, &ctx).await?;
//! # Ok(())
//! # }
//! ```
//!
use super::args;
use super::compression::CompressionMethod;
use super::locate::TarLocator;
use super::manifest::write_manifest;
use crate::common::fs::io::ensure_dir_exists;
use crate::common::process::run_command;
use crate::common::system::{HostProbe, ToolProbe};
use crate::core::error::{CachetarError, Result};
use anyhow::anyhow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Everything an archive operation needs from its environment, resolved once
/// before the operation starts.
#[derive(Debug, Clone)]
pub struct ArchiveContext<P = HostProbe> {
    /// Extraction target and root that created archive paths are relative to.
    pub working_directory: PathBuf,
    pub locator: TarLocator,
    pub probe: P,
}

impl ArchiveContext<HostProbe> {
    /// Context for the running host with the given working directory.
    pub fn for_host(working_directory: PathBuf) -> Self {
        ArchiveContext {
            working_directory,
            locator: TarLocator::for_host(),
            probe: HostProbe,
        }
    }
}

/// Extracts `archive_path` into the context's working directory, creating
/// the directory first if needed.
pub async fn extract_tar<P: ToolProbe>(
    archive_path: &Path,
    method: CompressionMethod,
    ctx: &ArchiveContext<P>,
) -> Result<()> {
    info!(
        "Extracting {} ({}) into {}",
        archive_path.display(),
        method,
        ctx.working_directory.display()
    );
    ensure_dir_exists(&ctx.working_directory)?;
    let base_args = args::extract_args(method, archive_path, &ctx.working_directory);
    exec_tar(ctx, base_args, None).await
}

/// Packs `sources` (relative to the working directory) into the cache file
/// for `method` inside `creation_folder`, and returns the archive's path.
///
/// tar runs inside `creation_folder` so the manifest and cache file names
/// can stay relative.
pub async fn create_tar<P: ToolProbe>(
    creation_folder: &Path,
    sources: &[String],
    method: CompressionMethod,
    ctx: &ArchiveContext<P>,
) -> Result<PathBuf> {
    write_manifest(creation_folder, sources)?;
    let cache_file_name = Path::new(method.cache_file_name());
    info!(
        "Creating {} from {} path(s) under {}",
        creation_folder.join(cache_file_name).display(),
        sources.len(),
        ctx.working_directory.display()
    );
    let base_args = args::create_args(method, cache_file_name, &ctx.working_directory);
    exec_tar(ctx, base_args, Some(creation_folder)).await?;
    Ok(creation_folder.join(cache_file_name))
}

async fn exec_tar<P: ToolProbe>(
    ctx: &ArchiveContext<P>,
    base_args: Vec<String>,
    cwd: Option<&Path>,
) -> Result<()> {
    let invocation = ctx
        .locator
        .resolve(&ctx.probe, base_args)
        .map_err(tar_failed)?;
    run_command(&invocation.program, &invocation.args, cwd)
        .await
        .map_err(tar_failed)
}

fn tar_failed(err: anyhow::Error) -> anyhow::Error {
    anyhow!(CachetarError::TarFailed(format!("{:#}", err)))
}
