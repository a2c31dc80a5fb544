//! # Cachetar Extract Command Handler
//!
//! File: cli/src/commands/extract.rs
//!
//! Implements `cachetar extract`: unpacks an archive into the working
//! directory, creating it if necessary. With `--compression auto` (the
//! default) the method comes from the archive extension (`.tzst`/`.zst` or
//! `.tgz`/`.gz`), falling back to host detection for other names.
//!
use super::{compression_choice, WorkspaceArgs};
use crate::common::archive::compression::{CompressionChoice, CompressionMethod};
use crate::common::archive::tar;
use crate::common::system::ToolProbe;
use crate::core::config;
use crate::core::error::Result;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::info;

/// Arguments for `cachetar extract`.
#[derive(Parser, Debug)]
#[command(about = "Unpack a cache archive into the working directory")]
pub struct ExtractArgs {
    /// Archive file to unpack.
    pub archive: PathBuf,

    /// Compression method (defaults to the configured value, then `auto`).
    #[arg(short, long, value_enum)]
    pub compression: Option<CompressionChoice>,

    #[command(flatten)]
    pub workspace: WorkspaceArgs,
}

/// Handles `cachetar extract`.
pub async fn handle_extract(args: ExtractArgs) -> Result<()> {
    info!("Handling extract command...");
    let cfg = config::load_config()?;
    let ctx = args.workspace.archive_context(&cfg)?;
    let choice = compression_choice(args.compression, &cfg)?;
    let method = method_for_archive(choice, &args.archive, &ctx.probe);

    tar::extract_tar(&args.archive, method, &ctx).await?;

    info!(
        "Extracted {} into {}",
        args.archive.display(),
        ctx.working_directory.display()
    );
    Ok(())
}

fn method_for_archive<P: ToolProbe>(
    choice: CompressionChoice,
    archive: &Path,
    probe: &P,
) -> CompressionMethod {
    if choice == CompressionChoice::Auto {
        if let Some(method) = CompressionMethod::from_archive_name(archive) {
            return method;
        }
    }
    choice.resolve(probe)
}
