//! # Cachetar Create Command Handler
//!
//! File: cli/src/commands/create.rs
//!
//! ## Overview
//!
//! Implements `cachetar create`. The listed paths (relative to the working
//! directory) are written to `manifest.txt` inside the archive folder, then
//! the system tar packs them into `cache.tgz` or `cache.tzst` in that same
//! folder. The archive path is printed on success.
//!
//! ## Usage
//!
//! ```bash
//! cachetar create /tmp/cache-staging node_modules .cache/pip --compression zstd
//! GITHUB_WORKSPACE=/src cachetar create /tmp/cache-staging target
//! ```
//!
use super::{compression_choice, WorkspaceArgs};
use crate::common::archive::compression::CompressionChoice;
use crate::common::archive::tar;
use crate::core::config;
use crate::core::error::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Arguments for `cachetar create`.
#[derive(Parser, Debug)]
#[command(
    about = "Pack paths into a cache archive",
    long_about = "Writes the given paths to manifest.txt inside ARCHIVE_FOLDER and runs the\n\
                  system tar to pack them into cache.tgz (gzip) or cache.tzst (zstd)."
)]
pub struct CreateArgs {
    /// Folder that receives manifest.txt and the archive. Must exist.
    pub archive_folder: PathBuf,

    /// Paths to include, relative to the working directory.
    pub paths: Vec<String>,

    /// Compression method (defaults to the configured value, then `auto`).
    #[arg(short, long, value_enum)]
    pub compression: Option<CompressionChoice>,

    #[command(flatten)]
    pub workspace: WorkspaceArgs,
}

/// Handles `cachetar create`.
pub async fn handle_create(args: CreateArgs) -> Result<()> {
    info!("Handling create command...");
    let cfg = config::load_config()?;
    let ctx = args.workspace.archive_context(&cfg)?;
    let method = compression_choice(args.compression, &cfg)?.resolve(&ctx.probe);

    let archive = tar::create_tar(&args.archive_folder, &args.paths, method, &ctx).await?;

    info!("Created {} archive at {}", method, archive.display());
    println!("{}", archive.display());
    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_args_parsing() {
        let args = CreateArgs::try_parse_from([
            "create",
            "/tmp/stage",
            "node_modules",
            "target/debug",
            "-c",
            "zstd",
            "--workspace",
            "/src",
        ])
        .unwrap();
        assert_eq!(args.archive_folder, PathBuf::from("/tmp/stage"));
        assert_eq!(args.paths, vec!["node_modules", "target/debug"]);
        assert_eq!(args.compression, Some(CompressionChoice::Zstd));
        assert_eq!(args.workspace.workspace, Some(PathBuf::from("/src")));
    }

    #[test]
    fn test_create_args_without_paths() {
        let args = CreateArgs::try_parse_from(["create", "/tmp/stage"]).unwrap();
        assert!(args.paths.is_empty());
        assert_eq!(args.compression, None);
    }

    #[test]
    fn test_create_args_rejects_unknown_compression() {
        assert!(CreateArgs::try_parse_from(["create", "/tmp/stage", "-c", "lz4"]).is_err());
    }
}
