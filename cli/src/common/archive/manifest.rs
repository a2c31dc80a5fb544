//! # Cachetar Manifest Writer (`common::archive::manifest`)
//!
//! File: cli/src/common/archive/manifest.rs
//!
//! Writes the list of paths to archive into `manifest.txt`, which tar reads
//! through `--files-from`. Passing the list as a file keeps the command line
//! short no matter how many paths are cached.
//!
use super::args::MANIFEST_FILE_NAME;
use crate::core::error::Result;
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Writes `sources` one per line to `folder/manifest.txt`, replacing any
/// existing manifest, and returns the manifest path.
///
/// Paths are written verbatim with no trailing newline. The folder must
/// already exist.
pub fn write_manifest(folder: &Path, sources: &[String]) -> Result<PathBuf> {
    let manifest_path = folder.join(MANIFEST_FILE_NAME);
    fs::write(&manifest_path, sources.join("\n"))
        .with_context(|| format!("Failed to write manifest {:?}", manifest_path))?;
    debug!(
        "Wrote {} path(s) to manifest {:?}",
        sources.len(),
        manifest_path
    );
    Ok(manifest_path)
}
