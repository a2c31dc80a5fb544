//! # Cachetar Archive Utilities Module (`common::archive`)
//!
//! File: cli/src/common/archive/mod.rs
//!
//! ## Overview
//!
//! Packs and unpacks cache archives by driving the system `tar`. No archive
//! bytes are read or written in-process.
//!
//! ## Architecture
//!
//! - **`tar`**: The top-level `create_tar` / `extract_tar` operations and the
//!   `ArchiveContext` they run in.
//! - **`args`**: Pure construction of tar argument lists, including path
//!   separator normalization.
//! - **`locate`**: Platform strategy for picking the tar executable.
//! - **`manifest`**: Writes the `manifest.txt` file list used during creation.
//! - **`compression`**: Gzip/Zstd methods, cache file naming and detection.
//!
//! ```rust
//! use crate::common::archive::{compression::CompressionMethod, tar};
//! # async fn run(ctx: &tar::ArchiveContext) -> crate::core::error::Result<()> {
//! tar::extract_tar(std::path::Path::new("/tmp/cache.tgz"), CompressionMethod::Gzip, ctx).await?;
//! # Ok(())
//! # }
//! ```
//!

pub mod args;
pub mod compression;
pub mod locate;
pub mod manifest;
pub mod tar;
