//! # Cachetar Compression Methods (`common::archive::compression`)
//!
//! File: cli/src/common/archive/compression.rs
//!
//! ## Overview
//!
//! The compression method decides two things for a cache archive: the file
//! name it is written under and the flags handed to `tar` (see
//! `common::archive::args`). No bytes are compressed here; `tar` does the
//! work, either through its built-in gzip support or by piping through the
//! external `zstd` program.
//!
//! `CompressionChoice` is what users pass on the command line or in the
//! config file. `Auto` is turned into a concrete `CompressionMethod` before an
//! operation starts: Zstd when `zstd` is installed, Gzip otherwise.
//!
use crate::common::system::ToolProbe;
use crate::core::error::{CachetarError, Result};
use anyhow::anyhow;
use clap::ValueEnum;
use std::fmt;
use std::path::Path;
use tracing::info;

/// Compression applied to a cache archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionMethod {
    Gzip,
    Zstd,
}

impl CompressionMethod {
    /// File name of the archive produced by `create_tar` for this method.
    pub fn cache_file_name(self) -> &'static str {
        match self {
            CompressionMethod::Gzip => "cache.tgz",
            CompressionMethod::Zstd => "cache.tzst",
        }
    }

    /// Infers the method from an archive's extension, if it is a known one.
    pub fn from_archive_name(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_string_lossy().to_lowercase();
        if name.ends_with(".tzst") || name.ends_with(".zst") {
            Some(CompressionMethod::Zstd)
        } else if name.ends_with(".tgz") || name.ends_with(".gz") {
            Some(CompressionMethod::Gzip)
        } else {
            None
        }
    }
}

impl fmt::Display for CompressionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompressionMethod::Gzip => f.write_str("gzip"),
            CompressionMethod::Zstd => f.write_str("zstd"),
        }
    }
}

/// Compression as requested by the user.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompressionChoice {
    /// Zstd if the `zstd` binary is installed, otherwise gzip.
    #[default]
    Auto,
    Gzip,
    Zstd,
}

impl CompressionChoice {
    /// Parses a configuration value (`gzip`, `zstd` or `auto`, any case).
    pub fn parse(value: &str) -> Result<Self> {
        <Self as ValueEnum>::from_str(value, true).map_err(|_| {
            anyhow!(CachetarError::ArgumentParsing(format!(
                "Unknown compression method '{}'. Expected gzip, zstd or auto.",
                value
            )))
        })
    }

    /// Turns the choice into a concrete method, probing the host for `Auto`.
    pub fn resolve<P: ToolProbe>(self, probe: &P) -> CompressionMethod {
        match self {
            CompressionChoice::Gzip => CompressionMethod::Gzip,
            CompressionChoice::Zstd => CompressionMethod::Zstd,
            CompressionChoice::Auto => detect_compression_method(probe),
        }
    }
}

/// Picks Zstd when the host can run `zstd`, otherwise Gzip.
pub fn detect_compression_method<P: ToolProbe>(probe: &P) -> CompressionMethod {
    let method = if probe.has_zstd() {
        CompressionMethod::Zstd
    } else {
        CompressionMethod::Gzip
    };
    info!("Detected compression method: {}", method);
    method
}
