//! # Cachetar Tar Argument Construction (`common::archive::args`)
//!
//! File: cli/src/common/archive/args.rs
//!
//! ## Overview
//!
//! Pure functions that produce the ordered argument list handed to `tar` for
//! creating or extracting a cache archive. Nothing here touches the
//! filesystem or spawns processes.
//!
//! Ordering rules:
//! - Compression flags always come first.
//! - Every path-bearing argument is rewritten to use `/` as separator. The
//!   command line goes through a quoting layer on Windows that mangles
//!   backslashes, and both BSD and GNU tar accept forward slashes.
//!
//! For zstd, `tar` pipes through the external `zstd` program with a 30-bit
//! long-distance-matching window (1 GiB). 31 bits is only available on 64-bit
//! hosts, so 30 keeps archives readable on 32-bit runners too.
//!
use super::compression::CompressionMethod;
use std::path::{Path, MAIN_SEPARATOR};

/// Name of the file list written next to the archive during creation.
pub const MANIFEST_FILE_NAME: &str = "manifest.txt";

/// `--long` window log used for zstd compression and decompression.
pub const LONG_DISTANCE_WINDOW_LOG: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Create,
    Extract,
}

/// Replaces every occurrence of `separator` in `raw` with `/`.
pub fn normalize_separators(raw: &str, separator: char) -> String {
    raw.replace(separator, "/")
}

/// Renders `path` the way it must appear on the tar command line.
pub fn to_tool_path(path: &Path) -> String {
    normalize_separators(&path.to_string_lossy(), MAIN_SEPARATOR)
}

fn compression_flags(method: CompressionMethod, direction: Direction) -> Vec<String> {
    match (method, direction) {
        (CompressionMethod::Zstd, Direction::Extract) => vec![
            "--use-compress-program".to_string(),
            format!("zstd -d --long={}", LONG_DISTANCE_WINDOW_LOG),
        ],
        // -T0: let zstd pick the thread count from the available cores.
        (CompressionMethod::Zstd, Direction::Create) => vec![
            "--use-compress-program".to_string(),
            format!("zstd -T0 --long={}", LONG_DISTANCE_WINDOW_LOG),
        ],
        (CompressionMethod::Gzip, _) => vec!["-z".to_string()],
    }
}

/// Arguments for unpacking `archive_path` into `working_directory`.
pub fn extract_args(
    method: CompressionMethod,
    archive_path: &Path,
    working_directory: &Path,
) -> Vec<String> {
    let mut args = compression_flags(method, Direction::Extract);
    args.extend([
        "-xf".to_string(),
        to_tool_path(archive_path),
        "-P".to_string(),
        "-C".to_string(),
        to_tool_path(working_directory),
    ]);
    args
}

/// Arguments for packing the paths listed in the manifest into `cache_file_name`.
///
/// `cache_file_name` and the manifest are relative to the directory tar runs
/// in; the listed paths are relative to `working_directory`.
pub fn create_args(
    method: CompressionMethod,
    cache_file_name: &Path,
    working_directory: &Path,
) -> Vec<String> {
    let mut args = compression_flags(method, Direction::Create);
    args.extend([
        "-cf".to_string(),
        to_tool_path(cache_file_name),
        "-P".to_string(),
        "-C".to_string(),
        to_tool_path(working_directory),
        "--files-from".to_string(),
        MANIFEST_FILE_NAME.to_string(),
    ]);
    args
}
