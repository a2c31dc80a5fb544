//! # Cachetar Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout cachetar. Specific
//! failure kinds live in the `CachetarError` enum; everything is carried
//! through the application as an `anyhow::Error` so context can be layered on
//! as errors travel up to `main`.
//!
//! ## Architecture
//!
//! - `CachetarError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>`
//!
//! Failures of the external tar invocation (missing binary, spawn failure,
//! non-zero exit) all reach callers of the archive operations as a single
//! `CachetarError::TarFailed`. Filesystem errors from writing the manifest or
//! creating the working directory are passed through as `std::io::Error` with
//! added context, so callers can still `downcast_ref::<std::io::Error>()`.
//!
//! ## Examples
//!
//! ```rust
//! let result = archive::tar::extract_tar(&archive_path, method, &ctx).await;
//! match result {
//!     Err(e) if e.downcast_ref::<CachetarError>().map_or(false, |ce| matches!(ce, CachetarError::TarFailed(_))) => {
//!         eprintln!("tar itself failed: {}", e);
//!     }
//!     Err(e) => return Err(e),
//!     Ok(()) => {}
//! }
//! ```
//!
use thiserror::Error;

/// Custom error type for cachetar.
#[derive(Error, Debug)]
pub enum CachetarError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    #[error("Unable to locate executable file: {name}. Please verify either the file path exists or the file can be found within a directory specified by the PATH environment variable.")]
    ToolNotFound { name: String },

    #[error("The process '{program}' {reason}")]
    ExternalCommand { program: String, reason: String },

    #[error("Tar failed with error: {0}")]
    TarFailed(String),

    #[error("Argument parsing error: {0}")]
    ArgumentParsing(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
