//! # Cachetar Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! Filesystem helpers used by the archive operations. Import from the
//! submodule directly, e.g. `crate::common::fs::io::ensure_dir_exists`.
//!

/// Basic directory and file I/O (`ensure_dir_exists`).
pub mod io;
