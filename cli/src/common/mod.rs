//! # Cachetar Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared utility modules used by the command handlers, kept apart from
//! command-specific logic (`commands::`) and core infrastructure (`core::`).
//!
//! - **`archive`**: Cache archive creation and extraction through the system tar.
//! - **`fs`**: Filesystem helpers such as `ensure_dir_exists`.
//! - **`process`**: Running external programs and mapping their failures.
//! - **`system`**: Host capability queries (tool lookup, tar flavour, zstd).
//!

/// Cache archive operations (argument building, tar location, manifests).
pub mod archive;
/// Utilities for filesystem operations.
pub mod fs;
/// Executes external processes.
pub mod process;
/// Host capability queries used to pick tools and compression.
pub mod system;
