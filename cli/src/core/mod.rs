//! # Cachetar Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! Foundational pieces shared by every command:
//! - `config`: Configuration loading, merging, validation and working
//!   directory resolution
//! - `error`: Error types and the crate-wide `Result` alias
//!
//! ```rust
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{CachetarError, Result}; // For error handling
//! ```
//!
pub mod config;
pub mod error;
