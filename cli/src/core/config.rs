//! # Cachetar Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module loads the optional configuration for cachetar and resolves the
//! working directory used by the archive operations.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Project-specific `.cachetar.toml` in current directory or ancestors
//!    (the search stops at a directory containing `.git`)
//! 2. User-specific `config.toml` in the platform config directory
//! 3. Default values defined in the code
//!
//! ```toml
//! [archive]
//! working_directory = "~/work"
//! compression = "zstd"
//! ```
//!
//! The working directory itself is resolved by [`resolve_working_directory`]:
//! an explicit value (the `--workspace` flag, which clap also reads from
//! `GITHUB_WORKSPACE`) wins, then the configured value, then the current
//! process directory. Command handlers resolve it exactly once and carry the
//! result for the rest of the operation.
//!
use crate::common::archive::compression::CompressionChoice;
use crate::core::error::{CachetarError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Environment variable that names the workspace root on CI runners.
pub const WORKSPACE_ENV: &str = "GITHUB_WORKSPACE";

const PROJECT_CONFIG_FILENAME: &str = ".cachetar.toml";

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub archive: ArchiveConfig,
}

/// Settings for the create and extract operations.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ArchiveConfig {
    /// Working directory used when neither `--workspace` nor `GITHUB_WORKSPACE` is set.
    pub working_directory: Option<String>,
    /// Default compression method: `gzip`, `zstd` or `auto`.
    pub compression: Option<String>,
}

pub fn load_config() -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = load_project_config()?;
    let mut merged_config = merge_configs(user_config.unwrap_or_default(), project_config);
    expand_config_paths(&mut merged_config).context("Failed to expand paths in configuration")?;
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

/// Picks the working directory for one archive operation.
///
/// `explicit` is the value of `--workspace` / `GITHUB_WORKSPACE`. Falls back
/// to the configured directory, then to the current process directory.
/// Relative values are anchored to the current process directory, since
/// `tar` may later run from a different directory.
pub fn resolve_working_directory(explicit: Option<&Path>, config: &Config) -> Result<PathBuf> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    if let Some(dir) = explicit {
        debug!("Using explicit working directory: {}", dir.display());
        return Ok(anchor_to(&cwd, dir));
    }
    if let Some(dir) = &config.archive.working_directory {
        debug!("Using configured working directory: {}", dir);
        return Ok(anchor_to(&cwd, Path::new(dir)));
    }
    debug!("Using current directory as working directory: {}", cwd.display());
    Ok(cwd)
}

fn anchor_to(base: &Path, dir: &Path) -> PathBuf {
    if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        base.join(dir)
    }
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "Cachetar", "cachetar") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<Config>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    if let Some(project_config_path) = find_project_config_path(&current_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.cachetar.toml) found.");
        Ok(None)
    }
}

fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let Some(project) = project else {
        return user;
    };
    Config {
        archive: ArchiveConfig {
            working_directory: project
                .archive
                .working_directory
                .or(user.archive.working_directory),
            compression: project.archive.compression.or(user.archive.compression),
        },
    }
}

fn expand_config_paths(config: &mut Config) -> Result<()> {
    if let Some(dir) = config.archive.working_directory.as_mut() {
        *dir = shellexpand::tilde(dir).into_owned();
        debug!("Expanded working directory: {}", dir);
    }
    Ok(())
}

fn validate_config(config: &Config) -> Result<()> {
    if let Some(dir) = &config.archive.working_directory {
        if dir.trim().is_empty() {
            return Err(anyhow!(CachetarError::Config(
                "archive.working_directory cannot be empty.".to_string()
            )));
        }
    }
    if let Some(method) = &config.archive.compression {
        if CompressionChoice::parse(method).is_err() {
            return Err(anyhow!(CachetarError::Config(format!(
                "Invalid compression '{}'. Expected gzip, zstd or auto.",
                method
            ))));
        }
    }
    Ok(())
}
