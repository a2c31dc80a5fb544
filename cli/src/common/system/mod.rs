//! # Cachetar System Utilities Module (`common::system`)
//!
//! File: cli/src/common/system/mod.rs
//!
//! ## Overview
//!
//! Host capability queries used when deciding how to invoke the archiver:
//! where an executable lives on the search path, whether a file exists, which
//! flavour of `tar` is installed and whether `zstd` is available.
//!
//! ## Architecture
//!
//! - **`ToolProbe`**: The trait the archive code depends on. Keeping the host
//!   behind a trait lets the binary locator and compression detection be
//!   exercised without touching the real system.
//! - **`HostProbe`**: The production implementation. Path lookup goes through
//!   the `which` crate; version checks run the tool with `--version` and
//!   inspect its combined output.
//!
use crate::core::error::{CachetarError, Result};
use anyhow::anyhow;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::debug;

/// Capability queries against the host the archiver runs on.
pub trait ToolProbe {
    /// Returns `true` if `path` names an existing regular file.
    fn is_file(&self, path: &Path) -> bool;

    /// Resolves `name` on the executable search path.
    ///
    /// Fails with `CachetarError::ToolNotFound` when nothing matches.
    fn which(&self, name: &str) -> Result<PathBuf>;

    /// Reports whether the `tar` found on the search path is GNU tar.
    fn uses_gnu_tar(&self) -> Result<bool>;

    /// Reports whether a usable `zstd` binary is installed.
    fn has_zstd(&self) -> bool;
}

/// `ToolProbe` backed by the real filesystem and search path.
#[derive(Debug, Default, Clone, Copy)]
pub struct HostProbe;

impl ToolProbe for HostProbe {
    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn which(&self, name: &str) -> Result<PathBuf> {
        which::which(name).map_err(|e| {
            debug!("Lookup of '{}' on PATH failed: {}", name, e);
            anyhow!(CachetarError::ToolNotFound {
                name: name.to_string()
            })
        })
    }

    fn uses_gnu_tar(&self) -> Result<bool> {
        let version = tool_version("tar")?.unwrap_or_default();
        let is_gnu = version.to_lowercase().contains("gnu tar");
        debug!("tar on PATH is GNU tar: {}", is_gnu);
        Ok(is_gnu)
    }

    fn has_zstd(&self) -> bool {
        match tool_version("zstd") {
            Ok(Some(version)) => {
                debug!("Detected zstd: {}", version.trim());
                true
            }
            Ok(None) => false,
            Err(e) => {
                debug!("zstd version check failed: {:#}", e);
                false
            }
        }
    }
}

/// Runs `<program> --version` and returns its combined stdout and stderr.
///
/// `Ok(None)` means the program is not installed or exited unsuccessfully.
fn tool_version(program: &str) -> Result<Option<String>> {
    debug!("Running check: {} --version", program);
    let output = match Command::new(program)
        .arg("--version")
        .stdin(Stdio::null())
        .output()
    {
        Ok(output) => output,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("Command '{}' not found (ErrorKind::NotFound).", program);
            return Ok(None);
        }
        Err(e) => {
            return Err(anyhow::Error::new(e)
                .context(format!("Failed to execute version check for '{}'", program)))
        }
    };
    if !output.status.success() {
        debug!("'{} --version' exited with {}", program, output.status);
        return Ok(None);
    }
    let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
    text.push_str(&String::from_utf8_lossy(&output.stderr));
    Ok(Some(text.trim().to_string()))
}

/// A scripted `ToolProbe` for unit tests.
#[cfg(test)]
pub mod testing {
    use super::*;
    use std::cell::Cell;
    use std::collections::HashMap;

    #[derive(Debug, Default)]
    pub struct FakeProbe {
        pub files: Vec<PathBuf>,
        pub tools: HashMap<String, PathBuf>,
        pub gnu_tar: bool,
        pub zstd: bool,
        pub which_calls: Cell<usize>,
    }

    impl FakeProbe {
        pub fn with_tool(mut self, name: &str, path: impl Into<PathBuf>) -> Self {
            self.tools.insert(name.to_string(), path.into());
            self
        }
    }

    impl ToolProbe for FakeProbe {
        fn is_file(&self, path: &Path) -> bool {
            self.files.iter().any(|f| f == path)
        }

        fn which(&self, name: &str) -> Result<PathBuf> {
            self.which_calls.set(self.which_calls.get() + 1);
            self.tools.get(name).cloned().ok_or_else(|| {
                anyhow!(CachetarError::ToolNotFound {
                    name: name.to_string()
                })
            })
        }

        fn uses_gnu_tar(&self) -> Result<bool> {
            Ok(self.gnu_tar)
        }

        fn has_zstd(&self) -> bool {
            self.zstd
        }
    }
}
