//! # Cachetar Tar Binary Locator (`common::archive::locate`)
//!
//! File: cli/src/common/archive/locate.rs
//!
//! ## Overview
//!
//! Decides which `tar` executable runs an archive operation. The platform
//! strategy is picked once by [`TarLocator::for_host`]; nothing else in the
//! crate branches on the operating system.
//!
//! - **Windows**: the BSD tar shipped in `%windir%\System32\tar.exe` is used
//!   whenever it exists. Otherwise `tar` is looked up on `PATH`, and if that is
//!   GNU tar, `--force-local` is appended so archive names such as
//!   `C:/cache.tgz` are not read as `host:path` remote archives.
//! - **Everything else**: `tar` is looked up on `PATH`.
//!
//! Resolution returns a new [`TarInvocation`] with the final argument list;
//! the caller's base arguments are never modified in place.
//!
use crate::common::system::ToolProbe;
use crate::core::error::Result;
use std::path::PathBuf;
use tracing::{debug, info};

const FORCE_LOCAL_FLAG: &str = "--force-local";

/// A fully resolved tar command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TarInvocation {
    pub program: PathBuf,
    pub args: Vec<String>,
}

/// Platform strategy for finding the tar executable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TarLocator {
    /// Prefer the system-bundled BSD tar at `system_tar` (absent if `windir` is unset).
    Windows { system_tar: Option<PathBuf> },
    /// Use whatever `tar` is first on the search path.
    SearchPath,
}

impl TarLocator {
    /// Selects the strategy for the platform this binary was built for.
    pub fn for_host() -> Self {
        if cfg!(windows) {
            let system_tar = std::env::var_os("windir")
                .map(|dir| PathBuf::from(dir).join("System32").join("tar.exe"));
            TarLocator::Windows { system_tar }
        } else {
            TarLocator::SearchPath
        }
    }

    /// Picks the tar program and returns it with the final argument list.
    pub fn resolve<P: ToolProbe>(&self, probe: &P, base_args: Vec<String>) -> Result<TarInvocation> {
        let mut args = base_args;
        if let TarLocator::Windows { system_tar } = self {
            if let Some(system_tar) = system_tar.as_ref().filter(|p| probe.is_file(p)) {
                info!("Using system tar: {}", system_tar.display());
                return Ok(TarInvocation {
                    program: system_tar.clone(),
                    args,
                });
            }
            if probe.uses_gnu_tar()? {
                debug!("System tar missing and GNU tar on PATH, adding {}", FORCE_LOCAL_FLAG);
                args.push(FORCE_LOCAL_FLAG.to_string());
            }
        }
        let program = probe.which("tar")?;
        info!("Using tar from PATH: {}", program.display());
        Ok(TarInvocation { program, args })
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::system::testing::FakeProbe;
    use crate::core::error::CachetarError;

    fn base_args() -> Vec<String> {
        vec!["-z".into(), "-xf".into(), "C:/cache.tgz".into()]
    }

    fn system_tar() -> PathBuf {
        PathBuf::from(r"C:\Windows").join("System32").join("tar.exe")
    }

    #[test]
    fn test_system_tar_used_without_path_lookup() {
        let probe = FakeProbe {
            files: vec![system_tar()],
            gnu_tar: true,
            ..Default::default()
        }
        .with_tool("tar", "/usr/bin/tar");
        let locator = TarLocator::Windows {
            system_tar: Some(system_tar()),
        };
        let invocation = locator.resolve(&probe, base_args()).unwrap();
        assert_eq!(invocation.program, system_tar());
        assert_eq!(invocation.args, base_args());
        assert_eq!(probe.which_calls.get(), 0);
    }

    #[test]
    fn test_gnu_tar_on_windows_gets_force_local_once() {
        let probe = FakeProbe {
            gnu_tar: true,
            ..Default::default()
        }
        .with_tool("tar", r"C:\Program Files\Git\usr\bin\tar.exe");
        let locator = TarLocator::Windows {
            system_tar: Some(system_tar()),
        };
        let invocation = locator.resolve(&probe, base_args()).unwrap();
        assert_eq!(
            invocation.program,
            PathBuf::from(r"C:\Program Files\Git\usr\bin\tar.exe")
        );
        assert_eq!(
            invocation
                .args
                .iter()
                .filter(|a| a.as_str() == FORCE_LOCAL_FLAG)
                .count(),
            1
        );
        assert_eq!(invocation.args.last().unwrap(), FORCE_LOCAL_FLAG);
    }

    #[test]
    fn test_windows_bsd_tar_on_path_has_no_force_local() {
        let probe = FakeProbe::default().with_tool("tar", r"C:\tools\tar.exe");
        let locator = TarLocator::Windows { system_tar: None };
        let invocation = locator.resolve(&probe, base_args()).unwrap();
        assert_eq!(invocation.args, base_args());
    }

    #[test]
    fn test_search_path_never_adds_force_local() {
        let probe = FakeProbe {
            gnu_tar: true,
            ..Default::default()
        }
        .with_tool("tar", "/usr/bin/tar");
        let invocation = TarLocator::SearchPath.resolve(&probe, base_args()).unwrap();
        assert_eq!(invocation.program, PathBuf::from("/usr/bin/tar"));
        assert_eq!(invocation.args, base_args());
        assert_eq!(probe.which_calls.get(), 1);
    }

    #[test]
    fn test_missing_tar_is_tool_not_found() {
        let err = TarLocator::SearchPath
            .resolve(&FakeProbe::default(), base_args())
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CachetarError>(),
            Some(CachetarError::ToolNotFound { name }) if name == "tar"
        ));
    }

    #[test]
    fn test_for_host_matches_platform() {
        let locator = TarLocator::for_host();
        if cfg!(windows) {
            assert!(matches!(locator, TarLocator::Windows { .. }));
        } else {
            assert_eq!(locator, TarLocator::SearchPath);
        }
    }
}
