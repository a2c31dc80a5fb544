//! # Cachetar Probe Command Handler
//!
//! File: cli/src/commands/probe.rs
//!
//! Implements `cachetar probe`, which reports how an archive operation would
//! run on this host without touching any archive: the tar program, any flags
//! the locator appends, whether GNU tar is on `PATH`, the compression method
//! `auto` would pick and the resolved working directory.
//!
use super::WorkspaceArgs;
use crate::common::archive::compression::detect_compression_method;
use crate::common::system::ToolProbe;
use crate::core::config;
use crate::core::error::Result;
use clap::Parser;
use tracing::{info, warn};

/// Arguments for `cachetar probe`.
#[derive(Parser, Debug, Default)]
#[command(about = "Show which tar, flags and compression would be used")]
pub struct ProbeArgs {
    #[command(flatten)]
    pub workspace: WorkspaceArgs,
}

/// Handles `cachetar probe`.
pub async fn handle_probe(args: ProbeArgs) -> Result<()> {
    info!("Handling probe command...");
    let cfg = config::load_config()?;
    let ctx = args.workspace.archive_context(&cfg)?;

    let invocation = ctx.locator.resolve(&ctx.probe, Vec::new())?;
    let gnu_tar = match ctx.probe.uses_gnu_tar() {
        Ok(is_gnu) => if is_gnu { "yes" } else { "no" },
        Err(e) => {
            warn!("Could not determine tar flavour: {:#}", e);
            "unknown"
        }
    };

    println!("tar: {}", invocation.program.display());
    if invocation.args.is_empty() {
        println!("extra flags: (none)");
    } else {
        println!("extra flags: {}", invocation.args.join(" "));
    }
    println!("gnu tar: {}", gnu_tar);
    println!("compression (auto): {}", detect_compression_method(&ctx.probe));
    println!("working directory: {}", ctx.working_directory.display());
    Ok(())
}
