//! CLI for the PWA asset tools.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use pwa_assets_core::config;
use std::io;

use commands::{run_check_dims, run_fix_icons, run_resize_icons};

/// Top-level CLI. Each subcommand walks the built-in asset table under the configured public dir.
#[derive(Debug, Parser)]
#[command(name = "pwa-assets")]
#[command(about = "Inspect and repair the PWA icon and screenshot PNGs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the pixel size of every known icon and screenshot.
    CheckDims,

    /// Re-encode icons as PNG when their content is some other format.
    FixIcons,

    /// Resize icons to their target dimensions.
    ResizeIcons,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        let stdout = io::stdout();
        let mut out = stdout.lock();
        let public_dir = cfg.public_dir.as_path();

        match cli.command {
            CliCommand::CheckDims => run_check_dims(&mut out, public_dir)?,
            CliCommand::FixIcons => run_fix_icons(&mut out, public_dir)?,
            CliCommand::ResizeIcons => {
                run_resize_icons(&mut out, public_dir, cfg.resize_filter.into())?
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
