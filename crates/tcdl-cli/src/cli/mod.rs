//! CLI for the TCDL collection downloader.

mod commands;
mod console;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use tcdl_core::config::{self, TcdlConfig};

use commands::{run_completions, run_download, run_plan};

/// Top-level CLI for TCDL.
#[derive(Debug, Parser)]
#[command(name = "tcdl")]
#[command(about = "TCDL: download collection audio into per-collection folders", long_about = None)]
pub struct Cli {
    /// Use this config file instead of ~/.config/tcdl/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download a collection's audio.
    Download {
        /// Collection URL.
        url: String,
        /// Base directory (default: current directory). Collection folders are created inside it.
        #[arg(long, short = 'o', value_name = "DIR")]
        output_dir: Option<PathBuf>,
    },

    /// Resolve folder, archive and command for a URL without downloading.
    Plan {
        /// Collection URL.
        url: String,
        /// Base directory (default: current directory).
        #[arg(long, short = 'o', value_name = "DIR")]
        output_dir: Option<PathBuf>,
        /// Print the plan as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print a shell completion script.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Cli {
    /// Parses arguments, dispatches, and returns the process exit code.
    pub async fn run_from_args() -> Result<i32> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Download { url, output_dir } => {
                let cfg = load_config(cli.config.as_deref())?;
                let base_dir = base_dir(output_dir)?;
                run_download(&cfg, &url, &base_dir).await
            }
            CliCommand::Plan {
                url,
                output_dir,
                json,
            } => {
                let cfg = load_config(cli.config.as_deref())?;
                let base_dir = base_dir(output_dir)?;
                run_plan(&cfg, &url, &base_dir, json).await?;
                Ok(0)
            }
            CliCommand::Completions { shell } => {
                run_completions(shell);
                Ok(0)
            }
        }
    }
}

fn load_config(path: Option<&std::path::Path>) -> Result<TcdlConfig> {
    let cfg = match path {
        Some(path) => config::load_from_path(path)?,
        None => config::load_or_init()?,
    };
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}

fn base_dir(output_dir: Option<PathBuf>) -> Result<PathBuf> {
    match output_dir {
        Some(dir) => Ok(dir),
        None => Ok(std::env::current_dir()?),
    }
}

#[cfg(test)]
mod tests;
