//! Log setup for the `tcdl` binary.
//!
//! Records go to `$XDG_STATE_HOME/tcdl/tcdl.log`; when that file cannot be
//! opened the binary falls back to [`init_logging_stderr`].

use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,tcdl=debug,tcdl_core=debug";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Path of the log file, creating its directory.
pub fn log_file_path() -> Result<PathBuf> {
    let log_dir = xdg::BaseDirectories::with_prefix("tcdl")?.get_state_home();
    fs::create_dir_all(&log_dir)?;
    Ok(log_dir.join("tcdl.log"))
}

/// Installs the global subscriber writing to [`log_file_path`] and returns
/// that path. Errors leave no subscriber installed.
pub fn init_logging() -> Result<PathBuf> {
    let path = log_file_path()?;
    let file = fs::OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;

    tracing::info!("tcdl logging initialized at {}", path.display());
    Ok(path)
}

/// Stderr-only logging, for when [`init_logging`] fails.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
