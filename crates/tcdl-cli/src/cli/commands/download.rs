//! `tcdl download <url>` – resolve the collection and run yt-dlp.

use anyhow::Result;
use std::path::Path;
use tcdl_core::collection::check_url;
use tcdl_core::config::TcdlConfig;
use tcdl_core::exec::SystemExecutor;
use tcdl_core::pipeline::{self, DownloadOutcome};

use super::plan::print_plan;
use crate::cli::console::ConsoleSink;

/// Runs the download and returns the exit code to report.
pub async fn run_download(cfg: &TcdlConfig, url: &str, base_dir: &Path) -> Result<i32> {
    check_url(url)?;
    let executor = SystemExecutor;
    let mut sink = ConsoleSink::default();

    if cfg.needs_collection_info() {
        println!("[tcdl] Fetching collection info...");
    }
    let plan = pipeline::plan(url, base_dir, cfg, &executor, &mut sink).await;
    print_plan(&plan);
    println!();

    let outcome = pipeline::execute(&plan, &executor).await?;
    match &outcome {
        DownloadOutcome::Finished(code) => {
            tracing::info!(url, code, "download finished");
        }
        DownloadOutcome::ToolMissing { program } => {
            eprintln!("[ERROR] {program} not found: is it on your PATH?");
        }
        DownloadOutcome::Interrupted => {
            println!("\n[tcdl] Stopped by user.");
        }
    }
    Ok(outcome.exit_code())
}
