//! `tcdl plan <url>` – dry run: show what a download would do.

use anyhow::Result;
use std::path::Path;
use tcdl_core::collection::check_url;
use tcdl_core::config::TcdlConfig;
use tcdl_core::exec::SystemExecutor;
use tcdl_core::pipeline::{self, DownloadPlan};

use crate::cli::console::ConsoleSink;

pub async fn run_plan(cfg: &TcdlConfig, url: &str, base_dir: &Path, json: bool) -> Result<()> {
    check_url(url)?;
    let plan = if json {
        // Keep stdout pure JSON; events still go to the log.
        let mut sink = tcdl_core::events::TracingSink;
        pipeline::plan(url, base_dir, cfg, &SystemExecutor, &mut sink).await
    } else {
        let mut sink = ConsoleSink::default();
        pipeline::plan(url, base_dir, cfg, &SystemExecutor, &mut sink).await
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        print_plan(&plan);
    }
    Ok(())
}

pub(super) fn print_plan(plan: &DownloadPlan) {
    println!("[tcdl] Output dir : {}", plan.out_dir.display());
    println!("[tcdl] Archive    : {}", plan.archive.display());
    if let Some(album) = &plan.album_name {
        println!("[tcdl] Album tag  : {:?}", album);
    }
    println!("[tcdl] Command    : {}", plan.command.join(" "));
}
