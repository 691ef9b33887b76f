//! End-to-end collection download: resolve metadata, pick the output folder
//! and archive, assemble the yt-dlp command, run it.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::collection::{self, CollectionInfo};
use crate::command::build_command;
use crate::config::TcdlConfig;
use crate::events::EventSink;
use crate::exec::{ExecError, ToolExecutor};
use crate::naming::{archive_path, resolve_folder_traced};

/// Exit status when the download tool is not installed.
pub const EXIT_TOOL_MISSING: i32 = 127;
/// Exit status when the operator interrupted the download.
pub const EXIT_INTERRUPTED: i32 = 130;

/// Everything resolved for one collection URL, before anything is written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DownloadPlan {
    pub url: String,
    pub info: CollectionInfo,
    /// Subfolder name, when collection folders are enabled.
    pub folder_name: Option<String>,
    pub out_dir: PathBuf,
    pub archive: PathBuf,
    pub album_name: Option<String>,
    pub command: Vec<String>,
}

/// How a download run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    /// The tool ran; its exit code (0 on success).
    Finished(i32),
    ToolMissing { program: String },
    Interrupted,
}

impl DownloadOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            DownloadOutcome::Finished(code) => *code,
            DownloadOutcome::ToolMissing { .. } => EXIT_TOOL_MISSING,
            DownloadOutcome::Interrupted => EXIT_INTERRUPTED,
        }
    }
}

/// Resolves the download for `url` under `base_dir` without touching the
/// filesystem. Only the metadata query may run a subprocess, and only when
/// the configuration uses collection info.
pub async fn plan<E: ToolExecutor>(
    url: &str,
    base_dir: &Path,
    cfg: &TcdlConfig,
    executor: &E,
    sink: &mut dyn EventSink,
) -> DownloadPlan {
    let info = if cfg.needs_collection_info() {
        let fetched = collection::fetch_collection_info(executor, cfg.program(), url, sink).await;
        collection::resolve(url, &fetched, cfg.strip_uploader_from_collection_title, sink)
    } else {
        CollectionInfo::default()
    };

    let folder_name = if cfg.use_collection_folder {
        Some(resolve_folder_traced(cfg.folder_template(), &info, sink))
    } else {
        None
    };
    let out_dir = match &folder_name {
        Some(name) => base_dir.join(name),
        None => base_dir.to_path_buf(),
    };

    let album_name = if cfg.embed_collection_as_album {
        info.playlist_title().map(str::to_string)
    } else {
        None
    };
    let archive = archive_path(&out_dir, url);
    let command = build_command(url, &out_dir, &archive, cfg, album_name.as_deref(), sink);

    DownloadPlan {
        url: url.to_string(),
        info,
        folder_name,
        out_dir,
        archive,
        album_name,
        command,
    }
}

/// Creates the plan's output directory (with parents; fine if it exists) and
/// runs the download.
pub async fn execute<E: ToolExecutor>(plan: &DownloadPlan, executor: &E) -> Result<DownloadOutcome> {
    fs::create_dir_all(&plan.out_dir)
        .with_context(|| format!("create output dir {}", plan.out_dir.display()))?;
    tracing::info!(
        out_dir = %plan.out_dir.display(),
        archive = %plan.archive.display(),
        album = ?plan.album_name,
        "starting download"
    );

    match executor.run(&plan.command).await {
        Ok(code) => Ok(DownloadOutcome::Finished(code)),
        Err(ExecError::NotFound { program }) => {
            tracing::error!(program = %program, "download tool not found");
            Ok(DownloadOutcome::ToolMissing { program })
        }
        Err(ExecError::Interrupted) => {
            tracing::warn!("download stopped by user");
            Ok(DownloadOutcome::Interrupted)
        }
        Err(e) => Err(e).context("run download tool"),
    }
}

/// [`plan`] then [`execute`].
pub async fn run<E: ToolExecutor>(
    url: &str,
    base_dir: &Path,
    cfg: &TcdlConfig,
    executor: &E,
    sink: &mut dyn EventSink,
) -> Result<DownloadOutcome> {
    let plan = plan(url, base_dir, cfg, executor, sink).await;
    execute(&plan, executor).await
}
