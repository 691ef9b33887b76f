use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::naming::DEFAULT_FOLDER_TEMPLATE;

/// Program name used when `yt_dlp_path` is not set.
pub const DEFAULT_PROGRAM: &str = "yt-dlp";

/// yt-dlp `--audio-quality`: a VBR level (`0`–`10`) or a bitrate like `"192K"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AudioQuality {
    Level(u32),
    Text(String),
}

impl fmt::Display for AudioQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AudioQuality::Level(level) => write!(f, "{}", level),
            AudioQuality::Text(text) => f.write_str(text),
        }
    }
}

/// Configuration loaded from `~/.config/tcdl/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TcdlConfig {
    /// Target audio codec passed to `--audio-format` (e.g. "mp3", "opus").
    pub audio_format: String,
    pub audio_quality: AudioQuality,
    /// yt-dlp output template, relative to the resolved output directory.
    pub output_template: String,
    /// Download each collection into its own subfolder.
    #[serde(default)]
    pub use_collection_folder: bool,
    /// Subfolder template; `%(uploader)s` and `%(playlist_title)s` are expanded.
    /// Defaults to `%(playlist_title)s`.
    #[serde(default)]
    pub collection_folder_template: Option<String>,
    /// Write the collection name into each file's album tag.
    #[serde(default)]
    pub embed_collection_as_album: bool,
    /// Drop a leading uploader name from titles obtained through yt-dlp.
    #[serde(default)]
    pub strip_uploader_from_collection_title: bool,
    #[serde(default)]
    pub windows_safe_filenames: bool,
    #[serde(default)]
    pub no_overwrites: bool,
    #[serde(default)]
    pub ignore_errors: bool,
    /// Appended verbatim after all derived flags, before the URL.
    #[serde(default)]
    pub extra_yt_dlp_args: Vec<String>,
    /// Program name or path of yt-dlp (None = "yt-dlp" from PATH).
    #[serde(default)]
    pub yt_dlp_path: Option<String>,
}

impl TcdlConfig {
    pub fn folder_template(&self) -> &str {
        self.collection_folder_template
            .as_deref()
            .unwrap_or(DEFAULT_FOLDER_TEMPLATE)
    }

    pub fn program(&self) -> &str {
        self.yt_dlp_path.as_deref().unwrap_or(DEFAULT_PROGRAM)
    }

    /// Metadata is only worth fetching when something consumes it.
    pub fn needs_collection_info(&self) -> bool {
        self.use_collection_folder || self.embed_collection_as_album
    }
}

impl Default for TcdlConfig {
    fn default() -> Self {
        Self {
            audio_format: "mp3".to_string(),
            audio_quality: AudioQuality::Text("0".to_string()),
            output_template: "%(title)s [%(id)s].%(ext)s".to_string(),
            use_collection_folder: true,
            collection_folder_template: None,
            embed_collection_as_album: true,
            strip_uploader_from_collection_title: true,
            windows_safe_filenames: false,
            no_overwrites: true,
            ignore_errors: true,
            extra_yt_dlp_args: Vec::new(),
            yt_dlp_path: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("tcdl")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<TcdlConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = TcdlConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from_path(&path)
}

/// Load configuration from an explicit file.
pub fn load_from_path(path: &Path) -> Result<TcdlConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: TcdlConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
