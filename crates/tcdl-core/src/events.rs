//! Structured resolution events.
//!
//! Resolution steps never print. They report what they decided through an
//! [`EventSink`]; callers choose how to render it (log records, console lines,
//! or a plain `Vec` in tests).

use std::fmt;

/// One observable decision taken while resolving a collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionEvent {
    /// Collection title taken from the URL path.
    TitleFromUrl { title: String },
    /// Fields returned by the metadata query (absent fields are `None`).
    MetadataFetched {
        uploader: Option<String>,
        playlist_title: Option<String>,
    },
    /// The metadata tool is not installed; resolution continues without it.
    MetadataToolMissing { program: String },
    /// The metadata query could not be started for another reason.
    MetadataQueryFailed { reason: String },
    /// URL gave no title; the fetched title (if any) is used instead.
    TitleFromMetadata { title: Option<String> },
    /// Uploader prefix removed from a fetched title.
    UploaderPrefixStripped { before: String, after: String },
    /// Folder template expanded to nothing; the fallback name is used.
    FolderFallback { template: String },
    FolderResolved { template: String, folder: String },
    /// Album embedding requested without a clean name; yt-dlp maps its own
    /// `playlist_title` instead.
    AlbumTagFallback,
}

impl fmt::Display for ResolutionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let or_na = |v: &Option<String>| v.clone().unwrap_or_else(|| "N/A".to_string());
        match self {
            ResolutionEvent::TitleFromUrl { title } => {
                write!(f, "playlist_title (URL): {:?}", title)
            }
            ResolutionEvent::MetadataFetched {
                uploader,
                playlist_title,
            } => write!(
                f,
                "uploader: {}, playlist_title (metadata): {}",
                or_na(uploader),
                or_na(playlist_title)
            ),
            ResolutionEvent::MetadataToolMissing { program } => {
                write!(f, "{} not found; continuing without metadata", program)
            }
            ResolutionEvent::MetadataQueryFailed { reason } => {
                write!(f, "metadata query failed: {}; continuing without metadata", reason)
            }
            ResolutionEvent::TitleFromMetadata { title } => {
                write!(f, "no title in URL, using metadata title: {}", or_na(title))
            }
            ResolutionEvent::UploaderPrefixStripped { before, after } => {
                write!(f, "strip_uploader_from_collection_title: {:?} -> {:?}", before, after)
            }
            ResolutionEvent::FolderFallback { template } => {
                write!(f, "folder template {:?} expanded to nothing, using fallback", template)
            }
            ResolutionEvent::FolderResolved { template, folder } => {
                write!(f, "folder template: {}, folder name: {}", template, folder)
            }
            ResolutionEvent::AlbumTagFallback => {
                write!(f, "no clean collection name, mapping playlist_title to album")
            }
        }
    }
}

/// Receiver for resolution events.
pub trait EventSink {
    fn emit(&mut self, event: ResolutionEvent);
}

/// Discards events.
impl EventSink for () {
    fn emit(&mut self, _event: ResolutionEvent) {}
}

/// Collects events in order.
impl EventSink for Vec<ResolutionEvent> {
    fn emit(&mut self, event: ResolutionEvent) {
        self.push(event);
    }
}

/// Renders events as `tracing` records with structured fields.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&mut self, event: ResolutionEvent) {
        match &event {
            ResolutionEvent::TitleFromUrl { title } => {
                tracing::info!(title = %title, "playlist_title resolved from URL");
            }
            ResolutionEvent::MetadataFetched {
                uploader,
                playlist_title,
            } => {
                tracing::info!(?uploader, ?playlist_title, "collection metadata fetched");
            }
            ResolutionEvent::MetadataToolMissing { program } => {
                tracing::warn!(program = %program, "metadata tool not found");
            }
            ResolutionEvent::MetadataQueryFailed { reason } => {
                tracing::warn!(reason = %reason, "metadata query failed");
            }
            ResolutionEvent::TitleFromMetadata { title } => {
                tracing::info!(?title, "playlist_title fell back to metadata");
            }
            ResolutionEvent::UploaderPrefixStripped { before, after } => {
                tracing::info!(before = %before, after = %after, "uploader prefix stripped");
            }
            ResolutionEvent::FolderFallback { template } => {
                tracing::warn!(template = %template, "folder template empty, using fallback");
            }
            ResolutionEvent::FolderResolved { template, folder } => {
                tracing::info!(template = %template, folder = %folder, "folder resolved");
            }
            ResolutionEvent::AlbumTagFallback => {
                tracing::debug!("album tag falls back to yt-dlp playlist_title");
            }
        }
    }
}
