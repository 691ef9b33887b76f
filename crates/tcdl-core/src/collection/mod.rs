//! Collection metadata: the info record and how it is resolved.
//!
//! Title resolution order:
//! 1. The collection URL itself (`url_title`): clean, no uploader prefix,
//!    works for private collections, no network call.
//! 2. yt-dlp metadata (`fetch`), only when the URL yields nothing.
//!
//! The uploader only ever comes from yt-dlp.

mod fetch;
mod reconcile;
mod url_title;

pub use fetch::{fetch_collection_info, metadata_query_args, parse_metadata_line, FIELD_DELIM};
pub use reconcile::{resolve, strip_uploader_prefix};
pub use url_title::extract_title_from_url;

use serde::Serialize;
use std::borrow::Cow;

/// Fields of a collection that can be resolved and used in folder templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Uploader,
    PlaylistTitle,
}

impl Field {
    /// Fixed order shared by the metadata print template and its parser.
    pub const ALL: [Field; 2] = [Field::Uploader, Field::PlaylistTitle];

    /// yt-dlp field name.
    pub fn name(self) -> &'static str {
        match self {
            Field::Uploader => "uploader",
            Field::PlaylistTitle => "playlist_title",
        }
    }

    /// Output-template placeholder, e.g. `%(uploader)s`.
    pub fn placeholder(self) -> String {
        format!("%({})s", self.name())
    }
}

/// Resolved collection metadata. Immutable; every resolution step returns a
/// new value. Absent data is `None`, never an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CollectionInfo {
    uploader: Option<String>,
    playlist_title: Option<String>,
}

impl CollectionInfo {
    pub fn new(uploader: Option<&str>, playlist_title: Option<&str>) -> Self {
        Self::default()
            .with(Field::Uploader, uploader.map(str::to_string))
            .with(Field::PlaylistTitle, playlist_title.map(str::to_string))
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Uploader => self.uploader.as_deref(),
            Field::PlaylistTitle => self.playlist_title.as_deref(),
        }
    }

    pub fn uploader(&self) -> Option<&str> {
        self.get(Field::Uploader)
    }

    pub fn playlist_title(&self) -> Option<&str> {
        self.get(Field::PlaylistTitle)
    }

    /// Returns a copy with `field` set to `value` (empty strings become `None`).
    pub fn with(&self, field: Field, value: Option<String>) -> Self {
        let value = value.filter(|v| !v.is_empty());
        let mut next = self.clone();
        match field {
            Field::Uploader => next.uploader = value,
            Field::PlaylistTitle => next.playlist_title = value,
        }
        next
    }

    /// All fields in [`Field::ALL`] order.
    pub fn fields(&self) -> impl Iterator<Item = (Field, Option<&str>)> + '_ {
        Field::ALL.into_iter().map(move |f| (f, self.get(f)))
    }
}

/// Decodes `%XX` escapes. `+` is left alone, malformed escapes are kept
/// literally and invalid UTF-8 is replaced.
pub fn percent_decode(raw: &str) -> String {
    match urlencoding::decode_binary(raw.as_bytes()) {
        Cow::Borrowed(_) => raw.to_string(),
        Cow::Owned(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
    }
}

/// Shape of the input `check_url` accepts, quoted in its errors.
pub const EXPECTED_URL_SHAPE: &str =
    "an http(s) URL such as https://www.tiktok.com/@user/collection/Name-7543443541872102166";

/// Error for input that is not an absolute http(s) URL.
#[derive(Debug, thiserror::Error)]
pub enum UrlError {
    #[error("invalid URL {url:?} ({source}); expected {}", EXPECTED_URL_SHAPE)]
    Parse {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("unsupported URL scheme {scheme:?}; expected {}", EXPECTED_URL_SHAPE)]
    Scheme { scheme: String },
}

/// Checks that `url` is an absolute http(s) URL. The caller keeps using the
/// original string: archive keys hash it byte for byte.
pub fn check_url(url: &str) -> Result<(), UrlError> {
    let parsed = url::Url::parse(url).map_err(|source| UrlError::Parse {
        url: url.to_string(),
        source,
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(UrlError::Scheme {
            scheme: other.to_string(),
        }),
    }
}
