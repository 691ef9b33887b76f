//! Merging URL-derived and fetched metadata.

use super::{extract_title_from_url, CollectionInfo, Field};
use crate::events::{EventSink, ResolutionEvent};

/// Separators removed after a stripped uploader prefix.
const PREFIX_SEPARATORS: &[char] = &['-', '_', ' '];

/// Builds the canonical info record for `url`.
///
/// The URL title wins over the fetched one; the uploader always comes from
/// `fetched`. With `strip_uploader`, a fetched title that starts with the
/// uploader has that prefix removed. URL titles are never stripped.
pub fn resolve(
    url: &str,
    fetched: &CollectionInfo,
    strip_uploader: bool,
    sink: &mut dyn EventSink,
) -> CollectionInfo {
    match extract_title_from_url(url) {
        Some(title) => {
            sink.emit(ResolutionEvent::TitleFromUrl {
                title: title.clone(),
            });
            fetched.with(Field::PlaylistTitle, Some(title))
        }
        None => {
            sink.emit(ResolutionEvent::TitleFromMetadata {
                title: fetched.playlist_title().map(str::to_string),
            });
            if strip_uploader {
                strip_uploader_prefix_traced(fetched, sink)
            } else {
                fetched.clone()
            }
        }
    }
}

/// Removes a leading uploader name (case-insensitive) and the separators
/// after it from the title. Leaves the record unchanged if nothing would
/// remain or the title does not start with the uploader.
pub fn strip_uploader_prefix(info: &CollectionInfo) -> CollectionInfo {
    strip_uploader_prefix_traced(info, &mut ())
}

fn strip_uploader_prefix_traced(info: &CollectionInfo, sink: &mut dyn EventSink) -> CollectionInfo {
    let (Some(title), Some(uploader)) = (info.playlist_title(), info.uploader()) else {
        return info.clone();
    };
    let Some(rest) = strip_prefix_ignore_case(title, uploader) else {
        return info.clone();
    };
    let stripped = rest.trim_start_matches(PREFIX_SEPARATORS);
    if stripped.is_empty() {
        return info.clone();
    }

    sink.emit(ResolutionEvent::UploaderPrefixStripped {
        before: title.to_string(),
        after: stripped.to_string(),
    });
    info.with(Field::PlaylistTitle, Some(stripped.to_string()))
}

/// `text` without a leading `prefix`, compared char by char in lowercase.
fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let mut rest = text.char_indices();
    for p in prefix.chars() {
        let (_, t) = rest.next()?;
        if !t.to_lowercase().eq(p.to_lowercase()) {
            return None;
        }
    }
    Some(rest.as_str())
}
