//! Collection metadata via a flat yt-dlp listing of the first item.

use super::{percent_decode, CollectionInfo, Field};
use crate::events::{EventSink, ResolutionEvent};
use crate::exec::{ExecError, ToolExecutor};

/// Separator between printed fields; does not occur in yt-dlp's own output.
pub const FIELD_DELIM: &str = "|||";

/// Placeholder yt-dlp prints for a missing field.
const NOT_AVAILABLE: &str = "NA";

/// Arguments asking `program` to print the supported fields of the first
/// item without downloading anything.
pub fn metadata_query_args(program: &str, url: &str) -> Vec<String> {
    let print_template = Field::ALL
        .iter()
        .map(|f| f.placeholder())
        .collect::<Vec<_>>()
        .join(FIELD_DELIM);
    vec![
        program.to_string(),
        "--flat-playlist".to_string(),
        "--playlist-items".to_string(),
        "1".to_string(),
        "--print".to_string(),
        print_template,
        "--no-warnings".to_string(),
        url.to_string(),
    ]
}

/// Parses the tool's stdout: first line only, fields by position in
/// [`Field::ALL`] order. Empty and `NA` (any case) values are absent.
pub fn parse_metadata_line(stdout: &str) -> CollectionInfo {
    let line = stdout.trim().lines().next().unwrap_or("");
    let mut parts = line.split(FIELD_DELIM);

    Field::ALL
        .into_iter()
        .fold(CollectionInfo::default(), |info, field| {
            let raw = parts.next().unwrap_or("").trim();
            if raw.is_empty() || raw.eq_ignore_ascii_case(NOT_AVAILABLE) {
                info
            } else {
                info.with(field, Some(percent_decode(raw)))
            }
        })
}

/// Queries `program` for the collection's uploader and title.
///
/// Never fails: if the tool cannot be started the result is all-absent and
/// the reason goes to `sink`.
pub async fn fetch_collection_info<E: ToolExecutor>(
    executor: &E,
    program: &str,
    url: &str,
    sink: &mut dyn EventSink,
) -> CollectionInfo {
    let argv = metadata_query_args(program, url);
    match executor.capture(&argv).await {
        Ok(stdout) => {
            let info = parse_metadata_line(&stdout);
            sink.emit(ResolutionEvent::MetadataFetched {
                uploader: info.uploader().map(str::to_string),
                playlist_title: info.playlist_title().map(str::to_string),
            });
            info
        }
        Err(ExecError::NotFound { program }) => {
            sink.emit(ResolutionEvent::MetadataToolMissing { program });
            CollectionInfo::default()
        }
        Err(e) => {
            sink.emit(ResolutionEvent::MetadataQueryFailed {
                reason: e.to_string(),
            });
            CollectionInfo::default()
        }
    }
}
