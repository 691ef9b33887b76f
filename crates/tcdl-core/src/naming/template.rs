//! Folder template expansion.

use std::sync::OnceLock;

use regex::Regex;

use super::sanitize_folder_name;
use crate::collection::CollectionInfo;
use crate::events::{EventSink, ResolutionEvent};

/// Template used when the configuration does not name one.
pub const DEFAULT_FOLDER_TEMPLATE: &str = "%(playlist_title)s";

/// Folder name used when the expanded template sanitizes to nothing.
pub const FALLBACK_FOLDER_NAME: &str = "collection";

fn leftover_placeholder() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"%\([^)]+\)s").expect("static placeholder pattern"))
}

/// Substitutes known fields into `template`, deletes any other `%(name)s`
/// placeholder, and sanitizes the result. May return an empty string.
pub fn expand_template(template: &str, info: &CollectionInfo) -> String {
    let mut expanded = template.to_string();
    for (field, value) in info.fields() {
        expanded = expanded.replace(&field.placeholder(), value.unwrap_or(""));
    }
    let expanded = leftover_placeholder().replace_all(&expanded, "");
    sanitize_folder_name(&expanded)
}

/// Resolves the collection folder name for `template`.
///
/// Never empty: falls back to [`FALLBACK_FOLDER_NAME`].
///
/// # Examples
///
/// - `"%(playlist_title)s"` with title `"Test"` → `"Test"`
/// - `"%(unknown)s"` → `"collection"`
pub fn resolve_folder(template: &str, info: &CollectionInfo) -> String {
    resolve_folder_traced(template, info, &mut ())
}

/// Same as [`resolve_folder`], reporting the outcome to `sink`.
pub fn resolve_folder_traced(
    template: &str,
    info: &CollectionInfo,
    sink: &mut dyn EventSink,
) -> String {
    let expanded = expand_template(template, info);
    let folder = if expanded.is_empty() {
        sink.emit(ResolutionEvent::FolderFallback {
            template: template.to_string(),
        });
        FALLBACK_FOLDER_NAME.to_string()
    } else {
        expanded
    };
    sink.emit(ResolutionEvent::FolderResolved {
        template: template.to_string(),
        folder: folder.clone(),
    });
    folder
}
