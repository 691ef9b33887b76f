//! Collection title from the URL path.

use std::sync::OnceLock;

use regex::Regex;

use super::percent_decode;

/// `/collection/<Name>-<ID>` where the numeric ID has at least 10 digits and is
/// followed by a path/query/fragment boundary or the end. The length floor keeps
/// names like `Vol-12` from being cut at a short trailing number.
fn collection_path() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"/collection/(.+?)-(\d{10,})(?:[/?#]|$)").expect("static collection pattern")
    })
}

/// Extracts the percent-decoded collection name from a collection URL.
///
/// Returns `None` when the URL has no collection segment or the decoded name
/// is blank.
///
/// # Examples
///
/// - `.../collection/sample%3F-7543443541872102166` → `"sample?"`
/// - `.../collection/abc-123` → `None`
pub fn extract_title_from_url(url: &str) -> Option<String> {
    let caps = collection_path().captures(url)?;
    let decoded = percent_decode(caps.get(1)?.as_str());
    let trimmed = decoded.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
