//! Per-collection download archive (yt-dlp `--download-archive` ledger).
//!
//! The ledger name is keyed on a truncated SHA-256 of the exact URL string, so
//! reruns of the same collection find the same file. Two URLs sharing a key
//! would share a ledger; at 48 bits that is negligible for a personal library,
//! but it is not impossible.

use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

/// Number of hex characters kept from the URL digest.
pub const ARCHIVE_KEY_LEN: usize = 12;

/// Deterministic short fingerprint of `url` (lowercase hex).
pub fn archive_key(url: &str) -> String {
    let digest = Sha256::digest(url.as_bytes());
    let mut key = hex::encode(digest);
    key.truncate(ARCHIVE_KEY_LEN);
    key
}

/// Hidden ledger file for `url` inside `output_dir`:
/// `<output_dir>/.yt-dlp-archive-<key>.txt`.
pub fn archive_path(output_dir: &Path, url: &str) -> PathBuf {
    output_dir.join(format!(".yt-dlp-archive-{}.txt", archive_key(url)))
}
