//! Folder naming and per-collection archive paths.
//!
//! Turns a resolved `CollectionInfo` into a directory name that is safe on
//! common filesystems, and derives the dedup ledger path inside it.

mod archive;
mod sanitize;
mod template;

pub use archive::{archive_key, archive_path, ARCHIVE_KEY_LEN};
pub use sanitize::sanitize_folder_name;
pub use template::{
    expand_template, resolve_folder, resolve_folder_traced, DEFAULT_FOLDER_TEMPLATE,
    FALLBACK_FOLDER_NAME,
};
