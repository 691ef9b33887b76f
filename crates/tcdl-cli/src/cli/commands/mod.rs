//! CLI command handlers. Each command is in its own file.

mod completions;
mod download;
mod plan;

pub use completions::run_completions;
pub use download::run_download;
pub use plan::run_plan;
