//! External tool invocation.
//!
//! The resolution pipeline only needs two things from yt-dlp: run it to
//! capture a line of metadata, and run it for the actual download. Both go
//! through [`ToolExecutor`] so the pipeline can be driven by a fake in tests.

mod error;
mod system;

pub use error::ExecError;
pub use system::{SystemExecutor, INTERRUPT_GRACE};

/// Runs an argument vector whose first element is the program.
#[allow(async_fn_in_trait)]
pub trait ToolExecutor {
    /// Runs to completion and returns stdout. Exit status is not checked;
    /// stderr is discarded.
    async fn capture(&self, argv: &[String]) -> Result<String, ExecError>;

    /// Runs with inherited stdio and returns the exit code.
    async fn run(&self, argv: &[String]) -> Result<i32, ExecError>;
}
