use tcdl_core::logging;

mod cli;

use crate::cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize logging as early as possible; a read-only state dir must not stop a download.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    // Parse CLI and dispatch.
    match Cli::run_from_args().await {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("tcdl error: {:#}", err);
            std::process::exit(1);
        }
    }
}
