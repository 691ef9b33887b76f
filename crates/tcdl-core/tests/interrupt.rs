//! Interrupt handling of the real executor.
//!
//! Kept in its own test binary: SIGINT is delivered to the whole test process,
//! so any other concurrently running download would see it too.

#![cfg(unix)]

use std::process::Command;
use std::thread;
use std::time::{Duration, Instant};

use tcdl_core::exec::{ExecError, SystemExecutor, ToolExecutor, INTERRUPT_GRACE};

/// Sends SIGINT to this process only (not to the child's process group).
fn interrupt_self_after(delay: Duration) {
    let pid = std::process::id().to_string();
    thread::spawn(move || {
        thread::sleep(delay);
        Command::new("kill")
            .args(["-INT", &pid])
            .status()
            .expect("run kill");
    });
}

#[tokio::test]
async fn interrupt_kills_child_that_ignores_sigint() {
    let argv: Vec<String> = ["sh", "-c", "trap '' INT; sleep 6"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let started = Instant::now();
    interrupt_self_after(Duration::from_millis(500));
    let result = SystemExecutor.run(&argv).await;
    let elapsed = started.elapsed();

    assert!(matches!(result, Err(ExecError::Interrupted)), "{result:?}");
    assert!(
        elapsed < Duration::from_millis(500) + INTERRUPT_GRACE + Duration::from_secs(2),
        "child outlived the grace period: {elapsed:?}"
    );
}
