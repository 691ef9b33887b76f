//! [`ToolExecutor`] backed by real child processes.

use std::process::{ExitStatus, Stdio};
use std::time::Duration;

use tokio::process::Command;

use super::{ExecError, ToolExecutor};

/// Exit code reported when the child ended without one.
const UNKNOWN_EXIT: i32 = 1;

/// How long an interrupted child gets to exit on its own before it is killed.
pub const INTERRUPT_GRACE: Duration = Duration::from_millis(500);

/// Spawns the program named by `argv[0]` with `tokio::process`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemExecutor;

fn split(argv: &[String]) -> Result<(&str, &[String]), ExecError> {
    argv.split_first()
        .map(|(program, rest)| (program.as_str(), rest))
        .ok_or(ExecError::EmptyCommand)
}

/// Exit code of a finished child; `128 + signal` when killed by a signal on unix.
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    UNKNOWN_EXIT
}

impl ToolExecutor for SystemExecutor {
    async fn capture(&self, argv: &[String]) -> Result<String, ExecError> {
        let (program, args) = split(argv)?;
        tracing::debug!(program, ?args, "capturing tool output");
        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .output()
            .await
            .map_err(|e| ExecError::from_io(program, e))?;
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    async fn run(&self, argv: &[String]) -> Result<i32, ExecError> {
        let (program, args) = split(argv)?;
        let mut child = Command::new(program)
            .args(args)
            .spawn()
            .map_err(|e| ExecError::from_io(program, e))?;
        tracing::debug!(program, pid = ?child.id(), "tool started");

        tokio::select! {
            status = child.wait() => {
                let status = status.map_err(|e| ExecError::from_io(program, e))?;
                let code = exit_code(status);
                tracing::info!(program, code, "tool exited");
                Ok(code)
            }
            Ok(()) = tokio::signal::ctrl_c() => {
                // A terminal Ctrl-C reaches the child too; a signal sent to us alone does not.
                tracing::warn!(program, "interrupted, waiting for tool to exit");
                let waited = tokio::time::timeout(INTERRUPT_GRACE, child.wait()).await;
                match waited {
                    Ok(Ok(_)) => {}
                    Ok(Err(e)) => tracing::warn!(program, error = %e, "wait after interrupt failed"),
                    Err(_) => {
                        tracing::warn!(program, "tool still running after interrupt, killing it");
                        if let Err(e) = child.kill().await {
                            tracing::warn!(program, error = %e, "kill after interrupt failed");
                        }
                    }
                }
                Err(ExecError::Interrupted)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn missing_program_is_not_found() {
        let err = SystemExecutor
            .run(&argv(&["tcdl-definitely-not-installed-xyz", "--version"]))
            .await
            .unwrap_err();
        assert!(matches!(err, ExecError::NotFound { .. }));

        let err = SystemExecutor
            .capture(&argv(&["tcdl-definitely-not-installed-xyz"]))
            .await
            .unwrap_err();
        assert!(matches!(err, ExecError::NotFound { .. }));
    }

    #[tokio::test]
    async fn empty_argv_is_rejected() {
        let err = SystemExecutor.run(&[]).await.unwrap_err();
        assert!(matches!(err, ExecError::EmptyCommand));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn capture_returns_stdout() {
        let out = SystemExecutor
            .capture(&argv(&["sh", "-c", "printf 'dj|||Mix\\nsecond\\n'; echo noise >&2"]))
            .await
            .unwrap();
        assert_eq!(out, "dj|||Mix\nsecond\n");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn run_reports_exit_code() {
        let code = SystemExecutor.run(&argv(&["sh", "-c", "exit 3"])).await.unwrap();
        assert_eq!(code, 3);
    }
}
