//! Subprocess error type.

use std::io;

/// Failure to run the external tool.
#[derive(Debug, thiserror::Error)]
pub enum ExecError {
    /// The program is not on `PATH` (or the configured path does not exist).
    #[error("{program} not found")]
    NotFound { program: String },
    /// The operator interrupted the run (Ctrl-C).
    #[error("stopped by user")]
    Interrupted,
    /// Empty argument vector.
    #[error("empty command")]
    EmptyCommand,
    #[error("failed to run {program}: {source}")]
    Io {
        program: String,
        #[source]
        source: io::Error,
    },
}

impl ExecError {
    /// Classifies a spawn/wait error for `program`.
    pub fn from_io(program: &str, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            ExecError::NotFound {
                program: program.to_string(),
            }
        } else {
            ExecError::Io {
                program: program.to_string(),
                source,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_classified() {
        let err = ExecError::from_io("yt-dlp", io::Error::from(io::ErrorKind::NotFound));
        assert!(matches!(err, ExecError::NotFound { ref program } if program == "yt-dlp"));
        assert_eq!(err.to_string(), "yt-dlp not found");
    }

    #[test]
    fn other_io_errors_are_kept() {
        let err = ExecError::from_io(
            "yt-dlp",
            io::Error::from(io::ErrorKind::PermissionDenied),
        );
        assert!(matches!(err, ExecError::Io { .. }));
    }
}
