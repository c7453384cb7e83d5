//! The [`Error`] type for everything that can go wrong
//! when running a subprocess.

use crate::config::Config;
use std::{
    ffi::OsString, fmt::Display, io, process::ExitStatus, string::FromUtf8Error, sync::Arc,
};

/// Returned by [`Exec::execute`](crate::Exec::execute) when the subprocess
/// could not be run, or was killed.
/// A child that runs to completion with a non-zero exit status is not
/// an [`Error`], but an [`ExecResult::Error`](crate::ExecResult::Error).
#[derive(Debug, Clone)]
pub enum Error {
    /// The command line passed to [`Exec::new`](crate::Exec::new) was empty.
    NoCommandGiven,
    /// The executable could not be found.
    FileNotFound {
        executable: OsString,
        source: Arc<io::Error>,
    },
    /// An I/O error while spawning the child or collecting its output.
    CommandIoError {
        message: String,
        source: Arc<io::Error>,
    },
    /// The child was terminated by a signal, or exited with one of the
    /// statuses that shells use to report children killed by fatal signals.
    Killed {
        full_command: String,
        exit_status: ExitStatus,
    },
    /// The child exited with status zero, but wrote invalid utf-8 to `stdout`.
    InvalidUtf8ToStdout {
        full_command: String,
        source: FromUtf8Error,
    },
    /// The child exited with a non-zero status, but wrote invalid utf-8
    /// to `stderr`.
    InvalidUtf8ToStderr {
        full_command: String,
        source: FromUtf8Error,
    },
}

impl Error {
    pub(crate) fn command_io_error(config: &Config, error: io::Error) -> Error {
        Error::CommandIoError {
            message: format!("{}:\n  {}", config.full_command(), error),
            source: Arc::new(error),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NoCommandGiven => write!(f, "no command given"),
            Error::FileNotFound { executable, .. } => write!(
                f,
                "File not found error when executing '{}'",
                executable.to_string_lossy()
            ),
            Error::CommandIoError { message, .. } => write!(f, "{}", message),
            Error::Killed {
                full_command,
                exit_status,
            } => write!(f, "{}:\n  subprocess killed: {}", full_command, exit_status),
            Error::InvalidUtf8ToStdout { full_command, .. } => {
                write!(f, "{}:\n  invalid utf-8 written to stdout", full_command)
            }
            Error::InvalidUtf8ToStderr { full_command, .. } => {
                write!(f, "{}:\n  invalid utf-8 written to stderr", full_command)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::FileNotFound { source, .. } | Error::CommandIoError { source, .. } => {
                Some(&**source)
            }
            Error::InvalidUtf8ToStdout { source, .. }
            | Error::InvalidUtf8ToStderr { source, .. } => Some(source),
            Error::NoCommandGiven | Error::Killed { .. } => None,
        }
    }
}
