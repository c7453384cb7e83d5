//! The [`Exec`] builder that spawns subprocesses
//! and collects their output.

use crate::{
    collected_output::{CollectedOutput, Waiter},
    config::Config,
    context::Context,
    error::Error,
    result::ExecResult,
};
use std::{
    ffi::{OsStr, OsString},
    io::Write,
    path::Path,
    process::{Command, ExitStatus, Stdio},
    sync::Arc,
};

/// Exit statuses that shells report for children terminated by SIGINT,
/// SIGQUIT, SIGKILL and SIGTERM, plus STATUS_CONTROL_C_EXIT on Windows.
const KILLED_EXIT_CODES: [i32; 5] = [130, 131, 137, 143, -1073741510];

/// A builder for running a subprocess.
///
/// The child inherits the parent's environment.
/// Its `stdin` is closed immediately after spawning,
/// and both of its output streams are captured in full.
///
/// ```
/// use sprout::prelude::*;
///
/// let result = Exec::new(vec!["echo", "foo"]).execute().unwrap();
/// assert_eq!(result, ExecResult::Success { output: "foo\n".to_string() });
/// ```
#[derive(Debug, Clone)]
pub struct Exec {
    config: Config,
}

impl Exec {
    /// Creates a builder for the given command line,
    /// consisting of the executable followed by its arguments.
    pub fn new<I, S>(command: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        Exec {
            config: Config {
                arguments: command
                    .into_iter()
                    .map(|word| word.as_ref().to_os_string())
                    .collect(),
                ..Config::default()
            },
        }
    }

    /// Appends a single argument to the command line.
    pub fn arg<S: AsRef<OsStr>>(mut self, argument: S) -> Self {
        self.config.arguments.push(argument.as_ref().to_os_string());
        self
    }

    /// Runs the child in the given working directory.
    /// By default children inherit the parent's current directory.
    /// Paths relative to the parent's current directory are allowed.
    pub fn current_dir<P: AsRef<Path>>(mut self, directory: P) -> Self {
        self.config.working_directory = Some(directory.as_ref().to_owned());
        self
    }

    /// Logs the full command line to the parent's `stderr` before spawning,
    /// similar to `bash`'s `-x` option.
    pub fn log_command(mut self) -> Self {
        self.config.log_command = true;
        self
    }

    /// Spawns the subprocess, waits for it to terminate,
    /// and classifies the outcome:
    ///
    /// - exit status zero becomes [`ExecResult::Success`]
    ///   carrying the child's `stdout`,
    /// - an exit status used for fatal signals becomes [`Error::Killed`],
    /// - any other exit status becomes [`ExecResult::Error`]
    ///   carrying the child's `stderr`.
    ///
    /// ```
    /// use sprout::prelude::*;
    ///
    /// # #[cfg(target_os = "linux")]
    /// # {
    /// match Exec::new(vec!["ls", "does-not-exist"]).execute().unwrap() {
    ///     ExecResult::Error { exit_value, message } => {
    ///         assert_eq!(exit_value, 2);
    ///         assert!(message.contains("does-not-exist"));
    ///     }
    ///     ExecResult::Success { .. } => panic!("ls should fail"),
    /// }
    /// # }
    /// ```
    pub fn execute(self) -> Result<ExecResult, Error> {
        self.execute_with_context(Context::production())
    }

    pub(crate) fn execute_with_context<Stderr>(
        self,
        mut context: Context<Stderr>,
    ) -> Result<ExecResult, Error>
    where
        Stderr: Write,
    {
        let config = self.config;
        let (executable, arguments) = parse_command(config.arguments.clone())?;
        if config.log_command {
            writeln!(context.stderr, "+ {}", config.full_command())
                .map_err(|error| Error::command_io_error(&config, error))?;
        }
        let mut command = Command::new(&executable);
        command.args(arguments);
        command
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(working_directory) = &config.working_directory {
            command.current_dir(working_directory);
        }
        let mut child = command.spawn().map_err(|error| {
            if error.kind() == std::io::ErrorKind::NotFound {
                Error::FileNotFound {
                    executable,
                    source: Arc::new(error),
                }
            } else {
                Error::command_io_error(&config, error)
            }
        })?;
        // Children waiting for input must see EOF.
        drop(child.stdin.take());
        let waiter = Waiter::spawn_stream_collection(
            child
                .stdout
                .take()
                .expect("child process should have stdout"),
            child
                .stderr
                .take()
                .expect("child process should have stderr"),
        );
        let exit_status = child
            .wait()
            .map_err(|error| Error::command_io_error(&config, error))?;
        let collected_output = waiter
            .join()
            .map_err(|error| Error::command_io_error(&config, error))?;
        classify_exit_status(&config, exit_status, collected_output)
    }
}

/// Convenience wrapper for running a command line with default settings:
/// `execute(command)` is short for `Exec::new(command).execute()`.
///
/// ```
/// use sprout::prelude::*;
///
/// let output = execute(vec!["echo", "foo"]).unwrap().get();
/// assert_eq!(output, "foo\n");
/// ```
pub fn execute<I, S>(command: I) -> Result<ExecResult, Error>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    Exec::new(command).execute()
}

fn parse_command(command: Vec<OsString>) -> Result<(OsString, Vec<OsString>), Error> {
    let mut words = command.into_iter();
    match words.next() {
        None => Err(Error::NoCommandGiven),
        Some(executable) => Ok((executable, words.collect())),
    }
}

fn classify_exit_status(
    config: &Config,
    exit_status: ExitStatus,
    collected_output: CollectedOutput,
) -> Result<ExecResult, Error> {
    match exit_status.code() {
        Some(0) => Ok(ExecResult::Success {
            output: String::from_utf8(collected_output.stdout).map_err(|source| {
                Error::InvalidUtf8ToStdout {
                    full_command: config.full_command(),
                    source,
                }
            })?,
        }),
        Some(code) if !KILLED_EXIT_CODES.contains(&code) => Ok(ExecResult::Error {
            exit_value: code,
            message: String::from_utf8(collected_output.stderr).map_err(|source| {
                Error::InvalidUtf8ToStderr {
                    full_command: config.full_command(),
                    source,
                }
            })?,
        }),
        // Terminated by a signal, or exited with a status that shells
        // use to report exactly that.
        _ => Err(Error::Killed {
            full_command: config.full_command(),
            exit_status,
        }),
    }
}
