//! The [`ExecResult`] type that describes how a subprocess terminated.

/// The result of running a subprocess to completion.
///
/// Both output streams are assumed to contain utf-8 encoded text.
/// A child that terminates with one of the exit statuses used for
/// fatal signals does not produce an [`ExecResult`], but an
/// [`Error::Killed`](crate::Error::Killed) instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecResult {
    /// The child exited with status zero.
    /// `output` holds everything it wrote to `stdout`.
    Success {
        output: String,
    },
    /// The child exited with a non-zero status.
    /// `message` holds everything it wrote to `stderr`.
    Error {
        exit_value: i32,
        message: String,
    },
}

impl ExecResult {
    /// Returns the child's `stdout` output.
    ///
    /// Panics if the child exited with a non-zero status.
    ///
    /// ```
    /// use sprout::prelude::*;
    ///
    /// let output = execute(vec!["echo", "foo"]).unwrap().get();
    /// assert_eq!(output, "foo\n");
    /// ```
    #[rustversion::attr(since(1.46), track_caller)]
    pub fn get(self) -> String {
        match self {
            ExecResult::Success { output } => output,
            ExecResult::Error {
                exit_value,
                message,
            } => panic!("subprocess exited with status {}: {}", exit_value, message),
        }
    }

    /// Returns the child's `stdout` output,
    /// or `None` if the child exited with a non-zero status.
    pub fn ok(self) -> Option<String> {
        match self {
            ExecResult::Success { output } => Some(output),
            ExecResult::Error { .. } => None,
        }
    }

    /// Returns whether the child exited with status zero.
    pub fn is_success(&self) -> bool {
        match self {
            ExecResult::Success { .. } => true,
            ExecResult::Error { .. } => false,
        }
    }
}
