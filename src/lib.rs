#![deny(missing_debug_implementations)]

//! `sprout` runs subprocesses and collects their results.
//!
//! ```
//! use sprout::prelude::*;
//!
//! let output = execute(vec!["echo", "foo"]).unwrap().get();
//! assert_eq!(output, "foo\n");
//! ```
//!
//! # Results
//!
//! Children always run to completion with both output streams captured,
//! their `stdin` closed and the parent's environment inherited.
//! How a child terminates decides what you get back:
//!
//! - exit status zero: [`ExecResult::Success`], carrying the child's
//!   `stdout`,
//! - any other exit status: [`ExecResult::Error`], carrying the exit value
//!   and the child's `stderr`,
//! - killed by a fatal signal (or exited with one of the statuses shells
//!   use to report that): [`Error::Killed`].
//!
//! ```
//! use sprout::prelude::*;
//!
//! # #[cfg(target_os = "linux")]
//! # {
//! match execute(vec!["ls", "does-not-exist"]).unwrap() {
//!     ExecResult::Error { exit_value, message } => {
//!         assert_eq!(exit_value, 2);
//!         assert!(message.contains("does-not-exist"));
//!     }
//!     ExecResult::Success { .. } => panic!("ls should fail"),
//! }
//! # }
//! ```
//!
//! # Configuration
//!
//! Anything beyond a plain command line goes through the [`Exec`] builder:
//!
//! ```
//! # let temp_dir = tempfile::TempDir::new().unwrap();
//! use sprout::prelude::*;
//!
//! let result = Exec::new(vec!["ls"])
//!     .current_dir(temp_dir.path())
//!     .log_command()
//!     .execute();
//! // writes '+ ls' to stderr
//! assert!(result.unwrap().is_success());
//! ```
//!
//! # Error Handling
//!
//! [`execute`](exec::execute) and [`Exec::execute`] only return an
//! [`Error`] when there is no [`ExecResult`] to report:
//! the executable cannot be found, the command line is empty, the child
//! was killed, an output stream is not valid utf-8, or some other I/O
//! error occurs. [`Error`] composes with `?` and
//! `Box<dyn std::error::Error>` in the usual ways.
//!
//! A non-zero exit status is a regular [`ExecResult`].
//! Calling [`ExecResult::get`] turns it into a panic, which is convenient
//! in tests and build scripts:
//!
//! ``` should_panic
//! use sprout::prelude::*;
//!
//! // panics with "subprocess exited with status 1: ..."
//! execute(vec!["cat", "does-not-exist"]).unwrap().get();
//! ```

mod collected_output;
mod config;
mod context;
pub mod error;
pub mod exec;
pub mod prelude;
pub mod result;

pub use crate::{
    error::Error,
    exec::{execute, Exec},
    result::ExecResult,
};
