//! Re-exports the most commonly used items from sprout.
//! We recommend importing sprout like this:
//! `use sprout::prelude::*;`

pub use crate::{
    error::Error,
    exec::{execute, Exec},
    result::ExecResult,
};
