//! A stand-in child process for testing subprocess invocations.
//!
//! Takes exactly four positional arguments:
//! a line to print to stdout, text to write to stderr,
//! a number of seconds to sleep before exiting,
//! and the exit status to terminate with.

use std::{io::Write, thread::sleep, time::Duration};

fn main() {
    let mut args = std::env::args();
    args.next().unwrap();
    let out = args.next().unwrap();
    let err = args.next().unwrap();
    let delay_seconds: u64 = args.next().unwrap().parse().unwrap();
    let exit_value: i32 = args.next().unwrap().parse().unwrap();
    eprint!("{}", err);
    println!("{}", out);
    std::io::stdout().flush().unwrap();
    sleep(Duration::from_secs(delay_seconds));
    std::process::exit(exit_value);
}
