use std::{
    io::{self, Read},
    process::{ChildStderr, ChildStdout},
    thread::{self, JoinHandle},
};

/// Collects both output streams of a child process on dedicated threads.
/// Reading both streams concurrently with `Child::wait` makes sure that
/// neither pipe fills up, which would deadlock the child.
#[derive(Debug)]
pub(crate) struct Waiter {
    stdout: JoinHandle<io::Result<Vec<u8>>>,
    stderr: JoinHandle<io::Result<Vec<u8>>>,
}

impl Waiter {
    pub(crate) fn spawn_stream_collection(
        child_stdout: ChildStdout,
        child_stderr: ChildStderr,
    ) -> Self {
        Waiter {
            stdout: thread::spawn(move || collect_stream(child_stdout)),
            stderr: thread::spawn(move || collect_stream(child_stderr)),
        }
    }

    pub(crate) fn join(self) -> io::Result<CollectedOutput> {
        Ok(CollectedOutput {
            stdout: self
                .stdout
                .join()
                .expect("stdout collecting thread panicked")?,
            stderr: self
                .stderr
                .join()
                .expect("stderr collecting thread panicked")?,
        })
    }
}

fn collect_stream(mut stream: impl Read) -> io::Result<Vec<u8>> {
    let mut collected = Vec::new();
    stream.read_to_end(&mut collected)?;
    Ok(collected)
}

#[derive(Debug)]
pub(crate) struct CollectedOutput {
    pub(crate) stdout: Vec<u8>,
    pub(crate) stderr: Vec<u8>,
}
