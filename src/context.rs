//! An internal module that abstracts over the parent's `stderr`,
//! so that tests can observe what gets logged there.

use std::io::{self, Write};

#[derive(Clone, Debug)]
pub(crate) struct Stderr;

impl Write for Stderr {
    fn write(&mut self, buffer: &[u8]) -> io::Result<usize> {
        io::stderr().write(buffer)
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Context<Stderr> {
    pub(crate) stderr: Stderr,
}

impl Context<Stderr> {
    pub(crate) fn production() -> Self {
        Context { stderr: Stderr }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Debug)]
    pub(crate) struct TestOutput(Arc<Mutex<Vec<u8>>>);

    impl Write for TestOutput {
        fn write(&mut self, buffer: &[u8]) -> io::Result<usize> {
            let mut lock = self.0.lock().unwrap();
            lock.extend_from_slice(buffer);
            Ok(buffer.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Context<TestOutput> {
        pub(crate) fn test() -> Self {
            Context {
                stderr: TestOutput(Arc::new(Mutex::new(Vec::new()))),
            }
        }

        pub(crate) fn stderr(&self) -> String {
            let lock = self.stderr.0.lock().unwrap();
            String::from_utf8(lock.clone()).unwrap()
        }
    }
}
