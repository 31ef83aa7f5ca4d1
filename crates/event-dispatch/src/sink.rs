//! Line-oriented output for console-logging handlers.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use crate::error::HandlerError;

/// Shared destination for the lines written by console-logging handlers.
///
/// Defaults to standard output. Tests use [`ConsoleSink::capture`] to read
/// back exactly what the handlers wrote.
#[derive(Clone)]
pub struct ConsoleSink {
    target: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl ConsoleSink {
    /// Creates a sink writing to standard output.
    pub fn stdout() -> Self {
        Self::from_writer(io::stdout())
    }

    /// Creates a sink writing to an arbitrary writer.
    pub fn from_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            target: Arc::new(Mutex::new(Box::new(writer))),
        }
    }

    /// Creates an in-memory sink together with a handle for reading it back.
    pub fn capture() -> (Self, CapturedOutput) {
        let buffer = CapturedOutput::default();
        (Self::from_writer(buffer.clone()), buffer)
    }

    /// Writes one line, appending the newline.
    pub fn write_line(&self, line: &str) -> Result<(), HandlerError> {
        let mut target = self
            .target
            .lock()
            .map_err(|_| io::Error::other("console sink lock poisoned"))?;
        writeln!(target, "{line}")?;
        target.flush()?;
        Ok(())
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::stdout()
    }
}

impl std::fmt::Debug for ConsoleSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleSink").finish_non_exhaustive()
    }
}

/// Read side of a capturing [`ConsoleSink`].
#[derive(Clone, Default)]
pub struct CapturedOutput {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl CapturedOutput {
    /// Returns everything written so far.
    pub fn contents(&self) -> String {
        match self.bytes.lock() {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(poisoned) => String::from_utf8_lossy(&poisoned.into_inner()).into_owned(),
        }
    }

    /// Returns the lines written so far.
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }
}

impl Write for CapturedOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut bytes = self
            .bytes
            .lock()
            .map_err(|_| io::Error::other("captured output lock poisoned"))?;
        bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
