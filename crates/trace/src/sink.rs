//! crates/trace/src/sink.rs
//! Output destinations for trace lines.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Boxed output destination for trace lines.
pub type Sink = Box<dyn Write + Send>;

/// Returns a sink writing to the process's standard output.
#[must_use]
pub fn stdout() -> Sink {
    Box::new(io::stdout())
}

/// Returns a sink writing to the process's standard error.
#[must_use]
pub fn stderr() -> Sink {
    Box::new(io::stderr())
}

/// Shared in-memory sink for capturing trace output in tests and examples.
///
/// Clones share one buffer, so a clone handed to
/// [`set_sink`](crate::set_sink) stays readable through the original handle.
///
/// # Examples
///
/// ```
/// use std::io::Write;
///
/// use trace::BufferSink;
///
/// let sink = BufferSink::new();
/// let mut writer = sink.clone();
/// writer.write_all(b"captured\n")?;
///
/// assert_eq!(sink.take(), "captured\n");
/// assert!(sink.is_empty());
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct BufferSink {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl BufferSink {
    /// Creates an empty buffer sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns everything written so far without clearing the buffer.
    #[must_use]
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.lock()).into_owned()
    }

    /// Returns everything written so far and clears the buffer.
    pub fn take(&self) -> String {
        let mut buffer = self.lock();
        let drained = String::from_utf8_lossy(&buffer).into_owned();
        buffer.clear();
        drained
    }

    /// Reports whether nothing has been written since the last take.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<u8>> {
        self.buffer.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Write for BufferSink {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.lock().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
