//! crates/trace/src/tracing_bridge.rs
//! Bridge forwarding emitted trace lines to the `tracing` ecosystem.
//!
//! [`TracingSink`] is a sink that re-emits every completed line as a
//! `tracing` debug event under the `trace::line` target, letting programs
//! that already run a `tracing` subscriber collect trace output alongside
//! their structured logs.

use std::io::{self, Write};

use crate::sink::Sink;

/// Sink that forwards each completed line as a `tracing` debug event.
///
/// Bytes are buffered until a newline arrives; partial writes never produce
/// partial events. The trailing newline is stripped from the event message.
#[derive(Debug, Default)]
pub struct TracingSink {
    pending: Vec<u8>,
}

impl TracingSink {
    /// Creates an empty bridge sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Write for TracingSink {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.pending.extend_from_slice(data);
        while let Some(position) = self.pending.iter().position(|byte| *byte == b'\n') {
            let line: Vec<u8> = self.pending.drain(..=position).collect();
            let text = String::from_utf8_lossy(&line[..line.len() - 1]);
            ::tracing::debug!(target: "trace::line", "{text}");
        }
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Routes the process-wide tracer through a fresh [`TracingSink`] and
/// returns the previous sink.
pub fn forward_to_tracing() -> Sink {
    crate::set_sink(Box::new(TracingSink::new()))
}
