#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `trace` provides printf-style tracing of Rust code. Embedding the
//! `trace_print!` family of macros prints a leader, the caller's source file
//! base name, the caller's line number, and an optional message to the
//! configured sink (standard output by default) when the line runs. The
//! `trace_dump!` macro pretty-prints complete data structures through the
//! `dump` crate.
//!
//! # Design
//!
//! The emitting core is [`Tracer`], a lock-free type owning the leader
//! string, the trace level threshold, the sink, and the [`DumpOptions`]
//! applied to dumps. The macro surface routes through one process-wide
//! `Tracer` behind a mutex; configuration is read at the moment each call
//! executes, so changes apply strictly from the next call onward.
//!
//! Tracing is best-effort by contract: sink write and flush failures are
//! discarded, and no call path panics. A leveled call above the current
//! threshold writes nothing at all.
//!
//! # Examples
//!
//! Capture trace output in a buffer and emit a few lines:
//!
//! ```
//! use trace::{BufferSink, trace_print, trace_println, trace_printf};
//!
//! let sink = BufferSink::new();
//! let _previous = trace::set_sink(Box::new(sink.clone()));
//!
//! trace_print!("queued", 3);
//! trace_println!("queued", 3);
//! trace_printf!("queued {} of {}", 3, 8);
//!
//! let output = sink.take();
//! let lines: Vec<&str> = output.lines().collect();
//! assert_eq!(lines.len(), 3);
//! assert!(lines[0].starts_with("### "));
//! assert!(lines[0].ends_with("queued3"));
//! assert!(lines[1].ends_with("queued 3"));
//! assert!(lines[2].ends_with("queued 3 of 8"));
//! ```
//!
//! Gate output with trace levels:
//!
//! ```
//! use trace::{BufferSink, trace_println_level};
//!
//! let sink = BufferSink::new();
//! let _previous = trace::set_sink(Box::new(sink.clone()));
//! trace::set_level(1);
//!
//! trace_println_level!(1, "shown");
//! trace_println_level!(2, "suppressed");
//!
//! let output = sink.take();
//! assert!(output.contains("shown"));
//! assert!(!output.contains("suppressed"));
//! # trace::set_level(0);
//! ```
//!
//! # See also
//!
//! - the `dump` crate for the structural pretty-printer behind
//!   `trace_dump!`, re-exported here as [`Dump`] and [`DumpOptions`].

mod call_site;
mod global;
mod macros;
mod sink;
mod tracer;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use call_site::CallSite;
pub use global::{
    configure, dump, leader, level, print, print_level, printf, printf_level, println,
    println_level, set_leader, set_level, set_sink,
};
pub use sink::{BufferSink, Sink, stderr, stdout};
pub use tracer::{DEFAULT_LEADER, Tracer};
#[cfg(feature = "tracing")]
pub use tracing_bridge::{TracingSink, forward_to_tracing};

pub use ::dump::{Described, Dump, DumpOptions};
