#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `oc-trace` is the workspace facade for the `trace` and `dump` crates:
//! printf-style source-line tracing plus a deterministic structural
//! pretty-printer for arbitrary values. Depending on this one package gives
//! host programs the full call surface - the `trace_print!` macro family,
//! the process-wide configuration accessors, and the [`Dump`] trait with its
//! renderer.
//!
//! # Examples
//!
//! ```
//! use oc_trace::{BufferSink, trace_println, trace_dump};
//!
//! let sink = BufferSink::new();
//! let _previous = oc_trace::set_sink(Box::new(sink.clone()));
//!
//! trace_println!("starting run", 7);
//! trace_dump!(vec!["now", "is", "the time"]);
//!
//! let output = sink.take();
//! assert!(output.starts_with("### "));
//! assert!(output.contains("(len=3 cap=3) {"));
//! ```

pub use ::dump::{
    Bytes, Described, Dump, DumpOptions, Dumper, Field, Scalar, Seq, Shape, dump_to, sdump,
};
pub use ::trace::{
    BufferSink, CallSite, DEFAULT_LEADER, Sink, Tracer, configure, dump, leader, level, print,
    print_level, printf, printf_level, println, println_level, set_leader, set_level, set_sink,
    stderr, stdout,
};
pub use ::trace::{
    call_site, trace_dump, trace_print, trace_print_level, trace_printf, trace_printf_level,
    trace_println, trace_println_level,
};
#[cfg(feature = "tracing")]
pub use ::trace::{TracingSink, forward_to_tracing};
