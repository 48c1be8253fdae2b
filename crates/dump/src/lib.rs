#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `dump` renders the full structure of in-memory values as indented,
//! human-readable text: type names, field names, lengths and capacities,
//! nested containers, and reference identity. It is the mechanism behind the
//! `trace` crate's structural dumps, but it is usable on its own wherever a
//! deterministic textual snapshot of a value is more useful than its
//! [`Debug`](std::fmt::Debug) representation.
//!
//! # Design
//!
//! Values are classified through the [`Dump`] trait into a closed set of
//! [`Shape`] variants (scalar, text, bytes, sequence, mapping, record,
//! reference, absent, unreadable). The [`Dumper`] walks shapes recursively
//! and writes one multi-line block per value into any
//! [`io::Write`](std::io::Write) target, consulting [`DumpOptions`] for
//! indentation, depth limits, capacity and address reporting, key ordering,
//! and describe-hook policy.
//!
//! Classification hands shapes to a visitor callback rather than returning
//! them, so containers that guard their contents ([`RefCell`](std::cell::RefCell),
//! [`Mutex`](std::sync::Mutex)) can expose borrowed shapes while their guard
//! is still alive.
//!
//! # Invariants
//!
//! - Output for a given value and a given [`DumpOptions`] is byte-identical
//!   across runs, except for reference addresses, which vary per process.
//! - Rendering terminates on cyclic graphs: a reference identity already on
//!   the current recursion path renders the `<already shown>` marker instead
//!   of recursing.
//! - A subtree that cannot be read degrades to the `<invalid>` marker;
//!   sibling values still render.
//!
//! # Errors
//!
//! Rendering surfaces [`io::Error`](std::io::Error) values originating from
//! the underlying writer and nothing else. [`Dumper::sdump`] renders into an
//! in-memory buffer and is infallible.
//!
//! # Examples
//!
//! ```
//! use dump::Dumper;
//!
//! let words = vec!["now", "is", "the time"];
//! let text = Dumper::new().sdump(&words);
//!
//! assert!(text.starts_with(&format!("({})", std::any::type_name::<Vec<&str>>())));
//! assert!(text.contains("(len=3 cap=3) {"));
//! assert!(text.contains("(str) (len=8) \"the time\""));
//! ```

mod options;
mod render;
mod shape;
mod value;

pub use options::DumpOptions;
pub use render::{Dumper, dump_to, sdump};
pub use shape::{Field, Scalar, Seq, Shape};
pub use value::{Bytes, Described, Dump};
