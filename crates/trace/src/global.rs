//! crates/trace/src/global.rs
//! Process-wide tracer singleton.
//!
//! One [`Tracer`] lives behind a mutex for the life of the process, created
//! on first use with standard output as its sink. Every accessor takes the
//! lock for the duration of a single call, so configuration follows
//! last-write-wins semantics and is read at the moment each trace call
//! executes.

use std::fmt::{self, Display};
use std::sync::{LazyLock, Mutex, PoisonError};

use dump::Dump;

use crate::call_site::CallSite;
use crate::sink::{self, Sink};
use crate::tracer::Tracer;

static TRACER: LazyLock<Mutex<Tracer<Sink>>> =
    LazyLock::new(|| Mutex::new(Tracer::new(sink::stdout())));

fn with<R>(f: impl FnOnce(&mut Tracer<Sink>) -> R) -> R {
    let mut tracer = TRACER.lock().unwrap_or_else(PoisonError::into_inner);
    f(&mut tracer)
}

/// Emits a location line followed by the concatenated arguments.
pub fn print(site: CallSite, parts: &[&dyn Display]) {
    with(|tracer| tracer.print(site, parts));
}

/// Emits a location line followed by the space-joined arguments.
pub fn println(site: CallSite, parts: &[&dyn Display]) {
    with(|tracer| tracer.println(site, parts));
}

/// Emits a location line followed by the formatted message.
pub fn printf(site: CallSite, args: fmt::Arguments<'_>) {
    with(|tracer| tracer.printf(site, args));
}

/// Leveled form of [`print`]; a no-op above the current threshold.
pub fn print_level(level: i32, site: CallSite, parts: &[&dyn Display]) {
    with(|tracer| tracer.print_level(level, site, parts));
}

/// Leveled form of [`println`]; a no-op above the current threshold.
pub fn println_level(level: i32, site: CallSite, parts: &[&dyn Display]) {
    with(|tracer| tracer.println_level(level, site, parts));
}

/// Leveled form of [`printf`]; a no-op above the current threshold.
pub fn printf_level(level: i32, site: CallSite, args: fmt::Arguments<'_>) {
    with(|tracer| tracer.printf_level(level, site, args));
}

/// Emits a location line, then one dump block per value in argument order.
pub fn dump(site: CallSite, values: &[&dyn Dump]) {
    with(|tracer| tracer.dump(site, values));
}

/// Returns the current leader.
#[must_use]
pub fn leader() -> String {
    with(|tracer| tracer.leader().to_owned())
}

/// Replaces the leader, effective from the next call.
pub fn set_leader<T: Into<String>>(leader: T) {
    let leader = leader.into();
    with(|tracer| tracer.set_leader(leader));
}

/// Returns the current trace level threshold.
#[must_use]
pub fn level() -> i32 {
    with(|tracer| tracer.level())
}

/// Replaces the trace level threshold, effective from the next call.
pub fn set_level(level: i32) {
    with(|tracer| tracer.set_level(level));
}

/// Replaces the sink and returns the previous one.
pub fn set_sink(sink: Sink) -> Sink {
    with(|tracer| tracer.replace_writer(sink))
}

/// Runs `f` with exclusive access to the process-wide tracer.
///
/// Useful for adjusting several settings atomically, most commonly the dump
/// options:
///
/// ```
/// trace::configure(|tracer| {
///     tracer.dump_options_mut().max_depth = 2;
///     tracer.set_level(1);
/// });
/// # trace::configure(|tracer| {
/// #     tracer.dump_options_mut().max_depth = 0;
/// #     tracer.set_level(0);
/// # });
/// ```
pub fn configure(f: impl FnOnce(&mut Tracer<Sink>)) {
    with(f);
}
