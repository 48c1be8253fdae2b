//! crates/trace/src/tracer.rs
//! The lock-free emitter core.

use std::fmt::{self, Display, Write as _};
use std::io::Write;

use dump::{Dump, DumpOptions, Dumper};

use crate::call_site::CallSite;

/// Leader written at the beginning of every trace line by default.
pub const DEFAULT_LEADER: &str = "### ";

/// Emitter that renders leader-prefixed, file:line-annotated lines into an
/// owned writer.
///
/// A `Tracer` holds the whole emitting configuration: the leader string, the
/// trace level threshold, the writer, and the [`DumpOptions`] applied by
/// [`dump`](Self::dump). All of it is read at call time, so changes apply
/// from the next call onward. The type takes no locks; the process-wide
/// surface in this crate wraps one `Tracer` in a mutex.
///
/// Writes are best-effort: a failing writer never surfaces an error, and the
/// writer is flushed once per emitting call so buffered sinks observe whole
/// lines.
///
/// # Examples
///
/// ```
/// use trace::{CallSite, Tracer};
///
/// let mut tracer = Tracer::new(Vec::new());
/// tracer.println(
///     CallSite::new("worker.rs", 9),
///     &[&"queued" as &dyn std::fmt::Display, &3_usize],
/// );
///
/// assert_eq!(tracer.get_ref().as_slice(), b"### worker.rs:9 queued 3\n");
/// ```
#[derive(Debug)]
pub struct Tracer<W> {
    leader: String,
    level: i32,
    dumper: Dumper,
    writer: W,
}

impl<W> Tracer<W> {
    /// Creates a tracer with the default leader, a threshold of zero, and
    /// tab-indented, key-sorted dump output.
    #[must_use]
    pub fn new(writer: W) -> Self {
        let mut options = DumpOptions::default();
        options.indent = String::from("\t");
        options.use_hooks = false;
        options.sort_keys = true;
        options.dump_keys = true;

        Self {
            leader: String::from(DEFAULT_LEADER),
            level: 0,
            dumper: Dumper::with_options(options),
            writer,
        }
    }

    /// Returns the leader written in front of every line.
    #[must_use]
    pub fn leader(&self) -> &str {
        &self.leader
    }

    /// Replaces the leader, effective from the next call.
    pub fn set_leader<T: Into<String>>(&mut self, leader: T) {
        self.leader = leader.into();
    }

    /// Returns the trace level threshold.
    #[must_use]
    pub const fn level(&self) -> i32 {
        self.level
    }

    /// Replaces the trace level threshold, effective from the next call.
    pub const fn set_level(&mut self, level: i32) {
        self.level = level;
    }

    /// Borrows the options applied when dumping values.
    #[must_use]
    pub fn dump_options(&self) -> &DumpOptions {
        self.dumper.options()
    }

    /// Mutably borrows the options applied when dumping values.
    pub fn dump_options_mut(&mut self) -> &mut DumpOptions {
        self.dumper.options_mut()
    }

    /// Borrows the underlying writer.
    #[must_use]
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Mutably borrows the underlying writer.
    #[must_use]
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Replaces the writer and returns the previous one.
    pub fn replace_writer(&mut self, writer: W) -> W {
        std::mem::replace(&mut self.writer, writer)
    }

    /// Consumes the tracer and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Tracer<W> {
    /// Emits the location line followed by the arguments concatenated with
    /// no separator.
    pub fn print(&mut self, site: CallSite, parts: &[&dyn Display]) {
        self.emit(site, &join(parts, ""));
    }

    /// Emits the location line followed by the arguments joined with single
    /// spaces.
    pub fn println(&mut self, site: CallSite, parts: &[&dyn Display]) {
        self.emit(site, &join(parts, " "));
    }

    /// Emits the location line followed by the formatted message.
    pub fn printf(&mut self, site: CallSite, args: fmt::Arguments<'_>) {
        self.emit(site, &args.to_string());
    }

    /// Like [`print`](Self::print), emitting only when `level` is at or
    /// below the current threshold.
    pub fn print_level(&mut self, level: i32, site: CallSite, parts: &[&dyn Display]) {
        if level <= self.level {
            self.print(site, parts);
        }
    }

    /// Like [`println`](Self::println), emitting only when `level` is at or
    /// below the current threshold.
    pub fn println_level(&mut self, level: i32, site: CallSite, parts: &[&dyn Display]) {
        if level <= self.level {
            self.println(site, parts);
        }
    }

    /// Like [`printf`](Self::printf), emitting only when `level` is at or
    /// below the current threshold.
    pub fn printf_level(&mut self, level: i32, site: CallSite, args: fmt::Arguments<'_>) {
        if level <= self.level {
            self.printf(site, args);
        }
    }

    /// Emits the bare location line, then one dump block per value in
    /// argument order.
    pub fn dump(&mut self, site: CallSite, values: &[&dyn Dump]) {
        self.write_line(site, "");
        for value in values {
            let _ = self.dumper.dump_to(&mut self.writer, *value);
        }
        let _ = self.writer.flush();
    }

    fn emit(&mut self, site: CallSite, message: &str) {
        self.write_line(site, message);
        let _ = self.writer.flush();
    }

    fn write_line(&mut self, site: CallSite, message: &str) {
        let mut line = format!("{}{}:{}", self.leader, site.base_name(), site.line());
        if !message.is_empty() {
            line.push(' ');
            line.push_str(message);
        }
        let trimmed = line.trim_end_matches([' ', '\t', '\n']);
        let _ = self.writer.write_all(trimmed.as_bytes());
        let _ = self.writer.write_all(b"\n");
    }
}

fn join(parts: &[&dyn Display], separator: &str) -> String {
    let mut joined = String::new();
    for (index, part) in parts.iter().enumerate() {
        if index > 0 {
            joined.push_str(separator);
        }
        let _ = write!(joined, "{part}");
    }
    joined
}

#[cfg(test)]
mod tests {
    use super::*;

    const SITE: CallSite = CallSite::new("src/demo.rs", 12);

    #[test]
    fn print_concatenates_without_separator() {
        let mut tracer = Tracer::new(Vec::new());
        tracer.print(SITE, &[&"hello, world" as &dyn Display, &1_i32]);

        assert_eq!(
            tracer.get_ref().as_slice(),
            b"### demo.rs:12 hello, world1\n"
        );
    }

    #[test]
    fn println_joins_with_spaces() {
        let mut tracer = Tracer::new(Vec::new());
        tracer.println(SITE, &[&"hello, world" as &dyn Display, &1_i32]);

        assert_eq!(
            tracer.get_ref().as_slice(),
            b"### demo.rs:12 hello, world 1\n"
        );
    }

    #[test]
    fn printf_formats_a_template() {
        let mut tracer = Tracer::new(Vec::new());
        tracer.printf(SITE, format_args!("{} {}", "hello, world", 1));

        assert_eq!(
            tracer.get_ref().as_slice(),
            b"### demo.rs:12 hello, world 1\n"
        );
    }

    #[test]
    fn empty_calls_emit_the_location_alone() {
        let mut tracer = Tracer::new(Vec::new());
        tracer.print(SITE, &[]);

        assert_eq!(tracer.get_ref().as_slice(), b"### demo.rs:12\n");
    }

    #[test]
    fn trailing_whitespace_is_trimmed() {
        let mut tracer = Tracer::new(Vec::new());
        tracer.print(SITE, &[&"padded \t" as &dyn Display]);

        assert_eq!(tracer.get_ref().as_slice(), b"### demo.rs:12 padded\n");
    }

    #[test]
    fn leveled_calls_respect_the_threshold() {
        let mut tracer = Tracer::new(Vec::new());
        tracer.set_level(1);

        tracer.print_level(0, SITE, &[&"zero" as &dyn Display]);
        tracer.print_level(1, SITE, &[&"one" as &dyn Display]);
        tracer.print_level(2, SITE, &[&"two" as &dyn Display]);

        let output = String::from_utf8(tracer.into_inner()).expect("utf-8");
        assert!(output.contains("zero"));
        assert!(output.contains("one"));
        assert!(!output.contains("two"));
    }

    #[test]
    fn gated_calls_write_nothing() {
        let mut tracer = Tracer::new(Vec::new());
        tracer.printf_level(1, SITE, format_args!("{}", "hidden"));

        assert!(tracer.get_ref().is_empty());
    }

    #[test]
    fn leader_changes_apply_to_subsequent_calls() {
        let mut tracer = Tracer::new(Vec::new());
        tracer.print(SITE, &[&"before" as &dyn Display]);
        tracer.set_leader("*** ");
        tracer.print(SITE, &[&"after" as &dyn Display]);

        let output = String::from_utf8(tracer.into_inner()).expect("utf-8");
        assert_eq!(
            output,
            "### demo.rs:12 before\n*** demo.rs:12 after\n"
        );
    }

    #[test]
    fn dump_writes_location_then_blocks() {
        let mut tracer = Tracer::new(Vec::new());
        let words = vec!["now", "is", "the time"];
        tracer.dump(SITE, &[&words as &dyn Dump]);

        let output = String::from_utf8(tracer.into_inner()).expect("utf-8");
        let expected = format!(
            "### demo.rs:12\n({}) (len=3 cap=3) {{\n\t(str) (len=3) \"now\",\n\t(str) (len=2) \"is\",\n\t(str) (len=8) \"the time\"\n}}\n",
            std::any::type_name::<Vec<&str>>()
        );
        assert_eq!(output, expected);
    }

    #[test]
    fn dump_defaults_match_the_trace_layer() {
        let tracer = Tracer::new(Vec::<u8>::new());
        let options = tracer.dump_options();

        assert_eq!(options.indent, "\t");
        assert!(!options.use_hooks);
        assert!(options.sort_keys);
        assert!(options.dump_keys);
        assert_eq!(options.max_depth, 0);
    }
}
