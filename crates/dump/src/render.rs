//! crates/dump/src/render.rs
//! Recursive shape renderer with cycle and depth guards.

use std::cmp::Ordering;
use std::io::{self, Write};

use rustc_hash::FxHashSet;

use crate::options::DumpOptions;
use crate::shape::{Scalar, Shape};
use crate::value::{Described, Dump};

const NIL: &str = "<nil>";
const ALREADY_SHOWN: &str = "<already shown>";
const MAX_DEPTH: &str = "<max depth reached>";
const INVALID: &str = "<invalid>";
const DESCRIBE_FAILED: &str = "<describe failed>";

/// Renders classified values into multi-line text blocks.
///
/// A `Dumper` owns the [`DumpOptions`] consulted on every call; the
/// per-call state (visited references, current depth) lives on the stack of
/// each render, so a single `Dumper` can be reused freely.
///
/// # Examples
///
/// ```
/// use dump::{DumpOptions, Dumper};
///
/// let mut options = DumpOptions::default();
/// options.indent = String::from("\t");
/// let dumper = Dumper::with_options(options);
///
/// let text = dumper.sdump(&vec![1_i32, 2]);
/// assert!(text.contains("\t(i32) 1,\n"));
/// assert!(text.contains("\t(i32) 2\n"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Dumper {
    options: DumpOptions,
}

impl Dumper {
    /// Creates a dumper with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a dumper with the provided options.
    #[must_use]
    pub fn with_options(options: DumpOptions) -> Self {
        Self { options }
    }

    /// Borrows the options consulted on each dump.
    #[must_use]
    pub fn options(&self) -> &DumpOptions {
        &self.options
    }

    /// Mutably borrows the options consulted on each dump.
    pub fn options_mut(&mut self) -> &mut DumpOptions {
        &mut self.options
    }

    /// Renders one value as a newline-terminated block.
    pub fn dump_to(&self, out: &mut dyn Write, value: &dyn Dump) -> io::Result<()> {
        let mut renderer = Renderer {
            options: &self.options,
            out,
            visited: FxHashSet::default(),
            depth: 0,
        };
        renderer.value(value, true)?;
        renderer.out.write_all(b"\n")
    }

    /// Renders several values in argument order, one block per value.
    ///
    /// The visited-reference set is cleared between values, so each block is
    /// rendered exactly as it would be on its own.
    pub fn dump_all_to(&self, out: &mut dyn Write, values: &[&dyn Dump]) -> io::Result<()> {
        for value in values {
            self.dump_to(out, *value)?;
        }
        Ok(())
    }

    /// Renders one value into a freshly allocated string.
    #[must_use]
    pub fn sdump(&self, value: &dyn Dump) -> String {
        let mut buffer = Vec::new();
        let _ = self.dump_to(&mut buffer, value);
        String::from_utf8_lossy(&buffer).into_owned()
    }
}

/// Renders one value with default options, writing to `out`.
pub fn dump_to(out: &mut dyn Write, value: &dyn Dump) -> io::Result<()> {
    Dumper::new().dump_to(out, value)
}

/// Renders one value with default options into a freshly allocated string.
#[must_use]
pub fn sdump(value: &dyn Dump) -> String {
    Dumper::new().sdump(value)
}

/// Natural ordering key for map keys.
///
/// Keys of the same category compare naturally (numeric ascending, textual
/// lexicographic); mixed categories order by category.
enum KeyOrder {
    Bool(bool),
    Int(i128),
    Float(f64),
    Text(String),
    Rendered(String),
}

impl KeyOrder {
    const fn category(&self) -> u8 {
        match self {
            Self::Bool(_) => 0,
            Self::Int(_) => 1,
            Self::Float(_) => 2,
            Self::Text(_) => 3,
            Self::Rendered(_) => 4,
        }
    }

    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
            (Self::Int(a), Self::Int(b)) => a.cmp(b),
            (Self::Float(a), Self::Float(b)) => a.total_cmp(b),
            (Self::Text(a), Self::Text(b)) | (Self::Rendered(a), Self::Rendered(b)) => a.cmp(b),
            _ => self.category().cmp(&other.category()),
        }
    }
}

struct Renderer<'a> {
    options: &'a DumpOptions,
    out: &'a mut dyn Write,
    visited: FxHashSet<usize>,
    depth: usize,
}

impl Renderer<'_> {
    fn value(&mut self, value: &dyn Dump, with_type: bool) -> io::Result<()> {
        if self.options.max_depth != 0 && self.depth > self.options.max_depth {
            return self.out.write_all(MAX_DEPTH.as_bytes());
        }

        if self.options.use_hooks {
            match value.describe() {
                Described::Text(text) => {
                    if with_type {
                        write!(self.out, "({}) ", value.type_name())?;
                    }
                    return write!(self.out, "{text}");
                }
                Described::Failed if !self.options.hook_fallback => {
                    return self.out.write_all(DESCRIBE_FAILED.as_bytes());
                }
                Described::Failed | Described::Unsupported => {}
            }
        }

        let mut result = Ok(());
        value.inspect(&mut |shape| {
            result = self.shape(value, shape, with_type);
        });
        result
    }

    fn shape(&mut self, value: &dyn Dump, shape: Shape<'_>, with_type: bool) -> io::Result<()> {
        match shape {
            Shape::Scalar(scalar) => {
                if with_type {
                    write!(self.out, "({}) ", value.type_name())?;
                }
                self.scalar(&scalar)
            }
            Shape::Text(text) => {
                if with_type {
                    write!(self.out, "({}) ", value.type_name())?;
                }
                write!(self.out, "(len={}) {text:?}", text.len())
            }
            Shape::Bytes(data) => {
                if with_type {
                    write!(self.out, "({}) ", value.type_name())?;
                }
                write!(self.out, "(len={}) ", data.len())?;
                self.hexdump(data)
            }
            Shape::Seq(seq) => {
                if with_type {
                    write!(self.out, "({}) ", value.type_name())?;
                }
                write!(self.out, "(len={}", seq.items.len())?;
                if self.options.show_capacities
                    && let Some(capacity) = seq.capacity
                {
                    write!(self.out, " cap={capacity}")?;
                }
                self.out.write_all(b") ")?;
                let items = seq.items;
                self.block(items.len(), |renderer, index| {
                    renderer.value(items[index], true)
                })
            }
            Shape::Map(mut entries) => {
                if with_type {
                    write!(self.out, "({}) ", value.type_name())?;
                }
                write!(self.out, "(len={}) ", entries.len())?;
                if self.options.sort_keys {
                    let mut ranked: Vec<(KeyOrder, (&dyn Dump, &dyn Dump))> = entries
                        .drain(..)
                        .map(|entry| (self.key_order(entry.0), entry))
                        .collect();
                    ranked.sort_by(|a, b| a.0.compare(&b.0));
                    entries = ranked.into_iter().map(|(_, entry)| entry).collect();
                }
                self.block(entries.len(), |renderer, index| {
                    let (key, entry_value) = entries[index];
                    renderer.key(key)?;
                    renderer.out.write_all(b": ")?;
                    renderer.value(entry_value, true)
                })
            }
            Shape::Record(fields) => {
                if with_type {
                    write!(self.out, "({}) ", value.type_name())?;
                }
                self.block(fields.len(), |renderer, index| {
                    let field = &fields[index];
                    write!(renderer.out, "{}: ", field.name)?;
                    renderer.value(field.value, true)
                })
            }
            Shape::Ref { id, target } => {
                if with_type {
                    write!(self.out, "(*{})", target.type_name())?;
                }
                if self.options.show_addresses {
                    write!(self.out, "({id:#x})")?;
                }
                if self.visited.contains(&id) {
                    return write!(self.out, "({ALREADY_SHOWN})");
                }
                self.visited.insert(id);
                self.out.write_all(b"(")?;
                let result = self.value(target, false);
                self.visited.remove(&id);
                result?;
                self.out.write_all(b")")
            }
            Shape::Absent => self.out.write_all(NIL.as_bytes()),
            Shape::Unreadable => self.out.write_all(INVALID.as_bytes()),
        }
    }

    /// Renders a mapping key, plain-printing scalar and textual keys unless
    /// dump-rendered keys are requested.
    fn key(&mut self, key: &dyn Dump) -> io::Result<()> {
        if self.options.dump_keys {
            return self.value(key, true);
        }
        let mut result = Ok(());
        key.inspect(&mut |shape| {
            result = match shape {
                Shape::Scalar(scalar) => self.scalar(&scalar),
                Shape::Text(text) => write!(self.out, "{text}"),
                other => self.shape(key, other, true),
            };
        });
        result
    }

    fn key_order(&self, key: &dyn Dump) -> KeyOrder {
        let mut order = KeyOrder::Rendered(String::new());
        key.inspect(&mut |shape| {
            order = match shape {
                Shape::Scalar(Scalar::Bool(value)) => KeyOrder::Bool(value),
                Shape::Scalar(Scalar::Int(value)) => KeyOrder::Int(value),
                Shape::Scalar(Scalar::Uint(value)) => {
                    KeyOrder::Int(i128::try_from(value).unwrap_or(i128::MAX))
                }
                Shape::Scalar(Scalar::Float(value)) => KeyOrder::Float(value),
                Shape::Scalar(Scalar::Char(value)) => KeyOrder::Text(value.to_string()),
                Shape::Text(text) => KeyOrder::Text(text.to_owned()),
                _ => KeyOrder::Rendered(render_to_string(self.options, key)),
            };
        });
        order
    }

    fn scalar(&mut self, scalar: &Scalar) -> io::Result<()> {
        match scalar {
            Scalar::Bool(value) => write!(self.out, "{value}"),
            Scalar::Int(value) => write!(self.out, "{value}"),
            Scalar::Uint(value) => write!(self.out, "{value}"),
            Scalar::Float(value) => write!(self.out, "{value}"),
            Scalar::Char(value) => write!(self.out, "{value:?}"),
        }
    }

    fn block<F>(&mut self, count: usize, mut entry: F) -> io::Result<()>
    where
        F: FnMut(&mut Self, usize) -> io::Result<()>,
    {
        self.out.write_all(b"{\n")?;
        self.depth += 1;
        for index in 0..count {
            self.indent()?;
            entry(self, index)?;
            if index + 1 < count {
                self.out.write_all(b",")?;
            }
            self.out.write_all(b"\n")?;
        }
        self.depth -= 1;
        self.indent()?;
        self.out.write_all(b"}")
    }

    fn hexdump(&mut self, data: &[u8]) -> io::Result<()> {
        self.out.write_all(b"{\n")?;
        self.depth += 1;
        for (row, chunk) in data.chunks(16).enumerate() {
            self.indent()?;
            write!(self.out, "{:08x} ", row * 16)?;
            for column in 0..16 {
                if column % 8 == 0 {
                    self.out.write_all(b" ")?;
                }
                match chunk.get(column) {
                    Some(byte) => write!(self.out, "{byte:02x} ")?,
                    None => self.out.write_all(b"   ")?,
                }
            }
            self.out.write_all(b" |")?;
            for byte in chunk {
                let shown = if byte.is_ascii_graphic() || *byte == b' ' {
                    *byte as char
                } else {
                    '.'
                };
                write!(self.out, "{shown}")?;
            }
            self.out.write_all(b"|\n")?;
        }
        self.depth -= 1;
        self.indent()?;
        self.out.write_all(b"}")
    }

    fn indent(&mut self) -> io::Result<()> {
        for _ in 0..self.depth {
            self.out.write_all(self.options.indent.as_bytes())?;
        }
        Ok(())
    }
}

fn render_to_string(options: &DumpOptions, value: &dyn Dump) -> String {
    let mut buffer = Vec::new();
    let mut renderer = Renderer {
        options,
        out: &mut buffer,
        visited: FxHashSet::default(),
        depth: 0,
    };
    let _ = renderer.value(value, true);
    String::from_utf8_lossy(&buffer).into_owned()
}
