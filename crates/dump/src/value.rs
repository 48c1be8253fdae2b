//! crates/dump/src/value.rs
//! The `Dump` classification trait and its standard-library implementations.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::rc::{self, Rc};
use std::sync::{Arc, Mutex, Weak as SyncWeak};

use crate::shape::{Scalar, Seq, Shape};

/// Outcome of a custom describe hook.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Described {
    /// The value does not provide a custom description.
    Unsupported,
    /// Custom description text, used in place of structural rendering.
    Text(String),
    /// The hook ran but could not produce text.
    Failed,
}

/// Classifies a value into a renderable [`Shape`].
///
/// Implementations hand the classified shape to `visit` instead of returning
/// it, so containers that guard their contents can expose shapes borrowed
/// from a live guard. The callback is invoked exactly once per call.
pub trait Dump {
    /// Fully-qualified type name used in dump headers.
    fn type_name(&self) -> &'static str;

    /// Classifies the value and hands the shape to `visit`.
    fn inspect(&self, visit: &mut dyn FnMut(Shape<'_>));

    /// Custom description hook, consulted before structural rendering when
    /// hooks are enabled in [`DumpOptions`](crate::DumpOptions).
    fn describe(&self) -> Described {
        Described::Unsupported
    }
}

/// Byte sequence wrapper rendered as a hexdump block.
///
/// Plain `&[u8]` values classify as ordered sequences of `(u8)` scalars;
/// wrapping the slice selects the offset/hex/ascii rendering instead.
///
/// # Examples
///
/// ```
/// use dump::{Bytes, sdump};
///
/// let text = sdump(&Bytes(b"dump"));
/// assert!(text.contains("00000000  64 75 6d 70"));
/// assert!(text.contains("|dump|"));
/// ```
pub struct Bytes<'a>(pub &'a [u8]);

impl Dump for Bytes<'_> {
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    fn inspect(&self, visit: &mut dyn FnMut(Shape<'_>)) {
        visit(Shape::Bytes(self.0));
    }
}

macro_rules! impl_dump_scalar {
    ($($ty:ty => $variant:ident as $widen:ty),* $(,)?) => {$(
        impl Dump for $ty {
            fn type_name(&self) -> &'static str {
                std::any::type_name::<Self>()
            }

            fn inspect(&self, visit: &mut dyn FnMut(Shape<'_>)) {
                visit(Shape::Scalar(Scalar::$variant(<$widen>::from(*self))));
            }
        }
    )*};
}

macro_rules! impl_dump_scalar_cast {
    ($($ty:ty => $variant:ident as $widen:ty),* $(,)?) => {$(
        impl Dump for $ty {
            fn type_name(&self) -> &'static str {
                std::any::type_name::<Self>()
            }

            fn inspect(&self, visit: &mut dyn FnMut(Shape<'_>)) {
                visit(Shape::Scalar(Scalar::$variant(*self as $widen)));
            }
        }
    )*};
}

impl_dump_scalar! {
    bool => Bool as bool,
    char => Char as char,
    i8 => Int as i128,
    i16 => Int as i128,
    i32 => Int as i128,
    i64 => Int as i128,
    i128 => Int as i128,
    u8 => Uint as u128,
    u16 => Uint as u128,
    u32 => Uint as u128,
    u64 => Uint as u128,
    u128 => Uint as u128,
    f32 => Float as f64,
    f64 => Float as f64,
}

impl_dump_scalar_cast! {
    isize => Int as i128,
    usize => Uint as u128,
}

impl Dump for str {
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    fn inspect(&self, visit: &mut dyn FnMut(Shape<'_>)) {
        visit(Shape::Text(self));
    }
}

impl Dump for String {
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    fn inspect(&self, visit: &mut dyn FnMut(Shape<'_>)) {
        visit(Shape::Text(self.as_str()));
    }
}

impl<T: Dump> Dump for [T] {
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    fn inspect(&self, visit: &mut dyn FnMut(Shape<'_>)) {
        visit(Shape::Seq(Seq {
            capacity: None,
            items: self.iter().map(|item| item as &dyn Dump).collect(),
        }));
    }
}

impl<T: Dump, const N: usize> Dump for [T; N] {
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    fn inspect(&self, visit: &mut dyn FnMut(Shape<'_>)) {
        visit(Shape::Seq(Seq {
            capacity: Some(N),
            items: self.iter().map(|item| item as &dyn Dump).collect(),
        }));
    }
}

impl<T: Dump> Dump for Vec<T> {
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    fn inspect(&self, visit: &mut dyn FnMut(Shape<'_>)) {
        visit(Shape::Seq(Seq {
            capacity: Some(self.capacity()),
            items: self.iter().map(|item| item as &dyn Dump).collect(),
        }));
    }
}

impl<T: Dump> Dump for VecDeque<T> {
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    fn inspect(&self, visit: &mut dyn FnMut(Shape<'_>)) {
        visit(Shape::Seq(Seq {
            capacity: Some(self.capacity()),
            items: self.iter().map(|item| item as &dyn Dump).collect(),
        }));
    }
}

impl<K: Dump, V: Dump, S> Dump for HashMap<K, V, S> {
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    fn inspect(&self, visit: &mut dyn FnMut(Shape<'_>)) {
        let entries: Vec<(&dyn Dump, &dyn Dump)> = self
            .iter()
            .map(|(key, value)| (key as &dyn Dump, value as &dyn Dump))
            .collect();
        visit(Shape::Map(entries));
    }
}

impl<K: Dump, V: Dump> Dump for BTreeMap<K, V> {
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    fn inspect(&self, visit: &mut dyn FnMut(Shape<'_>)) {
        let entries: Vec<(&dyn Dump, &dyn Dump)> = self
            .iter()
            .map(|(key, value)| (key as &dyn Dump, value as &dyn Dump))
            .collect();
        visit(Shape::Map(entries));
    }
}

impl<T: Dump> Dump for Option<T> {
    fn type_name(&self) -> &'static str {
        self.as_ref()
            .map_or(std::any::type_name::<Self>(), Dump::type_name)
    }

    fn inspect(&self, visit: &mut dyn FnMut(Shape<'_>)) {
        match self {
            Some(value) => value.inspect(visit),
            None => visit(Shape::Absent),
        }
    }

    fn describe(&self) -> Described {
        self.as_ref().map_or(Described::Unsupported, Dump::describe)
    }
}

impl<T: Dump + ?Sized> Dump for &T {
    fn type_name(&self) -> &'static str {
        (**self).type_name()
    }

    fn inspect(&self, visit: &mut dyn FnMut(Shape<'_>)) {
        (**self).inspect(visit);
    }

    fn describe(&self) -> Described {
        (**self).describe()
    }
}

impl<T: Dump + ?Sized> Dump for &mut T {
    fn type_name(&self) -> &'static str {
        (**self).type_name()
    }

    fn inspect(&self, visit: &mut dyn FnMut(Shape<'_>)) {
        (**self).inspect(visit);
    }

    fn describe(&self) -> Described {
        (**self).describe()
    }
}

impl<T: Dump> Dump for Box<T> {
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    fn inspect(&self, visit: &mut dyn FnMut(Shape<'_>)) {
        visit(Shape::Ref {
            id: std::ptr::from_ref::<T>(&**self) as usize,
            target: &**self,
        });
    }
}

impl<T: Dump> Dump for Rc<T> {
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    fn inspect(&self, visit: &mut dyn FnMut(Shape<'_>)) {
        visit(Shape::Ref {
            id: Rc::as_ptr(self) as usize,
            target: &**self,
        });
    }
}

impl<T: Dump> Dump for Arc<T> {
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    fn inspect(&self, visit: &mut dyn FnMut(Shape<'_>)) {
        visit(Shape::Ref {
            id: Arc::as_ptr(self) as usize,
            target: &**self,
        });
    }
}

impl<T: Dump> Dump for rc::Weak<T> {
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    fn inspect(&self, visit: &mut dyn FnMut(Shape<'_>)) {
        match self.upgrade() {
            Some(strong) => visit(Shape::Ref {
                id: Rc::as_ptr(&strong) as usize,
                target: &*strong,
            }),
            None => visit(Shape::Absent),
        }
    }
}

impl<T: Dump> Dump for SyncWeak<T> {
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    fn inspect(&self, visit: &mut dyn FnMut(Shape<'_>)) {
        match self.upgrade() {
            Some(strong) => visit(Shape::Ref {
                id: Arc::as_ptr(&strong) as usize,
                target: &*strong,
            }),
            None => visit(Shape::Absent),
        }
    }
}

impl<T: Dump> Dump for RefCell<T> {
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    fn inspect(&self, visit: &mut dyn FnMut(Shape<'_>)) {
        match self.try_borrow() {
            Ok(value) => value.inspect(visit),
            Err(_) => visit(Shape::Unreadable),
        }
    }

    fn describe(&self) -> Described {
        self.try_borrow()
            .map_or(Described::Unsupported, |value| value.describe())
    }
}

impl<T: Dump> Dump for Mutex<T> {
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    fn inspect(&self, visit: &mut dyn FnMut(Shape<'_>)) {
        match self.try_lock() {
            Ok(value) => value.inspect(visit),
            Err(_) => visit(Shape::Unreadable),
        }
    }

    fn describe(&self) -> Described {
        self.try_lock()
            .map_or(Described::Unsupported, |value| value.describe())
    }
}
