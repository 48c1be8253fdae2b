//! crates/trace/src/macros.rs
//! Convenience macros for the process-wide tracer.
//!
//! Each macro captures the caller's file and line through
//! [`call_site!`](crate::call_site) in its own expansion, so the location on
//! the emitted line is always the invocation itself.

/// Emits a trace line with the arguments concatenated, no separator.
///
/// With no arguments the line ends at the location tag.
///
/// # Example
/// ```ignore
/// trace_print!("queued", 3);
/// ```
#[macro_export]
macro_rules! trace_print {
    ($($arg:expr),* $(,)?) => {
        $crate::print($crate::call_site!(), &[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

/// Emits a trace line with the arguments joined by single spaces.
///
/// # Example
/// ```ignore
/// trace_println!("queued", 3);
/// ```
#[macro_export]
macro_rules! trace_println {
    ($($arg:expr),* $(,)?) => {
        $crate::println($crate::call_site!(), &[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

/// Emits a trace line with a formatted message.
///
/// Given only a format string, the line ends at the location tag.
///
/// # Example
/// ```ignore
/// trace_printf!("queued {} of {}", done, total);
/// ```
#[macro_export]
macro_rules! trace_printf {
    ($fmt:expr) => {{
        let _ = $fmt;
        $crate::print($crate::call_site!(), &[])
    }};
    ($fmt:expr, $($arg:tt)+) => {
        $crate::printf($crate::call_site!(), ::std::format_args!($fmt, $($arg)+))
    };
}

/// Leveled form of [`trace_print!`]; a no-op above the current threshold.
///
/// # Example
/// ```ignore
/// trace_print_level!(2, "retrying");
/// ```
#[macro_export]
macro_rules! trace_print_level {
    ($level:expr $(, $arg:expr)* $(,)?) => {
        $crate::print_level($level, $crate::call_site!(), &[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

/// Leveled form of [`trace_println!`]; a no-op above the current threshold.
///
/// # Example
/// ```ignore
/// trace_println_level!(1, "connected to", addr);
/// ```
#[macro_export]
macro_rules! trace_println_level {
    ($level:expr $(, $arg:expr)* $(,)?) => {
        $crate::println_level($level, $crate::call_site!(), &[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

/// Leveled form of [`trace_printf!`]; a no-op above the current threshold.
///
/// # Example
/// ```ignore
/// trace_printf_level!(1, "sent {} bytes", count);
/// ```
#[macro_export]
macro_rules! trace_printf_level {
    ($level:expr, $fmt:expr) => {{
        let _ = $fmt;
        $crate::print_level($level, $crate::call_site!(), &[])
    }};
    ($level:expr, $fmt:expr, $($arg:tt)+) => {
        $crate::printf_level($level, $crate::call_site!(), ::std::format_args!($fmt, $($arg)+))
    };
}

/// Emits a location line, then pretty-prints each argument's structure.
///
/// # Example
/// ```ignore
/// trace_dump!(request, response);
/// ```
#[macro_export]
macro_rules! trace_dump {
    ($($arg:expr),* $(,)?) => {
        $crate::dump($crate::call_site!(), &[$(&$arg as &dyn $crate::Dump),*])
    };
}
