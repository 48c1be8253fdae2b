//! Demonstrates trace lines, level gating, and structural dumps.
//!
//! Run with `cargo run --example trace_demo`.

use dump::{Dump, Field, Shape};
use trace::{trace_dump, trace_print, trace_print_level, trace_printf, trace_println};

struct Report {
    title: String,
    lines: Vec<&'static str>,
    count: i32,
}

impl Dump for Report {
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    fn inspect(&self, visit: &mut dyn FnMut(Shape<'_>)) {
        visit(Shape::Record(vec![
            Field::new("title", &self.title),
            Field::new("lines", &self.lines),
            Field::new("count", &self.count),
        ]));
    }
}

fn main() {
    // Standard print-style forms.
    trace_print!();
    trace_print!("Print()", "second", 3);
    trace_println!("Println()", "second", 3);
    trace_printf!("Printf() {} {}", "second", 3);

    // Trace levels.
    trace::set_level(1);
    trace_print_level!(0, "print at level 0");
    trace_print_level!(1, "print at level 1");
    trace_print_level!(2, "print at level 2 is suppressed");
    trace::set_level(0);

    // Pretty-print data structures.
    trace_dump!(vec!["now", "is", "the time"]);
    trace_dump!(Report {
        title: String::from("now is the time"),
        lines: vec!["now", "is", "the time"],
        count: 1,
    });

    // Change the leader.
    trace::set_leader("\t* ");
    trace_print!();
    trace::set_leader(trace::DEFAULT_LEADER);
}
