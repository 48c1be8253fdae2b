//! Integration tests for the renderer's termination guards and describe
//! hooks: cycle detection, depth limits, unreadable subtrees, hook policy,
//! and output determinism.

use std::any::type_name;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

use dump::{Described, Dump, DumpOptions, Dumper, Field, Shape, sdump};

struct Node {
    name: &'static str,
    next: Option<Rc<RefCell<Node>>>,
}

impl Dump for Node {
    fn type_name(&self) -> &'static str {
        type_name::<Self>()
    }

    fn inspect(&self, visit: &mut dyn FnMut(Shape<'_>)) {
        visit(Shape::Record(vec![
            Field::new("name", &self.name),
            Field::new("next", &self.next),
        ]));
    }
}

struct Status {
    ok: bool,
}

impl Dump for Status {
    fn type_name(&self) -> &'static str {
        type_name::<Self>()
    }

    fn inspect(&self, visit: &mut dyn FnMut(Shape<'_>)) {
        visit(Shape::Record(vec![Field::new("ok", &self.ok)]));
    }

    fn describe(&self) -> Described {
        Described::Text(format!("status({})", self.ok))
    }
}

struct Flaky {
    id: u32,
}

impl Dump for Flaky {
    fn type_name(&self) -> &'static str {
        type_name::<Self>()
    }

    fn inspect(&self, visit: &mut dyn FnMut(Shape<'_>)) {
        visit(Shape::Record(vec![Field::new("id", &self.id)]));
    }

    fn describe(&self) -> Described {
        Described::Failed
    }
}

// ============================================================================
// Cycle detection
// ============================================================================

/// Verifies a two-node reference cycle terminates with the fixed marker
/// instead of recursing into the already-visited node.
#[test]
fn cyclic_graphs_terminate_with_a_marker() {
    let first = Rc::new(RefCell::new(Node {
        name: "first",
        next: None,
    }));
    let second = Rc::new(RefCell::new(Node {
        name: "second",
        next: Some(Rc::clone(&first)),
    }));
    first.borrow_mut().next = Some(Rc::clone(&second));

    let text = sdump(&first);

    assert!(text.contains("<already shown>"));
    assert_eq!(text.matches("\"first\"").count(), 1);
    assert_eq!(text.matches("\"second\"").count(), 1);
}

/// Verifies a self-referential node terminates immediately.
#[test]
fn self_cycle_terminates() {
    let node = Rc::new(RefCell::new(Node {
        name: "loop",
        next: None,
    }));
    node.borrow_mut().next = Some(Rc::clone(&node));

    let text = sdump(&node);

    assert!(text.contains("<already shown>"));
    assert_eq!(text.matches("\"loop\"").count(), 1);
}

/// Verifies a reference shared between siblings renders fully both times;
/// only identities on the current recursion path are suppressed.
#[test]
fn shared_references_outside_the_path_render_twice() {
    let shared = Rc::new(7_i32);
    let pair = vec![Rc::clone(&shared), shared];

    let text = sdump(&pair);

    assert_eq!(text.matches("(7)").count(), 2);
    assert!(!text.contains("<already shown>"));
}

// ============================================================================
// Depth limits
// ============================================================================

/// Verifies recursion past the configured depth renders the truncation
/// marker in place of the value.
#[test]
fn exceeding_max_depth_truncates() {
    let nested = vec![vec![1_i32, 2]];

    let mut options = DumpOptions::default();
    options.max_depth = 1;
    let text = Dumper::with_options(options).sdump(&nested);

    assert!(text.contains("<max depth reached>"));
    assert!(!text.contains("(i32) 1"));
}

/// Verifies depth zero means unlimited recursion.
#[test]
fn zero_max_depth_is_unlimited() {
    let nested = vec![vec![vec![1_i32]]];

    let text = sdump(&nested);

    assert!(text.contains("(i32) 1"));
    assert!(!text.contains("<max depth reached>"));
}

// ============================================================================
// Describe hooks
// ============================================================================

/// Verifies a describe hook replaces structural rendering when hooks are
/// enabled.
#[test]
fn hooks_take_precedence_when_enabled() {
    let text = sdump(&Status { ok: true });

    assert_eq!(text, format!("({}) status(true)\n", type_name::<Status>()));
}

/// Verifies disabling hooks restores structural rendering.
#[test]
fn hooks_ignored_when_disabled() {
    let mut options = DumpOptions::default();
    options.use_hooks = false;
    let text = Dumper::with_options(options).sdump(&Status { ok: true });

    assert!(text.contains("ok: (bool) true"));
    assert!(!text.contains("status(true)"));
}

/// Verifies a failed hook renders the failure marker by default.
#[test]
fn failed_hooks_render_marker_by_default() {
    let text = sdump(&Flaky { id: 3 });

    assert_eq!(text, "<describe failed>\n");
}

/// Verifies the fallback flag routes failed hooks to structural rendering.
#[test]
fn failed_hooks_fall_back_when_enabled() {
    let mut options = DumpOptions::default();
    options.hook_fallback = true;
    let text = Dumper::with_options(options).sdump(&Flaky { id: 3 });

    assert!(text.contains("id: (u32) 3"));
    assert!(!text.contains("<describe failed>"));
}

// ============================================================================
// Degraded subtrees
// ============================================================================

/// Verifies an unreadable cell degrades to the invalid marker while sibling
/// fields still render.
#[test]
fn unreadable_cells_degrade_to_invalid_marker() {
    struct Holder {
        cell: RefCell<i32>,
        label: &'static str,
    }

    impl Dump for Holder {
        fn type_name(&self) -> &'static str {
            type_name::<Self>()
        }

        fn inspect(&self, visit: &mut dyn FnMut(Shape<'_>)) {
            visit(Shape::Record(vec![
                Field::new("cell", &self.cell),
                Field::new("label", &self.label),
            ]));
        }
    }

    let holder = Holder {
        cell: RefCell::new(5),
        label: "ok",
    };
    let _guard = holder.cell.borrow_mut();

    let text = sdump(&holder);

    assert!(text.contains("cell: <invalid>"));
    assert!(text.contains("label: (str) (len=2) \"ok\""));
}

/// Verifies a dangling weak reference renders the nil marker.
#[test]
fn dangling_weak_renders_nil() {
    let dangling: Weak<i32> = {
        let strong = Rc::new(1_i32);
        Rc::downgrade(&strong)
    };

    assert_eq!(sdump(&dangling), "<nil>\n");
}

// ============================================================================
// Determinism
// ============================================================================

/// Verifies repeated dumps of the same value with unchanged options are
/// byte-identical.
#[test]
fn repeated_dumps_are_byte_identical() {
    let node = Rc::new(RefCell::new(Node {
        name: "stable",
        next: None,
    }));
    node.borrow_mut().next = Some(Rc::clone(&node));

    let dumper = Dumper::new();
    assert_eq!(dumper.sdump(&node), dumper.sdump(&node));
}

/// Verifies several values dump in argument order, one block per value.
#[test]
fn dump_all_renders_arguments_in_order() {
    let mut buffer = Vec::new();
    let number = 1_i32;
    let word = "two";
    Dumper::new()
        .dump_all_to(&mut buffer, &[&number as &dyn Dump, &word as &dyn Dump])
        .expect("dump succeeds");

    let text = String::from_utf8(buffer).expect("utf-8");
    assert_eq!(text, "(i32) 1\n(str) (len=3) \"two\"\n");
}
