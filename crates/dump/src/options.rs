//! crates/dump/src/options.rs
//! Formatting options consulted by the renderer.

use crate::shape::{Field, Shape};
use crate::value::Dump;

/// Formatting options for a [`Dumper`](crate::Dumper).
///
/// Options are plain public fields so callers can adjust them freely between
/// dumps; every field is read at render time.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DumpOptions {
    /// String written once per nesting level in front of each entry line.
    pub indent: String,
    /// Maximum recursion depth; 0 means unlimited.
    pub max_depth: usize,
    /// Consult [`Dump::describe`] hooks instead of structural rendering.
    pub use_hooks: bool,
    /// Fall back to structural rendering when a describe hook fails.
    pub hook_fallback: bool,
    /// Report the numeric address of reference-typed values.
    pub show_addresses: bool,
    /// Report the allocated capacity of resizable containers.
    pub show_capacities: bool,
    /// Sort mapping keys by their natural order before printing.
    pub sort_keys: bool,
    /// Render mapping keys through the dumper instead of plain-printing them.
    pub dump_keys: bool,
}

impl Default for DumpOptions {
    fn default() -> Self {
        Self {
            indent: String::from(" "),
            max_depth: 0,
            use_hooks: true,
            hook_fallback: false,
            show_addresses: true,
            show_capacities: true,
            sort_keys: false,
            dump_keys: false,
        }
    }
}

impl DumpOptions {
    /// Creates options with the documented defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Dump for DumpOptions {
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    fn inspect(&self, visit: &mut dyn FnMut(Shape<'_>)) {
        visit(Shape::Record(vec![
            Field::new("indent", &self.indent),
            Field::new("max_depth", &self.max_depth),
            Field::new("use_hooks", &self.use_hooks),
            Field::new("hook_fallback", &self.hook_fallback),
            Field::new("show_addresses", &self.show_addresses),
            Field::new("show_capacities", &self.show_capacities),
            Field::new("sort_keys", &self.sort_keys),
            Field::new("dump_keys", &self.dump_keys),
        ]));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let options = DumpOptions::default();

        assert_eq!(options.indent, " ");
        assert_eq!(options.max_depth, 0);
        assert!(options.use_hooks);
        assert!(!options.hook_fallback);
        assert!(options.show_addresses);
        assert!(options.show_capacities);
        assert!(!options.sort_keys);
        assert!(!options.dump_keys);
    }

    #[test]
    fn new_equals_default() {
        assert_eq!(DumpOptions::new(), DumpOptions::default());
    }

    #[test]
    fn options_dump_as_a_record() {
        let options = DumpOptions::default();
        let text = crate::sdump(&options);

        let string_name = std::any::type_name::<String>();
        assert!(text.contains(&format!("indent: ({string_name}) (len=1) \" \"")));
        assert!(text.contains("max_depth: (usize) 0"));
        assert!(text.contains("sort_keys: (bool) false"));
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn options_serde_round_trip() {
            let mut options = DumpOptions::default();
            options.indent = String::from("\t");
            options.max_depth = 4;
            options.sort_keys = true;

            let json = serde_json::to_string(&options).expect("serialize");
            let decoded: DumpOptions = serde_json::from_str(&json).expect("deserialize");

            assert_eq!(options, decoded);
        }
    }
}
