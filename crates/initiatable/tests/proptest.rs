//! Property-based tests for config building using proptest.

use initiatable::{is_canonical, option_names, Element, Globals, Initiatable, Value};
use proptest::prelude::*;

// ============================================================================
// Test helpers
// ============================================================================

fn engine() -> Initiatable<Globals> {
    Initiatable::new(Globals::new())
}

fn known_short_name() -> impl Strategy<Value = &'static str> {
    let names: Vec<&'static str> = option_names().map(|(short, _)| short).collect();
    prop::sample::select(names)
}

// Random attribute soup: some prefixed, some not, any casing.
fn attributes() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec(
        (
            prop_oneof![
                "[a-zA-Z_]{1,12}".prop_map(|k| format!("data-dt_{}", k)),
                known_short_name().prop_map(|k| format!("data-dt_{}", k.to_ascii_uppercase())),
                "[a-z-]{1,12}",
            ],
            "[a-z0-9 ]{0,8}",
        ),
        0..12,
    )
}

fn table(attrs: &[(String, String)]) -> Element {
    attrs
        .iter()
        .fold(Element::new("table"), |el, (k, v)| el.attr(k, v.as_str()))
}

proptest! {
    /// Every key written is a canonical option name.
    #[test]
    fn only_canonical_keys(attrs in attributes()) {
        let config = engine().build_config(&table(&attrs));
        for key in config.keys() {
            prop_assert!(is_canonical(key), "unexpected key {}", key);
        }
    }

    /// Destroy is present unless markup sets it explicitly.
    #[test]
    fn destroy_always_present(attrs in attributes()) {
        let config = engine().build_config(&table(&attrs));
        let explicit = attrs.iter().any(|(k, _)| k.eq_ignore_ascii_case("data-dt_destroy"));
        prop_assert!(config.get("destroy").is_some());
        if !explicit {
            prop_assert_eq!(config.get("destroy"), Some(&Value::Bool(true)));
        }
    }

    /// A single recognized key yields exactly destroy plus that option.
    #[test]
    fn single_key_yields_two_entries(short in known_short_name(), raw in "[a-z]{1,8}") {
        prop_assume!(short != "destroy");
        let el = Element::new("table").attr(&format!("data-dt_{}", short), raw.as_str());
        let config = engine().build_config(&el);
        prop_assert_eq!(config.keys().len(), 2);
    }

    /// Building twice gives the same config.
    #[test]
    fn build_is_deterministic(attrs in attributes()) {
        let el = table(&attrs);
        let engine = engine();
        prop_assert_eq!(engine.build_config(&el), engine.build_config(&el));
    }
}
