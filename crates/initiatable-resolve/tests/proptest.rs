//! Property-based tests for resolution using proptest.

use initiatable_resolve::{Globals, Number, Object, Resolver, Value};
use proptest::prelude::*;

fn resolver() -> Resolver<Globals> {
    Resolver::new(Globals::new().object("foo", Object::new().with("bar", 7)))
}

proptest! {
    /// Any integer printed canonically resolves to itself.
    #[test]
    fn integers_round_trip(n in any::<i64>()) {
        prop_assert_eq!(resolver().resolve_str(&n.to_string()), Value::Number(Number::I64(n)));
    }

    /// Booleans resolve whatever the casing.
    #[test]
    fn booleans_any_case(b in any::<bool>(), mask in prop::collection::vec(any::<bool>(), 5)) {
        let text: String = b
            .to_string()
            .chars()
            .zip(mask.iter())
            .map(|(c, upper)| if *upper { c.to_ascii_uppercase() } else { c })
            .collect();
        prop_assert_eq!(resolver().resolve_str(&text), Value::Bool(b));
    }

    /// config_value never loses information: it is never Undefined for text.
    #[test]
    fn config_value_never_undefined(text in ".{0,24}") {
        let value = resolver().config_value(&Value::from(text.as_str()));
        prop_assert!(!value.is_undefined());
    }

    /// Plain lowercase identifiers that are not globals come back as-is.
    #[test]
    fn unknown_identifiers_keep_raw(name in "[a-z]{4,12}") {
        prop_assume!(name != "true" && name != "false" && name != "null");
        let raw = Value::from(name.as_str());
        prop_assert_eq!(resolver().config_value(&raw), raw);
    }

    /// Non-string values pass through unchanged.
    #[test]
    fn non_strings_pass_through(n in any::<i64>(), b in any::<bool>()) {
        let r = resolver();
        prop_assert_eq!(r.resolve(&Value::from(n)), Value::from(n));
        prop_assert_eq!(r.resolve(&Value::Bool(b)), Value::Bool(b));
    }
}
