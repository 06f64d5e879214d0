//! Literal strategies tried on the outermost call.
//!
//! Each [`Strategy`] either matches the raw text and produces a value, or
//! declines with `None` so the next one gets a turn. Declining is silent:
//! malformed input is never an error, it simply isn't that kind of literal.
//!
//! ```text
//! "FALSE"          Boolean         → Bool(false)
//! "42"             Integer         → Number(42)
//! "{'a':1}"        JsonLiteral     → Json({"a":1})
//! "function(){}"   FunctionLiteral → Function (if the namespace can evaluate it)
//! anything else    (none)          → path resolution
//! ```

use serde_json::Value as Json;

use crate::namespace::Namespace;
use crate::value::{Number, Value};

/// A literal form recognized before path resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// `true` / `false`, any casing.
    Boolean,
    /// Canonical integer text.
    Integer,
    /// JSON, with single quotes accepted in place of double quotes.
    JsonLiteral,
    /// A function expression the namespace knows how to evaluate.
    FunctionLiteral,
}

impl Strategy {
    /// Strategies in the order they are attempted.
    pub const ORDER: [Strategy; 4] = [
        Strategy::Boolean,
        Strategy::Integer,
        Strategy::JsonLiteral,
        Strategy::FunctionLiteral,
    ];

    /// Returns the display name of this strategy.
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Boolean => "boolean",
            Strategy::Integer => "integer",
            Strategy::JsonLiteral => "json",
            Strategy::FunctionLiteral => "function-literal",
        }
    }

    /// Attempts this strategy against `text`.
    ///
    /// A `JsonLiteral` match is the parsed value before re-resolution; the
    /// resolver feeds it back through the top-level pass.
    pub fn attempt<N: Namespace>(self, text: &str, namespace: &N) -> Option<Value> {
        match self {
            Strategy::Boolean => parse_boolean(text).map(Value::Bool),
            Strategy::Integer => parse_integer(text).map(Value::Number),
            Strategy::JsonLiteral => parse_json(text).map(Value::from_json),
            Strategy::FunctionLiteral => namespace
                .evaluate(&format!("({})", text))
                .filter(Value::is_function),
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn parse_boolean(text: &str) -> Option<bool> {
    if text.eq_ignore_ascii_case("true") {
        Some(true)
    } else if text.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// Accepts only text JSON would read as an integer: optional `-`, digits,
/// no leading zeros. Anything wider than `u64` is left to the JSON step.
fn parse_integer(text: &str) -> Option<Number> {
    let digits = text.strip_prefix('-').unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if digits.len() > 1 && digits.starts_with('0') {
        return None;
    }
    if let Ok(n) = text.parse::<i64>() {
        return Some(Number::I64(n));
    }
    text.parse::<u64>().ok().map(Number::U64)
}

fn parse_json(text: &str) -> Option<Json> {
    serde_json::from_str(&text.replace('\'', "\"")).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::namespace::Globals;
    use crate::value::Function;
    use serde_json::json;

    #[test]
    fn boolean_is_case_insensitive() {
        assert_eq!(parse_boolean("true"), Some(true));
        assert_eq!(parse_boolean("TRUE"), Some(true));
        assert_eq!(parse_boolean("False"), Some(false));
        assert_eq!(parse_boolean(" true"), None);
        assert_eq!(parse_boolean("yes"), None);
    }

    #[test]
    fn integer_accepts_canonical_text_only() {
        assert_eq!(parse_integer("42"), Some(Number::I64(42)));
        assert_eq!(parse_integer("-7"), Some(Number::I64(-7)));
        assert_eq!(parse_integer("0"), Some(Number::I64(0)));
        assert_eq!(
            parse_integer("18446744073709551615"),
            Some(Number::U64(u64::MAX))
        );
        assert_eq!(parse_integer("007"), None);
        assert_eq!(parse_integer("+5"), None);
        assert_eq!(parse_integer("12px"), None);
        assert_eq!(parse_integer("1.5"), None);
        assert_eq!(parse_integer("-"), None);
        assert_eq!(parse_integer(""), None);
    }

    #[test]
    fn json_normalizes_single_quotes() {
        assert_eq!(parse_json("{'a':1}"), Some(json!({"a": 1})));
        assert_eq!(parse_json("[[0,'desc']]"), Some(json!([[0, "desc"]])));
        assert_eq!(parse_json("1.5"), Some(json!(1.5)));
        assert_eq!(parse_json("{a:1}"), None);
        assert_eq!(parse_json("foo.bar"), None);
    }

    #[test]
    fn function_literal_needs_callable_result() {
        let ns = Globals::new().evaluator(|src| match src {
            "(function(){})" => Some(Value::Function(Function::new("anon", |_, _| Value::Null))),
            "(1)" => Some(Value::from(1)),
            _ => None,
        });
        assert!(Strategy::FunctionLiteral
            .attempt("function(){}", &ns)
            .is_some_and(|v| v.is_function()));
        assert_eq!(Strategy::FunctionLiteral.attempt("1", &ns), None);
        assert_eq!(Strategy::FunctionLiteral.attempt("x", &ns), None);
    }

    #[test]
    fn order_is_fixed() {
        let names: Vec<_> = Strategy::ORDER.iter().map(|s| s.as_str()).collect();
        assert_eq!(names, ["boolean", "integer", "json", "function-literal"]);
    }
}
