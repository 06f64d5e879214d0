//! Lookup-path grammar.
//!
//! A path is either a dotted walk (`app.formatters.money`), a call with
//! strict JSON arguments (`pad(2, "0")`), or a plain name. Only the first
//! separator matters at each step; the tail after a dot is parsed again in
//! the next scope.

use serde_json::Value as Json;

/// One step of a lookup path.
#[derive(Debug, Clone, PartialEq)]
pub enum PathExpr<'a> {
    /// `head.tail`: look up `head`, then resolve `tail` inside it.
    Member { head: &'a str, tail: &'a str },
    /// `name(args)`: call `name` with literal arguments.
    ///
    /// `args` is `None` when the argument list is not valid JSON or the
    /// closing parenthesis is missing.
    Call { name: &'a str, args: Option<Vec<Json>> },
    /// A bare name.
    Property(&'a str),
}

impl<'a> PathExpr<'a> {
    /// Parses the first step of `text`.
    ///
    /// Separators at index 0 don't count, so `.5` is a property and `(x)` is
    /// a property too.
    pub fn parse(text: &'a str) -> Self {
        if let Some(dot) = text.find('.').filter(|&i| i > 0) {
            return PathExpr::Member {
                head: &text[..dot],
                tail: &text[dot + 1..],
            };
        }

        if let Some(open) = text.find('(').filter(|&i| i > 0) {
            return PathExpr::Call {
                name: &text[..open],
                args: parse_args(text, open),
            };
        }

        PathExpr::Property(text)
    }
}

fn parse_args(text: &str, open: usize) -> Option<Vec<Json>> {
    let close = text.find(')')?;
    let inner = if close > open { &text[open + 1..close] } else { "" };
    serde_json::from_str(&format!("[{}]", inner)).ok()
}
