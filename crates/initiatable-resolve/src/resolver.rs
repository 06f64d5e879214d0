//! The resolution engine.

use tracing::trace;

use crate::namespace::{Namespace, Scope};
use crate::path::PathExpr;
use crate::strategy::Strategy;
use crate::value::Value;

/// Resolves raw attribute values against a [`Namespace`].
///
/// The outermost call tries the literal [`Strategy`] list first and falls
/// back to path resolution in the global scope. Nested calls (the tail of a
/// dotted path) only do path resolution.
///
/// # Example
///
/// ```
/// use initiatable_resolve::{Globals, Object, Resolver, Value};
///
/// let resolver = Resolver::new(
///     Globals::new().object("foo", Object::new().with("bar", 7)),
/// );
///
/// assert_eq!(resolver.resolve_str("FALSE"), Value::Bool(false));
/// assert_eq!(resolver.resolve_str("foo.bar"), Value::from(7));
/// assert!(resolver.resolve_str("abc").is_undefined());
/// assert_eq!(resolver.config_value(&"abc".into()), Value::from("abc"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Resolver<N> {
    namespace: N,
}

impl<N: Namespace> Resolver<N> {
    /// Creates a resolver over `namespace`.
    pub fn new(namespace: N) -> Self {
        Resolver { namespace }
    }

    /// The namespace names are resolved against.
    pub fn namespace(&self) -> &N {
        &self.namespace
    }

    /// Resolves a raw value from the top.
    pub fn resolve(&self, raw: &Value) -> Value {
        self.resolve_in(raw, Scope::Global)
    }

    /// Resolves raw text from the top.
    pub fn resolve_str(&self, raw: &str) -> Value {
        self.resolve_text(raw, Scope::Global)
    }

    /// Resolves `raw` in `scope`.
    ///
    /// Non-string values come back unchanged whatever the scope.
    pub fn resolve_in(&self, raw: &Value, scope: Scope<'_>) -> Value {
        match raw {
            Value::String(text) => self.resolve_text(text, scope),
            other => other.clone(),
        }
    }

    /// Resolves `raw`, falling back to `raw` itself when nothing is found.
    pub fn config_value(&self, raw: &Value) -> Value {
        match self.resolve(raw) {
            Value::Undefined => raw.clone(),
            resolved => resolved,
        }
    }

    fn resolve_text(&self, text: &str, scope: Scope<'_>) -> Value {
        if scope.is_global() {
            if let Some(value) = self.resolve_literal(text) {
                return value;
            }
        }
        self.resolve_path(text, scope)
    }

    fn resolve_literal(&self, text: &str) -> Option<Value> {
        Strategy::ORDER.into_iter().find_map(|strategy| {
            let value = strategy.attempt(text, &self.namespace)?;
            trace!(raw = text, strategy = %strategy, kind = value.kind(), "literal matched");
            // Parsed JSON goes back through the top: a JSON string may itself
            // be a boolean, number or lookup path.
            Some(match strategy {
                Strategy::JsonLiteral => self.resolve(&value),
                _ => value,
            })
        })
    }

    fn resolve_path(&self, text: &str, scope: Scope<'_>) -> Value {
        match PathExpr::parse(text) {
            PathExpr::Member { head, tail } => {
                let next = self.namespace.lookup(scope, head);
                if next.is_object_like() {
                    self.resolve_path(tail, Scope::Member(&next))
                } else {
                    trace!(segment = head, kind = next.kind(), "path stopped");
                    Value::Undefined
                }
            }
            PathExpr::Call {
                name,
                args: Some(args),
            } => self.namespace.call(scope, name, &args),
            PathExpr::Call { name, args: None } => {
                trace!(name, "unparsable call arguments");
                Value::Undefined
            }
            PathExpr::Property(name) => self.namespace.lookup(scope, name),
        }
    }
}
