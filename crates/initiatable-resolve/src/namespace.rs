//! The host namespace that lookup paths and call expressions resolve against.
//!
//! Resolution never evaluates code on its own. Every name it meets is handed
//! to a [`Namespace`], which decides what that name refers to. Whatever the
//! namespace exposes is reachable from markup, including functions that get
//! invoked by call expressions such as `fmt.money(2)`.

use std::fmt;
use std::sync::Arc;

use serde_json::Value as Json;

use crate::value::{Function, Object, Value};

/// Where a name is looked up.
#[derive(Debug, Clone, Copy)]
pub enum Scope<'a> {
    /// The global namespace: the outermost call for a raw value.
    Global,
    /// Members of a value reached by an earlier path segment.
    Member(&'a Value),
}

impl Scope<'_> {
    /// Returns `true` for the global scope.
    pub fn is_global(&self) -> bool {
        matches!(self, Scope::Global)
    }

}

/// Capability for resolving names to live values.
///
/// Only [`global`](Self::global) is required. Member lookup on nested scopes
/// uses [`Value::member`], and calls invoke whatever [`Function`] the lookup
/// returns.
///
/// # Example
///
/// ```
/// use initiatable_resolve::{Namespace, Scope, Value};
///
/// struct Env;
///
/// impl Namespace for Env {
///     fn global(&self, name: &str) -> Value {
///         match name {
///             "pageSize" => Value::from(25),
///             _ => Value::Undefined,
///         }
///     }
/// }
///
/// assert_eq!(Env.lookup(Scope::Global, "pageSize"), Value::from(25));
/// ```
pub trait Namespace {
    /// Looks up a name in the global namespace.
    fn global(&self, name: &str) -> Value;

    /// Receiver for functions called in the global scope.
    fn global_receiver(&self) -> Value {
        Value::Undefined
    }

    /// Looks up `name` in `scope`.
    fn lookup(&self, scope: Scope<'_>, name: &str) -> Value {
        match scope {
            Scope::Global => self.global(name),
            Scope::Member(value) => value.member(name),
        }
    }

    /// Calls `name` in `scope` with literal arguments.
    ///
    /// Returns `Undefined` when the name does not refer to a function.
    fn call(&self, scope: Scope<'_>, name: &str, args: &[Json]) -> Value {
        match self.lookup(scope, name) {
            Value::Function(f) => {
                let receiver = match scope {
                    Scope::Global => self.global_receiver(),
                    Scope::Member(value) => value.clone(),
                };
                f.call(&receiver, args)
            }
            _ => Value::Undefined,
        }
    }

    /// Evaluates a parenthesized function-expression literal.
    ///
    /// The default namespace cannot evaluate source text and returns `None`.
    fn evaluate(&self, _source: &str) -> Option<Value> {
        None
    }
}

impl<N: Namespace + ?Sized> Namespace for &N {
    fn global(&self, name: &str) -> Value {
        (**self).global(name)
    }

    fn global_receiver(&self) -> Value {
        (**self).global_receiver()
    }

    fn lookup(&self, scope: Scope<'_>, name: &str) -> Value {
        (**self).lookup(scope, name)
    }

    fn call(&self, scope: Scope<'_>, name: &str, args: &[Json]) -> Value {
        (**self).call(scope, name, args)
    }

    fn evaluate(&self, source: &str) -> Option<Value> {
        (**self).evaluate(source)
    }
}

impl<N: Namespace + ?Sized> Namespace for Arc<N> {
    fn global(&self, name: &str) -> Value {
        (**self).global(name)
    }

    fn global_receiver(&self) -> Value {
        (**self).global_receiver()
    }

    fn lookup(&self, scope: Scope<'_>, name: &str) -> Value {
        (**self).lookup(scope, name)
    }

    fn call(&self, scope: Scope<'_>, name: &str, args: &[Json]) -> Value {
        (**self).call(scope, name, args)
    }

    fn evaluate(&self, source: &str) -> Option<Value> {
        (**self).evaluate(source)
    }
}

type Evaluator = dyn Fn(&str) -> Option<Value> + Send + Sync;

/// Map-backed global namespace.
///
/// # Example
///
/// ```
/// use initiatable_resolve::{Globals, Object, Resolver, Value};
///
/// let globals = Globals::new()
///     .object("settings", Object::new().with("rows", 50))
///     .function("double", |_this, args| {
///         Value::from(args[0].as_i64().unwrap_or(0) * 2)
///     });
///
/// let resolver = Resolver::new(globals);
/// assert_eq!(resolver.resolve_str("settings.rows"), Value::from(50));
/// assert_eq!(resolver.resolve_str("double(21)"), Value::from(42));
/// ```
#[derive(Clone, Default)]
pub struct Globals {
    root: Object,
    evaluator: Option<Arc<Evaluator>>,
}

impl Globals {
    /// Creates an empty namespace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a namespace from a JSON object. Non-object JSON yields an empty
    /// namespace.
    pub fn from_json(json: Json) -> Self {
        let mut globals = Globals::new();
        if let Json::Object(map) = json {
            for (name, value) in map {
                globals.root.insert(name, Value::from_json(value));
            }
        }
        globals
    }

    /// Registers any value under a global name.
    pub fn value(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.root.insert(name, value);
        self
    }

    /// Registers a host object.
    pub fn object(self, name: impl Into<String>, object: Object) -> Self {
        self.value(name, object)
    }

    /// Registers a function under `name`.
    pub fn function<F>(self, name: &str, body: F) -> Self
    where
        F: Fn(&Value, &[Json]) -> Value + Send + Sync + 'static,
    {
        self.value(name, Function::new(name, body))
    }

    /// Installs the hook used for function-expression literals.
    pub fn evaluator<F>(mut self, evaluate: F) -> Self
    where
        F: Fn(&str) -> Option<Value> + Send + Sync + 'static,
    {
        self.evaluator = Some(Arc::new(evaluate));
        self
    }

    /// The root object holding every global.
    pub fn root(&self) -> &Object {
        &self.root
    }
}

impl Namespace for Globals {
    fn global(&self, name: &str) -> Value {
        self.root.get(name).cloned().unwrap_or_default()
    }

    fn global_receiver(&self) -> Value {
        Value::Object(self.root.clone())
    }

    fn evaluate(&self, source: &str) -> Option<Value> {
        self.evaluator.as_ref().and_then(|evaluate| evaluate(source))
    }
}

impl fmt::Debug for Globals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Globals")
            .field("root", &self.root)
            .field("evaluator", &self.evaluator.is_some())
            .finish()
    }
}
