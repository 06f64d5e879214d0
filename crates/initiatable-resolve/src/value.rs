//! Runtime values produced by resolution.
//!
//! The [`Value`] enum is what a resolved attribute turns into: a literal,
//! structured JSON, or a live reference into the host namespace
//! ([`Function`] or [`Object`]).

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as Json;

/// A resolved value.
///
/// Markup attributes arrive as [`Value::String`]; programmatic callers may
/// pass any other variant, which resolution hands back unchanged.
///
/// # Example
///
/// ```
/// use initiatable_resolve::{Number, Value};
///
/// assert_eq!(Value::from(42), Value::Number(Number::I64(42)));
/// assert_eq!(Value::from("100px").as_str(), Some("100px"));
/// assert!(Value::default().is_undefined());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    /// Nothing was found.
    #[default]
    Undefined,
    /// Explicit JSON `null`.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Numeric value.
    Number(Number),
    /// Text value.
    String(String),
    /// Structured JSON (arrays and objects).
    Json(Json),
    /// Callable reference into the host namespace.
    Function(Function),
    /// Host object reference.
    Object(Object),
}

impl Value {
    /// Converts parsed JSON into a value.
    ///
    /// Scalars map to their dedicated variants; arrays and objects stay
    /// structured as [`Value::Json`].
    pub fn from_json(json: Json) -> Self {
        match json {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Bool(b),
            Json::Number(n) => Value::Number(Number::from_json(&n)),
            Json::String(s) => Value::String(s),
            other => Value::Json(other),
        }
    }

    /// Converts this value to plain JSON.
    ///
    /// Functions become their name, objects become JSON objects and
    /// `Undefined` becomes `null`.
    pub fn to_json(&self) -> Json {
        match self {
            Value::Undefined | Value::Null => Json::Null,
            Value::Bool(b) => Json::Bool(*b),
            Value::Number(n) => n.to_json(),
            Value::String(s) => Json::String(s.clone()),
            Value::Json(j) => j.clone(),
            Value::Function(f) => Json::String(f.name().to_string()),
            Value::Object(o) => Json::Object(
                o.iter()
                    .map(|(k, v)| (k.to_string(), v.to_json()))
                    .collect(),
            ),
        }
    }

    /// Returns `true` if this is `Undefined`.
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// Returns `true` if this is a `String` value.
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns `true` if this is a `Function` value.
    pub fn is_function(&self) -> bool {
        matches!(self, Value::Function(_))
    }

    /// Returns `true` if members can be looked up on this value.
    ///
    /// Host objects, functions and structured JSON qualify. `null` does not.
    pub fn is_object_like(&self) -> bool {
        matches!(
            self,
            Value::Object(_) | Value::Function(_) | Value::Json(Json::Object(_) | Json::Array(_))
        )
    }

    /// Extracts the string value, if present.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Extracts the boolean value, if present.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Extracts the number value, if present.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Extracts the function, if present.
    pub fn as_function(&self) -> Option<&Function> {
        match self {
            Value::Function(f) => Some(f),
            _ => None,
        }
    }

    /// Looks up a member by name.
    ///
    /// Arrays accept decimal indices. Anything without members yields
    /// `Undefined`.
    pub fn member(&self, name: &str) -> Value {
        match self {
            Value::Object(o) => o.get(name).cloned().unwrap_or_default(),
            Value::Function(f) => f.members().get(name).cloned().unwrap_or_default(),
            Value::Json(Json::Object(map)) => map
                .get(name)
                .cloned()
                .map(Value::from_json)
                .unwrap_or_default(),
            Value::Json(Json::Array(items)) => name
                .parse::<usize>()
                .ok()
                .and_then(|i| items.get(i).cloned())
                .map(Value::from_json)
                .unwrap_or_default(),
            _ => Value::Undefined,
        }
    }

    /// Short type label, used in log output.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Json(_) => "json",
            Value::Function(_) => "function",
            Value::Object(_) => "object",
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n.into())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n.into())
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Number(n.into())
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n.into())
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Value::Number(n)
    }
}

impl From<Function> for Value {
    fn from(f: Function) -> Self {
        Value::Function(f)
    }
}

impl From<Object> for Value {
    fn from(o: Object) -> Self {
        Value::Object(o)
    }
}

impl From<Json> for Value {
    fn from(json: Json) -> Self {
        Value::from_json(json)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Undefined | Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => n.serialize(serializer),
            Value::String(s) => serializer.serialize_str(s),
            Value::Json(j) => j.serialize(serializer),
            Value::Function(f) => serializer.serialize_str(f.name()),
            Value::Object(o) => {
                let mut map = serializer.serialize_map(Some(o.len()))?;
                for (k, v) in o.iter() {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Json::deserialize(deserializer).map(Value::from_json)
    }
}

// ============================================================================
// Numbers
// ============================================================================

/// Numeric value.
///
/// Integers keep their precision; everything else is `F64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Signed 64-bit integer.
    I64(i64),
    /// Unsigned 64-bit integer (only for values above `i64::MAX`).
    U64(u64),
    /// 64-bit floating point.
    F64(f64),
}

impl Number {
    /// Converts a parsed JSON number.
    pub fn from_json(n: &serde_json::Number) -> Self {
        if let Some(i) = n.as_i64() {
            Number::I64(i)
        } else if let Some(u) = n.as_u64() {
            Number::U64(u)
        } else {
            Number::F64(n.as_f64().unwrap_or(f64::NAN))
        }
    }

    /// Converts to JSON. Non-finite floats become `null`.
    pub fn to_json(self) -> Json {
        match self {
            Number::I64(n) => Json::from(n),
            Number::U64(n) => Json::from(n),
            Number::F64(n) => serde_json::Number::from_f64(n)
                .map(Json::Number)
                .unwrap_or(Json::Null),
        }
    }

    /// Converts the number to f64.
    pub fn to_f64(self) -> f64 {
        match self {
            Number::I64(n) => n as f64,
            Number::U64(n) => n as f64,
            Number::F64(n) => n,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::I64(n) => write!(f, "{}", n),
            Number::U64(n) => write!(f, "{}", n),
            Number::F64(n) => write!(f, "{}", n),
        }
    }
}

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Number::I64(n) => serializer.serialize_i64(*n),
            Number::U64(n) => serializer.serialize_u64(*n),
            Number::F64(n) => serializer.serialize_f64(*n),
        }
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Self {
        Number::I64(n as i64)
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Number::I64(n)
    }
}

impl From<u64> for Number {
    fn from(n: u64) -> Self {
        match i64::try_from(n) {
            Ok(i) => Number::I64(i),
            Err(_) => Number::U64(n),
        }
    }
}

impl From<f64> for Number {
    fn from(n: f64) -> Self {
        Number::F64(n)
    }
}

// ============================================================================
// Host references
// ============================================================================

/// Ordered member map of a host object.
///
/// Cloning shares the underlying map; builder methods copy on write.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Object {
    members: Arc<BTreeMap<String, Value>>,
}

impl Object {
    /// Creates an empty object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a member, replacing any previous value under that name.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Inserts a member in place.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        Arc::make_mut(&mut self.members).insert(name.into(), value.into());
    }

    /// Gets a member by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.members.get(name)
    }

    /// Iterates members in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.members.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if the object has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

type FunctionBody = dyn Fn(&Value, &[Json]) -> Value + Send + Sync;

/// A callable host function.
///
/// The body receives the receiver it was called on (`Undefined` for
/// globals) and the literal arguments of the call expression. Functions may
/// also carry members, so paths can walk through them.
///
/// # Example
///
/// ```
/// use initiatable_resolve::{Function, Value};
///
/// let add = Function::new("add", |_this, args| {
///     let sum: i64 = args.iter().filter_map(|a| a.as_i64()).sum();
///     Value::from(sum)
/// });
///
/// let result = add.call(&Value::Undefined, &[2.into(), 3.into()]);
/// assert_eq!(result, Value::from(5));
/// ```
#[derive(Clone)]
pub struct Function {
    name: Arc<str>,
    body: Arc<FunctionBody>,
    members: Object,
}

impl Function {
    /// Creates a function from a name and a body.
    pub fn new<F>(name: impl Into<String>, body: F) -> Self
    where
        F: Fn(&Value, &[Json]) -> Value + Send + Sync + 'static,
    {
        let name: String = name.into();
        Function {
            name: Arc::from(name),
            body: Arc::new(body),
            members: Object::new(),
        }
    }

    /// Attaches a member to the function.
    pub fn with_member(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.members.insert(name, value);
        self
    }

    /// The name the function was registered under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Members attached to the function.
    pub fn members(&self) -> &Object {
        &self.members
    }

    /// Invokes the function on `this` with the given arguments.
    pub fn call(&self, this: &Value, args: &[Json]) -> Value {
        (self.body)(this, args)
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.body, &other.body) && self.name == other.name
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("name", &self.name)
            .field("members", &self.members.len())
            .finish()
    }
}
