//! Resolve - turns markup attribute text into live configuration values.
//!
//! HTML attributes only carry text. This crate decides what a piece of text
//! stands for and produces the matching [`Value`]:
//!
//! - Literals: booleans (any casing), integers, JSON (single quotes allowed)
//! - Function-expression literals, if the host [`Namespace`] can evaluate them
//! - Dotted lookup paths into the host namespace (`app.render.money`)
//! - Call expressions with literal JSON arguments (`pad(2, "0")`)
//! - Plain names of host functions or objects
//!
//! # Quick Start
//!
//! ```rust
//! use initiatable_resolve::{Globals, Object, Resolver, Value};
//!
//! let globals = Globals::new()
//!     .object("foo", Object::new().with("bar", 7))
//!     .function("add", |_this, args| {
//!         Value::from(args.iter().filter_map(|a| a.as_i64()).sum::<i64>())
//!     });
//!
//! let resolver = Resolver::new(globals);
//!
//! assert_eq!(resolver.resolve_str("true"), Value::Bool(true));
//! assert_eq!(resolver.resolve_str("42"), Value::from(42));
//! assert_eq!(resolver.resolve_str("foo.bar"), Value::from(7));
//! assert_eq!(resolver.resolve_str("add(2,3)"), Value::from(5));
//!
//! // Nothing matched: config_value hands back the raw text.
//! assert_eq!(resolver.config_value(&"100px".into()), Value::from("100px"));
//! ```
//!
//! # Resolution Order
//!
//! ```text
//! raw value
//! ├── not a string          → returned unchanged
//! ├── Strategy::Boolean     → Bool
//! ├── Strategy::Integer     → Number
//! ├── Strategy::JsonLiteral → parsed, then resolved again from the top
//! ├── Strategy::FunctionLiteral → Function
//! └── path resolution (global scope)
//!     ├── head.tail   → look up head, resolve tail inside it
//!     ├── name(args)  → call name with JSON args
//!     └── name        → look up name
//! ```
//!
//! Literal strategies only run on the outermost call. Every step that does
//! not apply is skipped silently; resolution never fails, it yields
//! [`Value::Undefined`] at worst.
//!
//! # Trust
//!
//! Call expressions invoke whatever function the namespace returns for the
//! name. Markup can reach everything the namespace exposes.

mod namespace;
mod path;
mod resolver;
mod strategy;
mod value;

// Re-export public API
pub use namespace::{Globals, Namespace, Scope};
pub use path::PathExpr;
pub use resolver::Resolver;
pub use strategy::Strategy;
pub use value::{Function, Number, Object, Value};
