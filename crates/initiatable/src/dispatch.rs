//! Generic entry point.
//!
//! Callers can ask for one of a closed set of [`Method`]s by name instead of
//! calling the engine directly. With no method (an empty name or an options
//! object included) the element is initialized; an unknown name is an error
//! naming it.
//!
//! | Name | Operation |
//! |------|-----------|
//! | `getValueFromString` | [`Resolver::resolve`](initiatable_resolve::Resolver::resolve) on the first argument |
//! | `getConfigValue` | [`Resolver::config_value`](initiatable_resolve::Resolver::config_value) on the first argument |
//! | `getDataTableConfig` | [`Initiatable::build_config`] |
//! | `initializeDataTable` | [`Initiatable::initialize`] |

use std::fmt;
use std::str::FromStr;

use serde_json::{Map, Value as Json};
use tracing::debug;

use initiatable_resolve::{Namespace, Value};

use crate::config::TableConfig;
use crate::element::Element;
use crate::engine::Initiatable;
use crate::error::{Error, Result};
use crate::renderer::Renderer;

/// Operations reachable through [`Initiatable::dispatch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Resolve a raw value.
    GetValueFromString,
    /// Resolve a raw value, keeping it when nothing is found.
    GetConfigValue,
    /// Build the config without initializing.
    GetDataTableConfig,
    /// Build the config and initialize.
    InitializeDataTable,
}

impl Method {
    /// Every method, in table order.
    pub const ALL: [Method; 4] = [
        Method::GetValueFromString,
        Method::GetConfigValue,
        Method::GetDataTableConfig,
        Method::InitializeDataTable,
    ];

    /// The name callers use for this method.
    pub fn as_str(self) -> &'static str {
        match self {
            Method::GetValueFromString => "getValueFromString",
            Method::GetConfigValue => "getConfigValue",
            Method::GetDataTableConfig => "getDataTableConfig",
            Method::InitializeDataTable => "initializeDataTable",
        }
    }
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Method::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| Error::unknown_method(s))
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How the generic entry point was called.
#[derive(Debug, Clone, PartialEq)]
pub enum Invocation {
    /// No argument: initialize.
    Default,
    /// An options object instead of a method name: initialize. The options
    /// are not merged; markup is the only source of configuration.
    Options(Map<String, Json>),
    /// A method name with its arguments.
    Named { method: String, args: Vec<Value> },
}

impl Invocation {
    /// Names a method with arguments.
    pub fn named(method: impl Into<String>, args: impl IntoIterator<Item = Value>) -> Self {
        Invocation::Named {
            method: method.into(),
            args: args.into_iter().collect(),
        }
    }
}

/// What a dispatched operation produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<H> {
    /// A resolved value.
    Value(Value),
    /// A config built without initializing.
    Config(TableConfig),
    /// The renderer's handle for an initialized element.
    Handle(H),
}

impl<H> Outcome<H> {
    /// The value, if this outcome is one.
    pub fn into_value(self) -> Option<Value> {
        match self {
            Outcome::Value(v) => Some(v),
            _ => None,
        }
    }

    /// The config, if this outcome is one.
    pub fn into_config(self) -> Option<TableConfig> {
        match self {
            Outcome::Config(c) => Some(c),
            _ => None,
        }
    }

    /// The handle, if this outcome is one.
    pub fn into_handle(self) -> Option<H> {
        match self {
            Outcome::Handle(h) => Some(h),
            _ => None,
        }
    }
}

impl<N: Namespace> Initiatable<N> {
    /// Runs the operation `invocation` asks for on `element`.
    pub fn dispatch<R: Renderer + ?Sized>(
        &self,
        element: &mut Element,
        renderer: &mut R,
        invocation: Invocation,
    ) -> Result<Outcome<R::Handle>> {
        let (method, args) = match invocation {
            Invocation::Default => (Method::InitializeDataTable, Vec::new()),
            Invocation::Options(options) => {
                debug!(ignored = options.len(), "options object passed, initializing");
                (Method::InitializeDataTable, Vec::new())
            }
            Invocation::Named { method, .. } if method.is_empty() => {
                (Method::InitializeDataTable, Vec::new())
            }
            Invocation::Named { method, args } => (method.parse()?, args),
        };

        let first = args.into_iter().next().unwrap_or_default();
        Ok(match method {
            Method::GetValueFromString => Outcome::Value(self.resolver().resolve(&first)),
            Method::GetConfigValue => Outcome::Value(self.resolver().config_value(&first)),
            Method::GetDataTableConfig => Outcome::Config(self.build_config(element)),
            Method::InitializeDataTable => Outcome::Handle(self.initialize(element, renderer)?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{InstanceId, RecordingRenderer};
    use crate::version::Version;
    use initiatable_resolve::{Globals, Object};

    fn setup() -> (Initiatable<Globals>, RecordingRenderer, Element) {
        let engine = Initiatable::new(Globals::new().object("opts", Object::new().with("rows", 10)));
        let renderer = RecordingRenderer::new(Version::new(1, 10, 0));
        let table = Element::new("table")
            .attr("id", "t")
            .attr("data-role", "datatable")
            .attr("data-dt_pagelength", "opts.rows");
        (engine, renderer, table)
    }

    #[test]
    fn method_names_round_trip() {
        for m in Method::ALL {
            assert_eq!(m.as_str().parse::<Method>().unwrap(), m);
        }
    }

    #[test]
    fn default_and_options_initialize() {
        let (engine, mut r, mut table) = setup();
        let out = engine.dispatch(&mut table, &mut r, Invocation::Default).unwrap();
        assert_eq!(out, Outcome::Handle(InstanceId(0)));

        let out = engine
            .dispatch(&mut table, &mut r, Invocation::Options(Map::new()))
            .unwrap();
        assert_eq!(out, Outcome::Handle(InstanceId(1)));
        assert_eq!(r.instances().len(), 1);
    }

    #[test]
    fn empty_method_name_initializes() {
        let (engine, mut r, mut table) = setup();
        let out = engine
            .dispatch(&mut table, &mut r, Invocation::named("", []))
            .unwrap();
        assert_eq!(out, Outcome::Handle(InstanceId(0)));
        assert!(r.instance("t").is_some());
    }

    #[test]
    fn config_only_leaves_element_alone() {
        let (engine, mut r, mut table) = setup();
        let out = engine
            .dispatch(&mut table, &mut r, Invocation::named("getDataTableConfig", []))
            .unwrap();
        let config = out.into_config().unwrap();
        assert_eq!(config.get("pageLength"), Some(&Value::from(10)));
        assert!(r.instances().is_empty());
        assert!(table.attributes.get("data-role").is_some());
    }

    #[test]
    fn value_methods_use_first_argument() {
        let (engine, mut r, mut table) = setup();
        let resolve = |method: &str, raw: &str, table: &mut Element, r: &mut RecordingRenderer| {
            engine
                .dispatch(table, r, Invocation::named(method, [Value::from(raw)]))
                .unwrap()
                .into_value()
                .unwrap()
        };
        assert_eq!(resolve("getValueFromString", "opts.rows", &mut table, &mut r), Value::from(10));
        assert!(resolve("getValueFromString", "nope", &mut table, &mut r).is_undefined());
        assert_eq!(resolve("getConfigValue", "nope", &mut table, &mut r), Value::from("nope"));

        let out = engine
            .dispatch(&mut table, &mut r, Invocation::named("getValueFromString", []))
            .unwrap();
        assert_eq!(out, Outcome::Value(Value::Undefined));
    }

    #[test]
    fn unknown_method_is_reported() {
        let (engine, mut r, mut table) = setup();
        let err = engine
            .dispatch(&mut table, &mut r, Invocation::named("explode", []))
            .unwrap_err();
        assert_eq!(err.to_string(), "Method explode does not exist on initiatable");
        assert!(r.instances().is_empty());
    }
}
