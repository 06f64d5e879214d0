//! Declarative table initialization from markup attributes.
//!
//! Tables opt in with a marker attribute and describe their renderer options
//! as prefixed data attributes. This crate finds those tables, turns the
//! attributes into a [`TableConfig`] and hands it to a [`Renderer`].
//!
//! # Quick Start
//!
//! ```rust
//! use initiatable::{Bootstrap, Element, Initiatable, RecordingRenderer, Version};
//! use initiatable_resolve::{Globals, Object, Value};
//!
//! let globals = Globals::new().object("app", Object::new().with("rows", 25));
//! let mut page = Bootstrap::new(
//!     Initiatable::new(globals),
//!     RecordingRenderer::new(Version::new(1, 10, 0)),
//! );
//!
//! let mut document = Element::new("body").child(
//!     Element::new("table")
//!         .attr("id", "orders")
//!         .attr("data-role", "datatable")
//!         .attr("data-dt_pagelength", "app.rows")
//!         .attr("data-dt_scrolly", "200px"),
//! );
//!
//! page.ready(&mut document).unwrap();
//!
//! let config = &page.renderer().instance("orders").unwrap().config;
//! assert_eq!(config.get("destroy"), Some(&Value::Bool(true)));
//! assert_eq!(config.get("pageLength"), Some(&Value::from(25)));
//! assert_eq!(config.get("scrollY"), Some(&Value::from("200px")));
//! ```
//!
//! # Architecture
//!
//! ```text
//! Bootstrap
//! ├── ready / raise("initialize")  → discovery (Selector)
//! └── Initiatable
//!     ├── ConfigBuilder            → attributes → TableConfig
//!     │   ├── names                → short name → canonical name
//!     │   └── Resolver             → raw text → Value
//!     └── Renderer                 → TableConfig → handle
//! ```
//!
//! Value resolution lives in the `initiatable-resolve` crate; its main types
//! are re-exported here.

mod bootstrap;
mod builder;
mod config;
mod discovery;
mod dispatch;
mod element;
mod engine;
mod error;
mod names;
mod renderer;
mod settings;
mod version;

// Re-export public API
pub use bootstrap::{Bootstrap, INITIALIZE_EVENT};
pub use builder::ConfigBuilder;
pub use config::{ColumnConfig, OptionMap, TableConfig};
pub use discovery::Selector;
pub use dispatch::{Invocation, Method, Outcome};
pub use element::{AttributeBag, Element};
pub use engine::Initiatable;
pub use error::{Error, RendererError, Result, SettingsError};
pub use names::{canonical_name, is_canonical, option_names, COLUMNS, DESTROY};
pub use renderer::{
    check_renderer, CompatibilityWarning, Instance, InstanceId, RecordingRenderer, Renderer,
    INSTANCE_KEY_ATTRIBUTE,
};
pub use settings::{Settings, MIN_RENDERER_VERSION};
pub use version::{ParseVersionError, Version};

// Resolver types used throughout the API
pub use initiatable_resolve::{Globals, Namespace, Resolver, Scope, Value};
