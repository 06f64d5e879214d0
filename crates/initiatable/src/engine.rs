//! The [`Initiatable`] entry point.

use tracing::{debug, info};

use initiatable_resolve::{Namespace, Resolver};

use crate::builder::ConfigBuilder;
use crate::config::TableConfig;
use crate::discovery::{for_each_match, Selector};
use crate::element::Element;
use crate::error::Result;
use crate::renderer::{check_renderer, CompatibilityWarning, Renderer};
use crate::settings::Settings;

/// Builds configs from markup and initializes tables with a renderer.
///
/// # Example
///
/// ```
/// use initiatable::{Element, Initiatable, RecordingRenderer, Version};
/// use initiatable_resolve::Globals;
///
/// let engine = Initiatable::new(Globals::new());
/// let mut renderer = RecordingRenderer::new(Version::new(1, 10, 0));
///
/// let mut page = Element::new("body").child(
///     Element::new("table")
///         .attr("id", "orders")
///         .attr("data-role", "datatable")
///         .attr("data-dt_paging", "false"),
/// );
///
/// let handles = engine.initialize_all(&mut page, &mut renderer).unwrap();
/// assert_eq!(handles.len(), 1);
///
/// // The marker is gone, so a second pass finds nothing.
/// assert!(engine.initialize_all(&mut page, &mut renderer).unwrap().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Initiatable<N> {
    resolver: Resolver<N>,
    settings: Settings,
}

impl<N: Namespace> Initiatable<N> {
    /// Creates an engine resolving names against `namespace`.
    pub fn new(namespace: N) -> Self {
        Initiatable {
            resolver: Resolver::new(namespace),
            settings: Settings::default(),
        }
    }

    /// Replaces the settings.
    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Current settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The value resolver.
    pub fn resolver(&self) -> &Resolver<N> {
        &self.resolver
    }

    /// A config builder using this engine's resolver and settings.
    pub fn builder(&self) -> ConfigBuilder<'_, N> {
        ConfigBuilder::new(&self.resolver, &self.settings)
    }

    /// Builds the config for `table` without initializing anything.
    pub fn build_config(&self, table: &Element) -> TableConfig {
        self.builder().build(table)
    }

    /// Runs the startup renderer check against the configured minimum.
    pub fn check_renderer<R: Renderer + ?Sized>(
        &self,
        renderer: &R,
    ) -> Option<CompatibilityWarning> {
        check_renderer(renderer, self.settings.min_renderer_version)
    }

    /// Initializes one element.
    ///
    /// Builds the config, hands it to the renderer and removes the marker
    /// attribute so discovery won't pick the element up again.
    pub fn initialize<R: Renderer + ?Sized>(
        &self,
        element: &mut Element,
        renderer: &mut R,
    ) -> Result<R::Handle> {
        let config = self.build_config(element);
        let handle = renderer.initialize(element, &config)?;
        element.attributes.remove(&self.settings.marker_attribute);
        debug!(
            tag = %element.tag,
            id = element.id().unwrap_or_default(),
            options = config.keys().len(),
            "table initialized"
        );
        Ok(handle)
    }

    /// Initializes each given element in order.
    pub fn initialize_each<'e, R: Renderer + ?Sized>(
        &self,
        elements: impl IntoIterator<Item = &'e mut Element>,
        renderer: &mut R,
    ) -> Result<Vec<R::Handle>> {
        elements
            .into_iter()
            .map(|el| self.initialize(el, &mut *renderer))
            .collect()
    }

    /// Discovers marked elements under `root` (inclusive) and initializes
    /// them in document order.
    pub fn initialize_all<R: Renderer + ?Sized>(
        &self,
        root: &mut Element,
        renderer: &mut R,
    ) -> Result<Vec<R::Handle>> {
        self.initialize_matching(root, &self.settings.selector(), renderer)
    }

    /// Like [`initialize_all`](Self::initialize_all) with a custom selector.
    pub fn initialize_matching<R: Renderer + ?Sized>(
        &self,
        root: &mut Element,
        selector: &Selector,
        renderer: &mut R,
    ) -> Result<Vec<R::Handle>> {
        let mut handles = Vec::new();
        for_each_match(root, selector, &mut |el: &mut Element| -> Result<()> {
            handles.push(self.initialize(el, &mut *renderer)?);
            Ok(())
        })?;
        info!(%selector, count = handles.len(), "discovery finished");
        Ok(handles)
    }
}
