//! Page-level wiring.
//!
//! A [`Bootstrap`] owns an engine and a renderer. On construction it runs the
//! renderer check; [`ready`](Bootstrap::ready) initializes every marked table
//! in a document and [`raise`](Bootstrap::raise) handles the `initialize`
//! event for content added later.

use tracing::debug;

use initiatable_resolve::Namespace;

use crate::element::Element;
use crate::engine::Initiatable;
use crate::error::Result;
use crate::renderer::{CompatibilityWarning, Renderer};

/// Event that asks for tables under its target to be initialized.
pub const INITIALIZE_EVENT: &str = "initialize";

/// An engine paired with the renderer it drives.
#[derive(Debug)]
pub struct Bootstrap<N, R> {
    engine: Initiatable<N>,
    renderer: R,
    warning: Option<CompatibilityWarning>,
}

impl<N: Namespace, R: Renderer> Bootstrap<N, R> {
    /// Pairs `engine` with `renderer`, checking the renderer version.
    pub fn new(engine: Initiatable<N>, renderer: R) -> Self {
        let warning = engine.check_renderer(&renderer);
        Bootstrap {
            engine,
            renderer,
            warning,
        }
    }

    /// The startup warning, if the renderer check failed.
    pub fn warning(&self) -> Option<&CompatibilityWarning> {
        self.warning.as_ref()
    }

    /// Initializes every marked table in `document`.
    pub fn ready(&mut self, document: &mut Element) -> Result<Vec<R::Handle>> {
        self.engine.initialize_all(document, &mut self.renderer)
    }

    /// Handles an event raised on `target`.
    ///
    /// For [`INITIALIZE_EVENT`] the marked tables under `target` (itself
    /// included) are initialized. Other events are ignored.
    pub fn raise(&mut self, event: &str, target: &mut Element) -> Result<Vec<R::Handle>> {
        if event != INITIALIZE_EVENT {
            debug!(event, "ignoring event");
            return Ok(Vec::new());
        }
        self.engine.initialize_all(target, &mut self.renderer)
    }

    /// The engine building configs.
    pub fn engine(&self) -> &Initiatable<N> {
        &self.engine
    }

    /// The renderer being driven.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Mutable access to the renderer.
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Consumes the bootstrap, returning the renderer.
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{InstanceId, RecordingRenderer};
    use crate::version::Version;
    use initiatable_resolve::Globals;

    fn marked(id: &str) -> Element {
        Element::new("table")
            .attr("id", id)
            .attr("data-role", "datatable")
    }

    fn bootstrap() -> Bootstrap<Globals, RecordingRenderer> {
        Bootstrap::new(
            Initiatable::new(Globals::new()),
            RecordingRenderer::new(Version::new(1, 10, 0)),
        )
    }

    #[test]
    fn ready_initializes_document() {
        let mut b = bootstrap();
        let mut doc = Element::new("body").children([marked("a"), marked("b")]);
        assert_eq!(b.ready(&mut doc).unwrap(), [InstanceId(0), InstanceId(1)]);
        assert!(b.warning().is_none());
    }

    #[test]
    fn initialize_event_is_scoped_to_target() {
        let mut b = bootstrap();
        let mut outside = marked("outside");
        let mut panel = Element::new("div").child(marked("inside"));

        assert_eq!(b.raise(INITIALIZE_EVENT, &mut panel).unwrap().len(), 1);
        assert!(b.renderer().instance("inside").is_some());
        assert!(b.renderer().instance("outside").is_none());

        // target itself counts
        assert_eq!(b.raise(INITIALIZE_EVENT, &mut outside).unwrap().len(), 1);
    }

    #[test]
    fn other_events_are_ignored() {
        let mut b = bootstrap();
        let mut panel = Element::new("div").child(marked("inside"));
        assert!(b.raise("click", &mut panel).unwrap().is_empty());
        assert!(b.renderer().instances().is_empty());
    }

    #[test]
    fn missing_renderer_warns_but_runs() {
        let mut b = Bootstrap::new(Initiatable::new(Globals::new()), RecordingRenderer::unversioned());
        assert!(matches!(b.warning(), Some(CompatibilityWarning::Missing { .. })));
        let mut doc = Element::new("body").child(marked("a"));
        assert_eq!(b.ready(&mut doc).unwrap().len(), 1);
    }
}
