//! The external table renderer.
//!
//! The renderer is a black box: it receives an element and its config and
//! hands back a handle the core never inspects. [`check_renderer`] is the
//! startup precondition; it warns but never stops anything.

use std::fmt;

use tracing::{debug, warn};

use crate::config::TableConfig;
use crate::element::Element;
use crate::error::RendererError;
use crate::version::Version;

/// A table-rendering component.
pub trait Renderer {
    /// Handle returned for an initialized table.
    type Handle;

    /// Reported version, or `None` when the renderer isn't loaded.
    fn version(&self) -> Option<Version>;

    /// Initializes `element` with `config`.
    ///
    /// The element is mutable so a renderer can leave state on it, the way
    /// it would on a DOM node, and recognise it on a later call.
    fn initialize(
        &mut self,
        element: &mut Element,
        config: &TableConfig,
    ) -> Result<Self::Handle, RendererError>;
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    type Handle = R::Handle;

    fn version(&self) -> Option<Version> {
        (**self).version()
    }

    fn initialize(
        &mut self,
        element: &mut Element,
        config: &TableConfig,
    ) -> Result<Self::Handle, RendererError> {
        (**self).initialize(element, config)
    }
}

/// Why a renderer failed the startup check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompatibilityWarning {
    /// No renderer version could be read.
    Missing { required: Version },
    /// The renderer is older than required.
    Outdated { found: Version, required: Version },
}

impl fmt::Display for CompatibilityWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompatibilityWarning::Missing { required } => write!(
                f,
                "Warning: initiatable requires DataTables {} or newer - www.datatables.net/download",
                required
            ),
            CompatibilityWarning::Outdated { found, required } => write!(
                f,
                "Warning: initiatable requires DataTables {} or newer (found {}) - www.datatables.net/download",
                required, found
            ),
        }
    }
}

/// Checks that `renderer` is present and at least `required`.
///
/// A failed check is logged and returned; callers carry on regardless.
pub fn check_renderer<R: Renderer + ?Sized>(
    renderer: &R,
    required: Version,
) -> Option<CompatibilityWarning> {
    let warning = match renderer.version() {
        None => CompatibilityWarning::Missing { required },
        Some(found) if found < required => CompatibilityWarning::Outdated { found, required },
        Some(found) => {
            debug!(%found, %required, "renderer version ok");
            return None;
        }
    };
    warn!("{}", warning);
    Some(warning)
}

/// Identifies one instance created by a [`RecordingRenderer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InstanceId(pub usize);

/// A live table instance held by a [`RecordingRenderer`].
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    pub id: InstanceId,
    /// Element key: its `id` attribute, or a generated one.
    pub key: String,
    pub config: TableConfig,
}

/// Attribute a [`RecordingRenderer`] stamps on elements without an `id`.
pub const INSTANCE_KEY_ATTRIBUTE: &str = "data-instance-key";

/// In-memory renderer that records what it was asked to do.
///
/// One instance is kept per element key: the `id` attribute, or a generated
/// key stamped on the element under [`INSTANCE_KEY_ATTRIBUTE`] the first time
/// it is seen. Reinitializing an element replaces its instance when the
/// config asks for `destroy`, and fails otherwise.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    version: Option<Version>,
    instances: Vec<Instance>,
    created: usize,
}

impl RecordingRenderer {
    /// Creates a renderer reporting `version`.
    pub fn new(version: Version) -> Self {
        RecordingRenderer {
            version: Some(version),
            ..Default::default()
        }
    }

    /// Creates a renderer that reports no version.
    pub fn unversioned() -> Self {
        Self::default()
    }

    /// Live instances, oldest first.
    pub fn instances(&self) -> &[Instance] {
        &self.instances
    }

    /// The live instance for an element key.
    pub fn instance(&self, key: &str) -> Option<&Instance> {
        self.instances.iter().find(|i| i.key == key)
    }

    /// Number of instances ever created, replaced ones included.
    pub fn created(&self) -> usize {
        self.created
    }

    fn key_for(&self, element: &mut Element) -> String {
        if let Some(id) = element.id() {
            return id.to_string();
        }
        if let Some(key) = element
            .attributes
            .get(INSTANCE_KEY_ATTRIBUTE)
            .and_then(|v| v.as_str())
        {
            return key.to_string();
        }
        let key = format!("{}-{}", element.tag, self.created);
        element.attributes.set(INSTANCE_KEY_ATTRIBUTE, key.as_str());
        key
    }
}

impl Renderer for RecordingRenderer {
    type Handle = InstanceId;

    fn version(&self) -> Option<Version> {
        self.version
    }

    fn initialize(
        &mut self,
        element: &mut Element,
        config: &TableConfig,
    ) -> Result<InstanceId, RendererError> {
        let key = self.key_for(element);

        if let Some(pos) = self.instances.iter().position(|i| i.key == key) {
            if !config.destroys_existing() {
                return Err(RendererError::AlreadyInitialized { key });
            }
            debug!(%key, "destroying existing instance");
            self.instances.remove(pos);
        }

        let id = InstanceId(self.created);
        self.created += 1;
        self.instances.push(Instance {
            id,
            key,
            config: config.clone(),
        });
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use initiatable_resolve::Value;

    #[test]
    fn check_warns_when_missing_or_old() {
        let required = Version::new(1, 10, 0);
        assert_eq!(
            check_renderer(&RecordingRenderer::unversioned(), required),
            Some(CompatibilityWarning::Missing { required })
        );
        assert_eq!(
            check_renderer(&RecordingRenderer::new(Version::new(1, 9, 4)), required),
            Some(CompatibilityWarning::Outdated {
                found: Version::new(1, 9, 4),
                required
            })
        );
        for ok in [Version::new(1, 10, 0), Version::new(1, 10, 1), Version::new(2, 0, 0)] {
            assert_eq!(check_renderer(&RecordingRenderer::new(ok), required), None);
        }
    }

    #[test]
    fn warning_text_names_required_version() {
        let w = CompatibilityWarning::Missing {
            required: Version::new(1, 10, 0),
        };
        assert!(w.to_string().contains("DataTables 1.10.0 or newer"));
    }

    #[test]
    fn destroy_replaces_instance() {
        let mut r = RecordingRenderer::new(Version::new(1, 10, 0));
        let mut table = Element::new("table").attr("id", "t");
        let config = TableConfig::new();

        r.initialize(&mut table, &config).unwrap();
        r.initialize(&mut table, &config).unwrap();

        assert_eq!(r.instances().len(), 1);
        assert_eq!(r.created(), 2);
        assert_eq!(r.instance("t").map(|i| i.id), Some(InstanceId(1)));
    }

    #[test]
    fn reinit_without_destroy_fails() {
        let mut r = RecordingRenderer::new(Version::new(1, 10, 0));
        let mut table = Element::new("table").attr("id", "t");
        let mut config = TableConfig::new();
        r.initialize(&mut table, &config).unwrap();

        config.insert("destroy", Value::Bool(false));
        assert_eq!(
            r.initialize(&mut table, &config),
            Err(RendererError::AlreadyInitialized { key: "t".into() })
        );
    }

    #[test]
    fn anonymous_element_keeps_its_key() {
        let mut r = RecordingRenderer::new(Version::new(1, 10, 0));
        let mut table = Element::new("table");
        r.initialize(&mut table, &TableConfig::new()).unwrap();
        r.initialize(&mut table, &TableConfig::new()).unwrap();

        assert_eq!(r.instances().len(), 1);
        assert_eq!(
            table.attributes.get(INSTANCE_KEY_ATTRIBUTE),
            Some(&Value::from("table-0"))
        );
    }

    #[test]
    fn distinct_anonymous_elements_get_distinct_keys() {
        let mut r = RecordingRenderer::new(Version::new(1, 10, 0));
        let mut a = Element::new("table");
        let mut b = Element::new("table");
        r.initialize(&mut a, &TableConfig::new()).unwrap();
        r.initialize(&mut b, &TableConfig::new()).unwrap();
        assert_eq!(r.instances().len(), 2);
    }
}
