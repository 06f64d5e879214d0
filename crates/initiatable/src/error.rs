//! Error types for the initiatable crate.
//!
//! Building a config never fails. Errors come from the edges: asking the
//! dispatcher for an operation that doesn't exist, the renderer refusing an
//! element, or a settings file that can't be read.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors from dispatch and initialization.
#[derive(Debug, Error)]
pub enum Error {
    /// The dispatcher was asked for a method it doesn't have.
    #[error("Method {method} does not exist on initiatable")]
    UnknownMethod { method: String },

    /// The renderer failed to initialize an element.
    #[error("renderer failed: {0}")]
    Renderer(#[from] RendererError),
}

impl Error {
    /// Create an unknown-method error.
    pub fn unknown_method(method: impl Into<String>) -> Self {
        Self::UnknownMethod {
            method: method.into(),
        }
    }
}

/// Errors reported by a [`Renderer`](crate::Renderer).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RendererError {
    /// The element already hosts an instance and the config did not ask for
    /// it to be destroyed first.
    #[error("cannot reinitialise table '{key}' without destroy")]
    AlreadyInitialized { key: String },

    /// The renderer rejected the element or its config.
    #[error("cannot initialise <{tag}>: {reason}")]
    Rejected { tag: String, reason: String },
}

/// Errors loading [`Settings`](crate::Settings).
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The settings file could not be read.
    #[error("failed to read settings from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// YAML settings could not be parsed.
    #[error("invalid YAML settings: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON settings could not be parsed.
    #[error("invalid JSON settings: {0}")]
    Json(#[from] serde_json::Error),

    /// The file extension is neither YAML nor JSON.
    #[error("unsupported settings format '{0}' (expected .yaml, .yml or .json)")]
    UnsupportedFormat(String),
}

/// Result type for initiatable operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_method_names_the_method() {
        let err = Error::unknown_method("explode");
        assert_eq!(err.to_string(), "Method explode does not exist on initiatable");
    }

    #[test]
    fn renderer_errors_convert() {
        let err: Error = RendererError::AlreadyInitialized { key: "t1".into() }.into();
        assert!(matches!(err, Error::Renderer(_)));
        assert!(err.to_string().contains("t1"));
    }
}
