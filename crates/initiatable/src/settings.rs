//! Builder settings.
//!
//! Defaults reproduce the stock markup contract:
//!
//! ```text
//! <table data-role="datatable" data-dt_paging="false">
//!        └─ marker ──────────┘ └─ data- + dt_ + option name
//! ```
//!
//! Settings can be built in code or loaded from a YAML/JSON file; missing
//! fields keep their defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::discovery::Selector;
use crate::error::SettingsError;
use crate::version::Version;

/// Oldest renderer release the generated configs are written for.
pub const MIN_RENDERER_VERSION: Version = Version::new(1, 10, 0);

/// Settings for config building and discovery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Attribute prefix that marks the dataset (`data-`).
    pub data_prefix: String,
    /// Dataset key prefix for renderer options (`dt_`).
    pub option_prefix: String,
    /// Tag of elements discovered automatically.
    pub table_tag: String,
    /// Marker attribute flagging elements for discovery; removed after
    /// initialization.
    pub marker_attribute: String,
    /// Value the marker attribute must carry.
    pub marker_value: String,
    /// Minimum renderer version checked at startup.
    pub min_renderer_version: Version,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            data_prefix: "data-".to_string(),
            option_prefix: "dt_".to_string(),
            table_tag: "table".to_string(),
            marker_attribute: "data-role".to_string(),
            marker_value: "datatable".to_string(),
            min_renderer_version: MIN_RENDERER_VERSION,
        }
    }
}

impl Settings {
    /// Creates default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads settings from a `.yaml`, `.yml` or `.json` file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        match ext.as_str() {
            "yaml" | "yml" => Self::from_yaml(&text),
            "json" => Self::from_json(&text),
            other => Err(SettingsError::UnsupportedFormat(other.to_string())),
        }
    }

    /// Parses YAML settings.
    pub fn from_yaml(text: &str) -> Result<Self, SettingsError> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Parses JSON settings.
    pub fn from_json(text: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Sets the dataset key prefix for options.
    pub fn option_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.option_prefix = prefix.into();
        self
    }

    /// Sets the attribute prefix of the dataset.
    pub fn data_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.data_prefix = prefix.into();
        self
    }

    /// Sets the tag of discoverable elements.
    pub fn table_tag(mut self, tag: impl Into<String>) -> Self {
        self.table_tag = tag.into();
        self
    }

    /// Sets the marker attribute and the value it must carry.
    pub fn marker(mut self, attribute: impl Into<String>, value: impl Into<String>) -> Self {
        self.marker_attribute = attribute.into();
        self.marker_value = value.into();
        self
    }

    /// Sets the minimum renderer version.
    pub fn min_renderer_version(mut self, version: Version) -> Self {
        self.min_renderer_version = version;
        self
    }

    /// Selector for automatic discovery.
    pub fn selector(&self) -> Selector {
        Selector::tag(&self.table_tag).with_attr(&self.marker_attribute, &self.marker_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_markup_contract() {
        let s = Settings::default();
        assert_eq!(s.option_prefix, "dt_");
        assert_eq!(s.marker_attribute, "data-role");
        assert_eq!(s.min_renderer_version, Version::new(1, 10, 0));
        assert_eq!(s.selector().to_string(), "table[data-role=\"datatable\"]");
    }

    #[test]
    fn yaml_fills_missing_fields_with_defaults() {
        let s = Settings::from_yaml("option_prefix: tbl_\nmin_renderer_version: \"1.12\"\n").unwrap();
        assert_eq!(s.option_prefix, "tbl_");
        assert_eq!(s.min_renderer_version, Version::new(1, 12, 0));
        assert_eq!(s.table_tag, "table");
    }

    #[test]
    fn loads_by_extension() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"marker_value": "grid"}}"#).unwrap();
        let s = Settings::from_file(file.path()).unwrap();
        assert_eq!(s.marker_value, "grid");

        let other = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        assert!(matches!(
            Settings::from_file(other.path()),
            Err(SettingsError::UnsupportedFormat(ext)) if ext == "toml"
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Settings::from_file("/nonexistent/initiatable.yaml").unwrap_err();
        assert!(matches!(err, SettingsError::Io { .. }));
    }

    #[test]
    fn bad_version_is_rejected() {
        assert!(Settings::from_json(r#"{"min_renderer_version": "one"}"#).is_err());
    }
}
