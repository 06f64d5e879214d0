//! Table and column configuration handed to the renderer.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use initiatable_resolve::Value;

use crate::names::{COLUMNS, DESTROY};

/// Option map keyed by canonical option name, in insertion order.
///
/// Used directly as the per-column configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionMap {
    entries: Vec<(&'static str, Value)>,
}

/// Configuration for one header cell.
pub type ColumnConfig = OptionMap;

impl OptionMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an option, replacing any earlier value in place.
    pub fn insert(&mut self, name: &'static str, value: Value) {
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Removes an option.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        let index = self.entries.iter().position(|(k, _)| *k == name)?;
        Some(self.entries.remove(index).1)
    }

    /// Gets an option by canonical name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v)
    }

    /// Option names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }

    /// Iterates options in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Value)> {
        self.entries.iter().map(|(k, v)| (*k, v))
    }

    /// Returns the number of options.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no options are set.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Converts to plain JSON (functions become their names).
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.iter()
                .map(|(k, v)| (k.to_string(), v.to_json()))
                .collect(),
        )
    }
}

impl Serialize for OptionMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// Table-level configuration.
///
/// Always carries `destroy: true` from construction, so handing it to the
/// renderer twice replaces the first instance instead of stacking a second
/// one on the same element.
#[derive(Debug, Clone, PartialEq)]
pub struct TableConfig {
    options: OptionMap,
    columns: Option<Vec<ColumnConfig>>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl TableConfig {
    /// Creates a config holding only `destroy: true`.
    pub fn new() -> Self {
        let mut options = OptionMap::new();
        options.insert(DESTROY, Value::Bool(true));
        TableConfig {
            options,
            columns: None,
        }
    }

    /// Sets a table option.
    ///
    /// Setting `columns` drops any attached column list; the last write wins.
    pub fn insert(&mut self, name: &'static str, value: Value) {
        if name == COLUMNS {
            self.columns = None;
        }
        self.options.insert(name, value);
    }

    /// Attaches the per-column list. An empty list is not attached.
    pub fn set_columns(&mut self, columns: Vec<ColumnConfig>) {
        if columns.is_empty() {
            return;
        }
        self.options.remove(COLUMNS);
        self.columns = Some(columns);
    }

    /// Gets a table option. The column list is reached through
    /// [`columns`](Self::columns).
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.options.get(name)
    }

    /// The column list, if header cells were found.
    pub fn columns(&self) -> Option<&[ColumnConfig]> {
        self.columns.as_deref()
    }

    /// Table options, without the column list.
    pub fn options(&self) -> &OptionMap {
        &self.options
    }

    /// Every top-level key, `columns` included when attached.
    pub fn keys(&self) -> Vec<&'static str> {
        let mut keys: Vec<_> = self.options.keys().collect();
        if self.columns.is_some() {
            keys.push(COLUMNS);
        }
        keys
    }

    /// Returns `true` if `destroy` is set to `true`.
    pub fn destroys_existing(&self) -> bool {
        self.get(DESTROY).and_then(Value::as_bool).unwrap_or(false)
    }

    /// Converts to plain JSON (functions become their names).
    pub fn to_json(&self) -> serde_json::Value {
        let mut json = self.options.to_json();
        if let (Some(columns), serde_json::Value::Object(map)) = (&self.columns, &mut json) {
            map.insert(
                COLUMNS.to_string(),
                columns.iter().map(OptionMap::to_json).collect(),
            );
        }
        json
    }
}

impl Serialize for TableConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = self.options.len() + usize::from(self.columns.is_some());
        let mut map = serializer.serialize_map(Some(len))?;
        for (k, v) in self.options.iter() {
            map.serialize_entry(k, v)?;
        }
        if let Some(columns) = &self.columns {
            map.serialize_entry(COLUMNS, columns)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_config_is_destroy_only() {
        let config = TableConfig::new();
        assert_eq!(config.keys(), ["destroy"]);
        assert!(config.destroys_existing());
        assert_eq!(config.columns(), None);
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut config = TableConfig::new();
        config.insert("paging", Value::Bool(true));
        config.insert("destroy", Value::Bool(false));
        config.insert("paging", Value::Bool(false));
        assert_eq!(config.keys(), ["destroy", "paging"]);
        assert!(!config.destroys_existing());
    }

    #[test]
    fn empty_column_list_is_not_attached() {
        let mut config = TableConfig::new();
        config.set_columns(Vec::new());
        assert_eq!(config.columns(), None);
        assert_eq!(config.keys(), ["destroy"]);
    }

    #[test]
    fn column_list_replaces_columns_option() {
        let mut config = TableConfig::new();
        config.insert("columns", Value::Json(json!([{"data": "x"}])));

        let mut col = ColumnConfig::new();
        col.insert("data", Value::from("name"));
        config.set_columns(vec![col]);

        assert_eq!(config.get("columns"), None);
        assert_eq!(config.keys(), ["destroy", "columns"]);
        assert_eq!(
            serde_json::to_value(&config).unwrap(),
            json!({"destroy": true, "columns": [{"data": "name"}]})
        );
        assert_eq!(config.to_json(), serde_json::to_value(&config).unwrap());
    }
}
