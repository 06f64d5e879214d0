//! Builds renderer configs from element attributes.

use tracing::debug;

use initiatable_resolve::{Namespace, Resolver, Value};

use crate::config::{ColumnConfig, OptionMap, TableConfig};
use crate::element::Element;
use crate::names::canonical_name;
use crate::settings::Settings;

/// Turns an element's prefixed dataset entries into a [`TableConfig`].
///
/// ```text
/// <table data-dt_paging="false" data-dt_pagelength="25">
///   <thead><tr>
///     <th data-dt_data="name">          → columns[0] = { data: "name" }
///     <th data-dt_data="app.priceOf">   → columns[1] = { data: <function> }
/// ```
///
/// Every value goes through [`Resolver::config_value`], so anything that
/// doesn't resolve stays as its raw text.
pub struct ConfigBuilder<'a, N> {
    resolver: &'a Resolver<N>,
    settings: &'a Settings,
}

impl<'a, N: Namespace> ConfigBuilder<'a, N> {
    /// Creates a builder.
    pub fn new(resolver: &'a Resolver<N>, settings: &'a Settings) -> Self {
        ConfigBuilder { resolver, settings }
    }

    /// Builds the config for `table`.
    pub fn build(&self, table: &Element) -> TableConfig {
        let mut config = TableConfig::new();
        self.scan(table, |name, value| config.insert(name, value));

        let columns: Vec<ColumnConfig> = table
            .header_cells()
            .into_iter()
            .map(|cell| self.build_column(cell))
            .collect();
        config.set_columns(columns);
        config
    }

    /// Builds the config for one header cell.
    pub fn build_column(&self, cell: &Element) -> ColumnConfig {
        let mut column = OptionMap::new();
        self.scan(cell, |name, value| column.insert(name, value));
        column
    }

    fn scan(&self, element: &Element, mut set: impl FnMut(&'static str, Value)) {
        let data_prefix = self.settings.data_prefix.to_ascii_lowercase();
        let option_prefix = self.settings.option_prefix.to_ascii_lowercase();

        for (key, raw) in element.attributes.with_prefix(&data_prefix) {
            let Some(short) = key.strip_prefix(option_prefix.as_str()) else {
                continue;
            };
            match canonical_name(short) {
                Some(name) => set(name, self.resolver.config_value(raw)),
                None => debug!(tag = %element.tag, option = short, "skipping unknown option"),
            }
        }
    }
}
