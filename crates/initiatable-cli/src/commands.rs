//! Subcommand implementations.
//!
//! Each command returns plain JSON; printing and encoding happen in `main`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::{json, Value as Json};
use tracing::{debug, warn};

use initiatable::{Bootstrap, Element, Initiatable, RecordingRenderer, Settings, Version};
use initiatable_resolve::{Globals, Value};

use crate::cli::Format;

/// Reads a namespace file, or an empty namespace when none is given.
pub fn load_namespace(path: Option<&Path>) -> Result<Globals> {
    let Some(path) = path else {
        return Ok(Globals::new());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read namespace {}", path.display()))?;
    let json: Json = serde_json::from_str(&text)
        .with_context(|| format!("invalid namespace JSON in {}", path.display()))?;
    if !json.is_object() {
        warn!(path = %path.display(), "namespace is not a JSON object, ignoring");
    }
    Ok(Globals::from_json(json))
}

/// Reads settings, or the defaults when none are given.
pub fn load_settings(path: Option<&Path>) -> Result<Settings> {
    match path {
        Some(path) => Ok(Settings::from_file(path)?),
        None => Ok(Settings::default()),
    }
}

/// Reads an element tree from a JSON file.
pub fn load_document(path: &Path) -> Result<Element> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read document {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("invalid document in {}", path.display()))
}

/// Configs of every table the settings' selector matches.
pub fn config(engine: &Initiatable<Globals>, document: &Element) -> Json {
    let selector = engine.settings().selector();
    let tables: Vec<Json> = selector
        .find(document)
        .into_iter()
        .enumerate()
        .map(|(index, table)| {
            json!({
                "table": table.id().map_or_else(|| index.to_string(), str::to_string),
                "config": engine.build_config(table).to_json(),
            })
        })
        .collect();
    debug!(%selector, count = tables.len(), "configs built");
    Json::Array(tables)
}

/// Resolves one raw value.
pub fn resolve(engine: &Initiatable<Globals>, raw: &str, strict: bool) -> Json {
    let raw = Value::from(raw);
    let value = if strict {
        engine.resolver().resolve(&raw)
    } else {
        engine.resolver().config_value(&raw)
    };
    json!({
        "kind": value.kind(),
        "value": value.to_json(),
    })
}

/// Initializes every marked table and reports what the renderer received.
pub fn init(
    engine: Initiatable<Globals>,
    document: &mut Element,
    renderer_version: &str,
) -> Result<Json> {
    let version: Version = renderer_version
        .parse()
        .with_context(|| format!("invalid renderer version '{}'", renderer_version))?;
    let mut page = Bootstrap::new(engine, RecordingRenderer::new(version));
    let warning = page.warning().map(ToString::to_string);

    page.ready(document)?;

    let instances: Vec<Json> = page
        .renderer()
        .instances()
        .iter()
        .map(|i| json!({"id": i.id.0, "key": i.key, "config": i.config.to_json()}))
        .collect();
    Ok(json!({
        "warning": warning,
        "instances": instances,
    }))
}

/// Encodes `value` in the requested format.
pub fn render(value: &Json, format: Format) -> Result<String> {
    Ok(match format {
        Format::Json => serde_json::to_string_pretty(value)?,
        Format::Yaml => serde_yaml::to_string(value)?,
    })
}
