use std::path::Path;

use freight_models::{FreightConfig, Load, LoadRecord};
use serde_json::Value;

use crate::error::OpsError;

/// Read, parse and validate a TOML business configuration file.
pub fn load_config(path: impl AsRef<Path>) -> Result<FreightConfig, OpsError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)?;
    let config: FreightConfig = toml::from_str(&raw)?;
    config.validate()?;
    tracing::debug!(path = %path.display(), "Loaded freight config");
    Ok(config)
}

fn record_to_load(index: usize, value: Value) -> Result<Load, OpsError> {
    let record: LoadRecord =
        serde_json::from_value(value).map_err(|source| OpsError::Malformed { index, source })?;
    let load_id = record.load_id.clone();
    Load::new(record).map_err(|source| OpsError::Validation {
        index,
        load_id,
        source,
    })
}

/// Parse a single load object or an array of them.
///
/// The batch is all-or-nothing: the first malformed or invalid record fails
/// the call, and its position is reported in the error.
pub fn parse_loads(json: &str) -> Result<Vec<Load>, OpsError> {
    match serde_json::from_str::<Value>(json)? {
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| record_to_load(index, item))
            .collect(),
        object @ Value::Object(_) => Ok(vec![record_to_load(0, object)?]),
        other => Err(OpsError::Input(format!(
            "expected a load object or an array of loads, got {}",
            kind(&other)
        ))),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
