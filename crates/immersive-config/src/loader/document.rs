//! Decode raw settings text into a flat key-value map.

use immersive_common::ConfigError;
use serde_json::{Map, Value};

use crate::source::{RawSettings, SettingsFormat};

/// Parse the document container. The top level must be a table.
pub(super) fn decode(raw: &RawSettings) -> Result<Map<String, Value>, ConfigError> {
    let value = match raw.format {
        SettingsFormat::Toml => {
            let table: toml::Table = toml::from_str(text(raw)?).map_err(|e| {
                ConfigError::ParseError(format!("failed to parse TOML in {}: {e}", raw.origin))
            })?;
            serde_json::to_value(table).map_err(|e| {
                ConfigError::ParseError(format!("unsupported value in {}: {e}", raw.origin))
            })?
        }
        SettingsFormat::Json => serde_json::from_str(text(raw)?).map_err(|e| {
            ConfigError::ParseError(format!("failed to parse JSON in {}: {e}", raw.origin))
        })?,
        SettingsFormat::Plist => {
            let plist: plist::Value = plist::from_bytes(&raw.content).map_err(|e| {
                ConfigError::ParseError(format!("failed to parse plist in {}: {e}", raw.origin))
            })?;
            serde_json::to_value(plist).map_err(|e| {
                ConfigError::ParseError(format!("unsupported value in {}: {e}", raw.origin))
            })?
        }
    };

    match value {
        Value::Object(map) => Ok(map),
        other => Err(ConfigError::ParseError(format!(
            "expected a table at the top of {}, found {}",
            raw.origin,
            kind_of(&other)
        ))),
    }
}

fn text(raw: &RawSettings) -> Result<&str, ConfigError> {
    std::str::from_utf8(&raw.content)
        .map_err(|e| ConfigError::ParseError(format!("{} is not valid UTF-8: {e}", raw.origin)))
}

/// Short name of a JSON value's type, for diagnostics.
pub(super) fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "table",
    }
}
