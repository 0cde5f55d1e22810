//! Settings loading with per-key fallback to defaults.
//!
//! A missing or unparsable document leaves every default in place. A
//! recognized key with a bad value only loses that one key.

mod document;


use immersive_common::ConfigError;
use serde_json::{Map, Value};
use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::colors::parse_hex_color;
use crate::schema::{
    ImmersiveConfig, ProjectionQuality, KEY_PROJECTION_QUALITY, KEY_SCRUBBER_TINT,
};
use crate::source::{RawSettings, SettingsSource};

use document::{decode, kind_of};

/// Load settings, degrading to defaults on any failure.
pub fn load(source: &dyn SettingsSource) -> ImmersiveConfig {
    match try_load(source) {
        Ok(config) => config,
        Err(ConfigError::FileNotFound(_)) => {
            info!(
                "no settings at {}, loaded with default configuration",
                source.describe()
            );
            ImmersiveConfig::default()
        }
        Err(e) => {
            warn!("{e}; loaded with default configuration");
            ImmersiveConfig::default()
        }
    }
}

/// Load settings, surfacing document-level failures.
///
/// Individual bad values are still skipped with a warning.
pub fn try_load(source: &dyn SettingsSource) -> Result<ImmersiveConfig, ConfigError> {
    let raw = source
        .fetch()?
        .ok_or_else(|| ConfigError::FileNotFound(PathBuf::from(source.describe())))?;
    let origin = raw.origin.clone();
    let config = parse_settings(&raw)?;
    info!("loaded custom configuration from {origin}");
    Ok(config)
}

/// Parse a settings document on top of the defaults.
pub fn parse_settings(raw: &RawSettings) -> Result<ImmersiveConfig, ConfigError> {
    let entries = decode(raw)?;
    let mut config = ImmersiveConfig::default();
    for rejected in apply_entries(&mut config, &entries) {
        warn!("{rejected}; keeping default");
    }
    Ok(config)
}

/// Apply every recognized key, returning the values that were rejected.
pub fn apply_entries(
    config: &mut ImmersiveConfig,
    entries: &Map<String, Value>,
) -> Vec<ConfigError> {
    let mut rejected = Vec::new();

    for (key, value) in entries {
        let outcome = match key.as_str() {
            KEY_SCRUBBER_TINT => expect_str(key, value)
                .and_then(|s| parse_hex_color(s).map_err(|e| rekey(key, e)))
                .map(|color| config.scrubber_tint = color),
            KEY_PROJECTION_QUALITY => expect_str(key, value)
                .and_then(|s| {
                    s.parse::<ProjectionQuality>()
                        .map_err(|reason| ConfigError::InvalidValue {
                            key: key.clone(),
                            reason,
                        })
                })
                .map(|quality| config.projection_quality = quality),
            _ => {
                debug!("ignoring unrecognized settings key '{key}'");
                Ok(())
            }
        };

        if let Err(e) = outcome {
            rejected.push(e);
        }
    }

    rejected
}

fn expect_str<'a>(key: &str, value: &'a Value) -> Result<&'a str, ConfigError> {
    value.as_str().ok_or_else(|| ConfigError::InvalidValue {
        key: key.to_string(),
        reason: format!("expected a string, found {}", kind_of(value)),
    })
}

fn rekey(key: &str, err: ConfigError) -> ConfigError {
    match err {
        ConfigError::InvalidValue { reason, .. } => ConfigError::InvalidValue {
            key: key.to_string(),
            reason,
        },
        other => other,
    }
}
