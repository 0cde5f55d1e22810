//! OpenImmersive display settings.
//!
//! Settings are read once at startup from a [`SettingsSource`]. Every
//! failure degrades to built-in defaults with a logged diagnostic, so a
//! missing or broken file never stops playback.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use immersive_config::{load, BundleSource, ImmersiveConfig};
//!
//! let config = match BundleSource::beside_executable() {
//!     Ok(source) => load(&source),
//!     Err(_) => ImmersiveConfig::default(),
//! };
//! println!("scrubber tint: {}", config.scrubber_tint.to_hex());
//! ```

pub mod colors;
pub mod loader;
pub mod schema;
pub mod shared;
pub mod source;

pub use colors::{parse_hex_color, validate_hex_color};
pub use loader::{load, parse_settings, try_load};
pub use schema::{ImmersiveConfig, ProjectionQuality};
pub use source::{
    BundleSource, FileSource, InMemorySource, RawSettings, SettingsFormat, SettingsSource,
};

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &ImmersiveConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_keys() {
        let json = config_to_json(&ImmersiveConfig::default());
        assert!(json.contains("\"scrubber_tint\""));
        assert!(json.contains("\"projection_quality\": \"medium\""));
    }
}
