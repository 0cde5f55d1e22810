//! Hex color parsing for settings values.
//!
//! Accepts `#RRGGBB` and `#RRGGBBAA` only. Surrounding whitespace is
//! ignored; everything else must match exactly.

mod parse;


use immersive_common::types::Color;
use immersive_common::ConfigError;

use parse::{parse_hex, HEX_RE};

/// Parse a hex color string into a normalized [`Color`].
///
/// Missing alpha defaults to fully opaque.
pub fn parse_hex_color(s: &str) -> Result<Color, ConfigError> {
    let s = s.trim();
    parse_hex(s).ok_or_else(|| ConfigError::InvalidValue {
        key: "color".into(),
        reason: format!("could not parse '{s}', accepted formats: #RRGGBB or #RRGGBBAA"),
    })
}

/// Whether a string is an accepted hex color.
pub fn validate_hex_color(s: &str) -> bool {
    HEX_RE.is_match(s.trim())
}
