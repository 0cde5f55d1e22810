//! Internal hex color helpers.

use immersive_common::types::Color;
use regex::Regex;
use std::sync::LazyLock;

/// `#RRGGBB` with an optional `AA` alpha pair.
pub(crate) static HEX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^#(?<red>[0-9a-fA-F]{2})(?<green>[0-9a-fA-F]{2})(?<blue>[0-9a-fA-F]{2})(?<alpha>[0-9a-fA-F]{2})?$",
    )
    .unwrap()
});

pub(super) fn parse_hex(s: &str) -> Option<Color> {
    let caps = HEX_RE.captures(s)?;
    let channel = |name: &str| u8::from_str_radix(&caps[name], 16).ok();

    let alpha = match caps.name("alpha") {
        Some(m) => u8::from_str_radix(m.as_str(), 16).ok()?,
        None => 255,
    };

    Some(Color::from_rgba8(
        channel("red")?,
        channel("green")?,
        channel("blue")?,
        alpha,
    ))
}
