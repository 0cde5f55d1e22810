//! Configuration values recognized in `openimmersive` settings files.

use immersive_common::types::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Settings key for the playback scrubber tint (hex string).
pub const KEY_SCRUBBER_TINT: &str = "scrubberTint";
/// Settings key for the projection mesh density (`low`, `medium`, `high`).
pub const KEY_PROJECTION_QUALITY: &str = "projectionQuality";

/// Base file name of the bundled settings resource, without extension.
pub const SETTINGS_RESOURCE_NAME: &str = "openimmersive";

/// Orange at 70% opacity.
pub fn default_scrubber_tint() -> Color {
    Color::from_rgb8(255, 149, 0).with_alpha(0.7)
}

/// Tessellation preset for the video projection mesh.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectionQuality {
    Low,
    #[default]
    Medium,
    High,
}

impl FromStr for ProjectionQuality {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(format!("expected low, medium or high, got '{other}'")),
        }
    }
}

impl fmt::Display for ProjectionQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        };
        f.write_str(name)
    }
}

/// Display preferences for an immersive playback session.
///
/// Built once at startup and passed to the components that need it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImmersiveConfig {
    /// Tint for the playback scrubber.
    pub scrubber_tint: Color,
    /// Density of the sphere the video is projected onto.
    pub projection_quality: ProjectionQuality,
}

impl Default for ImmersiveConfig {
    fn default() -> Self {
        Self {
            scrubber_tint: default_scrubber_tint(),
            projection_quality: ProjectionQuality::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tint_is_translucent_orange() {
        let config = ImmersiveConfig::default();
        assert_eq!(config.scrubber_tint.r, 1.0);
        assert!((config.scrubber_tint.g - 149.0 / 255.0).abs() < 1e-6);
        assert_eq!(config.scrubber_tint.b, 0.0);
        assert!((config.scrubber_tint.a - 0.7).abs() < 1e-6);
    }

    #[test]
    fn default_quality_is_medium() {
        assert_eq!(
            ImmersiveConfig::default().projection_quality,
            ProjectionQuality::Medium
        );
    }

    #[test]
    fn quality_parses_any_case() {
        assert_eq!("LOW".parse::<ProjectionQuality>(), Ok(ProjectionQuality::Low));
        assert_eq!(" High ".parse::<ProjectionQuality>(), Ok(ProjectionQuality::High));
        assert!("ultra".parse::<ProjectionQuality>().is_err());
    }

    #[test]
    fn quality_display_matches_parse() {
        for q in [
            ProjectionQuality::Low,
            ProjectionQuality::Medium,
            ProjectionQuality::High,
        ] {
            assert_eq!(q.to_string().parse::<ProjectionQuality>(), Ok(q));
        }
    }

    #[test]
    fn config_serializes_to_json() {
        let json = serde_json::to_string(&ImmersiveConfig::default()).unwrap();
        assert!(json.contains("\"projection_quality\":\"medium\""));
        assert!(json.contains("\"scrubber_tint\""));
    }
}
