use serde::{Deserialize, Serialize};
use std::fmt;

/// Smallest angular extent, in degrees, a projection surface may span.
pub const MIN_FOV_DEGREES: f32 = 1.0;
/// Full horizontal wrap.
pub const MAX_HORIZONTAL_FOV: f32 = 360.0;
/// Pole to pole.
pub const MAX_VERTICAL_FOV: f32 = 180.0;

/// Angular extent of the video content, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldOfView {
    pub horizontal: f32,
    pub vertical: f32,
}

impl FieldOfView {
    /// 180° video (half sphere).
    pub const HALF_SPHERE: Self = Self::new(180.0, 180.0);
    /// 360° video (full sphere).
    pub const FULL_SPHERE: Self = Self::new(360.0, 180.0);

    pub const fn new(horizontal: f32, vertical: f32) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Nearest valid extent: horizontal in `[1, 360]`, vertical in `[1, 180]`.
    ///
    /// NaN maps to the minimum so degenerate input still yields a mesh.
    pub fn clamped(&self) -> Self {
        Self {
            horizontal: clamp_degrees(self.horizontal, MAX_HORIZONTAL_FOV),
            vertical: clamp_degrees(self.vertical, MAX_VERTICAL_FOV),
        }
    }

    /// Bitwise equality of both extents. Unlike `==`, a NaN extent is
    /// identical to itself.
    pub fn is_identical(&self, other: &Self) -> bool {
        self.horizontal.to_bits() == other.horizontal.to_bits()
            && self.vertical.to_bits() == other.vertical.to_bits()
    }

    pub fn is_valid(&self) -> bool {
        self.clamped() == *self
    }

    pub fn horizontal_radians(&self) -> f32 {
        self.horizontal.to_radians()
    }

    pub fn vertical_radians(&self) -> f32 {
        self.vertical.to_radians()
    }
}

impl Default for FieldOfView {
    fn default() -> Self {
        Self::HALF_SPHERE
    }
}

impl fmt::Display for FieldOfView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°x{}°", self.horizontal, self.vertical)
    }
}

fn clamp_degrees(value: f32, max: f32) -> f32 {
    if value.is_nan() {
        return MIN_FOV_DEGREES;
    }
    value.clamp(MIN_FOV_DEGREES, max)
}
