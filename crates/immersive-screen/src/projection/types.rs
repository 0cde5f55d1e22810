//! Projection mesh vertex, mesh, and transform types.

use immersive_common::FieldOfView;

use crate::matrix::{self, Mat4};

/// A single vertex of the projection mesh.
///
/// Layout: position(vec3) + normal(vec3) + uv(vec2) = 32 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ProjectionVertex {
    pub position: [f32; 3],
    /// Unit normal pointing at the sphere center.
    pub normal: [f32; 3],
    /// `u` runs left to right as seen by the viewer, `v` top to bottom.
    pub uv: [f32; 2],
}

/// Indexed triangle list describing a sphere patch.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionMesh {
    pub vertices: Vec<ProjectionVertex>,
    pub indices: Vec<u32>,
    pub columns: u32,
    pub rows: u32,
    /// Clamped extent the mesh was built for.
    pub field_of_view: FieldOfView,
}

impl ProjectionMesh {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

/// Tessellation density for the projection mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeshDensity {
    /// Columns for a full 360° wrap.
    pub columns_per_turn: u32,
    /// Rows for a full 180° pole-to-pole span.
    pub rows_per_half_turn: u32,
}

impl MeshDensity {
    pub const LOW: Self = Self {
        columns_per_turn: 48,
        rows_per_half_turn: 24,
    };
    pub const MEDIUM: Self = Self {
        columns_per_turn: 96,
        rows_per_half_turn: 48,
    };
    pub const HIGH: Self = Self {
        columns_per_turn: 144,
        rows_per_half_turn: 72,
    };
}

impl Default for MeshDensity {
    fn default() -> Self {
        Self::MEDIUM
    }
}

/// Placement of an entity: translate, then yaw around Y, then uniform scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translation: [f32; 3],
    /// Rotation around the up axis, radians.
    pub yaw: f32,
    pub scale: f32,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        translation: [0.0, 0.0, 0.0],
        yaw: 0.0,
        scale: 1.0,
    };

    pub fn from_yaw(yaw: f32) -> Self {
        Self {
            yaw,
            ..Self::IDENTITY
        }
    }

    /// Model matrix: `T × R × S`.
    pub fn to_matrix(&self) -> Mat4 {
        let [x, y, z] = self.translation;
        let rs = matrix::mul(&matrix::rotate_y(self.yaw), &matrix::scale(self.scale));
        matrix::mul(&matrix::translate(x, y, z), &rs)
    }

    pub fn apply(&self, point: [f32; 3]) -> [f32; 3] {
        matrix::transform_point(&self.to_matrix(), point)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use bytemuck::Zeroable;

    #[test]
    fn projection_vertex_size_is_32_bytes() {
        assert_eq!(std::mem::size_of::<ProjectionVertex>(), 32);
    }

    #[test]
    fn projection_vertex_alignment_is_4_bytes() {
        assert_eq!(std::mem::align_of::<ProjectionVertex>(), 4);
    }

    #[test]
    fn density_presets() {
        assert_eq!(MeshDensity::LOW.columns_per_turn, 48);
        assert_eq!(MeshDensity::LOW.rows_per_half_turn, 24);
        assert_eq!(MeshDensity::MEDIUM.columns_per_turn, 96);
        assert_eq!(MeshDensity::MEDIUM.rows_per_half_turn, 48);
        assert_eq!(MeshDensity::HIGH.columns_per_turn, 144);
        assert_eq!(MeshDensity::HIGH.rows_per_half_turn, 72);
        assert_eq!(MeshDensity::default(), MeshDensity::MEDIUM);
    }

    #[test]
    fn byte_views_match_counts() {
        let mesh = ProjectionMesh {
            vertices: vec![ProjectionVertex::zeroed(); 4],
            indices: vec![0, 1, 2, 1, 3, 2],
            columns: 1,
            rows: 1,
            field_of_view: FieldOfView::HALF_SPHERE,
        };
        assert_eq!(mesh.vertex_bytes().len(), 4 * 32);
        assert_eq!(mesh.index_bytes().len(), 6 * 4);
        assert_eq!(mesh.triangle_count(), 2);
    }

    #[test]
    fn identity_transform_leaves_point() {
        let p = Transform::IDENTITY.apply([1.0, 2.0, 3.0]);
        assert_eq!(p, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn transform_scales_before_translating() {
        let t = Transform {
            translation: [0.0, 1.5, 0.0],
            yaw: 0.0,
            scale: 2.0,
        };
        let p = t.apply([1.0, 1.0, 1.0]);
        assert!((p[0] - 2.0).abs() < 1e-6);
        assert!((p[1] - 3.5).abs() < 1e-6);
        assert!((p[2] - 2.0).abs() < 1e-6);
    }
}
