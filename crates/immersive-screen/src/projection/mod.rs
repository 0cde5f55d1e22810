//! Video projection surface: sphere patch mesh and placement.
//!
//! A 360° source maps onto a full sphere, a 180° source onto a half
//! sphere, and anything in between onto the matching patch. The mesh is
//! plain CPU data; the host uploads it with whatever renderer it owns.

mod mesh;
mod types;

pub use mesh::*;
pub use types::*;

use immersive_common::FieldOfView;

/// Produces a projection mesh and placement for a field of view.
///
/// Implementations must be pure: equal inputs give equal output.
pub trait MeshGenerator: Send + Sync + 'static {
    fn generate(&self, fov: FieldOfView) -> (ProjectionMesh, Transform);
}

/// Default generator backed by [`generate_projection_mesh`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SphereMeshGenerator {
    pub density: MeshDensity,
}

impl SphereMeshGenerator {
    pub fn new(density: MeshDensity) -> Self {
        Self { density }
    }
}

impl MeshGenerator for SphereMeshGenerator {
    fn generate(&self, fov: FieldOfView) -> (ProjectionMesh, Transform) {
        generate_projection_mesh(fov, self.density)
    }
}
