//! Projection surface for immersive video.
//!
//! Generates the sphere or half-sphere a 360°/180° video is mapped onto,
//! and keeps a [`VideoScreen`] entity in step with a [`VideoSource`]'s field
//! of view through a [`ScreenUpdater`].

pub mod matrix;
pub mod projection;
pub mod screen;
pub mod source;
pub mod updater;

pub use projection::{
    generate_projection_mesh, MeshDensity, MeshGenerator, ProjectionMesh, ProjectionVertex,
    SphereMeshGenerator, Transform, PROJECTION_RADIUS,
};
pub use screen::{ScreenModel, ScreenSnapshot, VideoMaterial, VideoScreen, SCREEN_ENTITY_NAME};
pub use source::VideoSource;
pub use updater::ScreenUpdater;
