//! The video screen entity and its atomically swapped state.

use immersive_common::{EntityId, FieldOfView, TextureId};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::debug;

use crate::projection::{ProjectionMesh, Transform};

/// Name given to the projection entity in the host scene graph.
pub const SCREEN_ENTITY_NAME: &str = "VideoScreen";

/// Unlit material sampling the live frames of a video texture stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoMaterial {
    pub texture: TextureId,
}

impl VideoMaterial {
    pub fn new(texture: TextureId) -> Self {
        Self { texture }
    }
}

/// Geometry plus the material drawn on it.
#[derive(Debug, Clone)]
pub struct ScreenModel {
    pub mesh: Arc<ProjectionMesh>,
    pub material: VideoMaterial,
}

/// Complete, immutable state of the video screen at one point in time.
#[derive(Debug, Clone)]
pub struct ScreenSnapshot {
    /// Increases with every applied update; `0` before the first.
    pub generation: u64,
    pub field_of_view: Option<FieldOfView>,
    pub model: Option<ScreenModel>,
    pub transform: Transform,
}

impl ScreenSnapshot {
    pub fn empty() -> Self {
        Self {
            generation: 0,
            field_of_view: None,
            model: None,
            transform: Transform::IDENTITY,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.model.is_none()
    }
}

/// Owns the sphere or half-sphere entity the video is projected onto.
///
/// State is replaced as a whole, so a renderer reading [`snapshot`] always
/// sees a mesh, material, and transform that belong together.
///
/// [`snapshot`]: VideoScreen::snapshot
pub struct VideoScreen {
    id: EntityId,
    state: watch::Sender<Arc<ScreenSnapshot>>,
}

impl VideoScreen {
    pub fn new() -> Self {
        let (state, _) = watch::channel(Arc::new(ScreenSnapshot::empty()));
        Self {
            id: EntityId::new(),
            state,
        }
    }

    pub fn id(&self) -> &EntityId {
        &self.id
    }

    pub fn name(&self) -> &'static str {
        SCREEN_ENTITY_NAME
    }

    /// Current state of the entity.
    pub fn snapshot(&self) -> Arc<ScreenSnapshot> {
        self.state.borrow().clone()
    }

    /// Receiver woken whenever a new snapshot is applied.
    pub fn watch(&self) -> watch::Receiver<Arc<ScreenSnapshot>> {
        self.state.subscribe()
    }

    /// Install `next` if it is newer than the current snapshot.
    ///
    /// Returns `false`, leaving the screen untouched, for a stale generation.
    pub fn apply(&self, next: ScreenSnapshot) -> bool {
        let generation = next.generation;
        let applied = self.state.send_if_modified(|current| {
            if next.generation <= current.generation {
                return false;
            }
            *current = Arc::new(next);
            true
        });
        if !applied {
            debug!(
                "{}: ignoring stale generation {generation}",
                SCREEN_ENTITY_NAME
            );
        }
        applied
    }
}

impl Default for VideoScreen {
    fn default() -> Self {
        Self::new()
    }
}
