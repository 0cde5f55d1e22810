//! Video source: the producer side of field-of-view updates.

use immersive_common::{FieldOfView, TextureId};
use tokio::sync::watch;
use tracing::debug;

/// A playing video as seen by the projection surface.
///
/// Holds the current field of view and the id of the host's live texture
/// stream. Subscribers are woken only when the field of view actually
/// changes. Dropping the source closes every subscription.
pub struct VideoSource {
    fov_tx: watch::Sender<FieldOfView>,
    texture: TextureId,
}

impl VideoSource {
    pub fn new(fov: FieldOfView) -> Self {
        Self::with_texture(fov, TextureId::new())
    }

    pub fn with_texture(fov: FieldOfView, texture: TextureId) -> Self {
        let (fov_tx, _) = watch::channel(fov);
        Self { fov_tx, texture }
    }

    pub fn field_of_view(&self) -> FieldOfView {
        *self.fov_tx.borrow()
    }

    /// Publish a new field of view. Returns `false` if it was unchanged.
    pub fn set_field_of_view(&self, fov: FieldOfView) -> bool {
        let changed = self.fov_tx.send_if_modified(|current| {
            if current.is_identical(&fov) {
                return false;
            }
            *current = fov;
            true
        });
        if changed {
            debug!("video source field of view changed to {fov}");
        }
        changed
    }

    pub fn texture(&self) -> &TextureId {
        &self.texture
    }

    pub fn subscribe(&self) -> watch::Receiver<FieldOfView> {
        self.fov_tx.subscribe()
    }
}
