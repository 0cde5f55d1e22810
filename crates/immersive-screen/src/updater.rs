//! Keeps the video screen in step with its source's field of view.
//!
//! The updater task is the only writer of the screen. Each field-of-view
//! change gets a sequence number and is meshed on the blocking pool; the
//! finished mesh comes back to the updater task, which applies it only if
//! no newer change has arrived in the meantime.

use immersive_common::{FieldOfView, ScreenError, TextureId};
use std::sync::Arc;
use tokio::sync::{oneshot, watch};
use tokio::task::{JoinHandle, JoinSet};
use tracing::{debug, info, warn};

use crate::projection::{MeshGenerator, ProjectionMesh, Transform};
use crate::screen::{ScreenModel, ScreenSnapshot, VideoMaterial, VideoScreen};
use crate::source::VideoSource;

/// Output of one mesh generation task.
struct Generated {
    sequence: u64,
    fov: FieldOfView,
    mesh: ProjectionMesh,
    transform: Transform,
}

/// Handle to a running updater task.
///
/// Dropping the handle stops the task, as does dropping the source.
pub struct ScreenUpdater {
    task: JoinHandle<()>,
    shutdown: oneshot::Sender<()>,
}

impl ScreenUpdater {
    /// Start updating `screen` from `source` on the current tokio runtime.
    ///
    /// The screen is regenerated right away for the source's current field
    /// of view, then again on every change.
    pub fn spawn(
        screen: Arc<VideoScreen>,
        source: &VideoSource,
        generator: Arc<dyn MeshGenerator>,
    ) -> Self {
        let (shutdown, shutdown_rx) = oneshot::channel();
        let worker = Worker {
            screen,
            fov_rx: source.subscribe(),
            texture: source.texture().clone(),
            generator,
            latest: 0,
            tasks: JoinSet::new(),
        };
        let task = tokio::spawn(worker.run(shutdown_rx));
        Self { task, shutdown }
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Stop the updater and wait for it to exit.
    pub async fn shutdown(self) {
        let Self { task, shutdown } = self;
        let _ = shutdown.send(());
        wait(task).await;
    }

    /// Wait for the updater to exit on its own, i.e. once the source is gone.
    pub async fn join(self) {
        let Self {
            task,
            shutdown: _shutdown,
        } = self;
        wait(task).await;
    }
}

async fn wait(task: JoinHandle<()>) {
    if let Err(e) = task.await {
        warn!("screen updater task failed: {e}");
    }
}

struct Worker {
    screen: Arc<VideoScreen>,
    fov_rx: watch::Receiver<FieldOfView>,
    texture: TextureId,
    generator: Arc<dyn MeshGenerator>,
    /// Sequence number of the most recent request.
    latest: u64,
    tasks: JoinSet<Generated>,
}

impl Worker {
    async fn run(mut self, mut shutdown_rx: oneshot::Receiver<()>) {
        let initial = *self.fov_rx.borrow_and_update();
        info!("screen updater started at {initial}");
        self.request(initial);

        let mut source_open = true;
        loop {
            tokio::select! {
                _ = &mut shutdown_rx => {
                    debug!("screen updater shutting down");
                    break;
                }
                changed = self.fov_rx.changed(), if source_open => {
                    if changed.is_err() {
                        debug!("{}", ScreenError::SourceClosed);
                        source_open = false;
                    } else {
                        let fov = *self.fov_rx.borrow_and_update();
                        self.request(fov);
                    }
                }
                Some(joined) = self.tasks.join_next() => {
                    match joined {
                        Ok(generated) => self.finish(generated),
                        Err(e) => warn!("{}", ScreenError::GenerationFailed(e.to_string())),
                    }
                }
            }

            if !source_open && self.tasks.is_empty() {
                break;
            }
        }

        info!("screen updater stopped");
    }

    fn request(&mut self, fov: FieldOfView) {
        self.latest += 1;
        let sequence = self.latest;
        let generator = Arc::clone(&self.generator);
        debug!("regenerating projection mesh #{sequence} for {fov}");
        self.tasks.spawn_blocking(move || {
            let (mesh, transform) = generator.generate(fov);
            Generated {
                sequence,
                fov,
                mesh,
                transform,
            }
        });
    }

    fn finish(&self, generated: Generated) {
        if generated.sequence != self.latest {
            debug!(
                "dropping stale projection mesh #{} (latest is #{})",
                generated.sequence, self.latest
            );
            return;
        }

        let vertices = generated.mesh.vertex_count();
        let snapshot = ScreenSnapshot {
            generation: generated.sequence,
            field_of_view: Some(generated.fov),
            model: Some(ScreenModel {
                mesh: Arc::new(generated.mesh),
                material: VideoMaterial::new(self.texture.clone()),
            }),
            transform: generated.transform,
        };
        if self.screen.apply(snapshot) {
            info!(
                "video screen updated to {} ({vertices} vertices)",
                generated.fov
            );
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
