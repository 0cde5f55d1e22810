//! Simulated playback session: a video source, its screen, and the updater
//! that keeps them in step.

use immersive_common::{FieldOfView, ImmersiveError, ScreenError};
use immersive_config::{ImmersiveConfig, ProjectionQuality};
use immersive_screen::{
    MeshDensity, ScreenSnapshot, ScreenUpdater, SphereMeshGenerator, VideoScreen, VideoSource,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// How long to wait for the screen to reflect the last field of view.
const SETTLE_TIMEOUT: Duration = Duration::from_secs(30);

pub fn density_for(quality: ProjectionQuality) -> MeshDensity {
    match quality {
        ProjectionQuality::Low => MeshDensity::LOW,
        ProjectionQuality::Medium => MeshDensity::MEDIUM,
        ProjectionQuality::High => MeshDensity::HIGH,
    }
}

/// Publish each field of view in order and return the screen once it shows
/// geometry for the last one.
pub async fn run(
    config: &ImmersiveConfig,
    fovs: &[FieldOfView],
) -> Result<Arc<ScreenSnapshot>, ImmersiveError> {
    let (first, rest) = match fovs.split_first() {
        Some((first, rest)) => (*first, rest),
        None => (FieldOfView::default(), &[][..]),
    };
    let target = rest.last().copied().unwrap_or(first).clamped();

    let generator = SphereMeshGenerator::new(density_for(config.projection_quality));
    let screen = Arc::new(VideoScreen::new());
    let source = VideoSource::new(first);
    info!(
        "{} {} bound to {} ({} quality)",
        screen.name(),
        screen.id(),
        source.texture(),
        config.projection_quality
    );

    let updater = ScreenUpdater::spawn(Arc::clone(&screen), &source, Arc::new(generator));
    for fov in rest {
        if !source.set_field_of_view(*fov) {
            debug!("field of view {fov} unchanged, skipping");
        }
    }

    let settled = settle(&screen, target).await;
    updater.shutdown().await;
    settled
}

async fn settle(
    screen: &VideoScreen,
    target: FieldOfView,
) -> Result<Arc<ScreenSnapshot>, ImmersiveError> {
    let mut rx = screen.watch();
    let waited = tokio::time::timeout(
        SETTLE_TIMEOUT,
        rx.wait_for(|s| {
            s.model
                .as_ref()
                .is_some_and(|m| m.mesh.field_of_view == target)
        }),
    )
    .await;

    match waited {
        Ok(Ok(snapshot)) => Ok(Arc::clone(&snapshot)),
        Ok(Err(_)) => Err(ScreenError::SourceClosed.into()),
        Err(_) => Err(ScreenError::GenerationFailed(format!(
            "screen did not reach {target} within {}s",
            SETTLE_TIMEOUT.as_secs()
        ))
        .into()),
    }
}
