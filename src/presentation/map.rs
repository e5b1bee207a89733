use crate::domain::{MapRegion, Marker};
use async_trait::async_trait;
use std::fmt::Debug;
use std::time::Duration;
use tracing::{info, instrument};

/// Renders the scene's markers and moves the viewport.
#[async_trait]
pub trait MapPresenter: Debug + Send + Sync {
    async fn render(&self, markers: &[Marker]);

    async fn animate_to_region(&self, region: &MapRegion, duration: Duration);
}

/// A presenter writing the scene to the log.
#[derive(Debug, Default)]
pub struct LogMapPresenter;

#[async_trait]
impl MapPresenter for LogMapPresenter {
    #[instrument(skip_all)]
    async fn render(&self, markers: &[Marker]) {
        for marker in markers {
            info!(
                pin = %marker.pin,
                latitude = marker.region.latitude(),
                longitude = marker.region.longitude(),
                "🗺️ {}",
                marker.title.unwrap_or("marker")
            );
        }
    }

    #[instrument(skip_all)]
    async fn animate_to_region(&self, region: &MapRegion, duration: Duration) {
        info!(
            latitude = region.latitude(),
            longitude = region.longitude(),
            latitude_delta = region.latitude_delta,
            longitude_delta = region.longitude_delta,
            "🎥 Recentering map over {:?}",
            duration
        );
    }
}
