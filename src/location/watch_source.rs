use crate::domain::Position;
use crate::location::{CoordinateSource, LocationError, LocationOptions};
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::watch;
use tokio::time::timeout;
use tracing::{debug, instrument, trace};

/// Publishes location fixes to a [`WatchCoordinateSource`].
#[derive(Debug, Clone)]
pub struct FixSender {
    tx: watch::Sender<Option<Position>>,
}

impl FixSender {
    pub fn send(&self, position: Position) {
        self.tx.send_replace(Some(position));
    }
}

/// A coordinate source answering requests from the most recently published fix.
///
/// A request is answered straight away when the latest fix is no older than the requested
/// maximum age. Otherwise it waits for the next fix, up to the requested timeout.
#[derive(Debug, Clone)]
pub struct WatchCoordinateSource {
    rx: watch::Receiver<Option<Position>>,
}

impl WatchCoordinateSource {
    pub fn channel() -> (FixSender, WatchCoordinateSource) {
        let (tx, rx) = watch::channel(None);
        (FixSender { tx }, WatchCoordinateSource { rx })
    }
}

#[async_trait]
impl CoordinateSource for WatchCoordinateSource {
    #[instrument(skip_all)]
    async fn current_position(&self, options: &LocationOptions) -> Result<Position, LocationError> {
        trace!(high_accuracy = options.high_accuracy, "📍 Requesting current position...");
        let mut rx = self.rx.clone();

        let latest = *rx.borrow_and_update();
        if let Some(position) = latest {
            if position.is_fresh(options.maximum_age, Utc::now()) {
                debug!("📍 Requesting current position... OK, cached fix");
                return Ok(position);
            }
        }

        let next_fix = async {
            loop {
                rx.changed()
                    .await
                    .map_err(|_| LocationError::Unavailable("location provider closed".to_string()))?;

                let latest = *rx.borrow_and_update();
                if let Some(position) = latest {
                    return Ok(position);
                }
            }
        };

        let position = timeout(options.timeout, next_fix)
            .await
            .map_err(|_| LocationError::Timeout(options.timeout))??;

        debug!("📍 Requesting current position... OK, new fix");
        Ok(position)
    }
}
