use crate::domain::Alert;
use async_trait::async_trait;
use std::fmt::Debug;
use tracing::warn;

/// Shows an alert to the driver.
#[async_trait]
pub trait AlertSurface: Debug + Send + Sync {
    async fn show(&self, alert: Alert);
}

#[derive(Debug, Default)]
pub struct LogAlertSurface;

#[async_trait]
impl AlertSurface for LogAlertSurface {
    async fn show(&self, alert: Alert) {
        warn!(%alert, "🚨 {}", alert.message().replace("\n\n", " "));
    }
}
