use crate::domain::{Alert, MapRegion, Marker, Position};
use crate::location::{CoordinateSource, LocationError, LocationOptions, Permission, PermissionGate};
use crate::presentation::{AlertSurface, MapPresenter};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Answers location requests from a script, failing once it runs out.
#[derive(Debug, Default)]
pub struct ScriptedCoordinateSource {
    results: Mutex<VecDeque<Result<Position, LocationError>>>,
    calls: AtomicUsize,
}

impl ScriptedCoordinateSource {
    pub fn new(results: Vec<Result<Position, LocationError>>) -> Self {
        ScriptedCoordinateSource {
            results: Mutex::new(results.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CoordinateSource for ScriptedCoordinateSource {
    async fn current_position(&self, _options: &LocationOptions) -> Result<Position, LocationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(LocationError::Unavailable("script exhausted".to_string())))
    }
}

#[derive(Debug)]
pub struct FixedPermissionGate(pub Permission);

#[async_trait]
impl PermissionGate for FixedPermissionGate {
    async fn request(&self) -> Permission {
        self.0
    }
}

#[derive(Debug, Default)]
pub struct RecordingMapPresenter {
    renders: Mutex<Vec<Vec<Marker>>>,
    animations: Mutex<Vec<(MapRegion, Duration)>>,
}

impl RecordingMapPresenter {
    pub fn renders(&self) -> Vec<Vec<Marker>> {
        self.renders.lock().unwrap().clone()
    }

    pub fn animations(&self) -> Vec<(MapRegion, Duration)> {
        self.animations.lock().unwrap().clone()
    }
}

#[async_trait]
impl MapPresenter for RecordingMapPresenter {
    async fn render(&self, markers: &[Marker]) {
        self.renders.lock().unwrap().push(markers.to_vec());
    }

    async fn animate_to_region(&self, region: &MapRegion, duration: Duration) {
        self.animations.lock().unwrap().push((*region, duration));
    }
}

#[derive(Debug, Default)]
pub struct RecordingAlertSurface {
    alerts: Mutex<Vec<Alert>>,
}

impl RecordingAlertSurface {
    pub fn alerts(&self) -> Vec<Alert> {
        self.alerts.lock().unwrap().clone()
    }
}

#[async_trait]
impl AlertSurface for RecordingAlertSurface {
    async fn show(&self, alert: Alert) {
        self.alerts.lock().unwrap().push(alert);
    }
}
