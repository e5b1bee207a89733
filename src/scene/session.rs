use crate::app_config::AppConfig;
use crate::domain::{Alert, MapRegion, Marker};
use crate::extensions::geo_distance_ext::PreciseDistance;
use crate::proximity::ProximityAlarm;
use crate::route::TrainRoute;
use thiserror::Error;

/// State of a monitoring session, shared by the user and train refresh loops.
#[derive(Debug)]
pub struct Session {
    user: MapRegion,
    train: MapRegion,
    gates: Vec<MapRegion>,
    alarm: ProximityAlarm,
    train_step: usize,
}

impl Session {
    /// Creates a session. Only the first gate is monitored.
    pub fn new(user: MapRegion, train: MapRegion, gates: Vec<MapRegion>) -> Result<Self, SessionError> {
        if gates.is_empty() {
            return Err(SessionError::MissingGate);
        }

        Ok(Session {
            user,
            train,
            gates,
            alarm: ProximityAlarm::new(),
            train_step: 0,
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, SessionError> {
        let scene = config.scene();
        Session::new(scene.user(), scene.train(), scene.gates().to_vec())
    }

    #[cfg(test)]
    pub fn user(&self) -> MapRegion {
        self.user
    }

    #[cfg(test)]
    pub fn train(&self) -> MapRegion {
        self.train
    }

    pub fn gate(&self) -> MapRegion {
        self.gates[0] // Never empty, checked in new()
    }

    pub fn is_stopped(&self) -> bool {
        self.alarm.is_stopped()
    }

    #[cfg(test)]
    pub fn train_step(&self) -> usize {
        self.train_step
    }

    /// Moves the user and evaluates the new distance to the gate, returning the distance and the
    /// alert to show.
    pub fn move_user(&mut self, region: MapRegion) -> (u32, Option<Alert>) {
        self.user = region;
        let distance_m = self.user.distance_to(&self.gate());
        (distance_m, self.alarm.evaluate(distance_m))
    }

    /// Moves the train to its position for the current step and advances the step.
    pub fn advance_train(&mut self, route: &TrainRoute, fallback: MapRegion) -> MapRegion {
        self.train = route.position_at(self.train_step, fallback);
        self.train_step = self.train_step.saturating_add(1);
        self.train
    }

    pub fn snapshot(&self) -> SceneSnapshot {
        SceneSnapshot {
            user: self.user,
            train: self.train,
            gate: self.gate(),
            stopped: self.is_stopped(),
            train_step: self.train_step,
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum SessionError {
    #[error("at least one railway gate must be configured")]
    MissingGate,
}

/// A copy of the scene, published after every change.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneSnapshot {
    pub user: MapRegion,
    pub train: MapRegion,
    pub gate: MapRegion,
    pub stopped: bool,
    pub train_step: usize,
}

impl SceneSnapshot {
    pub fn markers(&self) -> [Marker; 3] {
        [Marker::user(self.user), Marker::gate(self.gate), Marker::train(self.train)]
    }
}
