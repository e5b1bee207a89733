use crate::domain::Alert;
use tracing::{debug, info, warn};

pub const SLOWING_RANGE_M: u32 = 50;
pub const CLOSING_RANGE_M: u32 = 35;
pub const STOPPING_RANGE_M: u32 = 20;

/// The distance band a measurement falls into.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AlertBand {
    /// More than 50 meters away, or exactly on the 20 meter boundary.
    Clear,
    /// 35 < d <= 50
    Slowing,
    /// 20 < d <= 35
    Closing,
    /// d < 20
    Stopping,
}

impl AlertBand {
    pub fn classify(distance_m: u32) -> Self {
        if distance_m <= SLOWING_RANGE_M && distance_m > CLOSING_RANGE_M {
            AlertBand::Slowing
        } else if distance_m <= CLOSING_RANGE_M && distance_m > STOPPING_RANGE_M {
            AlertBand::Closing
        } else if distance_m < STOPPING_RANGE_M {
            AlertBand::Stopping
        } else {
            AlertBand::Clear
        }
    }
}

/// Turns distance-to-gate samples into driver alerts.
///
/// Stopping latches the alarm for the rest of the session: every later sample is ignored and
/// there is no way to reset it. Outside the latch there is no hysteresis, so re-entering a band
/// fires its alert again.
#[derive(Clone, Default, Debug)]
pub struct ProximityAlarm {
    stopped: bool,
}

impl ProximityAlarm {
    pub fn new() -> Self {
        ProximityAlarm::default()
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Evaluates a new distance sample and returns the alert to show, if any.
    pub fn evaluate(&mut self, distance_m: u32) -> Option<Alert> {
        if self.stopped {
            debug!(distance_m, "🛑 Vehicle already stopped, ignoring distance sample");
            return None;
        }

        match AlertBand::classify(distance_m) {
            AlertBand::Clear => {
                debug!(distance_m, "🚦 Gate is clear");
                None
            }
            AlertBand::Slowing => {
                info!(distance_m, "🚦 Train is coming, slow down");
                Some(Alert::Slowing)
            }
            AlertBand::Closing => {
                warn!(distance_m, "🚦 Train is getting close, engaging automatic braking");
                Some(Alert::Closing)
            }
            AlertBand::Stopping => {
                self.stopped = true;
                warn!(distance_m, "🛑 Vehicle stopped");
                Some(Alert::Stopped)
            }
        }
    }
}
