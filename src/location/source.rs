use crate::domain::Position;
use async_trait::async_trait;
use serde::Deserialize;
use std::fmt::Debug;
use std::time::Duration;
use thiserror::Error;

/// Options for a single location request.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LocationOptions {
    pub high_accuracy: bool,
    #[serde(with = "humantime_serde")]
    pub timeout: Duration,
    #[serde(with = "humantime_serde")]
    pub maximum_age: Duration,
}

impl Default for LocationOptions {
    fn default() -> Self {
        LocationOptions {
            high_accuracy: true,
            timeout: Duration::from_secs(15),
            maximum_age: Duration::from_secs(10),
        }
    }
}

/// Supplies the user's current location on demand.
#[async_trait]
pub trait CoordinateSource: Debug + Send + Sync {
    async fn current_position(&self, options: &LocationOptions) -> Result<Position, LocationError>;
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LocationError {
    #[error("location request timed out after {0:?}")]
    Timeout(Duration),
    #[error("location unavailable: {0}")]
    Unavailable(String),
}
