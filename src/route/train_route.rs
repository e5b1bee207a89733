use crate::domain::MapRegion;
use serde::Deserialize;

/// Precomputed train positions, replayed one entry per tick.
#[derive(Clone, Default, Debug, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct TrainRoute {
    regions: Vec<MapRegion>,
}

impl TrainRoute {
    #[cfg(test)]
    pub fn new(regions: Vec<MapRegion>) -> Self {
        TrainRoute { regions }
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Returns the train position at `step`.
    ///
    /// An empty route always yields `fallback`. Steps past the end stay on the last entry, the
    /// train is considered parked there.
    pub fn position_at(&self, step: usize, fallback: MapRegion) -> MapRegion {
        match self.regions.last() {
            None => fallback,
            Some(last) => self.regions.get(step).copied().unwrap_or(*last),
        }
    }
}
