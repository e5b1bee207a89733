use crate::domain::GeoPoint;

pub const LATITUDE_DELTA: f64 = 0.0009;
pub const LONGITUDE_DELTA: f64 = 0.0005;

/// A point on the map together with the viewport span used when the map is centered on it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapRegion {
    pub point: GeoPoint,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl MapRegion {
    pub fn new(point: GeoPoint, latitude_delta: f64, longitude_delta: f64) -> Self {
        MapRegion {
            point,
            latitude_delta,
            longitude_delta,
        }
    }

    /// Creates a region around `point` with the default deltas.
    pub fn around(point: GeoPoint) -> Self {
        MapRegion::new(point, LATITUDE_DELTA, LONGITUDE_DELTA)
    }

    pub fn latitude(&self) -> f64 {
        self.point.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.point.longitude
    }
}

impl From<GeoPoint> for MapRegion {
    fn from(point: GeoPoint) -> Self {
        MapRegion::around(point)
    }
}
