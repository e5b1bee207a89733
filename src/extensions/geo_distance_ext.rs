use crate::domain::{GeoPoint, MapRegion};

/// Equatorial earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_378_137.0;

/// A trait to measure the great-circle distance between two locations.
pub trait PreciseDistance<Rhs = Self> {
    /// Returns the haversine distance between `self` and `other`, rounded to whole meters.
    fn distance_to(&self, other: &Rhs) -> u32;
}

impl PreciseDistance for GeoPoint {
    fn distance_to(&self, other: &GeoPoint) -> u32 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let delta_lat = (other.latitude - self.latitude).to_radians();
        let delta_lon = (other.longitude - self.longitude).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().min(1.0).asin();

        (EARTH_RADIUS_M * c).round() as u32
    }
}

impl PreciseDistance for MapRegion {
    fn distance_to(&self, other: &MapRegion) -> u32 {
        self.point.distance_to(&other.point)
    }
}
