mod alert;
mod geo_point;
mod map_region;
mod marker;
mod position;

pub use alert::Alert;
pub use geo_point::{GeoPoint, InvalidCoordinate};
pub use map_region::{LATITUDE_DELTA, LONGITUDE_DELTA, MapRegion};
pub use marker::Marker;
pub use position::Position;
