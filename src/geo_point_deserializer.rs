use crate::domain::{GeoPoint, LATITUDE_DELTA, LONGITUDE_DELTA, MapRegion};
use serde::de::Error;
use serde::{Deserialize, Deserializer};

fn validate<E: Error>(latitude: f64, longitude: f64) -> Result<GeoPoint, E> {
    GeoPoint::try_new(latitude, longitude).map_err(E::custom)
}

impl<'de> Deserialize<'de> for GeoPoint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Debug, Deserialize)]
        pub struct Inner {
            latitude: f64,
            longitude: f64,
        }

        let inner = Inner::deserialize(deserializer)?;
        validate(inner.latitude, inner.longitude)
    }
}

impl<'de> Deserialize<'de> for MapRegion {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Debug, Deserialize)]
        pub struct Inner {
            latitude: f64,
            longitude: f64,
            #[serde(default, alias = "latitudeDelta")]
            latitude_delta: Option<f64>,
            #[serde(default, alias = "longitudeDelta")]
            longitude_delta: Option<f64>,
        }

        let inner = Inner::deserialize(deserializer)?;
        let point = validate(inner.latitude, inner.longitude)?;

        Ok(MapRegion::new(
            point,
            inner.latitude_delta.unwrap_or(LATITUDE_DELTA),
            inner.longitude_delta.unwrap_or(LONGITUDE_DELTA),
        ))
    }
}
