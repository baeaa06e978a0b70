use crate::domain::Coordinate;
use serde::de::Error;
use serde::{Deserialize, Deserializer};

// Accepts both the persisted form `{lat, lon}` and the configured/geolocation form `{latitude, longitude}`
impl<'de> Deserialize<'de> for Coordinate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Debug, Deserialize)]
        pub struct Inner {
            #[serde(alias = "lat")]
            latitude: f64,
            #[serde(alias = "lon")]
            longitude: f64,
        }

        let inner = Inner::deserialize(deserializer)?;
        if !(inner.latitude >= -90.0 && inner.latitude <= 90.0) {
            return Err(Error::custom(format!("invalid latitude: {}, must be between -90 and 90", inner.latitude)));
        }

        if !(inner.longitude >= -180.0 && inner.longitude <= 180.0) {
            return Err(Error::custom(format!("invalid longitude: {}, must be between -180 and 180", inner.longitude)));
        }

        Ok(Coordinate::new(inner.latitude, inner.longitude))
    }
}
