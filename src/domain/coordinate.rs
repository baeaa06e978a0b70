use serde::Serialize;

/// Substituted whenever the device position cannot be acquired.
pub const FALLBACK_COORDINATE: Coordinate = Coordinate {
    latitude: 37.386051,
    longitude: -122.083855,
};

#[derive(Clone, Copy, Default, Debug, PartialEq, Serialize)]
pub struct Coordinate {
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lon")]
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Coordinate { latitude, longitude }
    }
}
