use crate::domain::Coordinate;
use crate::location::{GeoOptions, LocationError, LocationProvider};
use async_trait::async_trait;

/// Reports a configured position, standing in for a device without positioning hardware.
#[derive(Debug)]
pub struct FixedLocationProvider {
    coordinate: Coordinate,
}

impl FixedLocationProvider {
    pub fn new(coordinate: Coordinate) -> Self {
        FixedLocationProvider { coordinate }
    }
}

#[async_trait]
impl LocationProvider for FixedLocationProvider {
    fn is_supported(&self) -> bool {
        true
    }

    async fn current_position(&self, _options: &GeoOptions) -> Result<Coordinate, LocationError> {
        Ok(self.coordinate)
    }
}

#[derive(Debug)]
pub struct UnsupportedLocationProvider;

#[async_trait]
impl LocationProvider for UnsupportedLocationProvider {
    fn is_supported(&self) -> bool {
        false
    }

    async fn current_position(&self, _options: &GeoOptions) -> Result<Coordinate, LocationError> {
        Err(LocationError::Unsupported)
    }
}
