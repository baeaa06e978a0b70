use crate::domain::Coordinate;
use async_trait::async_trait;
use serde::Deserialize;
use std::fmt::Debug;
use std::time::Duration;
use thiserror::Error;

/// Options passed through to the position lookup on every request.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct GeoOptions {
    /// Only a hint, a provider without a more precise source reports what it has
    #[serde(default)]
    pub enable_high_accuracy: bool,
    #[serde(default, with = "humantime_serde")]
    pub timeout: Option<Duration>,
    /// A previously acquired position younger than this may be reused
    #[serde(default, with = "humantime_serde")]
    pub maximum_age: Option<Duration>,
}

#[async_trait]
pub trait LocationProvider: Debug + Send + Sync {
    fn is_supported(&self) -> bool;

    async fn current_position(&self, options: &GeoOptions) -> Result<Coordinate, LocationError>;
}

#[derive(Error, Debug, PartialEq)]
pub enum LocationError {
    #[error("geolocation is not supported")]
    Unsupported,
    #[error("permission to access the position was denied")]
    PermissionDenied,
    #[error("position unavailable: {0}")]
    PositionUnavailable(String),
    #[error("timed out while acquiring the position")]
    Timeout,
}
