mod fixed;
mod http;
mod provider;

pub use fixed::{FixedLocationProvider, UnsupportedLocationProvider};
pub use http::HttpLocationProvider;
pub use provider::{GeoOptions, LocationError, LocationProvider};

use crate::app_config::{Location, LocationProviderKind};
use crate::domain::FALLBACK_COORDINATE;
use reqwest::Client;
use std::sync::Arc;
use tracing::warn;

pub fn new_provider(config: &Location, client: Client) -> Arc<dyn LocationProvider> {
    match config.provider() {
        LocationProviderKind::Fixed => Arc::new(FixedLocationProvider::new(config.fixed().unwrap_or(FALLBACK_COORDINATE))),
        LocationProviderKind::Http => match config.http_url() {
            Some(url) => Arc::new(HttpLocationProvider::new(client, url.to_string())),
            None => {
                warn!("⚠️ No http_url configured for the http location provider, geolocation is unavailable");
                Arc::new(UnsupportedLocationProvider)
            }
        },
        LocationProviderKind::Unsupported => Arc::new(UnsupportedLocationProvider),
    }
}
