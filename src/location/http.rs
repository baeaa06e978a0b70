use crate::domain::Coordinate;
use crate::location::{GeoOptions, LocationError, LocationProvider};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tokio::sync::Mutex;
use tokio::time::{Instant, timeout};
use tracing::{debug, info, instrument, warn};

/// Resolves the position through an IP geolocation endpoint answering with `{"latitude": .., "longitude": ..}`.
#[derive(Debug)]
pub struct HttpLocationProvider {
    client: Client,
    url: String,
    last_position: Mutex<Option<(Instant, Coordinate)>>,
}

impl HttpLocationProvider {
    pub fn new(client: Client, url: String) -> Self {
        HttpLocationProvider {
            client,
            url,
            last_position: Mutex::new(None),
        }
    }

    async fn lookup(&self) -> Result<Coordinate, LocationError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| LocationError::PositionUnavailable(e.to_string()))?;

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => return Err(LocationError::PermissionDenied),
            status if !status.is_success() => return Err(LocationError::PositionUnavailable(format!("lookup returned status {}", status))),
            _ => {}
        }

        response
            .json::<Coordinate>()
            .await
            .map_err(|e| LocationError::PositionUnavailable(e.to_string()))
    }
}

#[async_trait]
impl LocationProvider for HttpLocationProvider {
    fn is_supported(&self) -> bool {
        true
    }

    #[instrument(skip(self))]
    async fn current_position(&self, options: &GeoOptions) -> Result<Coordinate, LocationError> {
        if let Some(maximum_age) = options.maximum_age {
            if let Some((acquired_at, coordinate)) = *self.last_position.lock().await {
                if acquired_at.elapsed() <= maximum_age {
                    debug!(?coordinate, "📍 Reusing position acquired {:?} ago", acquired_at.elapsed());
                    return Ok(coordinate);
                }
            }
        }

        if options.enable_high_accuracy {
            debug!("📍 High accuracy requested, an IP lookup can only resolve an approximate position");
        }

        info!("📍 Looking up position...");
        let result = match options.timeout {
            Some(duration) => timeout(duration, self.lookup()).await.unwrap_or(Err(LocationError::Timeout)),
            None => self.lookup().await,
        };

        match result {
            Ok(coordinate) => {
                info!(?coordinate, "📍 Looking up position... OK");
                *self.last_position.lock().await = Some((Instant::now(), coordinate));
                Ok(coordinate)
            }
            Err(e) => {
                warn!("📍 Looking up position... failed, {}", e);
                Err(e)
            }
        }
    }
}
