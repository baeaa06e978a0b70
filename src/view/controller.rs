use crate::app_config::Api;
use crate::domain::{Coordinate, FALLBACK_COORDINATE, Post, ViewState};
use crate::location::{GeoOptions, LocationError, LocationProvider};
use crate::posts::{FetchError, fetch_nearby_posts};
use crate::store::Store;
use reqwest::Client;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::watch;
use tracing::{debug, error, info, instrument, warn};

pub const UNSUPPORTED_MESSAGE: &str = "Geolocation is not supported.";
pub const LOCATION_FAILED_MESSAGE: &str = "Failed to load geo location.";
pub const POSTS_FAILED_MESSAGE: &str = "Failed to load post.";

/// Drives the nearby view: acquires the position, stores it, then loads the posts around it.
///
/// Every state change is published to subscribers. Fetches may overlap, only the response to the most recently
/// started fetch is applied.
#[derive(Debug)]
pub struct NearbyView {
    client: Client,
    api: Api,
    store: Store,
    provider: Arc<dyn LocationProvider>,
    geo_options: GeoOptions,
    state_tx: watch::Sender<ViewState>,
    latest_fetch: AtomicU64,
}

impl NearbyView {
    pub fn new(client: Client, api: Api, store: Store, provider: Arc<dyn LocationProvider>, geo_options: GeoOptions) -> Self {
        let (state_tx, _) = watch::channel(ViewState::default());

        NearbyView {
            client,
            api,
            store,
            provider,
            geo_options,
            state_tx,
            latest_fetch: AtomicU64::new(0),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.state_tx.subscribe()
    }

    pub fn state(&self) -> ViewState {
        self.state_tx.borrow().clone()
    }

    #[instrument(skip_all)]
    pub async fn mount(&self) {
        if !self.provider.is_supported() {
            warn!("📍 Geolocation is not supported by {:?}", self.provider);
            self.unsupported();
            return;
        }

        self.state_tx.send_modify(|state| {
            state.is_loading_geo_location = true;
            state.error = None;
        });

        match self.provider.current_position(&self.geo_options).await {
            Ok(coordinate) => self.on_location_loaded(coordinate).await,
            Err(LocationError::Unsupported) => self.unsupported(),
            Err(e) => self.on_location_failed(e).await,
        }
    }

    fn unsupported(&self) {
        self.state_tx.send_modify(|state| {
            state.is_loading_geo_location = false;
            state.error = Some(UNSUPPORTED_MESSAGE.to_string());
        });
    }

    async fn on_location_loaded(&self, coordinate: Coordinate) {
        info!(?coordinate, "📍 Acquired position");
        if let Err(e) = self.store.write_coordinate(coordinate).await {
            warn!("⚠️ Could not persist the position: {}", e);
        }

        self.state_tx.send_modify(|state| {
            state.is_loading_geo_location = false;
            state.error = None;
        });

        self.load_nearby_posts().await;
    }

    async fn on_location_failed(&self, error: LocationError) {
        warn!("📍 Failed to acquire position, {}. Falling back to {:?}", error, FALLBACK_COORDINATE);
        if let Err(e) = self.store.write_coordinate(FALLBACK_COORDINATE).await {
            warn!("⚠️ Could not persist the fallback position: {}", e);
        }

        self.state_tx.send_modify(|state| {
            state.is_loading_geo_location = false;
            state.error = Some(LOCATION_FAILED_MESSAGE.to_string());
        });
    }

    /// Replaces the posts with those around the stored position.
    #[instrument(skip_all)]
    pub async fn load_nearby_posts(&self) {
        let ticket = self.latest_fetch.fetch_add(1, Ordering::SeqCst) + 1;
        self.state_tx.send_modify(|state| {
            state.is_loading_posts = true;
            state.error = None;
        });

        let result = self.fetch_posts().await;

        let latest = self.latest_fetch.load(Ordering::SeqCst);
        if ticket != latest {
            debug!(ticket, latest, "Discarding the response of a superseded fetch");
            return;
        }

        match result {
            Ok(posts) => self.state_tx.send_modify(|state| {
                state.posts = posts;
                state.is_loading_posts = false;
                state.error = None;
            }),
            Err(e) => {
                error!("❌ Failed to load nearby posts: {}", e);
                self.state_tx.send_modify(|state| {
                    state.is_loading_posts = false;
                    state.error = Some(POSTS_FAILED_MESSAGE.to_string());
                });
            }
        }
    }

    async fn fetch_posts(&self) -> Result<Vec<Post>, FetchError> {
        let coordinate = self.store.read_coordinate().await?;
        let token = self.store.token().await?;
        fetch_nearby_posts(&self.client, &self.api, coordinate, &token).await
    }
}
