use crate::app_config::Api;
use crate::domain::{Coordinate, Post};
use crate::store::StoreError;
use reqwest::header::{AUTHORIZATION, HeaderValue, InvalidHeaderValue};
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::{debug, info, instrument};

/// Search radius sent with every query.
pub const SEARCH_RANGE: u32 = 1;

#[instrument(skip(client, api, token))]
pub async fn fetch_nearby_posts(client: &Client, api: &Api, coordinate: Coordinate, token: &str) -> Result<Vec<Post>, FetchError> {
    let url = format!(
        "{}/search?lat={}&lon={}&range={}",
        api.root(),
        coordinate.latitude,
        coordinate.longitude,
        SEARCH_RANGE
    );

    let mut authorization = HeaderValue::from_str(&format!("{} {}", api.auth_scheme(), token))?;
    authorization.set_sensitive(true);

    info!("🔎 Searching nearby posts...");
    let response = client.get(&url).header(AUTHORIZATION, authorization).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }

    let body = response.text().await?;
    let posts = parse_posts(&body)?;
    info!("🔎 Searching nearby posts... OK, {} found", posts.len());

    Ok(posts)
}

/// An empty body or a JSON `null` means there are no posts.
fn parse_posts(body: &str) -> Result<Vec<Post>, FetchError> {
    if body.trim().is_empty() {
        debug!("Received an empty body");
        return Ok(Vec::new());
    }

    Ok(serde_json::from_str::<Option<Vec<Post>>>(body)?.unwrap_or_default())
}

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("search returned status {0}")]
    Status(StatusCode),
    #[error("unable to decode posts: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid authorization header value: {0}")]
    InvalidHeaderValue(#[from] InvalidHeaderValue),
    #[error(transparent)]
    Store(#[from] StoreError),
}
