use crate::domain::Coordinate;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tokio::fs;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument};

pub const POSITION_KEY: &str = "POSITION";
pub const TOKEN_KEY: &str = "TOKEN";

/// Key-value storage for the last known position and the auth token.
///
/// Values are opaque strings, the position is stored JSON-encoded. When backed by a file, every write persists the
/// whole map before returning. Clones share the same entries.
#[derive(Clone, Debug)]
pub struct Store {
    entries: Arc<RwLock<HashMap<String, String>>>,
    path: Option<PathBuf>,
}

impl Store {
    pub fn in_memory() -> Self {
        Store {
            entries: Arc::new(RwLock::new(HashMap::new())),
            path: None,
        }
    }

    #[instrument]
    pub async fn open(path: &Path) -> Result<Self, StoreError> {
        let entries = match fs::read_to_string(path).await {
            Ok(content) => serde_json::from_str::<HashMap<String, String>>(&content)?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => {
                return Err(StoreError::Io {
                    source: e,
                    path: path.to_path_buf(),
                });
            }
        };

        info!("💾 Opened store with {} entry(ies)", entries.len());
        Ok(Store {
            entries: Arc::new(RwLock::new(entries)),
            path: Some(path.to_path_buf()),
        })
    }

    pub async fn get_item(&self, key: &str) -> Option<String> {
        self.entries.read().await.get(key).cloned()
    }

    /// Overwrites `key`. The in-memory value is updated even if persisting it fails.
    pub async fn set_item(&self, key: &str, value: String) -> Result<(), StoreError> {
        let mut write_guard = self.entries.write().await;
        write_guard.insert(key.to_string(), value);

        if let Some(path) = &self.path {
            let content = serde_json::to_vec_pretty(&*write_guard)?;
            fs::write(path, content).await.map_err(|e| StoreError::Io {
                source: e,
                path: path.clone(),
            })?;
            debug!(key, "💾 Persisted store to {}", path.display());
        }

        Ok(())
    }

    pub async fn write_coordinate(&self, coordinate: Coordinate) -> Result<(), StoreError> {
        self.set_item(POSITION_KEY, serde_json::to_string(&coordinate)?).await
    }

    pub async fn read_coordinate(&self) -> Result<Coordinate, StoreError> {
        let raw = self.get_item(POSITION_KEY).await.ok_or(StoreError::MissingCoordinate)?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub async fn set_token(&self, token: &str) -> Result<(), StoreError> {
        self.set_item(TOKEN_KEY, token.to_string()).await
    }

    pub async fn token(&self) -> Result<String, StoreError> {
        self.get_item(TOKEN_KEY).await.ok_or(StoreError::MissingToken)
    }
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("unable to access store file '{path}': {source}")]
    Io { source: io::Error, path: PathBuf },
    #[error("invalid store content: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no position has been stored")]
    MissingCoordinate,
    #[error("no auth token has been stored")]
    MissingToken,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_log::test;

    #[test(tokio::test)]
    async fn write_coordinate_overwrites_the_previous_position() {
        let store = Store::in_memory();

        store.write_coordinate(Coordinate::new(1.0, 2.0)).await.unwrap();
        store.write_coordinate(Coordinate::new(51.5, 4.25)).await.unwrap();

        assert_eq!(store.read_coordinate().await.unwrap(), Coordinate::new(51.5, 4.25));
        assert_eq!(store.get_item(POSITION_KEY).await.as_deref(), Some(r#"{"lat":51.5,"lon":4.25}"#));
    }

    #[test(tokio::test)]
    async fn read_coordinate_fails_if_nothing_was_stored() {
        let store = Store::in_memory();

        let result = store.read_coordinate().await;

        assert!(matches!(result, Err(StoreError::MissingCoordinate)));
    }

    #[test(tokio::test)]
    async fn read_coordinate_fails_on_malformed_content() {
        let store = Store::in_memory();
        store.set_item(POSITION_KEY, "{not json".to_string()).await.unwrap();

        let result = store.read_coordinate().await;

        assert!(matches!(result, Err(StoreError::Json(_))));
    }

    #[test(tokio::test)]
    async fn token_fails_if_nothing_was_stored() {
        let store = Store::in_memory();

        assert!(matches!(store.token().await, Err(StoreError::MissingToken)));

        store.set_token("secret").await.unwrap();
        assert_eq!(store.token().await.unwrap(), "secret");
    }

    #[test(tokio::test)]
    async fn clones_share_their_entries() {
        let store = Store::in_memory();
        let clone = store.clone();

        clone.set_token("secret").await.unwrap();

        assert_eq!(store.token().await.unwrap(), "secret");
    }

    #[test(tokio::test)]
    async fn persists_entries_across_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        let store = Store::open(&path).await.unwrap();
        store.write_coordinate(Coordinate::new(51.5, 4.25)).await.unwrap();
        store.set_token("secret").await.unwrap();

        let reopened = Store::open(&path).await.unwrap();
        assert_eq!(reopened.read_coordinate().await.unwrap(), Coordinate::new(51.5, 4.25));
        assert_eq!(reopened.token().await.unwrap(), "secret");
    }

    #[test(tokio::test)]
    async fn open_fails_on_a_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, "[1, 2").unwrap();

        let result = Store::open(&path).await;

        assert!(matches!(result, Err(StoreError::Json(_))));
    }
}
