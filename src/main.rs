use crate::app_config::AppConfig;
use crate::domain::events::Event;
use crate::refresh_listener::refresh_listener;
use crate::store::Store;
use crate::view::{NearbyView, render_listener};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio::task;
use tracing::{info, warn};

mod app_config;
mod client;
mod coordinate_deserializer;
mod domain;
mod location;
mod posts;
mod refresh_listener;
mod store;
mod view;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    info!("✅  Loaded configuration");

    let client = client::new_client(&config)?;

    let store = match config.storage().path() {
        Some(path) => Store::open(path).await?,
        None => Store::in_memory(),
    };
    if let Some(token) = config.storage().token() {
        if store.token().await.is_err() {
            store.set_token(token).await?;
        }
    }
    info!("✅  Initialized store");

    let provider = location::new_provider(config.location(), client.clone());
    let view = Arc::new(NearbyView::new(
        client,
        config.api().clone(),
        store,
        provider,
        config.location().options().clone(),
    ));

    let render_rx = view.subscribe();
    task::spawn(async move {
        render_listener(render_rx).await;
    });

    let (tx, rx) = mpsc::channel::<Event>(16);
    let refresh_view = view.clone();
    task::spawn(async move {
        refresh_listener(rx, refresh_view).await;
    });
    info!("✅  Initialized listeners");

    view.mount().await;
    info!("🔥 {} is up and running, type 'refresh' to reload or 'quit' to stop", env!("CARGO_PKG_NAME"));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            "r" | "refresh" => tx.send(Event::PostCreated).await?,
            "q" | "quit" => break,
            "" => {}
            other => warn!("⚠️ Unknown command '{}'", other),
        }
    }

    Ok(())
}
