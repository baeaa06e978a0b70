use crate::domain::events::Event;
use crate::view::NearbyView;
use std::sync::Arc;
use tokio::sync::mpsc::Receiver;
use tokio::task;
use tracing::{info, instrument};

/// Reloads the nearby posts for every refresh signal. Reloads are not serialized, a newer one supersedes an older
/// one that is still in flight.
#[instrument(skip_all)]
pub async fn refresh_listener(mut rx: Receiver<Event>, view: Arc<NearbyView>) {
    while let Some(event) = rx.recv().await {
        match event {
            Event::PostCreated => {
                info!("🔄 Post created, refreshing nearby posts");
                let view = view.clone();
                task::spawn(async move {
                    view.load_nearby_posts().await;
                });
            }
        }
    }
}
