use crate::presentation::MapPresenter;
use crate::scene::SceneSnapshot;
use std::sync::Arc;
use tokio::sync::watch::Receiver;
use tracing::{debug, instrument};

/// Renders the current scene, then again after every change, until the coordinator is gone.
#[instrument(skip_all)]
pub async fn scene_listener(mut rx: Receiver<SceneSnapshot>, presenter: Arc<dyn MapPresenter>) {
    let snapshot = rx.borrow_and_update().clone();
    presenter.render(&snapshot.markers()).await;

    while rx.changed().await.is_ok() {
        let snapshot = rx.borrow_and_update().clone();
        presenter.render(&snapshot.markers()).await;
    }

    debug!("🗺️ Scene listener stopped");
}
