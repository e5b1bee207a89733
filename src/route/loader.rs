use crate::route::TrainRoute;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::task::JoinError;
use tokio::{fs, task};
use tracing::{info, instrument, warn};

#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub async fn load_route_from(path: impl AsRef<Path>) -> Result<TrainRoute, RouteError> {
    let path = path.as_ref().to_path_buf();
    info!("🚆 Loading train route...");

    let content = fs::read_to_string(&path).await.map_err(|source| RouteError::Io {
        source,
        path: path.clone(),
    })?;

    let route = task::spawn_blocking(move || serde_json::from_str::<TrainRoute>(&content).map_err(|source| RouteError::Json { source, path })).await??;

    if route.is_empty() {
        warn!("⚠️ Train route is empty, the train will stay at its fallback position");
    }

    info!("🚆 Loading train route... OK, {} position(s)", route.len());
    Ok(route)
}

#[derive(Error, Debug)]
pub enum RouteError {
    #[error("unable to read '{}': {}", path.display(), source)]
    Io { source: io::Error, path: PathBuf },
    #[error("invalid train route '{}': {}", path.display(), source)]
    Json { source: serde_json::Error, path: PathBuf },
    #[error(transparent)]
    JoinError(#[from] JoinError),
}
