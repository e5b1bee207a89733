use crate::app_config::AppConfig;
use crate::location::{ConfiguredPermissionGate, WatchCoordinateSource, feed_fixes};
use crate::presentation::{LogAlertSurface, LogMapPresenter, MapPresenter};
use crate::route::load_route_from;
use crate::scene::{Collaborators, CoordinatorSettings, SceneCoordinator, Session, scene_listener};
use std::sync::Arc;
use std::io::stdin;
use std::thread;
use tokio::task;
use tracing::info;

mod app_config;
mod domain;
mod extensions;
mod geo_point_deserializer;
mod location;
mod presentation;
mod proximity;
mod route;
mod scene;
#[cfg(test)]
mod test_support;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    info!("✅  Loaded configuration");

    let route = load_route_from(config.route().path()).await?;
    let session = Session::from_config(&config)?;

    let (fix_tx, source) = WatchCoordinateSource::channel();
    thread::spawn(move || feed_fixes(stdin().lock(), fix_tx));
    info!("✅  Listening for location fixes on stdin");

    let presenter: Arc<dyn MapPresenter> = Arc::new(LogMapPresenter);
    let collaborators = Collaborators {
        source: Arc::new(source),
        permission: Arc::new(ConfiguredPermissionGate::new(config.permission().platform(), config.permission().granted())),
        presenter: presenter.clone(),
        alerts: Arc::new(LogAlertSurface),
    };

    let coordinator = SceneCoordinator::new(session, route, CoordinatorSettings::from_config(&config), collaborators);
    let notifier_rx = coordinator.notifier();
    let listener = task::spawn(async move {
        scene_listener(notifier_rx, presenter).await;
    });
    info!("✅  Initialized scene listener");

    let handle = coordinator.start();
    info!("🔥 {} is up and running", env!("CARGO_PKG_NAME"));

    tokio::signal::ctrl_c().await?;
    handle.shutdown().await;
    listener.await?;
    info!("👋 {} stopped", env!("CARGO_PKG_NAME"));

    Ok(())
}
