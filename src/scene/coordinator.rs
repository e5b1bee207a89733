use crate::app_config::AppConfig;
use crate::domain::{Alert, MapRegion};
use crate::location::{CoordinateSource, LocationError, LocationOptions, Permission, PermissionGate};
use crate::presentation::{AlertSurface, MapPresenter};
use crate::route::TrainRoute;
use crate::scene::{SceneSnapshot, Session};
use futures::future::join_all;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{RwLock, watch};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tracing::{debug, info, instrument, warn};

pub type SharedSession = Arc<RwLock<Session>>;

#[derive(Clone, Debug)]
pub struct CoordinatorSettings {
    pub user_interval: Duration,
    pub train_interval: Duration,
    pub recenter_duration: Duration,
    pub location: LocationOptions,
    pub train_fallback: MapRegion,
}

impl CoordinatorSettings {
    pub fn from_config(config: &AppConfig) -> Self {
        CoordinatorSettings {
            user_interval: config.refresh().user_interval(),
            train_interval: config.refresh().train_interval(),
            recenter_duration: config.refresh().recenter_duration(),
            location: config.location().clone(),
            train_fallback: config.scene().train_fallback(),
        }
    }
}

/// The external systems the coordinator talks to.
#[derive(Clone, Debug)]
pub struct Collaborators {
    pub source: Arc<dyn CoordinateSource>,
    pub permission: Arc<dyn PermissionGate>,
    pub presenter: Arc<dyn MapPresenter>,
    pub alerts: Arc<dyn AlertSurface>,
}

#[derive(Debug, PartialEq)]
pub enum UserRefresh {
    PermissionDenied,
    Stopped,
    Failed(LocationError),
    Updated { distance_m: u32, alert: Option<Alert> },
}

/// Owns the session and drives its two refresh loops.
///
/// The user and train loops are separate tasks on their own timers. Nothing orders a user tick
/// relative to a train tick, they only meet through the shared session.
#[derive(Debug)]
pub struct SceneCoordinator {
    session: SharedSession,
    route: TrainRoute,
    settings: CoordinatorSettings,
    collaborators: Collaborators,
    notifier_tx: watch::Sender<SceneSnapshot>,
}

impl SceneCoordinator {
    pub fn new(session: Session, route: TrainRoute, settings: CoordinatorSettings, collaborators: Collaborators) -> Self {
        let (notifier_tx, _) = watch::channel(session.snapshot());

        SceneCoordinator {
            session: Arc::new(RwLock::new(session)),
            route,
            settings,
            collaborators,
            notifier_tx,
        }
    }

    #[cfg(test)]
    pub fn session(&self) -> SharedSession {
        self.session.clone()
    }

    pub fn notifier(&self) -> watch::Receiver<SceneSnapshot> {
        self.notifier_tx.subscribe()
    }

    /// Runs a single user refresh: fetch a fix, recenter the map and evaluate the distance to the gate.
    #[instrument(skip_all)]
    pub async fn refresh_user(&self) -> UserRefresh {
        if self.collaborators.permission.request().await == Permission::Denied {
            debug!("🔐 Location permission denied, skipping user refresh");
            return UserRefresh::PermissionDenied;
        }

        if self.session.read().await.is_stopped() {
            debug!("🛑 Vehicle stopped, skipping user refresh");
            return UserRefresh::Stopped;
        }

        let position = match self.collaborators.source.current_position(&self.settings.location).await {
            Ok(position) => position,
            Err(err) => {
                warn!("⚠️ {}", err);
                return UserRefresh::Failed(err);
            }
        };

        let region = MapRegion::around(position.point);
        let (distance_m, alert, snapshot) = {
            let mut session = self.session.write().await;
            let (distance_m, alert) = session.move_user(region);
            (distance_m, alert, session.snapshot())
        };
        info!(
            latitude = region.latitude(),
            longitude = region.longitude(),
            distance_m,
            "🧍 User moved, {} m from the railway gate",
            distance_m
        );
        self.notifier_tx.send_replace(snapshot);

        self.collaborators
            .presenter
            .animate_to_region(&region, self.settings.recenter_duration)
            .await;

        if let Some(alert) = alert {
            self.collaborators.alerts.show(alert).await;
        }

        UserRefresh::Updated { distance_m, alert }
    }

    /// Moves the train to its next route position.
    #[instrument(skip_all)]
    pub async fn advance_train(&self) -> MapRegion {
        let (region, snapshot) = {
            let mut session = self.session.write().await;
            let region = session.advance_train(&self.route, self.settings.train_fallback);
            (region, session.snapshot())
        };
        debug!(
            step = snapshot.train_step,
            latitude = region.latitude(),
            longitude = region.longitude(),
            "🚆 Train moved"
        );
        self.notifier_tx.send_replace(snapshot);

        region
    }

    /// Starts both refresh loops. They run until [`SceneHandle::shutdown`] is called.
    pub fn start(self) -> SceneHandle {
        let coordinator = Arc::new(self);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let user_interval = coordinator.settings.user_interval;
        let user_coordinator = coordinator.clone();
        let user_task = tokio::spawn(refresh_loop("user", user_interval, shutdown_rx.clone(), move || {
            let coordinator = user_coordinator.clone();
            async move {
                coordinator.refresh_user().await;
            }
        }));

        let train_interval = coordinator.settings.train_interval;
        let train_coordinator = coordinator.clone();
        let train_task = tokio::spawn(refresh_loop("train", train_interval, shutdown_rx, move || {
            let coordinator = train_coordinator.clone();
            async move {
                coordinator.advance_train().await;
            }
        }));

        info!(?user_interval, ?train_interval, "🔄 Started refresh loops");
        SceneHandle {
            shutdown_tx,
            tasks: vec![user_task, train_task],
        }
    }
}

/// Runs `tick` every `period`, starting one period from now, until shutdown is signalled.
///
/// A tick in progress when shutdown arrives is dropped. Ticks of the same loop never overlap, a
/// tick that overruns its period makes the loop skip the missed ones.
#[instrument(skip(period, shutdown_rx, tick))]
async fn refresh_loop<F, Fut>(name: &'static str, period: Duration, mut shutdown_rx: watch::Receiver<bool>, tick: F)
where
    F: Fn() -> Fut,
    Fut: Future<Output = ()>,
{
    let mut interval = interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            biased;
            _ = shutdown_rx.changed() => break,
            _ = async {
                interval.tick().await;
                tick().await;
            } => {}
        }
    }

    debug!("🔄 Stopped {} refresh loop", name);
}

/// Handle to the running refresh loops.
#[derive(Debug)]
pub struct SceneHandle {
    shutdown_tx: watch::Sender<bool>,
    tasks: Vec<JoinHandle<()>>,
}

impl SceneHandle {
    /// Stops both loops and waits for them to finish.
    pub async fn shutdown(self) {
        info!("🔄 Stopping refresh loops...");
        self.shutdown_tx.send_replace(true);

        for result in join_all(self.tasks).await {
            if let Err(err) = result {
                warn!("⚠️ Refresh loop ended abnormally: {}", err);
            }
        }
        info!("🔄 Stopping refresh loops... OK");
    }
}
