use crate::app_config::AppConfig;
use crate::domain::ScreenState;
use crate::domain::events::Event;
use crate::location::{LocationError, LocationService, PermissionStatus, WatchOptions};
use crate::map::MapView;
use crate::scheduler::{TaskGuard, poll_gps_status, refresh_distance};
use crate::screen_listener::{Layout, screen_listener};
use crate::store::Store;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::sync::mpsc::Sender;
use tokio::sync::watch::Receiver as WatchReceiver;
use tokio_stream::StreamExt;
use tokio_stream::wrappers::ReceiverStream;
use tracing::{debug, error, info, instrument, warn};

/// A mounted map screen. Every timer and subscription lives as long as this handle.
#[derive(Debug)]
pub struct MountedScreen {
    notifier: WatchReceiver<ScreenState>,
    tasks: Vec<TaskGuard>,
}

impl MountedScreen {
    pub fn state(&self) -> ScreenState {
        self.notifier.borrow().clone()
    }

    pub fn subscribe(&self) -> WatchReceiver<ScreenState> {
        self.notifier.clone()
    }

    pub fn unmount(self) {
        info!("🛑 Unmounting map screen, cancelling {} task(s)", self.tasks.len());
    }
}

#[instrument(skip_all)]
pub fn mount(service: Arc<dyn LocationService>, view: Arc<dyn MapView>, config: &AppConfig) -> MountedScreen {
    let (tx, rx) = mpsc::channel::<Event>(config.core().event_buffer_size());
    let mut store = Store::new(ScreenState::new(config.target().location()), rx);
    let notifier = store.notifier();

    let layout = Layout {
        target: config.target().marker(),
        you: config.you().clone(),
        fit_options: config.map().fit_options(),
    };

    let refresh = config.refresh();
    let tasks = vec![
        TaskGuard::spawn("store", async move { store.listen().await }),
        TaskGuard::spawn("screen_listener", screen_listener(notifier.clone(), view, layout)),
        TaskGuard::spawn("gps_status", poll_gps_status(service.clone(), refresh.gps_status_interval(), tx.clone())),
        TaskGuard::spawn("distance_refresh", refresh_distance(refresh.distance_interval(), tx.clone())),
        TaskGuard::spawn("location", track_location(service, config.watch(), tx)),
    ];

    info!("✅  Mounted map screen with {} task(s)", tasks.len());
    MountedScreen { notifier, tasks }
}

async fn track_location(service: Arc<dyn LocationService>, options: WatchOptions, tx: Sender<Event>) {
    match forward_positions(service.as_ref(), options, tx).await {
        Ok(()) => debug!("📍 Screen is gone, position tracking stopped"),
        Err(LocationError::PermissionDenied) => warn!("⚠️ Location permission denied, the distance will not be tracked"),
        Err(e) => error!("❌ Position tracking stopped: {}", e),
    }
}

#[instrument(skip_all)]
async fn forward_positions(service: &dyn LocationService, options: WatchOptions, tx: Sender<Event>) -> Result<(), LocationError> {
    let permission = service.request_permission().await?;
    if tx.send(Event::PermissionResolved(permission)).await.is_err() {
        return Ok(());
    }

    if permission != PermissionStatus::Granted {
        return Err(LocationError::PermissionDenied);
    }

    let mut readings = ReceiverStream::new(service.watch_position(options).await?);
    info!("📍 Watching position...");

    while let Some(reading) = readings.next().await {
        debug!(accuracy_m = reading.accuracy_m, "📍 New position {}", reading.point);
        if tx.send(Event::PositionUpdated(reading)).await.is_err() {
            return Ok(());
        }
    }

    Err(LocationError::SubscriptionClosed)
}
