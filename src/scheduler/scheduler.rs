use crate::domain::events::Event;
use crate::location::LocationService;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::Sender;
use tokio::time::{MissedTickBehavior, interval};
use tokio_stream::StreamExt;
use tokio_stream::wrappers::IntervalStream;
use tracing::{debug, error, instrument};

/// Asks the store to recompute the distance on every tick, starting immediately.
#[instrument(skip(tx))]
pub async fn refresh_distance(period: Duration, tx: Sender<Event>) {
    let mut ticks = ticks(period);

    while ticks.next().await.is_some() {
        if tx.send(Event::RefreshDistance).await.is_err() {
            break;
        }
    }

    debug!("🕗 Distance refresh stopped");
}

/// Queries the provider status on every tick, starting immediately. A failed query reports GPS as off.
#[instrument(skip(service, tx))]
pub async fn poll_gps_status(service: Arc<dyn LocationService>, period: Duration, tx: Sender<Event>) {
    let mut ticks = ticks(period);

    while ticks.next().await.is_some() {
        let enabled = match service.provider_status().await {
            Ok(status) => status.location_services_enabled,
            Err(e) => {
                error!("❌ Could not check the GPS status: {}", e);
                false
            }
        };

        debug!(enabled, "🕗 Checked GPS status");
        if tx.send(Event::GpsStatusChanged(enabled)).await.is_err() {
            break;
        }
    }

    debug!("🕗 GPS status poll stopped");
}

fn ticks(period: Duration) -> IntervalStream {
    let mut interval = interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    IntervalStream::new(interval)
}
