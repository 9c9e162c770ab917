use crate::app_config::You;
use crate::domain::{FitOptions, GeoPoint, Marker, ScreenState};
use crate::location::PermissionStatus;
use crate::map::MapView;
use std::sync::Arc;
use tokio::sync::watch::Receiver;
use tracing::{debug, instrument};

/// What the screen looks like apart from its state.
#[derive(Clone, Debug)]
pub struct Layout {
    pub target: Marker,
    pub you: You,
    pub fit_options: FitOptions,
}

/// Renders the current snapshot and every following one.
#[instrument(skip_all)]
pub async fn screen_listener(mut rx: Receiver<ScreenState>, view: Arc<dyn MapView>, layout: Layout) {
    let mut last_fitted: Option<GeoPoint> = None;

    let snapshot = rx.borrow_and_update().clone();
    render(&snapshot, view.as_ref(), &layout, &mut last_fitted).await;

    while rx.changed().await.is_ok() {
        let snapshot = rx.borrow_and_update().clone();
        render(&snapshot, view.as_ref(), &layout, &mut last_fitted).await;
    }

    debug!("Store is gone, screen listener stopped");
}

async fn render(snapshot: &ScreenState, view: &dyn MapView, layout: &Layout, last_fitted: &mut Option<GeoPoint>) {
    let mut markers = Vec::with_capacity(2);
    if let Some(tracked) = snapshot.tracked {
        markers.push(layout.you.marker_at(tracked));
    }
    markers.push(layout.target.clone());
    view.show_markers(&markers).await;

    // Reframe only when the tracked position moved
    if let Some(tracked) = snapshot.tracked.filter(|tracked| *last_fitted != Some(*tracked)) {
        view.fit_to_coordinates(&[tracked, snapshot.target], &layout.fit_options).await;
        *last_fitted = Some(tracked);
    }

    view.show_status(&status_lines(snapshot)).await;
}

pub fn status_lines(snapshot: &ScreenState) -> Vec<String> {
    let mut lines = vec![
        format!("Distance between markers: {:.3} km", snapshot.distance_km),
        format!("GPS is {}", if snapshot.gps_enabled { "on" } else { "off" }),
    ];

    if snapshot.permission == Some(PermissionStatus::Denied) {
        lines.push("Location permission denied".to_string());
    }

    lines
}
