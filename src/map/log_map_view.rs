use crate::domain::{FitOptions, GeoPoint, Marker};
use crate::map::MapView;
use async_trait::async_trait;
use tracing::info;

/// Renders the map to the log.
#[derive(Debug, Default)]
pub struct LogMapView;

#[async_trait]
impl MapView for LogMapView {
    async fn show_markers(&self, markers: &[Marker]) {
        for marker in markers {
            info!(icon = marker.icon.as_deref().unwrap_or("<default>"), "📌 {} at {}, {}", marker.title, marker.position, marker.subtitle);
        }
    }

    async fn fit_to_coordinates(&self, points: &[GeoPoint], options: &FitOptions) {
        let points = points.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ");
        info!(
            animated = options.animated,
            "🎥 Fitting camera to {} with padding {}/{}/{}/{}",
            points,
            options.edge_padding.top,
            options.edge_padding.right,
            options.edge_padding.bottom,
            options.edge_padding.left
        );
    }

    async fn show_status(&self, lines: &[String]) {
        for line in lines {
            info!("🟦 {}", line);
        }
    }
}
