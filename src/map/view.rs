use crate::domain::{FitOptions, GeoPoint, Marker};
use async_trait::async_trait;
use std::fmt::Debug;

/// The map widget the screen draws on.
#[async_trait]
pub trait MapView: Debug + Send + Sync {
    /// Replaces the markers on the map.
    async fn show_markers(&self, markers: &[Marker]);

    /// Moves the camera so every point is visible.
    async fn fit_to_coordinates(&self, points: &[GeoPoint], options: &FitOptions);

    /// Replaces the lines of the status panel at the bottom of the screen.
    async fn show_status(&self, lines: &[String]);
}
