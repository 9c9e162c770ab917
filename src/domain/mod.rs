mod distance;
pub mod events;
mod geo_point;
mod marker;
mod screen_state;

pub use distance::{destination, distance_km};
pub use geo_point::GeoPoint;
pub use marker::{EdgePadding, FitOptions, Marker};
pub use screen_state::ScreenState;
