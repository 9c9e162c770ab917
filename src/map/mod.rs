mod log_map_view;
mod view;

pub use log_map_view::LogMapView;
pub use view::MapView;
