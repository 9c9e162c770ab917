mod service;
pub mod simulated;

pub use service::{LocationError, LocationReading, LocationService, PermissionStatus, ProviderStatus, WatchOptions};
