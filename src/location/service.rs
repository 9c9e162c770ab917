use crate::domain::GeoPoint;
use crate::non_zero_deserializer::non_zero_duration;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::fmt::Debug;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::mpsc::Receiver;

/// Access to the platform location services.
#[async_trait]
pub trait LocationService: Debug + Send + Sync {
    /// Asks for permission to read the foreground location.
    async fn request_permission(&self) -> Result<PermissionStatus, LocationError>;

    async fn provider_status(&self) -> Result<ProviderStatus, LocationError>;

    /// Subscribes to position updates. The subscription ends when the receiver is dropped.
    async fn watch_position(&self, options: WatchOptions) -> Result<Receiver<LocationReading>, LocationError>;
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ProviderStatus {
    pub location_services_enabled: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LocationReading {
    pub point: GeoPoint,
    pub accuracy_m: Option<f64>,
    pub timestamp: DateTime<Utc>,
}

impl LocationReading {
    pub fn new(point: GeoPoint) -> Self {
        LocationReading {
            point,
            accuracy_m: None,
            timestamp: Utc::now(),
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accuracy {
    Lowest,
    Low,
    Balanced,
    High,
    Highest,
    #[default]
    BestForNavigation,
}

impl Accuracy {
    /// Typical horizontal accuracy in meters for readings at this level.
    pub fn expected_error_m(&self) -> f64 {
        match self {
            Accuracy::Lowest => 3000.0,
            Accuracy::Low => 1000.0,
            Accuracy::Balanced => 100.0,
            Accuracy::High => 10.0,
            Accuracy::Highest | Accuracy::BestForNavigation => 5.0,
        }
    }
}

/// Thresholds for position updates.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
pub struct WatchOptions {
    pub accuracy: Accuracy,
    #[serde(deserialize_with = "non_zero_duration")]
    pub time_interval: Duration,
    pub distance_interval_m: f64,
}

impl Default for WatchOptions {
    fn default() -> Self {
        WatchOptions {
            accuracy: Accuracy::BestForNavigation,
            time_interval: Duration::from_secs(1),
            distance_interval_m: 1.0,
        }
    }
}

#[derive(Error, Debug)]
pub enum LocationError {
    #[error("location permission denied")]
    PermissionDenied,
    #[error("location service unavailable: {0}")]
    ServiceUnavailable(String),
    #[error("location subscription closed")]
    SubscriptionClosed,
}
