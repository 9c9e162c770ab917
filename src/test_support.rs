use crate::domain::{FitOptions, GeoPoint, Marker};
use crate::location::{LocationError, LocationReading, LocationService, PermissionStatus, ProviderStatus, WatchOptions};
use crate::map::MapView;
use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::mpsc;
use tokio::sync::mpsc::{Receiver, Sender};

/// A location service driven by the test through the returned sender.
#[derive(Debug)]
pub struct StubLocationService {
    permission: PermissionStatus,
    provider_enabled: Option<bool>,
    provider_calls: AtomicUsize,
    readings: Mutex<Option<Receiver<LocationReading>>>,
}

impl StubLocationService {
    /// `provider_enabled` of `None` makes every provider status query fail.
    pub fn new(permission: PermissionStatus, provider_enabled: Option<bool>) -> (Self, Sender<LocationReading>) {
        let (tx, rx) = mpsc::channel::<LocationReading>(8);
        let service = StubLocationService {
            permission,
            provider_enabled,
            provider_calls: AtomicUsize::new(0),
            readings: Mutex::new(Some(rx)),
        };
        (service, tx)
    }

    pub fn provider_calls(&self) -> usize {
        self.provider_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LocationService for StubLocationService {
    async fn request_permission(&self) -> Result<PermissionStatus, LocationError> {
        Ok(self.permission)
    }

    async fn provider_status(&self) -> Result<ProviderStatus, LocationError> {
        self.provider_calls.fetch_add(1, Ordering::SeqCst);
        match self.provider_enabled {
            Some(location_services_enabled) => Ok(ProviderStatus { location_services_enabled }),
            None => Err(LocationError::ServiceUnavailable("provider query failed".to_string())),
        }
    }

    async fn watch_position(&self, _options: WatchOptions) -> Result<Receiver<LocationReading>, LocationError> {
        self.readings.lock().unwrap().take().ok_or(LocationError::SubscriptionClosed)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum MapCall {
    Markers(Vec<Marker>),
    Fit(Vec<GeoPoint>, FitOptions),
    Status(Vec<String>),
}

/// A map view that records every call.
#[derive(Debug, Default)]
pub struct RecordingMapView {
    calls: Mutex<Vec<MapCall>>,
}

impl RecordingMapView {
    pub fn calls(&self) -> Vec<MapCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_status(&self) -> Option<Vec<String>> {
        self.calls().into_iter().rev().find_map(|call| match call {
            MapCall::Status(lines) => Some(lines),
            _ => None,
        })
    }
}

#[async_trait]
impl MapView for RecordingMapView {
    async fn show_markers(&self, markers: &[Marker]) {
        self.calls.lock().unwrap().push(MapCall::Markers(markers.to_vec()));
    }

    async fn fit_to_coordinates(&self, points: &[GeoPoint], options: &FitOptions) {
        self.calls.lock().unwrap().push(MapCall::Fit(points.to_vec(), *options));
    }

    async fn show_status(&self, lines: &[String]) {
        self.calls.lock().unwrap().push(MapCall::Status(lines.to_vec()));
    }
}
