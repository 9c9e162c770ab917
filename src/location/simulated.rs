use crate::app_config::Simulation;
use crate::domain::{GeoPoint, destination, distance_km};
use crate::extensions::angle_ext::AngleNormalization;
use crate::location::{LocationError, LocationReading, LocationService, PermissionStatus, ProviderStatus, WatchOptions};
use async_trait::async_trait;
use tokio::sync::mpsc;
use tokio::sync::mpsc::Receiver;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, info, instrument};

const SUBSCRIPTION_BUFFER_SIZE: usize = 16;

/// A location service that moves along a fixed bearing at a constant speed.
#[derive(Debug, Clone)]
pub struct SimulatedLocationService {
    start: GeoPoint,
    bearing_deg: f64,
    speed_kmh: f64,
    permission_granted: bool,
    location_services_enabled: bool,
}

impl SimulatedLocationService {
    pub fn new(config: &Simulation) -> Self {
        SimulatedLocationService {
            start: config.start(),
            bearing_deg: config.bearing_deg().normalize_bearing(),
            speed_kmh: config.speed_kmh(),
            permission_granted: config.permission_granted(),
            location_services_enabled: config.location_services_enabled(),
        }
    }
}

#[async_trait]
impl LocationService for SimulatedLocationService {
    async fn request_permission(&self) -> Result<PermissionStatus, LocationError> {
        Ok(if self.permission_granted {
            PermissionStatus::Granted
        } else {
            PermissionStatus::Denied
        })
    }

    async fn provider_status(&self) -> Result<ProviderStatus, LocationError> {
        Ok(ProviderStatus {
            location_services_enabled: self.location_services_enabled,
        })
    }

    #[instrument(skip(self))]
    async fn watch_position(&self, options: WatchOptions) -> Result<Receiver<LocationReading>, LocationError> {
        if !self.permission_granted {
            return Err(LocationError::PermissionDenied);
        }

        if !self.location_services_enabled {
            return Err(LocationError::ServiceUnavailable("location services are disabled".to_string()));
        }

        let (tx, rx) = mpsc::channel::<LocationReading>(SUBSCRIPTION_BUFFER_SIZE);
        let step_km = self.speed_kmh * options.time_interval.as_secs_f64() / 3600.0;
        let bearing_deg = self.bearing_deg;
        let mut position = self.start;

        tokio::spawn(async move {
            let mut ticker = interval(options.time_interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            let mut last_emitted: Option<GeoPoint> = None;

            loop {
                tokio::select! {
                    _ = ticker.tick() => {}
                    _ = tx.closed() => {
                        debug!("📍 Position subscription dropped, stopping simulation");
                        break;
                    }
                }

                let moved_m = last_emitted.map(|last| distance_km(last, position) * 1000.0);
                if moved_m.is_none_or(|moved_m| moved_m >= options.distance_interval_m) {
                    let reading = LocationReading {
                        accuracy_m: Some(options.accuracy.expected_error_m()),
                        ..LocationReading::new(position)
                    };

                    if tx.send(reading).await.is_err() {
                        debug!("📍 Position subscription dropped, stopping simulation");
                        break;
                    }
                    last_emitted = Some(position);
                }

                position = destination(position, bearing_deg, step_km);
            }
        });

        info!("📍 Watching simulated position from {}, {:.1} km/h at {}°", self.start, self.speed_kmh, self.bearing_deg);
        Ok(rx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_config::AppConfigBuilder;
    use std::time::Duration;
    use test_log::test;
    use tokio::time::sleep;

    fn service(permission_granted: bool, location_services_enabled: bool) -> SimulatedLocationService {
        let config = AppConfigBuilder::new()
            .permission_granted(permission_granted)
            .location_services_enabled(location_services_enabled)
            .build();
        SimulatedLocationService::new(config.simulation())
    }

    #[test(tokio::test)]
    async fn resolves_the_configured_permission() {
        assert_eq!(service(true, true).request_permission().await.unwrap(), PermissionStatus::Granted);
        assert_eq!(service(false, true).request_permission().await.unwrap(), PermissionStatus::Denied);
    }

    #[test(tokio::test)]
    async fn reports_the_provider_status() {
        let status = service(true, false).provider_status().await.unwrap();
        assert!(!status.location_services_enabled);
    }

    #[test(tokio::test)]
    async fn refuses_to_watch_without_permission() {
        let result = service(false, true).watch_position(WatchOptions::default()).await;
        assert!(matches!(result, Err(LocationError::PermissionDenied)));
    }

    #[test(tokio::test)]
    async fn refuses_to_watch_when_location_services_are_disabled() {
        let result = service(true, false).watch_position(WatchOptions::default()).await;
        assert!(matches!(result, Err(LocationError::ServiceUnavailable(_))));
    }

    #[test(tokio::test(start_paused = true))]
    async fn emits_the_start_position_first_and_then_moves_along_the_bearing() {
        let service = service(true, true);
        let mut rx = service.watch_position(WatchOptions::default()).await.unwrap();

        let first = rx.recv().await.unwrap();
        let second = rx.recv().await.unwrap();

        assert_eq!(first.point, service.start);
        assert_eq!(first.accuracy_m, Some(5.0));

        // 30 km/h for one second
        let moved_km = distance_km(first.point, second.point);
        assert!((moved_km - 30.0 / 3600.0).abs() < 1e-9, "moved {} km", moved_km);
    }

    #[test(tokio::test(start_paused = true))]
    async fn suppresses_readings_below_the_distance_interval() {
        let service = service(true, true);
        let options = WatchOptions {
            distance_interval_m: 20.0,
            ..WatchOptions::default()
        };
        let mut rx = service.watch_position(options).await.unwrap();

        let first = rx.recv().await.unwrap();
        let second = rx.recv().await.unwrap();

        // 8.3 m per second, the third tick is the first one at least 20 m away
        assert!(distance_km(first.point, second.point) * 1000.0 >= 20.0);
        assert!(second.timestamp >= first.timestamp);
    }

    #[test(tokio::test(start_paused = true))]
    async fn a_stationary_simulation_stops_when_the_subscription_is_dropped() {
        let mut stationary = service(true, true);
        stationary.speed_kmh = 0.0;
        let metrics = tokio::runtime::Handle::current().metrics();
        let tasks_before = metrics.num_alive_tasks();

        let mut rx = stationary.watch_position(WatchOptions::default()).await.unwrap();
        rx.recv().await.unwrap();
        assert_eq!(metrics.num_alive_tasks(), tasks_before + 1);

        // Every later reading is suppressed, nothing is ever sent again
        drop(rx);
        sleep(Duration::from_secs(3600)).await;

        assert_eq!(metrics.num_alive_tasks(), tasks_before);
    }
}
