use crate::domain::{EdgePadding, FitOptions, GeoPoint, Marker};
use crate::location::WatchOptions;
use crate::non_zero_deserializer::{non_zero_duration, non_zero_usize};
use config::{Config, ConfigError};
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    core: Core,
    refresh: Refresh,
    watch: WatchOptions,
    target: Target,
    you: You,
    map: Map,
    simulation: Simulation,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::with_prefix("TRACKER").separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn core(&self) -> &Core {
        &self.core
    }

    pub fn refresh(&self) -> &Refresh {
        &self.refresh
    }

    pub fn watch(&self) -> WatchOptions {
        self.watch
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn you(&self) -> &You {
        &self.you
    }

    pub fn map(&self) -> &Map {
        &self.map
    }

    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }
}

#[derive(Debug, Deserialize)]
pub struct Core {
    #[serde(deserialize_with = "non_zero_usize")]
    event_buffer_size: usize,
}

impl Core {
    pub fn event_buffer_size(&self) -> usize {
        self.event_buffer_size
    }
}

#[derive(Debug, Deserialize)]
pub struct Refresh {
    #[serde(deserialize_with = "non_zero_duration")]
    distance_interval: Duration,
    #[serde(deserialize_with = "non_zero_duration")]
    gps_status_interval: Duration,
}

impl Refresh {
    pub fn distance_interval(&self) -> Duration {
        self.distance_interval
    }

    pub fn gps_status_interval(&self) -> Duration {
        self.gps_status_interval
    }
}

#[derive(Debug, Deserialize)]
pub struct Target {
    location: GeoPoint,
    title: String,
    subtitle: String,
    icon: Option<String>,
}

impl Target {
    pub fn location(&self) -> GeoPoint {
        self.location
    }

    pub fn marker(&self) -> Marker {
        Marker {
            position: self.location,
            title: self.title.clone(),
            subtitle: self.subtitle.clone(),
            icon: self.icon.clone(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct You {
    title: String,
    subtitle: String,
}

impl You {
    pub fn marker_at(&self, position: GeoPoint) -> Marker {
        Marker {
            position,
            title: self.title.clone(),
            subtitle: self.subtitle.clone(),
            icon: None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Map {
    edge_padding: f64,
    animated: bool,
}

impl Map {
    pub fn fit_options(&self) -> FitOptions {
        FitOptions {
            edge_padding: EdgePadding::uniform(self.edge_padding),
            animated: self.animated,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Simulation {
    start: GeoPoint,
    bearing_deg: f64,
    speed_kmh: f64,
    permission_granted: bool,
    location_services_enabled: bool,
}

impl Simulation {
    pub fn start(&self) -> GeoPoint {
        self.start
    }

    pub fn bearing_deg(&self) -> f64 {
        self.bearing_deg
    }

    pub fn speed_kmh(&self) -> f64 {
        self.speed_kmh
    }

    pub fn permission_granted(&self) -> bool {
        self.permission_granted
    }

    pub fn location_services_enabled(&self) -> bool {
        self.location_services_enabled
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                core: Core { event_buffer_size: 8 },
                refresh: Refresh {
                    distance_interval: Duration::from_secs(2),
                    gps_status_interval: Duration::from_secs(5),
                },
                watch: WatchOptions::default(),
                target: Target {
                    location: GeoPoint::new(40.730610, -73.935242),
                    title: "Moto boy".to_string(),
                    subtitle: "Moto boy".to_string(),
                    icon: Some("assets/img1.png".to_string()),
                },
                you: You {
                    title: "You".to_string(),
                    subtitle: "You".to_string(),
                },
                map: Map {
                    edge_padding: 50.0,
                    animated: true,
                },
                simulation: Simulation {
                    start: GeoPoint::new(40.748817, -73.985428),
                    bearing_deg: 115.0,
                    speed_kmh: 30.0,
                    permission_granted: true,
                    location_services_enabled: true,
                },
            },
        }
    }

    pub fn distance_interval(mut self, interval: Duration) -> Self {
        self.config.refresh.distance_interval = interval;
        self
    }

    pub fn gps_status_interval(mut self, interval: Duration) -> Self {
        self.config.refresh.gps_status_interval = interval;
        self
    }

    pub fn permission_granted(mut self, granted: bool) -> Self {
        self.config.simulation.permission_granted = granted;
        self
    }

    pub fn location_services_enabled(mut self, enabled: bool) -> Self {
        self.config.simulation.location_services_enabled = enabled;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
