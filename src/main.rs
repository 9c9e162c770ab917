use crate::app_config::AppConfig;
use crate::location::simulated::SimulatedLocationService;
use crate::map::LogMapView;
use std::sync::Arc;
use tracing::info;

mod app_config;
mod domain;
mod extensions;
mod geo_point_deserializer;
mod location;
mod map;
mod non_zero_deserializer;
mod scheduler;
mod screen;
mod screen_listener;
mod store;
#[cfg(test)]
mod test_support;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    info!("✅  Loaded configuration");

    let service = Arc::new(SimulatedLocationService::new(config.simulation()));
    info!("✅  Initialized location service");

    let screen = screen::mount(service, Arc::new(LogMapView), &config);
    info!("🔥 {} is up and running", env!("CARGO_PKG_NAME"));

    tokio::signal::ctrl_c().await?;
    info!("🛑 Last distance between markers: {:.3} km", screen.state().distance_km);
    screen.unmount();

    Ok(())
}
