use crate::domain::GeoPoint;
use serde::de::Error;
use serde::{Deserialize, Deserializer};

impl<'de> Deserialize<'de> for GeoPoint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Coordinates {
            latitude: f64,
            longitude: f64,
        }

        let Coordinates { latitude, longitude } = Coordinates::deserialize(deserializer)?;
        let latitude = within_bounds("latitude", latitude, 90.0).map_err(Error::custom)?;
        let longitude = within_bounds("longitude", longitude, 180.0).map_err(Error::custom)?;

        Ok(GeoPoint::new(latitude, longitude))
    }
}

/// Rejects NaN and anything outside of [-bound, bound].
fn within_bounds(name: &str, value: f64, bound: f64) -> Result<f64, String> {
    if (-bound..=bound).contains(&value) {
        Ok(value)
    } else {
        Err(format!("invalid {}: {}, must be between -{} and {}", name, value, bound, bound))
    }
}
