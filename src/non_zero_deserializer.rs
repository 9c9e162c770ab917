use serde::de::Error;
use serde::{Deserialize, Deserializer};
use std::time::Duration;

/// A humantime duration that must be longer than zero, timers cannot tick at a zero period.
pub fn non_zero_duration<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let duration: Duration = humantime_serde::deserialize(deserializer)?;
    if duration.is_zero() {
        return Err(Error::custom("invalid duration: 0s, must be greater than zero"));
    }

    Ok(duration)
}

/// A channel capacity, channels cannot be created without one.
pub fn non_zero_usize<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    let value = usize::deserialize(deserializer)?;
    if value == 0 {
        return Err(Error::custom("invalid size: 0, must be greater than zero"));
    }

    Ok(value)
}
