use crate::domain::events::Event;
use crate::domain::{GeoPoint, distance_km};
use crate::location::PermissionStatus;

/// Everything the map screen shows, owned by the store and changed only through [`ScreenState::apply`].
#[derive(Clone, Debug, PartialEq)]
pub struct ScreenState {
    pub tracked: Option<GeoPoint>,
    pub target: GeoPoint,
    pub distance_km: f64,
    pub gps_enabled: bool,
    pub permission: Option<PermissionStatus>,
}

impl ScreenState {
    pub fn new(target: GeoPoint) -> Self {
        ScreenState {
            tracked: None,
            target,
            distance_km: 0.0,
            gps_enabled: false,
            permission: None,
        }
    }

    /// Applies an event, returns whether anything changed.
    pub fn apply(&mut self, event: Event) -> bool {
        match event {
            Event::PermissionResolved(status) => set_if_changed(&mut self.permission, Some(status)),
            Event::PositionUpdated(reading) => {
                let moved = set_if_changed(&mut self.tracked, Some(reading.point));
                self.recompute_distance() || moved
            }
            Event::GpsStatusChanged(enabled) => set_if_changed(&mut self.gps_enabled, enabled),
            Event::RefreshDistance => self.recompute_distance(),
        }
    }

    /// The last known distance is kept while there is no fix.
    fn recompute_distance(&mut self) -> bool {
        match self.tracked {
            Some(tracked) => set_if_changed(&mut self.distance_km, distance_km(tracked, self.target)),
            None => false,
        }
    }
}

fn set_if_changed<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }

    *slot = value;
    true
}
