use crate::location::{LocationReading, PermissionStatus};

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    PermissionResolved(PermissionStatus),
    PositionUpdated(LocationReading),
    GpsStatusChanged(bool),
    RefreshDistance,
}
