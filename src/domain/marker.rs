use crate::domain::GeoPoint;

#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    pub position: GeoPoint,
    pub title: String,
    pub subtitle: String,
    pub icon: Option<String>, // Path to a custom marker image
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EdgePadding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl EdgePadding {
    pub fn uniform(padding: f64) -> Self {
        EdgePadding {
            top: padding,
            right: padding,
            bottom: padding,
            left: padding,
        }
    }
}

/// How the camera frames a set of coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FitOptions {
    pub edge_padding: EdgePadding,
    pub animated: bool,
}

impl Default for FitOptions {
    fn default() -> Self {
        FitOptions {
            edge_padding: EdgePadding::uniform(50.0),
            animated: true,
        }
    }
}
