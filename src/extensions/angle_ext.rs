/// Wrapping of angles expressed in degrees.
pub trait AngleNormalization {
    /// Returns the angle wrapped into [-180, 180], treating `self` as a longitude.
    fn normalize_longitude(self) -> Self;

    /// Returns the angle wrapped into [0, 360), treating `self` as a compass bearing.
    fn normalize_bearing(self) -> Self;
}

macro_rules! impl_angle_normalization {
    ($($t:ty)*) => ($(
        impl AngleNormalization for $t {
            fn normalize_longitude(self) -> $t {
                let wrapped = (self + 180.0).rem_euclid(360.0) - 180.0;
                if wrapped == -180.0 && self > 0.0 { 180.0 } else { wrapped }
            }
            fn normalize_bearing(self) -> $t {
                self.rem_euclid(360.0)
            }
        }
    )*)
}

impl_angle_normalization! { f32 f64 }
