use crate::domain::GeoPoint;
use crate::extensions::angle_ext::AngleNormalization;

/// Mean radius of Earth, in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two points in kilometers, using the haversine formula.
///
/// Coordinates are not validated, out-of-range input yields a distance without failing and NaN propagates.
pub fn distance_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let delta_lat = (b.latitude - a.latitude).to_radians();
    let delta_lon = (b.longitude - a.longitude).to_radians();

    let sin_dlat_half = (delta_lat / 2.0).sin();
    let sin_dlon_half = (delta_lon / 2.0).sin();
    let h = sin_dlat_half * sin_dlat_half + lat1.cos() * lat2.cos() * sin_dlon_half * sin_dlon_half;

    // Out-of-range input or rounding can push h outside [0, 1]
    let angular_distance = 2.0 * h.clamp(0.0, 1.0).sqrt().asin();

    EARTH_RADIUS_KM * angular_distance
}

/// Point reached by travelling `distance_km` along a great circle from `origin` with the initial `bearing_deg`.
pub fn destination(origin: GeoPoint, bearing_deg: f64, distance_km: f64) -> GeoPoint {
    let angular_distance = distance_km / EARTH_RADIUS_KM;
    let bearing = bearing_deg.to_radians();
    let lat1 = origin.latitude.to_radians();
    let lon1 = origin.longitude.to_radians();

    let lat2 = (lat1.sin() * angular_distance.cos() + lat1.cos() * angular_distance.sin() * bearing.cos()).asin();
    let lon2 = lon1 + (bearing.sin() * angular_distance.sin() * lat1.cos()).atan2(angular_distance.cos() - lat1.sin() * lat2.sin());

    GeoPoint::new(lat2.to_degrees(), lon2.to_degrees().normalize_longitude())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const QUEENS: GeoPoint = GeoPoint {
        latitude: 40.730610,
        longitude: -73.935242,
    };
    const MIDTOWN: GeoPoint = GeoPoint {
        latitude: 40.748817,
        longitude: -73.985428,
    };

    #[test]
    fn distance_between_queens_and_midtown_is_about_4_6_km() {
        let distance = distance_km(QUEENS, MIDTOWN);
        assert!((distance - 4.6).abs() < 0.1, "unexpected distance {}", distance);
    }

    #[rstest]
    #[case(QUEENS, MIDTOWN)]
    #[case(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 90.0))]
    #[case(GeoPoint::new(-33.8688, 151.2093), GeoPoint::new(51.5074, -0.1278))]
    #[case(GeoPoint::new(89.9, 0.0), GeoPoint::new(-89.9, 180.0))]
    fn distance_is_symmetric(#[case] a: GeoPoint, #[case] b: GeoPoint) {
        assert_eq!(distance_km(a, b), distance_km(b, a));
    }

    #[rstest]
    #[case(QUEENS)]
    #[case(GeoPoint::new(0.0, 0.0))]
    #[case(GeoPoint::new(90.0, 180.0))]
    #[case(GeoPoint::new(-90.0, -180.0))]
    fn distance_to_itself_is_zero(#[case] point: GeoPoint) {
        assert_eq!(distance_km(point, point), 0.0);
    }

    #[test]
    fn a_quarter_of_the_equator() {
        let distance = distance_km(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 90.0));
        assert!((distance - EARTH_RADIUS_KM * std::f64::consts::FRAC_PI_2).abs() < 1e-9);
    }

    #[test]
    fn antipodal_points_are_half_a_circumference_apart() {
        let distance = distance_km(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 180.0));
        assert!((distance - EARTH_RADIUS_KM * std::f64::consts::PI).abs() < 1e-6);
    }

    #[rstest]
    #[case(0.0)]
    #[case(45.0)]
    #[case(115.0)]
    #[case(270.0)]
    fn distance_grows_monotonically_along_a_bearing(#[case] bearing_deg: f64) {
        let distances: Vec<f64> = (1..=20)
            .map(|step| destination(MIDTOWN, bearing_deg, step as f64 * 50.0))
            .map(|point| distance_km(MIDTOWN, point))
            .collect();

        assert!(distances.windows(2).all(|pair| pair[0] < pair[1]), "not monotonic: {:?}", distances);
    }

    #[rstest]
    #[case(0.0, 1.0)]
    #[case(90.0, 12.5)]
    #[case(200.0, 480.0)]
    fn destination_is_the_requested_distance_away(#[case] bearing_deg: f64, #[case] distance: f64) {
        let point = destination(QUEENS, bearing_deg, distance);
        assert!((distance_km(QUEENS, point) - distance).abs() < 1e-6);
    }

    #[test]
    fn destination_wraps_across_the_antimeridian() {
        let point = destination(GeoPoint::new(0.0, 179.9), 90.0, 50.0);
        assert!(point.longitude < -179.0, "longitude not wrapped: {}", point.longitude);
    }

    #[test]
    fn nan_input_propagates() {
        assert!(distance_km(GeoPoint::new(f64::NAN, 0.0), QUEENS).is_nan());
    }

    #[test]
    fn out_of_range_input_does_not_fail() {
        let distance = distance_km(GeoPoint::new(120.0, 400.0), QUEENS);
        assert!(distance.is_finite());
        assert!(distance >= 0.0);
    }
}
