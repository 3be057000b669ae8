// Host-side tests for the distance and walking-time estimate.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod geo {
    include!("../src/core/geo.rs");
}

use constants::*;
use geo::*;

const ORIGIN: Coordinate = Coordinate::new(40.7128, -74.0060);

// Straight transcription of the formula, kept separate from the implementation
fn reference_km(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = (b.lat - a.lat) * std::f64::consts::PI / 180.0;
    let d_lon = (b.lon - a.lon) * std::f64::consts::PI / 180.0;
    let hav = (d_lat / 2.0).sin().powi(2)
        + (a.lat * std::f64::consts::PI / 180.0).cos()
            * (b.lat * std::f64::consts::PI / 180.0).cos()
            * (d_lon / 2.0).sin().powi(2);
    6371.0 * 2.0 * hav.sqrt().atan2((1.0 - hav).sqrt())
}

#[test]
fn distance_to_self_is_zero() {
    assert_eq!(haversine_km(ORIGIN, ORIGIN), 0.0);
    let m = DerivedMetrics::between(ORIGIN, ORIGIN);
    assert_eq!(m.distance_km, 0.0);
    assert_eq!(m.duration_min, 0);
}

#[test]
fn distance_is_symmetric() {
    let points = [
        Coordinate::new(40.7148, -74.0080),
        Coordinate::new(18.5204, 73.8567),
        Coordinate::new(-33.8688, 151.2093),
        Coordinate::new(0.0, 0.0),
    ];
    for a in points {
        for b in points {
            let ab = haversine_km(a, b);
            let ba = haversine_km(b, a);
            assert!((ab - ba).abs() < 1e-9, "asymmetric for {a:?} / {b:?}");
        }
    }
}

#[test]
fn known_value_matches_formula() {
    let target = Coordinate::new(40.7148, -74.0080);
    let d = haversine_km(ORIGIN, target);
    assert!((d - reference_km(ORIGIN, target)).abs() < 1e-12);
    assert!(d > 0.23 && d < 0.30, "got {d}");
    assert_eq!(round_km(d), 0.28);
}

#[test]
fn antipodal_points_do_not_produce_nan() {
    let d = haversine_km(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 180.0));
    assert!(d.is_finite());
    let half_circumference = std::f64::consts::PI * EARTH_RADIUS_KM;
    assert!((d - half_circumference).abs() < 1e-6);
}

#[test]
fn rounding_keeps_two_decimals() {
    assert_eq!(round_km(0.27905536), 0.28);
    assert_eq!(round_km(0.344068), 0.34);
    assert_eq!(round_km(1.0), 1.0);
    assert_eq!(round_km(0.004), 0.0);
}

#[test]
fn walking_minutes_rounds_up() {
    assert_eq!(walking_minutes(1.0), 12);
    assert_eq!(walking_minutes(0.28), 4); // 3.36 min
    assert_eq!(walking_minutes(0.34), 5); // 4.08 min
    assert_eq!(walking_minutes(0.5), 6);
    assert_eq!(walking_minutes(0.0), 0);
}

#[test]
fn metrics_use_displayed_distance() {
    let m = DerivedMetrics::between(ORIGIN, Coordinate::new(40.7148, -74.0080));
    assert_eq!(m.distance_km, 0.28);
    assert_eq!(m.duration_min, walking_minutes(0.28));
}

#[test]
fn lng_lat_orders_longitude_first() {
    assert_eq!(ORIGIN.lng_lat(), [-74.0060, 40.7128]);
}

#[test]
fn coordinate_validity() {
    assert!(ORIGIN.is_valid());
    assert!(Coordinate::new(90.0, 180.0).is_valid());
    assert!(!Coordinate::new(90.5, 0.0).is_valid());
    assert!(!Coordinate::new(0.0, -180.1).is_valid());
    assert!(!Coordinate::new(f64::NAN, 0.0).is_valid());
}
