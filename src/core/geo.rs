// Geographic coordinates and the straight-line distance estimate.
//
// Distances are great-circle (haversine) distances, not routed ones: the
// estimate ignores streets and building layout entirely.

use super::constants::{DISTANCE_DECIMALS, EARTH_RADIUS_KM, WALKING_SPEED_KMH};

/// A WGS84 position in decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// `[lon, lat]` order, as expected by web map widgets.
    #[inline]
    pub fn lng_lat(&self) -> [f64; 2] {
        [self.lon, self.lat]
    }

    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }
}

/// Great-circle distance in kilometres between two coordinates.
pub fn haversine_km(from: Coordinate, to: Coordinate) -> f64 {
    let d_lat = (to.lat - from.lat).to_radians();
    let d_lon = (to.lon - from.lon).to_radians();
    let a = ((d_lat / 2.0).sin().powi(2)
        + from.lat.to_radians().cos() * to.lat.to_radians().cos() * (d_lon / 2.0).sin().powi(2))
    .clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// Round a distance to the precision shown in the panel.
#[inline]
pub fn round_km(distance_km: f64) -> f64 {
    let scale = 10f64.powi(DISTANCE_DECIMALS);
    (distance_km * scale).round() / scale
}

/// Walking time in whole minutes, rounded up.
#[inline]
pub fn walking_minutes(distance_km: f64) -> u32 {
    // multiply before dividing so exact inputs (1.00 km) stay exact
    (distance_km * 60.0 / WALKING_SPEED_KMH).ceil().max(0.0) as u32
}

/// Distance and walking time from the origin to the current selection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DerivedMetrics {
    pub distance_km: f64,
    pub duration_min: u32,
}

impl DerivedMetrics {
    /// The duration is derived from the rounded distance so both figures
    /// shown side by side agree with each other.
    pub fn between(origin: Coordinate, target: Coordinate) -> Self {
        let distance_km = round_km(haversine_km(origin, target));
        Self {
            distance_km,
            duration_min: walking_minutes(distance_km),
        }
    }
}
