// The static list of amenities shown on the map and in the sidebar.
//
// The registry is built once at start-up and never mutated. Its order is the
// sidebar order. Construction validates the records and refuses to build a
// registry in which a selection could be ambiguous.

use super::constants::{ORIGIN_LAT, ORIGIN_LON};
use super::geo::Coordinate;
use fnv::FnvHashSet;
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AmenityId(pub u32);

impl fmt::Display for AmenityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AmenityId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(AmenityId)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AmenityPoint {
    pub id: AmenityId,
    pub name: String,
    pub coordinate: Coordinate,
    /// CSS hex colour, `#rrggbb`.
    pub color: String,
    pub icon: String,
}

impl AmenityPoint {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        coordinate: Coordinate,
        color: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            id: AmenityId(id),
            name: name.into(),
            coordinate,
            color: color.into(),
            icon: icon.into(),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum RegistryError {
    #[error("amenity registry is empty")]
    Empty,
    #[error("duplicate amenity id {0}")]
    DuplicateId(AmenityId),
    #[error("amenity {id} has an invalid coordinate ({lat}, {lon})")]
    InvalidCoordinate { id: AmenityId, lat: f64, lon: f64 },
}

/// The building's own position.
pub const ORIGIN: Coordinate = Coordinate::new(ORIGIN_LAT, ORIGIN_LON);

#[derive(Clone, Debug)]
pub struct AmenityRegistry {
    points: Vec<AmenityPoint>,
}

impl AmenityRegistry {
    pub fn new(points: Vec<AmenityPoint>) -> Result<Self, RegistryError> {
        if points.is_empty() {
            return Err(RegistryError::Empty);
        }
        let mut seen = FnvHashSet::default();
        for p in &points {
            if !seen.insert(p.id) {
                return Err(RegistryError::DuplicateId(p.id));
            }
            if !p.coordinate.is_valid() {
                return Err(RegistryError::InvalidCoordinate {
                    id: p.id,
                    lat: p.coordinate.lat,
                    lon: p.coordinate.lon,
                });
            }
        }
        log::info!("[registry] loaded {} amenities", points.len());
        Ok(Self { points })
    }

    /// The amenities of the building, in sidebar order.
    pub fn builtin() -> Result<Self, RegistryError> {
        Self::new(vec![
            AmenityPoint::new(1, "Main Dining", Coordinate::new(40.7148, -74.0080), "#ef4444", "🍽️"),
            AmenityPoint::new(2, "Cafe", Coordinate::new(40.7108, -74.0040), "#f59e0b", "☕"),
            AmenityPoint::new(3, "Cocktail Lounge", Coordinate::new(40.7118, -74.0090), "#8b5cf6", "🍸"),
            AmenityPoint::new(4, "Social Clubs", Coordinate::new(40.7138, -74.0030), "#10b981", "👥"),
            AmenityPoint::new(5, "Wellness Center", Coordinate::new(40.7098, -74.0070), "#06b6d4", "🧘"),
        ])
    }

    #[inline]
    pub fn get(&self, id: AmenityId) -> Option<&AmenityPoint> {
        self.points.iter().find(|p| p.id == id)
    }

    /// Index and record for `id`.
    pub fn lookup(&self, id: AmenityId) -> Option<(usize, &AmenityPoint)> {
        self.points.iter().enumerate().find(|(_, p)| p.id == id)
    }

    #[inline]
    pub fn at(&self, index: usize) -> Option<&AmenityPoint> {
        self.points.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AmenityPoint> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
