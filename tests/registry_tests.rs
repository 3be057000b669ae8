// Host-side tests for amenity registry validation.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod geo {
    include!("../src/core/geo.rs");
}
mod registry {
    include!("../src/core/registry.rs");
}

use geo::Coordinate;
use registry::*;

fn point(id: u32, lat: f64, lon: f64) -> AmenityPoint {
    AmenityPoint::new(id, format!("Amenity {id}"), Coordinate::new(lat, lon), "#123456", "*")
}

#[test]
fn builtin_registry_loads_in_display_order() {
    let reg = AmenityRegistry::builtin().expect("builtin registry is valid");
    let names: Vec<&str> = reg.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(
        names,
        ["Main Dining", "Cafe", "Cocktail Lounge", "Social Clubs", "Wellness Center"]
    );
    assert_eq!(reg.len(), 5);
    assert!(!reg.is_empty());
}

#[test]
fn builtin_registry_does_not_contain_origin() {
    let reg = AmenityRegistry::builtin().unwrap();
    assert!(reg.iter().all(|p| p.coordinate != ORIGIN));
}

#[test]
fn duplicate_ids_fail_fast() {
    let err = AmenityRegistry::new(vec![
        point(1, 40.0, -74.0),
        point(2, 40.1, -74.0),
        point(1, 40.2, -74.0),
    ])
    .unwrap_err();
    assert_eq!(err, RegistryError::DuplicateId(AmenityId(1)));
}

#[test]
fn empty_registry_is_rejected() {
    assert_eq!(AmenityRegistry::new(Vec::new()).unwrap_err(), RegistryError::Empty);
}

#[test]
fn out_of_range_coordinate_is_rejected() {
    let err = AmenityRegistry::new(vec![point(1, 40.0, -74.0), point(7, 95.0, 0.0)]).unwrap_err();
    assert!(matches!(
        err,
        RegistryError::InvalidCoordinate { id: AmenityId(7), .. }
    ));
}

#[test]
fn lookup_returns_index_and_record() {
    let reg = AmenityRegistry::new(vec![point(10, 1.0, 1.0), point(20, 2.0, 2.0)]).unwrap();
    let (index, p) = reg.lookup(AmenityId(20)).unwrap();
    assert_eq!(index, 1);
    assert_eq!(p.id, AmenityId(20));
    assert_eq!(reg.get(AmenityId(10)).map(|p| p.coordinate.lat), Some(1.0));
    assert!(reg.lookup(AmenityId(30)).is_none());
    assert_eq!(reg.at(0).map(|p| p.id), Some(AmenityId(10)));
}

#[test]
fn amenity_id_parses_from_attribute_text() {
    assert_eq!("3".parse::<AmenityId>(), Ok(AmenityId(3)));
    assert_eq!(" 12 ".parse::<AmenityId>(), Ok(AmenityId(12)));
    assert!("x".parse::<AmenityId>().is_err());
    assert_eq!(AmenityId(5).to_string(), "5");
}

#[test]
fn registry_error_messages_name_the_amenity() {
    assert_eq!(
        RegistryError::DuplicateId(AmenityId(4)).to_string(),
        "duplicate amenity id 4"
    );
}
