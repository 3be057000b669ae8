use crate::core::{CameraService, Coordinate};
use crate::mapbox;

/// Camera requests forwarded to `map.flyTo`; the map supersedes any
/// animation still running.
pub struct MapboxCamera {
    map: mapbox::Map,
}

impl MapboxCamera {
    pub fn new(map: mapbox::Map) -> Self {
        Self { map }
    }
}

impl CameraService for MapboxCamera {
    fn move_to(&mut self, target: Coordinate, zoom: f64, transition_ms: u32) {
        match mapbox::fly_to_options(target, zoom, transition_ms) {
            Ok(opts) => self.map.fly_to(&opts),
            Err(e) => log::error!("[camera] flyTo options error: {:?}", e),
        }
    }
}
