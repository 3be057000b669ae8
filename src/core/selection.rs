// Selection state machine driving the sidebar panel and the map camera.
//
// Two states: `Idle` (nothing selected, camera over the building) and
// `Focused` (one amenity selected, camera over it). Metrics live inside the
// `Focused` variant, so they exist exactly when a selection does.

use super::constants::{FOCUS_ZOOM, OVERVIEW_ZOOM, TRANSITION_MS};
use super::geo::{Coordinate, DerivedMetrics};
use super::registry::{AmenityId, AmenityPoint, AmenityRegistry};

/// Viewport control offered by the map widget.
///
/// Requests are fire-and-forget: a newer request supersedes any transition
/// still in flight, and nothing is reported back.
pub trait CameraService {
    fn move_to(&mut self, target: Coordinate, zoom: f64, transition_ms: u32);
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum SelectionError {
    #[error("amenity {0} is not in the registry")]
    UnknownAmenity(AmenityId),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SelectionState {
    Idle,
    Focused {
        index: usize,
        metrics: DerivedMetrics,
    },
}

pub struct SelectionController<C: CameraService> {
    origin: Coordinate,
    registry: AmenityRegistry,
    camera: C,
    state: SelectionState,
}

impl<C: CameraService> SelectionController<C> {
    pub fn new(origin: Coordinate, registry: AmenityRegistry, camera: C) -> Self {
        Self {
            origin,
            registry,
            camera,
            state: SelectionState::Idle,
        }
    }

    /// Focus on `id`, recompute metrics and fly the camera to it.
    ///
    /// An unknown id leaves the state and the camera untouched.
    pub fn select(&mut self, id: AmenityId) -> Result<DerivedMetrics, SelectionError> {
        let (index, target) = self
            .registry
            .lookup(id)
            .map(|(i, p)| (i, p.coordinate))
            .ok_or(SelectionError::UnknownAmenity(id))?;
        let metrics = DerivedMetrics::between(self.origin, target);
        self.state = SelectionState::Focused { index, metrics };
        log::debug!(
            "[select] id={} distance={:.2}km duration={}min",
            id,
            metrics.distance_km,
            metrics.duration_min
        );
        self.camera.move_to(target, FOCUS_ZOOM, TRANSITION_MS);
        Ok(metrics)
    }

    /// Clear the selection and fly back to the building.
    ///
    /// Nothing happens when no amenity is selected.
    pub fn reset(&mut self) {
        if self.state == SelectionState::Idle {
            return;
        }
        self.state = SelectionState::Idle;
        log::debug!("[reset] back to origin");
        self.camera.move_to(self.origin, OVERVIEW_ZOOM, TRANSITION_MS);
    }

    #[inline]
    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn selected(&self) -> Option<&AmenityPoint> {
        match self.state {
            SelectionState::Idle => None,
            SelectionState::Focused { index, .. } => self.registry.at(index),
        }
    }

    pub fn metrics(&self) -> Option<DerivedMetrics> {
        match self.state {
            SelectionState::Idle => None,
            SelectionState::Focused { metrics, .. } => Some(metrics),
        }
    }

    pub fn selected_id(&self) -> Option<AmenityId> {
        self.selected().map(|p| p.id)
    }

    pub fn is_selected(&self, id: AmenityId) -> bool {
        self.selected_id() == Some(id)
    }

    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    pub fn registry(&self) -> &AmenityRegistry {
        &self.registry
    }

    // read by host tests only
    #[allow(dead_code)]
    pub fn camera(&self) -> &C {
        &self.camera
    }
}
