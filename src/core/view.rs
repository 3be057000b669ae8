// Pure projections of the selection into what the sidebar draws.
//
// The DOM layer re-renders from these on every change instead of keeping
// per-entry flags of its own.

use super::constants::SWATCH_TINT_ALPHA;
use super::geo::DerivedMetrics;
use super::registry::{AmenityId, AmenityPoint, AmenityRegistry};

#[derive(Clone, Debug, PartialEq)]
pub struct SidebarEntry {
    pub id: AmenityId,
    pub name: String,
    pub icon: String,
    pub highlighted: bool,
    /// Background colour of the icon bubble.
    pub swatch: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DetailPanel {
    pub name: String,
    pub icon: String,
    pub color: String,
    pub distance_text: String,
    pub duration_text: String,
}

/// Full colour for the selected entry, a translucent tint for the rest.
#[inline]
pub fn swatch_color(color: &str, highlighted: bool) -> String {
    if highlighted {
        color.to_string()
    } else {
        format!("{}{}", color, SWATCH_TINT_ALPHA)
    }
}

pub fn sidebar_entries(registry: &AmenityRegistry, selected: Option<AmenityId>) -> Vec<SidebarEntry> {
    registry
        .iter()
        .map(|p| {
            let highlighted = selected == Some(p.id);
            SidebarEntry {
                id: p.id,
                name: p.name.clone(),
                icon: p.icon.clone(),
                highlighted,
                swatch: swatch_color(&p.color, highlighted),
            }
        })
        .collect()
}

/// Text that replaces the loading message when start-up fails.
pub fn load_error_text(reason: &str) -> String {
    let reason = reason.trim();
    if reason.is_empty() {
        "Map unavailable".to_string()
    } else {
        format!("Map unavailable: {}", reason)
    }
}

pub fn detail_panel(point: &AmenityPoint, metrics: &DerivedMetrics) -> DetailPanel {
    DetailPanel {
        name: point.name.clone(),
        icon: point.icon.clone(),
        color: point.color.clone(),
        distance_text: format!("{:.2} km", metrics.distance_km),
        duration_text: format!("{} min", metrics.duration_min),
    }
}
