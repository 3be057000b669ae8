// Geometry and camera tuning shared by the selection logic.

// Mean Earth radius used by the haversine formula
pub const EARTH_RADIUS_KM: f64 = 6371.0;

// Walking pace assumed for the duration estimate
pub const WALKING_SPEED_KMH: f64 = 5.0;

// The building (lower Manhattan)
pub const ORIGIN_LAT: f64 = 40.7128;
pub const ORIGIN_LON: f64 = -74.0060;

// Camera
pub const FOCUS_ZOOM: f64 = 16.0; // closer view when an amenity is selected
pub const OVERVIEW_ZOOM: f64 = 15.0; // wider view centred on the building
pub const TRANSITION_MS: u32 = 1500; // fly-to animation length

// Display
pub const DISTANCE_DECIMALS: i32 = 2;
pub const SWATCH_TINT_ALPHA: &str = "30"; // hex alpha appended to unselected swatches
