// Page structure and map widget settings used by the web frontend.

// Element ids (see index.html)
pub const MAP_CONTAINER_ID: &str = "map";
pub const LOADING_OVERLAY_ID: &str = "map-loading";
pub const AMENITY_LIST_ID: &str = "amenity-list";
pub const PANEL_ID: &str = "selection-panel";
pub const PANEL_ICON_ID: &str = "panel-icon";
pub const PANEL_NAME_ID: &str = "panel-name";
pub const PANEL_DISTANCE_ID: &str = "panel-distance";
pub const PANEL_DURATION_ID: &str = "panel-duration";
pub const PANEL_CLOSE_ID: &str = "panel-close";

// <meta name="mapbox-token" content="pk..."> carries the provider credential
pub const TOKEN_META_NAME: &str = "mapbox-token";

pub const MAP_STYLE_URL: &str = "mapbox://styles/mapbox/streets-v12";

// CSS classes
pub const MARKER_CLASS: &str = "marker";
pub const CENTER_MARKER_CLASS: &str = "center-marker";
pub const ENTRY_CLASS: &str = "amenity-entry";
pub const ENTRY_SELECTED_CLASS: &str = "selected";
pub const ENTRY_BUBBLE_CLASS: &str = "amenity-bubble";
pub const ENTRY_NAME_CLASS: &str = "amenity-name";

// Sidebar buttons carry the amenity id here for delegated clicks
pub const AMENITY_ID_ATTR: &str = "data-amenity-id";

pub const BUILDING_ICON: &str = "🏢";
