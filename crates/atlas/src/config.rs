use crate::geo::LatLon;

/// Initial viewport center (geographic middle of the island).
pub const MAP_CENTER: LatLon = LatLon::new(53.4, -8.0);
/// Initial viewport zoom level (slippy-map convention).
pub const DEFAULT_ZOOM: f64 = 7.0;
pub const MIN_ZOOM: f64 = 5.0;
pub const MAX_ZOOM: f64 = 18.0;

/// Edge length of one slippy-map tile in pixels at any zoom.
pub const TILE_SIZE: f64 = 256.0;
/// Zoom level at which one world unit equals one screen pixel.
pub const REFERENCE_ZOOM: f64 = 7.0;

/// Half-widths (degrees) of the synthesized overlay rectangles.
pub const BIOME_OVERLAY_OFFSET: f64 = 0.3;
pub const WETLAND_OVERLAY_OFFSET: f64 = 0.4;
pub const CLIMATE_OVERLAY_OFFSET: f64 = 0.5;
pub const MARINE_OVERLAY_OFFSET: f64 = 0.6;

/// Radius of the colored halo drawn under climate zone markers.
pub const CLIMATE_HALO_RADIUS_M: f64 = 40_000.0;
/// Radius of the colored halo drawn under marine zone markers.
pub const MARINE_HALO_RADIUS_M: f64 = 35_000.0;

/// Square size of a marker glyph on screen, in logical pixels.
pub const MARKER_ICON_SIZE: f32 = 32.0;
/// Maximum popup window width, in logical pixels.
pub const POPUP_MAX_WIDTH: f32 = 300.0;

/// Delay before a submitted sighting form closes itself.
pub const FORM_AUTO_CLOSE_SECS: f32 = 3.0;

/// Environment variable that selects the mode applied at startup.
pub const START_MODE_ENV: &str = "ECOTRACKER_START_MODE";

/// Slippy-map tile source shown behind the overlays.
///
/// Tiles are never fetched; the canvas draws a graticule in their place and
/// the attribution is shown in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileBackdrop {
    pub url_template: &'static str,
    pub attribution: &'static str,
    pub max_zoom: u8,
}

pub const TILE_BACKDROP: TileBackdrop = TileBackdrop {
    url_template: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png",
    attribution: "© OpenStreetMap contributors",
    max_zoom: 18,
};
