//! Viewport state of the map canvas.
//!
//! World units are Web-Mercator pixels at [`REFERENCE_ZOOM`], with y pointing
//! north. The 2D camera sits at the projected center and its orthographic
//! scale is `2^(REFERENCE_ZOOM - zoom)`, so one world unit is one logical
//! pixel at the reference zoom.

use bevy::math::DVec2;
use bevy::prelude::*;

use atlas::config::{DEFAULT_ZOOM, MAP_CENTER, MAX_ZOOM, MIN_ZOOM, REFERENCE_ZOOM};
use atlas::geo::{self, LatLon};

#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct MapSurface {
    pub center: LatLon,
    /// Slippy-map zoom level, fractional values allowed.
    pub zoom: f64,
}

impl Default for MapSurface {
    fn default() -> Self {
        Self {
            center: MAP_CENTER,
            zoom: DEFAULT_ZOOM,
        }
    }
}

/// World units per zoom-0 Mercator pixel.
fn world_scale() -> f64 {
    REFERENCE_ZOOM.exp2()
}

/// Places a coordinate in world units.
pub fn to_world(point: LatLon) -> Vec2 {
    (geo::project(point) * world_scale()).as_vec2()
}

/// Coordinate under a world position.
pub fn to_latlon(world: Vec2) -> LatLon {
    geo::unproject(world.as_dvec2() / world_scale())
}

/// World units covering `meters` of ground at `lat`.
pub fn meters_to_world(meters: f64, lat: f64) -> f32 {
    (meters * geo::pixels_per_meter(lat) * world_scale()) as f32
}

impl MapSurface {
    /// Orthographic scale of the camera: world units per logical pixel.
    pub fn camera_scale(&self) -> f32 {
        (REFERENCE_ZOOM - self.zoom).exp2() as f32
    }

    pub fn center_world(&self) -> Vec2 {
        to_world(self.center)
    }

    /// World rectangle shown by a viewport of `size` logical pixels.
    pub fn visible_world_rect(&self, size: Vec2) -> Rect {
        Rect::from_center_size(self.center_world(), size * self.camera_scale())
    }

    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn zoom_by(&mut self, delta: f64) {
        self.set_zoom(self.zoom + delta);
    }

    /// Moves the view by a screen-space delta in logical pixels, y down.
    /// Dragging right moves the map right, so the center moves west.
    pub fn pan_by_pixels(&mut self, delta: Vec2) {
        let world_delta = DVec2::new(-delta.x as f64, delta.y as f64) * self.camera_scale() as f64;
        let center = self.center_world().as_dvec2() + world_delta;
        self.center = to_latlon(center.as_vec2());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_view_is_centered_on_the_island() {
        let surface = MapSurface::default();
        assert_eq!(surface.center, LatLon::new(53.4, -8.0));
        assert_eq!(surface.zoom, 7.0);
        assert!((surface.camera_scale() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn zoom_is_clamped() {
        let mut surface = MapSurface::default();
        surface.zoom_by(100.0);
        assert_eq!(surface.zoom, 18.0);
        surface.zoom_by(-100.0);
        assert_eq!(surface.zoom, 5.0);
    }

    #[test]
    fn each_zoom_level_halves_the_scale() {
        let mut surface = MapSurface::default();
        surface.set_zoom(8.0);
        assert!((surface.camera_scale() - 0.5).abs() < 1e-6);
        surface.set_zoom(5.0);
        assert!((surface.camera_scale() - 4.0).abs() < 1e-6);
    }

    #[test]
    fn world_round_trip_stays_close() {
        let dublin = LatLon::new(53.35, -6.26);
        let back = to_latlon(to_world(dublin));
        assert!((back.lat - dublin.lat).abs() < 1e-3);
        assert!((back.lon - dublin.lon).abs() < 1e-3);
    }

    #[test]
    fn north_is_up_and_east_is_right() {
        let origin = to_world(LatLon::new(53.0, -8.0));
        assert!(to_world(LatLon::new(54.0, -8.0)).y > origin.y);
        assert!(to_world(LatLon::new(53.0, -7.0)).x > origin.x);
    }

    #[test]
    fn dragging_right_moves_the_center_west() {
        let mut surface = MapSurface::default();
        surface.pan_by_pixels(Vec2::new(50.0, 0.0));
        assert!(surface.center.lon < -8.0);
        assert!((surface.center.lat - 53.4).abs() < 1e-3);
    }

    #[test]
    fn forty_km_halo_is_visible_at_default_zoom() {
        let radius = meters_to_world(40_000.0, 53.0);
        assert!(radius > 20.0 && radius < 100.0, "radius {radius}");
    }
}
