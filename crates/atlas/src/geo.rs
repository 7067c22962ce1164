//! Geographic helpers: coordinates, the island's bounding region, Web-Mercator
//! projection and the synthesized overlay rectangles.
//!
//! Overlay rectangles are a fixed-offset box around a point. They are not real
//! zone boundaries and nothing here attempts to infer one.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use bevy::math::DVec2;

use crate::config::TILE_SIZE;

/// Mean Earth radius used by the spherical Mercator projection.
pub const EARTH_RADIUS_M: f64 = 6_378_137.0;

/// Mercator is undefined at the poles; latitudes are clamped to this.
const MAX_MERCATOR_LAT: f64 = 85.051_128_78;

/// A WGS84 coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Returns this coordinate shifted by the given degree deltas.
    pub fn offset(self, d_lat: f64, d_lon: f64) -> Self {
        Self::new(self.lat + d_lat, self.lon + d_lon)
    }
}

/// Axis-aligned latitude/longitude box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl GeoBounds {
    pub fn contains(&self, point: LatLon) -> bool {
        point.lat >= self.south
            && point.lat <= self.north
            && point.lon >= self.west
            && point.lon <= self.east
    }
}

/// Region every dataset coordinate is expected to fall in: the island plus
/// its surrounding shelf waters. Documented, not enforced at runtime.
pub const IRELAND_REGION: GeoBounds = GeoBounds {
    south: 51.0,
    west: -12.0,
    north: 55.6,
    east: -5.0,
};

/// Projects a coordinate to Web-Mercator pixels at zoom 0, origin at
/// (0°, 0°), x east and y north.
pub fn project(point: LatLon) -> DVec2 {
    let lat = point.lat.clamp(-MAX_MERCATOR_LAT, MAX_MERCATOR_LAT).to_radians();
    let x = point.lon.to_radians() / (2.0 * PI) * TILE_SIZE;
    let y = (FRAC_PI_4 + lat / 2.0).tan().ln() / (2.0 * PI) * TILE_SIZE;
    DVec2::new(x, y)
}

/// Inverse of [`project`].
pub fn unproject(world: DVec2) -> LatLon {
    let lon = (world.x / TILE_SIZE * 2.0 * PI).to_degrees();
    let lat = (2.0 * (world.y / TILE_SIZE * 2.0 * PI).exp().atan() - FRAC_PI_2).to_degrees();
    LatLon::new(lat, lon)
}

/// Zoom-0 Mercator pixels covered by one metre of ground at `lat`.
pub fn pixels_per_meter(lat: f64) -> f64 {
    let circumference = 2.0 * PI * EARTH_RADIUS_M * lat.to_radians().cos();
    TILE_SIZE / circumference
}

/// Four-corner rectangle synthesized around a point coordinate.
///
/// Corners run north-west, north-east, south-east, south-west.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayRect {
    pub corners: [LatLon; 4],
}

impl OverlayRect {
    /// Builds the rectangle centered on `center` with half-width `d` degrees
    /// in both latitude and longitude.
    pub fn around(center: LatLon, d: f64) -> Self {
        Self {
            corners: [
                center.offset(d, -d),
                center.offset(d, d),
                center.offset(-d, d),
                center.offset(-d, -d),
            ],
        }
    }

    pub fn north(&self) -> f64 {
        self.corners[0].lat
    }

    pub fn south(&self) -> f64 {
        self.corners[2].lat
    }

    pub fn west(&self) -> f64 {
        self.corners[0].lon
    }

    pub fn east(&self) -> f64 {
        self.corners[1].lon
    }

    pub fn center(&self) -> LatLon {
        LatLon::new(
            (self.north() + self.south()) / 2.0,
            (self.west() + self.east()) / 2.0,
        )
    }

    /// Area in square degrees, used to prefer the tightest overlay on click.
    pub fn area(&self) -> f64 {
        (self.north() - self.south()) * (self.east() - self.west())
    }

    pub fn contains(&self, point: LatLon) -> bool {
        point.lat <= self.north()
            && point.lat >= self.south()
            && point.lon >= self.west()
            && point.lon <= self.east()
    }
}
