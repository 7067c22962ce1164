//! Tile backdrop placeholder.
//!
//! No tiles are fetched. The canvas draws a one-degree graticule over the
//! surrounding region so panning and zooming have a visible reference.

use bevy::prelude::*;

use atlas::geo::LatLon;

use crate::map_surface::to_world;

const GRATICULE_COLOR: Color = Color::srgba(0.25, 0.35, 0.3, 0.35);

/// Degree extent covered by the graticule (south, west, north, east).
const EXTENT: (i32, i32, i32, i32) = (48, -15, 58, -2);

#[derive(Default, Reflect, GizmoConfigGroup)]
pub struct GraticuleGizmos;

pub fn configure_graticule_gizmos(mut store: ResMut<GizmoConfigStore>) {
    let (config, _) = store.config_mut::<GraticuleGizmos>();
    config.line_width = 1.0;
}

/// World-space endpoints of every parallel and meridian in [`EXTENT`].
pub fn graticule_lines() -> Vec<(Vec2, Vec2)> {
    let (south, west, north, east) = EXTENT;
    let parallels = (south..=north).map(|lat| {
        let lat = lat as f64;
        (
            to_world(LatLon::new(lat, west as f64)),
            to_world(LatLon::new(lat, east as f64)),
        )
    });
    let meridians = (west..=east).map(|lon| {
        let lon = lon as f64;
        (
            to_world(LatLon::new(south as f64, lon)),
            to_world(LatLon::new(north as f64, lon)),
        )
    });
    parallels.chain(meridians).collect()
}

pub fn draw_graticule(mut gizmos: Gizmos<GraticuleGizmos>) {
    for (from, to) in graticule_lines() {
        gizmos.line_2d(from, to, GRATICULE_COLOR);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_line_per_whole_degree() {
        let (south, west, north, east) = EXTENT;
        let expected = (north - south + 1) + (east - west + 1);
        assert_eq!(graticule_lines().len(), expected as usize);
    }

    #[test]
    fn parallels_are_horizontal_and_meridians_vertical() {
        let lines = graticule_lines();
        let (p_from, p_to) = lines[0];
        assert!((p_from.y - p_to.y).abs() < 1e-3);
        let (m_from, m_to) = lines[lines.len() - 1];
        assert!((m_from.x - m_to.x).abs() < 1e-3);
    }
}
