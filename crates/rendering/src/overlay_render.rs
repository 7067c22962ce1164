//! Draws layer elements that live in world space: overlay rectangle fills,
//! marker halos and overlay outlines.
//!
//! Fills and halos are attached to the layer entity itself when it appears,
//! so they vanish with it when the layer group is cleared. Outlines are
//! redrawn every frame with gizmos so dashes keep a constant on-screen size.

use bevy::prelude::*;

use atlas::features::{MapMarker, OverlayShape};
use atlas::geo::LatLon;

use crate::camera::MapCamera;
use crate::map_surface::{meters_to_world, to_world, MapSurface};

/// Z layers, back to front.
const OVERLAY_Z: f32 = 1.0;
const HALO_Z: f32 = 2.0;

/// Used when a record color cannot be parsed.
const FALLBACK_COLOR: Color = Color::srgb(0.5, 0.5, 0.5);

/// Outlines of weight 2.
#[derive(Default, Reflect, GizmoConfigGroup)]
pub struct OutlineGizmos;

/// Outlines heavier than 2, such as the wetland highlight.
#[derive(Default, Reflect, GizmoConfigGroup)]
pub struct HeavyOutlineGizmos;

/// Parses `#rrggbb`, warning and falling back to grey on failure.
pub fn hex_color(hex: &str) -> Color {
    match Srgba::hex(hex) {
        Ok(c) => c.into(),
        Err(e) => {
            warn!("Invalid overlay color '{}': {:?}, using fallback", hex, e);
            FALLBACK_COLOR
        }
    }
}

pub fn hex_color_alpha(hex: &str, alpha: f32) -> Color {
    hex_color(hex).with_alpha(alpha)
}

pub fn configure_outline_gizmos(mut store: ResMut<GizmoConfigStore>) {
    let (config, _) = store.config_mut::<OutlineGizmos>();
    config.line_width = 2.0;
    let (config, _) = store.config_mut::<HeavyOutlineGizmos>();
    config.line_width = 3.0;
}

/// Gives each new overlay a translucent sprite covering its rectangle.
pub fn attach_overlay_fills(
    mut commands: Commands,
    added: Query<(Entity, &OverlayShape), Added<OverlayShape>>,
) {
    for (entity, shape) in &added {
        let nw = to_world(LatLon::new(shape.rect.north(), shape.rect.west()));
        let se = to_world(LatLon::new(shape.rect.south(), shape.rect.east()));
        let size = (se - nw).abs();
        let center = (nw + se) / 2.0;
        commands.entity(entity).insert((
            Sprite::from_color(
                hex_color_alpha(shape.style.fill, shape.style.fill_opacity),
                size,
            ),
            Transform::from_translation(center.extend(OVERLAY_Z)),
        ));
    }
}

/// Gives each new marker with a halo a translucent disc under it.
pub fn attach_marker_halos(
    mut commands: Commands,
    added: Query<(Entity, &MapMarker), Added<MapMarker>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    for (entity, marker) in &added {
        let Some(halo) = marker.halo else {
            continue;
        };
        let radius = meters_to_world(halo.radius_m, marker.position.lat);
        commands.entity(entity).insert((
            Mesh2d(meshes.add(Circle::new(radius))),
            MeshMaterial2d(materials.add(hex_color_alpha(halo.color, halo.fill_opacity))),
            Transform::from_translation(to_world(marker.position).extend(HALO_Z)),
        ));
    }
}

/// Strokes every overlay rectangle; dashed styles get dashes measured in
/// screen pixels. Only the parts of each outline inside the viewport are
/// emitted, so the dash count stays bounded at any zoom.
pub fn draw_overlay_outlines(
    surface: Res<MapSurface>,
    cameras: Query<&Camera, With<MapCamera>>,
    shapes: Query<&OverlayShape>,
    mut outlines: Gizmos<OutlineGizmos>,
    mut heavy: Gizmos<HeavyOutlineGizmos>,
) {
    let Some(size) = cameras
        .get_single()
        .ok()
        .and_then(Camera::logical_viewport_size)
    else {
        return;
    };
    let view = surface.visible_world_rect(size);
    let scale = surface.camera_scale();
    for shape in &shapes {
        let color = hex_color(shape.style.stroke);
        let lines = outline_segments(shape, scale, view);
        if shape.style.weight > 2.0 {
            for (from, to) in lines {
                heavy.line_2d(from, to, color);
            }
        } else {
            for (from, to) in lines {
                outlines.line_2d(from, to, color);
            }
        }
    }
}

/// World-space line segments of one overlay outline at camera `scale`,
/// clipped to `view`.
fn outline_segments(shape: &OverlayShape, scale: f32, view: Rect) -> Vec<(Vec2, Vec2)> {
    let corners = shape.rect.corners.map(to_world);
    let bounds = Rect::from_corners(corners[0], corners[2]);
    if bounds.intersect(view).is_empty() {
        return Vec::new();
    }

    let mut lines = Vec::new();
    for i in 0..corners.len() {
        let a = corners[i];
        let b = corners[(i + 1) % corners.len()];
        let Some((from, to)) = clip_to_view(a, b, view) else {
            continue;
        };
        match shape.style.dash {
            Some((dash, gap)) => {
                lines.extend(dash_span(a, b, dash * scale, gap * scale, from, to));
            }
            None => {
                let dir = (b - a).normalize_or_zero();
                lines.push((a + dir * from, a + dir * to));
            }
        }
    }
    lines
}

/// Distances along `a..b` where the segment enters and leaves `view`
/// (Liang-Barsky), or `None` when it misses the view entirely.
fn clip_to_view(a: Vec2, b: Vec2, view: Rect) -> Option<(f32, f32)> {
    let d = b - a;
    let mut t0 = 0.0_f32;
    let mut t1 = 1.0_f32;
    let edges = [
        (-d.x, a.x - view.min.x),
        (d.x, view.max.x - a.x),
        (-d.y, a.y - view.min.y),
        (d.y, view.max.y - a.y),
    ];
    for (p, q) in edges {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }
    let length = d.length();
    Some((t0 * length, t1 * length))
}

/// Splits the segment `a..b` into dashes of length `dash` separated by `gap`.
/// The last dash is cut short at `b`.
pub fn dash_segments(a: Vec2, b: Vec2, dash: f32, gap: f32) -> Vec<(Vec2, Vec2)> {
    dash_span(a, b, dash, gap, 0.0, a.distance(b))
}

/// Dashes of `a..b` lying between distances `from` and `to` along it.
/// The pattern stays anchored at `a`, so clipping never shifts a dash.
fn dash_span(a: Vec2, b: Vec2, dash: f32, gap: f32, from: f32, to: f32) -> Vec<(Vec2, Vec2)> {
    let length = a.distance(b);
    if length == 0.0 || dash <= 0.0 {
        return Vec::new();
    }
    let from = from.max(0.0);
    let to = to.min(length);
    let dir = (b - a) / length;
    let period = dash + gap.max(0.0);
    let mut segments = Vec::new();
    let mut start = (from / period).floor() * period;
    while start < to {
        let lo = start.max(from);
        let hi = (start + dash).min(to);
        if hi > lo {
            segments.push((a + dir * lo, a + dir * hi));
        }
        start += period;
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use atlas::config::{MARINE_OVERLAY_OFFSET, MAX_ZOOM};
    use atlas::geo::OverlayRect;
    use atlas::overlay::OverlayStyle;

    #[test]
    fn dashes_cover_the_segment_with_gaps() {
        let segments = dash_segments(Vec2::ZERO, Vec2::new(30.0, 0.0), 10.0, 5.0);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0], (Vec2::ZERO, Vec2::new(10.0, 0.0)));
        assert_eq!(segments[1], (Vec2::new(15.0, 0.0), Vec2::new(25.0, 0.0)));
    }

    #[test]
    fn final_dash_is_clipped() {
        let segments = dash_segments(Vec2::ZERO, Vec2::new(0.0, 20.0), 8.0, 4.0);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[1].1, Vec2::new(0.0, 20.0));
    }

    #[test]
    fn degenerate_segments_draw_nothing() {
        assert!(dash_segments(Vec2::ONE, Vec2::ONE, 10.0, 5.0).is_empty());
        assert!(dash_segments(Vec2::ZERO, Vec2::X, 0.0, 5.0).is_empty());
    }

    fn marine_shape(center: LatLon) -> OverlayShape {
        OverlayShape {
            rect: OverlayRect::around(center, MARINE_OVERLAY_OFFSET),
            style: OverlayStyle {
                stroke: "#2e8b57",
                fill: "#2e8b57",
                fill_opacity: 0.35,
                weight: 2.0,
                dash: Some((8.0, 4.0)),
            },
        }
    }

    #[test]
    fn dashes_stay_bounded_at_max_zoom() {
        let kelp = LatLon::new(53.3, -10.0);
        let shape = marine_shape(kelp);
        let mut surface = MapSurface {
            center: shape.rect.corners[0],
            ..default()
        };
        surface.set_zoom(MAX_ZOOM);
        let viewport = Vec2::new(1280.0, 800.0);
        let view = surface.visible_world_rect(viewport);

        let lines = outline_segments(&shape, surface.camera_scale(), view);
        // Two half-edges meet at the centered corner; one 12 px period each.
        let per_edge = (viewport.max_element() / 2.0 / 12.0).ceil() as usize + 1;
        assert!(!lines.is_empty());
        assert!(lines.len() <= 2 * per_edge, "{} dashes", lines.len());
        let slack = view.inflate(1e-2);
        for (from, to) in lines {
            assert!(slack.contains(from) && slack.contains(to));
        }
    }

    #[test]
    fn off_screen_overlays_draw_nothing() {
        let shape = marine_shape(LatLon::new(53.3, -10.0));
        let mut surface = MapSurface {
            center: LatLon::new(51.5, -6.0),
            ..default()
        };
        surface.set_zoom(12.0);
        let view = surface.visible_world_rect(Vec2::new(1280.0, 800.0));
        assert!(outline_segments(&shape, surface.camera_scale(), view).is_empty());
    }

    #[test]
    fn clipped_dashes_keep_their_phase() {
        let a = Vec2::ZERO;
        let b = Vec2::new(100.0, 0.0);
        let full = dash_segments(a, b, 10.0, 5.0);
        let clipped = dash_span(a, b, 10.0, 5.0, 33.0, 70.0);
        assert_eq!(clipped[0], (Vec2::new(33.0, 0.0), Vec2::new(40.0, 0.0)));
        assert_eq!(clipped[1], full[3]);
        assert_eq!(clipped.last().map(|s| s.1), Some(Vec2::new(70.0, 0.0)));
    }

    #[test]
    fn segments_outside_the_view_are_rejected() {
        let view = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(
            clip_to_view(Vec2::new(-5.0, 5.0), Vec2::new(15.0, 5.0), view),
            Some((5.0, 15.0))
        );
        assert_eq!(clip_to_view(Vec2::new(-5.0, 20.0), Vec2::new(15.0, 20.0), view), None);
    }

    #[test]
    fn hex_color_parses_and_falls_back() {
        let c = hex_color("#ff0000").to_srgba();
        assert!((c.red - 1.0).abs() < 1e-6 && c.green.abs() < 1e-6);
        assert_eq!(hex_color("not a color"), FALLBACK_COLOR);
        let translucent = hex_color_alpha("#4169e1", 0.25);
        assert!((translucent.alpha() - 0.25).abs() < 1e-6);
    }
}
