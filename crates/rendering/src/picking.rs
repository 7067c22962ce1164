//! World click → overlay popup.
//!
//! Marker glyphs are egui widgets and handle their own clicks. A click that
//! lands on the bare map opens the popup of the smallest overlay rectangle
//! under the cursor, or closes the current layer popup if there is none.

use bevy::prelude::*;

use atlas::features::{FeaturePopup, OverlayShape};
use atlas::geo::LatLon;
use atlas::layers::LayerMember;
use atlas::popup::SelectedPopup;

use crate::camera::{LeftClickDrag, MapCamera};
use crate::map_surface::to_latlon;

/// Index of the smallest rectangle containing `point`.
pub fn pick_smallest<'a>(
    point: LatLon,
    shapes: impl IntoIterator<Item = &'a OverlayShape>,
) -> Option<usize> {
    shapes
        .into_iter()
        .enumerate()
        .filter(|(_, s)| s.rect.contains(point))
        .min_by(|(_, a), (_, b)| a.rect.area().total_cmp(&b.rect.area()))
        .map(|(i, _)| i)
}

pub fn pick_overlay_on_click(
    mut left_drag: ResMut<LeftClickDrag>,
    cameras: Query<(&Camera, &GlobalTransform), With<MapCamera>>,
    overlays: Query<(&LayerMember, &OverlayShape, &FeaturePopup)>,
    mut selected: ResMut<SelectedPopup>,
) {
    let Some(cursor) = left_drag.click.take() else {
        return;
    };
    let Ok((camera, camera_transform)) = cameras.get_single() else {
        return;
    };
    let world = match camera.viewport_to_world_2d(camera_transform, cursor) {
        Ok(world) => world,
        Err(e) => {
            warn!("Map click at {cursor} could not be projected: {e:?}");
            return;
        }
    };
    let point = to_latlon(world);

    let hits: Vec<_> = overlays.iter().collect();
    match pick_smallest(point, hits.iter().map(|(_, shape, _)| *shape)) {
        Some(i) => {
            let (member, _, popup) = hits[i];
            debug!("Opened {} popup at {:.3}, {:.3}", member.0.label(), point.lat, point.lon);
            selected.open_for(member.0, popup.0.clone());
        }
        None => selected.close_layer_popup(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atlas::geo::OverlayRect;
    use atlas::overlay::WETLAND_STYLE;

    fn shape(center: LatLon, d: f64) -> OverlayShape {
        OverlayShape {
            rect: OverlayRect::around(center, d),
            style: WETLAND_STYLE,
        }
    }

    #[test]
    fn smallest_containing_rectangle_wins() {
        let c = LatLon::new(53.5, -9.7);
        let shapes = [shape(c, 0.4), shape(c, 0.3), shape(LatLon::new(52.0, -6.0), 0.1)];
        assert_eq!(pick_smallest(c, &shapes), Some(1));
        assert_eq!(pick_smallest(c.offset(0.35, 0.0), &shapes), Some(0));
    }

    #[test]
    fn empty_map_picks_nothing() {
        let shapes = [shape(LatLon::new(53.5, -9.7), 0.3)];
        assert_eq!(pick_smallest(LatLon::new(51.2, -6.0), &shapes), None);
        assert_eq!(pick_smallest(LatLon::new(51.2, -6.0), std::iter::empty()), None);
    }
}
