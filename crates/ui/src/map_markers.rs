//! Marker glyphs drawn as egui labels at their projected screen position.
//!
//! Glyphs are emoji, which egui's bundled fonts render and Bevy's default
//! font does not. Clicking a glyph opens the record popup.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use atlas::config::MARKER_ICON_SIZE;
use atlas::features::{FeaturePopup, MapMarker};
use atlas::layers::LayerMember;
use atlas::popup::SelectedPopup;
use rendering::camera::MapCamera;
use rendering::map_surface::to_world;

pub fn marker_glyphs_ui(
    mut contexts: EguiContexts,
    cameras: Query<(&Camera, &GlobalTransform), With<MapCamera>>,
    markers: Query<(Entity, &LayerMember, &MapMarker, &FeaturePopup)>,
    mut selected: ResMut<SelectedPopup>,
) {
    let Ok((camera, camera_transform)) = cameras.get_single() else {
        return;
    };
    let ctx = contexts.ctx_mut();
    let screen = ctx.screen_rect();

    for (entity, member, marker, popup) in &markers {
        let world = to_world(marker.position).extend(0.0);
        // Off-screen or behind the camera: nothing to draw.
        let Ok(pos) = camera.world_to_viewport(camera_transform, world) else {
            continue;
        };
        let pos = egui::pos2(pos.x, pos.y);
        if !screen.expand(MARKER_ICON_SIZE).contains(pos) {
            continue;
        }

        let response = egui::Area::new(egui::Id::new(("marker", entity)))
            .fixed_pos(pos)
            .pivot(egui::Align2::CENTER_CENTER)
            .order(egui::Order::Background)
            .show(ctx, |ui| {
                ui.add_sized(
                    egui::vec2(MARKER_ICON_SIZE, MARKER_ICON_SIZE),
                    egui::Label::new(egui::RichText::new(marker.glyph).size(MARKER_ICON_SIZE * 0.75))
                        .sense(egui::Sense::click()),
                )
            })
            .inner;

        if response.clicked() {
            selected.open_for(member.0, popup.0.clone());
        }
    }
}
