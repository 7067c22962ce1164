//! MapSurface: the 2D canvas the atlas layers are drawn on.

use bevy::prelude::*;

use atlas::AtlasUpdateSet;

pub mod backdrop;
pub mod camera;
pub mod egui_input_guard;
pub mod map_surface;
pub mod overlay_render;
pub mod picking;

use backdrop::GraticuleGizmos;
use camera::LeftClickDrag;
use map_surface::MapSurface;
use overlay_render::{HeavyOutlineGizmos, OutlineGizmos};

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MapSurface>()
            .init_resource::<LeftClickDrag>()
            .init_gizmo_group::<GraticuleGizmos>()
            .init_gizmo_group::<OutlineGizmos>()
            .init_gizmo_group::<HeavyOutlineGizmos>()
            .add_systems(
                Startup,
                (
                    camera::setup_camera,
                    backdrop::configure_graticule_gizmos,
                    overlay_render::configure_outline_gizmos,
                ),
            )
            .add_systems(
                Update,
                (
                    camera::camera_keyboard,
                    camera::camera_left_drag,
                    camera::camera_zoom,
                    camera::apply_map_surface,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                picking::pick_overlay_on_click
                    .after(camera::camera_left_drag)
                    .before(AtlasUpdateSet),
            )
            .add_systems(
                Update,
                (
                    overlay_render::attach_overlay_fills,
                    overlay_render::attach_marker_halos,
                    overlay_render::draw_overlay_outlines,
                    backdrop::draw_graticule,
                )
                    .after(AtlasUpdateSet),
            );
    }
}
