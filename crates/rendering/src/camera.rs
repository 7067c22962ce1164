use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::egui_input_guard::egui_wants_pointer;
use crate::map_surface::MapSurface;

/// Keyboard pan speed in logical pixels per second.
const PAN_SPEED: f32 = 400.0;
/// Zoom levels per wheel line.
const ZOOM_STEP: f64 = 0.5;
/// Zoom levels per second while a zoom key is held.
const KEY_ZOOM_SPEED: f64 = 2.0;

/// Marker for the map camera.
#[derive(Component)]
pub struct MapCamera;

/// Tracks left-click drag state: differentiates click from drag.
/// When the mouse moves beyond `LEFT_DRAG_THRESHOLD` pixels from the initial
/// press it becomes a map pan and the release is not treated as a click.
#[derive(Resource, Default)]
pub struct LeftClickDrag {
    pub pressed: bool,
    pub start_pos: Vec2,
    pub last_pos: Vec2,
    /// True once mouse has moved beyond threshold.
    pub is_dragging: bool,
    /// Cursor position of a press-and-release that never became a drag.
    /// Consumed by the picking system.
    pub click: Option<Vec2>,
}

const LEFT_DRAG_THRESHOLD: f32 = 5.0;

pub fn setup_camera(mut commands: Commands, surface: Res<MapSurface>) {
    commands.spawn((
        MapCamera,
        Camera2d,
        OrthographicProjection {
            scale: surface.camera_scale(),
            ..OrthographicProjection::default_2d()
        },
        Transform::from_translation(surface.center_world().extend(0.0)),
    ));
}

/// System: apply MapSurface state to the camera each frame it changes.
pub fn apply_map_surface(
    surface: Res<MapSurface>,
    mut query: Query<(&mut Transform, &mut OrthographicProjection), With<MapCamera>>,
) {
    if !surface.is_changed() {
        return;
    }
    let Ok((mut transform, mut projection)) = query.get_single_mut() else {
        return;
    };
    transform.translation = surface.center_world().extend(transform.translation.z);
    projection.scale = surface.camera_scale();
}

/// WASD/Arrow keys pan, +/- (and Q/E) zoom.
pub fn camera_keyboard(
    keys: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    mut contexts: EguiContexts,
    mut surface: ResMut<MapSurface>,
) {
    // Typing into the sighting form must not move the map.
    if contexts.ctx_mut().wants_keyboard_input() {
        return;
    }

    let mut dir = Vec2::ZERO;
    if keys.pressed(KeyCode::KeyW) || keys.pressed(KeyCode::ArrowUp) {
        dir.y += 1.0;
    }
    if keys.pressed(KeyCode::KeyS) || keys.pressed(KeyCode::ArrowDown) {
        dir.y -= 1.0;
    }
    if keys.pressed(KeyCode::KeyA) || keys.pressed(KeyCode::ArrowLeft) {
        dir.x += 1.0;
    }
    if keys.pressed(KeyCode::KeyD) || keys.pressed(KeyCode::ArrowRight) {
        dir.x -= 1.0;
    }
    if dir != Vec2::ZERO {
        surface.pan_by_pixels(dir.normalize() * PAN_SPEED * time.delta_secs());
    }

    let mut zoom = 0.0;
    if keys.pressed(KeyCode::Equal) || keys.pressed(KeyCode::KeyE) {
        zoom += 1.0;
    }
    if keys.pressed(KeyCode::Minus) || keys.pressed(KeyCode::KeyQ) {
        zoom -= 1.0;
    }
    if zoom != 0.0 {
        surface.zoom_by(zoom * KEY_ZOOM_SPEED * time.delta_secs_f64());
    }
}

/// Left-mouse drag: pan the map (with threshold to distinguish from clicks).
pub fn camera_left_drag(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    mut contexts: EguiContexts,
    mut left_drag: ResMut<LeftClickDrag>,
    mut surface: ResMut<MapSurface>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };

    if buttons.just_pressed(MouseButton::Left) && !egui_wants_pointer(&mut contexts) {
        if let Some(pos) = window.cursor_position() {
            left_drag.pressed = true;
            left_drag.start_pos = pos;
            left_drag.last_pos = pos;
            left_drag.is_dragging = false;
        }
    }

    if buttons.just_released(MouseButton::Left) {
        if left_drag.pressed && !left_drag.is_dragging {
            left_drag.click = Some(left_drag.start_pos);
        }
        left_drag.pressed = false;
        left_drag.is_dragging = false;
    }

    if left_drag.pressed {
        if let Some(pos) = window.cursor_position() {
            if !left_drag.is_dragging && (pos - left_drag.start_pos).length() > LEFT_DRAG_THRESHOLD {
                left_drag.is_dragging = true;
            }
            if left_drag.is_dragging {
                let delta = pos - left_drag.last_pos;
                if delta != Vec2::ZERO {
                    surface.pan_by_pixels(delta);
                }
            }
            left_drag.last_pos = pos;
        }
    }
}

/// Scroll wheel: zoom by half a level per line.
pub fn camera_zoom(
    mut scroll_evts: EventReader<MouseWheel>,
    mut contexts: EguiContexts,
    mut surface: ResMut<MapSurface>,
) {
    if egui_wants_pointer(&mut contexts) {
        scroll_evts.clear();
        return;
    }
    for evt in scroll_evts.read() {
        let dy = match evt.unit {
            MouseScrollUnit::Line => evt.y,
            MouseScrollUnit::Pixel => evt.y / 100.0,
        };
        surface.zoom_by(dy as f64 * ZOOM_STEP);
    }
}
