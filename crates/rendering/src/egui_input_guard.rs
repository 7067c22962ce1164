//! Keeps map input from reacting to pointer events that belong to egui.
//!
//! Marker glyphs, the open popup and the sighting modal are all egui areas
//! drawn over the map. A click on a glyph must open its record popup without
//! also picking the overlay rectangle beneath it, and dragging inside the
//! legend must not pan the map.

use bevy_egui::EguiContexts;

/// Whether the pointer is currently egui's: over any window or area, or in
/// the middle of an egui drag.
#[inline]
pub fn egui_wants_pointer(contexts: &mut EguiContexts) -> bool {
    let ctx = contexts.ctx_mut();
    ctx.is_pointer_over_area() || ctx.wants_pointer_input()
}
