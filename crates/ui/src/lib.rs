use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use atlas::AtlasUpdateSet;

pub mod info_panel;
pub mod legend_panel;
pub mod map_markers;
pub mod popup_window;
pub mod sighting_modal;
pub mod theme;
pub mod toolbar;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .add_systems(Startup, theme::apply_nature_theme)
            .add_systems(
                Update,
                (
                    toolbar::toolbar_ui,
                    map_markers::marker_glyphs_ui,
                    legend_panel::legend_ui,
                    info_panel::info_panel_ui,
                    popup_window::popup_window_ui,
                    sighting_modal::sighting_modal_ui,
                )
                    .chain()
                    .after(AtlasUpdateSet),
            );
    }
}
