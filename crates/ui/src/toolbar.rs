use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use atlas::config::TILE_BACKDROP;
use atlas::legend::LegendVisibility;
use atlas::mode::{mode_buttons, ActiveMode, SetModeEvent};
use atlas::sighting::SightingForm;

use crate::theme::{ACCENT, MUTED};

/// Height shared by the top bar and the attribution strip.
pub const BAR_HEIGHT: f32 = 40.0;

pub fn toolbar_ui(
    mut contexts: EguiContexts,
    active: Res<ActiveMode>,
    mut legend: ResMut<LegendVisibility>,
    mut form: ResMut<SightingForm>,
    mut mode_requests: EventWriter<SetModeEvent>,
) {
    let ctx = contexts.ctx_mut();

    // ---- Title + controls ----
    egui::TopBottomPanel::top("top_bar")
        .exact_height(BAR_HEIGHT)
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                ui.spacing_mut().item_spacing.x = 10.0;

                ui.label(
                    egui::RichText::new("🌿 EcoTracker Ireland")
                        .strong()
                        .size(18.0)
                        .color(ACCENT),
                );
                ui.separator();

                for button in mode_buttons(active.0) {
                    let label = egui::RichText::new(button.label).strong();
                    if ui.selectable_label(button.active, label).clicked() {
                        mode_requests.send(SetModeEvent(button.mode));
                    }
                }

                ui.separator();

                if ui.button("📝 Report Sighting").clicked() {
                    form.open();
                }
                if ui.button(legend.toggle_label()).clicked() {
                    legend.toggle();
                }
            });
        });

    // ---- Tile attribution ----
    egui::TopBottomPanel::bottom("attribution")
        .exact_height(20.0)
        .show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new(TILE_BACKDROP.attribution)
                        .small()
                        .color(MUTED),
                )
                .on_hover_text(format!(
                    "Tiles: {} (max zoom {})",
                    TILE_BACKDROP.url_template, TILE_BACKDROP.max_zoom
                ));
            });
        });
}
