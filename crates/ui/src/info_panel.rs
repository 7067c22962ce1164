use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use atlas::info_panel::PanelContent;

use crate::theme::{ACCENT, MUTED};

/// Mode description card in the bottom-left corner.
pub fn info_panel_ui(mut contexts: EguiContexts, panels: Res<PanelContent>) {
    let info = &panels.info;
    if info.title.is_empty() {
        return;
    }

    egui::Window::new("info_panel")
        .title_bar(false)
        .resizable(false)
        .default_width(280.0)
        .anchor(egui::Align2::LEFT_BOTTOM, egui::vec2(10.0, -30.0))
        .show(contexts.ctx_mut(), |ui| {
            ui.heading(egui::RichText::new(info.title).color(ACCENT));
            ui.label(info.description);
            ui.add_space(4.0);
            ui.label(egui::RichText::new(info.tip).small().italics().color(MUTED));
        });
}
