//! Renders the popup currently open on the map.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use atlas::config::POPUP_MAX_WIDTH;
use atlas::popup::{ConservationStatus, Popup, PopupField, SelectedPopup};

use crate::theme::{ACCENT, MUTED};

fn badge_colors(status: ConservationStatus) -> (egui::Color32, egui::Color32) {
    match status {
        ConservationStatus::Endangered => (
            egui::Color32::from_rgb(255, 230, 230),
            egui::Color32::from_rgb(190, 30, 30),
        ),
        ConservationStatus::LeastConcern => (
            egui::Color32::from_rgb(228, 245, 228),
            egui::Color32::from_rgb(30, 120, 50),
        ),
    }
}

fn popup_body(ui: &mut egui::Ui, popup: &Popup) {
    ui.label(egui::RichText::new(&popup.header).strong().size(16.0).color(ACCENT));
    if let Some(image) = &popup.image {
        ui.hyperlink_to(format!("🖼 Photo: {}", image.alt), image.uri);
    }
    ui.separator();

    for field in &popup.fields {
        match field {
            PopupField::Labeled {
                label,
                value,
                emphasized,
            } => {
                ui.horizontal_wrapped(|ui| {
                    ui.label(egui::RichText::new(format!("{label}:")).strong());
                    let value = egui::RichText::new(value);
                    ui.label(if *emphasized { value.italics() } else { value });
                });
            }
            PopupField::Paragraph(text) => {
                ui.label(text);
            }
            PopupField::Note(text) => {
                ui.label(egui::RichText::new(text).small().color(MUTED));
            }
            PopupField::Badge(status) => {
                let (fill, text) = badge_colors(*status);
                egui::Frame::new()
                    .fill(fill)
                    .corner_radius(egui::CornerRadius::same(4))
                    .inner_margin(egui::Margin::symmetric(6, 2))
                    .show(ui, |ui| {
                        ui.label(
                            egui::RichText::new(format!("{} {}", status.glyph(), status.label()))
                                .strong()
                                .color(text),
                        );
                    });
            }
        }
    }
}

pub fn popup_window_ui(mut contexts: EguiContexts, mut selected: ResMut<SelectedPopup>) {
    let Some(popup) = selected.popup.as_ref() else {
        return;
    };

    let mut open = true;
    egui::Window::new("popup")
        .title_bar(false)
        .resizable(false)
        .collapsible(false)
        .max_width(POPUP_MAX_WIDTH)
        .anchor(egui::Align2::CENTER_TOP, egui::vec2(0.0, 60.0))
        .show(contexts.ctx_mut(), |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                if ui.small_button("✖").clicked() {
                    open = false;
                }
            });
            popup_body(ui, popup);
        });

    if !open {
        selected.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endangered_badge_reads_red() {
        let (_, endangered) = badge_colors(ConservationStatus::Endangered);
        let (_, safe) = badge_colors(ConservationStatus::LeastConcern);
        assert!(endangered.r() > endangered.g());
        assert!(safe.g() > safe.r());
    }
}
