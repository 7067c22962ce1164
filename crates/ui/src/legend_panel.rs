//! Legend window for the active mode.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use atlas::info_panel::PanelContent;
use atlas::legend::{LegendItem, LegendVisibility, Swatch};

use crate::theme::{ACCENT, MUTED};

const SWATCH_SIZE: egui::Vec2 = egui::vec2(20.0, 14.0);

/// Parses `#rrggbb` for egui, grey when malformed.
pub fn egui_color(hex: &str) -> egui::Color32 {
    egui::Color32::from_hex(hex).unwrap_or(egui::Color32::GRAY)
}

pub fn legend_ui(
    mut contexts: EguiContexts,
    panels: Res<PanelContent>,
    mut visibility: ResMut<LegendVisibility>,
) {
    if !visibility.visible {
        return;
    }

    let mut open = true;
    egui::Window::new("Legend")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .default_width(240.0)
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-10.0, 50.0))
        .show(contexts.ctx_mut(), |ui| {
            for section in panels.legend {
                ui.label(egui::RichText::new(section.title).strong().color(ACCENT));
                for item in section.items {
                    legend_row(ui, item);
                }
                ui.add_space(6.0);
            }
        });

    if !open {
        visibility.close();
    }
}

fn legend_row(ui: &mut egui::Ui, item: &LegendItem) {
    ui.horizontal(|ui| {
        match item.swatch {
            Swatch::Icon(glyph) => {
                ui.add_sized(SWATCH_SIZE, egui::Label::new(glyph));
            }
            Swatch::Color { hex, dashed } => {
                let (rect, _) = ui.allocate_exact_size(SWATCH_SIZE, egui::Sense::hover());
                let color = egui_color(hex);
                let painter = ui.painter();
                painter.rect_filled(rect, 2.0, color.gamma_multiply(0.6));
                let stroke = egui::Stroke::new(2.0, color);
                if dashed {
                    let corners = [
                        rect.left_top(),
                        rect.right_top(),
                        rect.right_bottom(),
                        rect.left_bottom(),
                        rect.left_top(),
                    ];
                    painter.extend(egui::Shape::dashed_line(&corners, stroke, 4.0, 2.0));
                } else {
                    painter.rect_stroke(rect, 2.0, stroke, egui::StrokeKind::Inside);
                }
            }
        }
        ui.vertical(|ui| {
            ui.label(egui::RichText::new(item.label).strong());
            ui.label(egui::RichText::new(item.detail).small().color(MUTED));
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use atlas::legend::legend_for_mode;
    use atlas::mode::MapMode;

    #[test]
    fn every_legend_color_parses() {
        for mode in MapMode::ALL {
            for item in legend_for_mode(mode).iter().flat_map(|s| s.items) {
                if let Swatch::Color { hex, .. } = item.swatch {
                    assert!(egui::Color32::from_hex(hex).is_ok(), "{hex}");
                }
            }
        }
    }

    #[test]
    fn malformed_colors_fall_back_to_grey() {
        assert_eq!(egui_color("#zzzzzz"), egui::Color32::GRAY);
        assert_eq!(egui_color("#ff0000"), egui::Color32::from_rgb(255, 0, 0));
    }
}
