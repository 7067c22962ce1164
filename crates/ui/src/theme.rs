use bevy_egui::{egui, EguiContexts};

/// Forest green used for headings and the active mode button.
pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(45, 80, 22);
/// Muted text for secondary lines.
pub const MUTED: egui::Color32 = egui::Color32::from_rgb(96, 104, 96);

pub fn apply_nature_theme(mut contexts: EguiContexts) {
    let ctx = contexts.ctx_mut();
    let mut style = (*ctx.style()).clone();
    style.visuals = egui::Visuals::light();

    // Pale moss panels with green interaction states
    let panel = egui::Color32::from_rgb(246, 249, 243);
    let inactive = egui::Color32::from_rgb(226, 236, 218);
    let hover = egui::Color32::from_rgb(200, 222, 186);
    let active = egui::Color32::from_rgb(74, 124, 89);

    style.visuals.widgets.noninteractive.bg_fill = panel;
    style.visuals.widgets.inactive.bg_fill = inactive;
    style.visuals.widgets.hovered.bg_fill = hover;
    style.visuals.widgets.active.bg_fill = active;
    style.visuals.widgets.inactive.weak_bg_fill = inactive;
    style.visuals.widgets.hovered.weak_bg_fill = hover;
    style.visuals.widgets.active.weak_bg_fill = active;

    style.visuals.window_fill = panel;
    style.visuals.panel_fill = panel;
    style.visuals.hyperlink_color = egui::Color32::from_rgb(46, 110, 160);

    style.visuals.selection.bg_fill = active;
    style.visuals.selection.stroke = egui::Stroke::new(1.0, egui::Color32::WHITE);

    let window_rounding = egui::CornerRadius::same(10);
    let widget_rounding = egui::CornerRadius::same(6);

    style.visuals.window_corner_radius = window_rounding;
    style.visuals.widgets.noninteractive.corner_radius = widget_rounding;
    style.visuals.widgets.inactive.corner_radius = widget_rounding;
    style.visuals.widgets.hovered.corner_radius = widget_rounding;
    style.visuals.widgets.active.corner_radius = widget_rounding;

    ctx.set_style(style);
}
