//! Modal sighting report form.
//!
//! Clicking the dimmed backdrop or the close button dismisses the form.
//! After a submission the form is replaced by the acknowledgement until the
//! auto-close fires.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use atlas::sighting::{SightingFields, SightingForm, SightingLog};

use crate::theme::ACCENT;

fn field_row(ui: &mut egui::Ui, label: &str, hint: &str, value: &mut String) {
    ui.label(label);
    ui.add(
        egui::TextEdit::singleline(value)
            .hint_text(hint)
            .desired_width(f32::INFINITY),
    );
    ui.end_row();
}

fn form_fields(ui: &mut egui::Ui, fields: &mut SightingFields) {
    egui::Grid::new("sighting_fields")
        .num_columns(2)
        .spacing([8.0, 6.0])
        .show(ui, |ui| {
            field_row(ui, "Species", "e.g. Red Kite", &mut fields.species);
            field_row(ui, "Location", "e.g. Wicklow Mountains", &mut fields.location);
            field_row(ui, "Date", "YYYY-MM-DD", &mut fields.date);
            ui.label("Description");
            ui.add(
                egui::TextEdit::multiline(&mut fields.description)
                    .desired_rows(3)
                    .desired_width(f32::INFINITY),
            );
            ui.end_row();
            field_row(ui, "Email", "optional", &mut fields.email);
        });
}

pub fn sighting_modal_ui(
    mut contexts: EguiContexts,
    mut form: ResMut<SightingForm>,
    mut log: ResMut<SightingLog>,
) {
    if !form.open {
        return;
    }

    let ctx = contexts.ctx_mut();

    // Semi-transparent backdrop; a click on it closes the form.
    let screen_rect = ctx.screen_rect();
    let backdrop_clicked = egui::Area::new(egui::Id::new("sighting_backdrop"))
        .fixed_pos(screen_rect.min)
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            ui.painter().rect_filled(
                screen_rect,
                egui::CornerRadius::ZERO,
                egui::Color32::from_black_alpha(120),
            );
            ui.allocate_rect(screen_rect, egui::Sense::click()).clicked()
        })
        .inner;

    let mut close = false;
    let mut submit = false;

    egui::Window::new("Report a Wildlife Sighting")
        .title_bar(false)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .default_width(380.0)
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(egui::RichText::new("📝 Report a Wildlife Sighting").color(ACCENT));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("✖").clicked() {
                        close = true;
                    }
                });
            });
            ui.separator();

            if let Some(message) = form.message.clone() {
                ui.label(egui::RichText::new(message.heading).strong());
                ui.label(message.body);
            } else {
                form_fields(ui, &mut form.fields);
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.button("Submit Sighting").clicked() {
                        submit = true;
                    }
                });
            }
        });

    if submit {
        form.submit(&mut log);
    } else if close || backdrop_clicked {
        form.close();
    }
}
