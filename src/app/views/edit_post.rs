//! Edit-post page
//!
//! Same form as create, preloaded from the server. The stored image stays
//! untouched unless a new file path is given.

use eframe::egui;

use crate::app::state::{AppState, Route};
use crate::app::theme::colors;
use crate::app::views::alert::{self, AlertKind};
use crate::app::views::create_post::form_fields;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.label(
        egui::RichText::new("Uredi post")
            .size(26.0)
            .strong()
            .color(colors::ACCENT),
    );
    ui.add_space(12.0);

    if state.post_form.loading {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.colored_label(colors::TEXT_SECONDARY, "Učitavanje posta...");
        });
        return;
    }

    if let Some(message) = state.post_form.success.clone() {
        alert::render(ui, AlertKind::Success, &message);
    }
    if let Some(message) = state.post_form.error.clone() {
        alert::render(ui, AlertKind::Error, &message);
    }

    egui::Frame::default()
        .fill(colors::CARD_BG)
        .corner_radius(6)
        .inner_margin(egui::Margin::same(16))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            form_fields(ui, state);

            if let Some(url) = state.post_form.current_image.clone() {
                ui.add_space(4.0);
                ui.colored_label(colors::TEXT_MUTED, "Trenutna slika:");
                ui.hyperlink(url);
                ui.colored_label(
                    colors::TEXT_MUTED,
                    "Ostavite prazno ako ne želite mijenjati sliku.",
                );
            }

            ui.add_space(12.0);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let submitting = state.post_form.submit_result.is_some();
                let save = egui::Button::new(
                    egui::RichText::new("Spremi promjene").color(colors::TEXT_ON_ACCENT),
                )
                .fill(colors::ACCENT);
                if ui.add_enabled(!submitting, save).clicked() {
                    state.submit_post();
                }
                if ui.button("Odustani").clicked() {
                    state.navigate(Route::Home);
                }
            });
        });
}
