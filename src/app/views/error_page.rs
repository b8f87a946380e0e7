//! Error page, also the target of any invalid navigation.

use eframe::egui;

use crate::app::state::{AppState, Route};
use crate::app::theme::colors;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.vertical_centered(|ui| {
        ui.add_space(100.0);
        ui.label(
            egui::RichText::new("Greška")
                .size(32.0)
                .strong()
                .color(colors::ERROR_TEXT),
        );
        ui.add_space(12.0);
        ui.colored_label(
            colors::TEXT_SECONDARY,
            "Stranica koju tražite ne postoji ili je došlo do greške.",
        );
        ui.add_space(24.0);
        let button = egui::Button::new(
            egui::RichText::new("Povratak na naslovnicu").color(colors::TEXT_ON_ACCENT),
        )
        .fill(colors::ACCENT)
        .min_size(egui::vec2(220.0, 32.0));
        if ui.add(button).clicked() {
            state.navigate(Route::Home);
        }
    });
}
