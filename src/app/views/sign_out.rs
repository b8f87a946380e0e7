//! Sign-out page
//!
//! The session was already cleared when the route was entered; this view
//! only shows the transient confirmation until the redirect fires.

use eframe::egui;

use crate::app::state::AppState;
use crate::app::theme::colors;

pub fn render(ui: &mut egui::Ui, _state: &mut AppState) {
    ui.vertical_centered(|ui| {
        ui.add_space(120.0);
        ui.spinner();
        ui.add_space(12.0);
        ui.colored_label(colors::TEXT_SECONDARY, "Odjavljujemo vas...");
    });
}
