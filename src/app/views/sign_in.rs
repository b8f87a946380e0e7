//! Sign-in page

use eframe::egui;

use crate::app::state::{AppState, Route};
use crate::app::theme::colors;
use crate::app::views::alert::{self, AlertKind};

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let available = ui.available_rect_before_wrap();
    let input_width = 300.0;

    ui.vertical_centered(|ui| {
        let top_space = ((available.height() - 320.0) / 2.0).max(20.0);
        ui.add_space(top_space);

        ui.label(
            egui::RichText::new("Prijava u račun")
                .size(24.0)
                .strong()
                .color(colors::TEXT_PRIMARY),
        );
        ui.add_space(16.0);

        if let Some(error) = state.session.error.clone() {
            ui.scope(|ui| {
                ui.set_max_width(input_width);
                alert::render(ui, AlertKind::Error, &error);
            });
        }

        ui.label(egui::RichText::new("Email adresa").color(colors::TEXT_SECONDARY));
        ui.add_sized(
            [input_width, 28.0],
            egui::TextEdit::singleline(&mut state.email_input),
        );
        ui.add_space(8.0);

        ui.label(egui::RichText::new("Lozinka").color(colors::TEXT_SECONDARY));
        ui.add_sized(
            [input_width, 28.0],
            egui::TextEdit::singleline(&mut state.password_input).password(true),
        );
        ui.add_space(16.0);

        let label = if state.session.loading {
            "Molimo pričekajte..."
        } else {
            "Prijavi se"
        };
        let button = egui::Button::new(
            egui::RichText::new(label).color(colors::TEXT_ON_ACCENT),
        )
        .fill(colors::ACCENT)
        .min_size(egui::vec2(input_width, 32.0));
        if ui.add_enabled(!state.session.loading, button).clicked() {
            state.handle_sign_in();
        }

        ui.add_space(16.0);
        ui.colored_label(colors::TEXT_MUTED, "Nemaš račun?");
        if ui
            .link(egui::RichText::new("Registriraj se").color(colors::ACCENT))
            .clicked()
        {
            state.navigate(Route::SignUp);
        }
    });
}
