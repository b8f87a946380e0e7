//! Create-post page

use eframe::egui;

use crate::app::state::{AppState, Route};
use crate::app::theme::colors;
use crate::app::views::alert::{self, AlertKind};

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.label(
        egui::RichText::new("Kreiraj novi post")
            .size(26.0)
            .strong()
            .color(colors::ACCENT),
    );
    ui.add_space(12.0);

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

            ui.add_space(12.0);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let submitting = state.post_form.submit_result.is_some();
                let publish = egui::Button::new(
                    egui::RichText::new("Objavi post").color(colors::TEXT_ON_ACCENT),
                )
                .fill(colors::ACCENT);
                if ui.add_enabled(!submitting, publish).clicked() {
                    state.submit_post();
                }
                if ui.button("Odustani").clicked() {
                    state.navigate(Route::Home);
                }
            });
        });
}

/// Shared field layout for the create and edit forms.
pub fn form_fields(ui: &mut egui::Ui, state: &mut AppState) {
    ui.label(egui::RichText::new("Naslov").color(colors::TEXT_SECONDARY));
    ui.add(
        egui::TextEdit::singleline(&mut state.post_form.title)
            .desired_width(f32::INFINITY),
    );
    ui.add_space(8.0);

    ui.label(egui::RichText::new("Kategorija").color(colors::TEXT_SECONDARY));
    let selected_name = state
        .categories
        .iter()
        .find(|c| c.id == state.post_form.category)
        .map(|c| c.name.clone())
        .unwrap_or_else(|| "Odaberi kategoriju".to_string());
    let mut choice = state.post_form.category.clone();
    egui::ComboBox::from_id_salt("post_category")
        .selected_text(selected_name)
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut choice, String::new(), "Odaberi kategoriju");
            for category in &state.categories {
                ui.selectable_value(&mut choice, category.id.clone(), &category.name);
            }
        });
    state.post_form.category = choice;
    ui.add_space(8.0);

    ui.label(egui::RichText::new("Sadržaj").color(colors::TEXT_SECONDARY));
    ui.add(
        egui::TextEdit::multiline(&mut state.post_form.content)
            .desired_width(f32::INFINITY)
            .desired_rows(8),
    );
    ui.add_space(8.0);

    ui.label(egui::RichText::new("Slika (putanja do datoteke)").color(colors::TEXT_SECONDARY));
    ui.add(
        egui::TextEdit::singleline(&mut state.post_form.image_path)
            .desired_width(f32::INFINITY),
    );
}
