//! Banner message shown above forms and lists.

use eframe::egui;

use crate::app::theme::colors;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
}

pub fn render(ui: &mut egui::Ui, kind: AlertKind, message: &str) {
    let (bg, fg) = match kind {
        AlertKind::Success => (colors::SUCCESS_BG, colors::SUCCESS_TEXT),
        AlertKind::Error => (colors::ERROR_BG, colors::ERROR_TEXT),
    };
    egui::Frame::default()
        .fill(bg)
        .corner_radius(4)
        .inner_margin(egui::Margin::same(10))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.colored_label(fg, message);
        });
    ui.add_space(8.0);
}
