//! Like toggle button
//!
//! Disabled while signed out or while a request is in flight; that flag is
//! the only guard against double-toggling from this client.

use eframe::egui;

use crate::app::state::AppState;
use crate::app::theme::colors;

pub fn render(ui: &mut egui::Ui, state: &mut AppState, post_id: &str) {
    let (count, liked, busy) = match state.likes.get(post_id) {
        Some(like) => (like.count, like.liked, like.loading),
        None => (0, false, true),
    };
    let signed_in = state.user().is_some();

    let (bg, fg) = if liked {
        (colors::LIKE_ACTIVE_BG, colors::LIKE_ACTIVE_TEXT)
    } else {
        (colors::LIKE_INACTIVE_BG, colors::LIKE_INACTIVE_TEXT)
    };
    let symbol = if liked { "♥" } else { "♡" };
    let button = egui::Button::new(
        egui::RichText::new(format!("{} {}", symbol, count)).color(fg),
    )
    .fill(bg);

    let response = ui.add_enabled(signed_in && !busy, button);
    let response = if !signed_in {
        response.on_disabled_hover_text("Prijavi se za lajk")
    } else if liked {
        response.on_hover_text("Ukloni lajk")
    } else {
        response.on_hover_text("Lajkaj post")
    };

    if response.clicked() {
        state.toggle_like(post_id);
    }
}
