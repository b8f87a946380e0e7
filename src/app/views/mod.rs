//! Views
//!
//! One render function per page, plus the header bar with the nav links.
//! The central panel dispatches on the current route.

use eframe::egui;

use crate::app::state::{AppState, Route};
use crate::app::theme::colors;

pub mod alert;
pub mod create_post;
pub mod edit_post;
pub mod error_page;
pub mod home;
pub mod like_button;
pub mod sign_in;
pub mod sign_out;
pub mod sign_up;

/// Header: app name on the left, nav links on the right. Links to the
/// protected pages only exist while a session is present.
pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    let frame_style = egui::Frame::default()
        .fill(colors::HEADER_BG)
        .inner_margin(egui::Margin::symmetric(16, 10));

    egui::TopBottomPanel::top("header")
        .frame(frame_style)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                let title = egui::RichText::new(state.config.app_name())
                    .size(22.0)
                    .strong()
                    .color(colors::ACCENT);
                if ui
                    .add(egui::Label::new(title).sense(egui::Sense::click()))
                    .clicked()
                {
                    state.navigate(Route::Home);
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    match state.user() {
                        Some(user) => {
                            if ui
                                .add(
                                    egui::Button::new(
                                        egui::RichText::new("Odjava")
                                            .color(colors::TEXT_ON_ACCENT),
                                    )
                                    .fill(colors::PINK),
                                )
                                .clicked()
                            {
                                state.navigate(Route::SignOut);
                            }
                            if ui
                                .add(
                                    egui::Button::new(
                                        egui::RichText::new("Novi post")
                                            .color(colors::TEXT_ON_ACCENT),
                                    )
                                    .fill(colors::ACCENT),
                                )
                                .clicked()
                            {
                                state.navigate(Route::CreatePost);
                            }
                            ui.colored_label(
                                colors::TEXT_SECONDARY,
                                format!("Dobrodošli, {}", user.display_name()),
                            );
                        }
                        None => {
                            if ui
                                .add(
                                    egui::Button::new(
                                        egui::RichText::new("Registracija")
                                            .color(colors::TEXT_ON_ACCENT),
                                    )
                                    .fill(colors::ACCENT),
                                )
                                .clicked()
                            {
                                state.navigate(Route::SignUp);
                            }
                            if ui.button("Prijava").clicked() {
                                state.navigate(Route::SignIn);
                            }
                        }
                    }
                });
            });
        });
}

pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    let frame = egui::Frame::default()
        .fill(colors::PAGE_BG)
        .inner_margin(egui::Margin::same(16));

    let route = state.route.clone();
    egui::CentralPanel::default()
        .frame(frame)
        .show(ctx, |ui| match route {
            Route::Home => home::render(ui, state),
            Route::SignIn => sign_in::render(ui, state),
            Route::SignUp => sign_up::render(ui, state),
            Route::SignOut => sign_out::render(ui, state),
            Route::CreatePost => create_post::render(ui, state),
            Route::EditPost(_) => edit_post::render(ui, state),
            Route::Error => error_page::render(ui, state),
        });
}
