//! Home page: the post list
//!
//! One full-list fetch per visit; changing the category filter re-issues
//! the fetch with a new filter expression instead of filtering in memory.

use eframe::egui;

use crate::app::state::{AppState, Route};
use crate::app::theme::colors;
use crate::app::views::like_button;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.label(
        egui::RichText::new("Postovi")
            .size(26.0)
            .strong()
            .color(colors::TEXT_PRIMARY),
    );
    match state.user() {
        Some(user) => {
            ui.colored_label(
                colors::TEXT_SECONDARY,
                format!("Prijavljen kao: {}", user.email),
            );
        }
        None => {
            ui.colored_label(colors::TEXT_SECONDARY, "Niste prijavljeni");
        }
    }
    ui.add_space(8.0);

    render_category_filter(ui, state);
    ui.add_space(12.0);

    if state.posts_loading {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.colored_label(colors::TEXT_SECONDARY, "Učitavanje...");
        });
        return;
    }

    if state.posts_error {
        ui.colored_label(colors::ERROR_TEXT, "Dogodila se greška pri učitavanju.");
        if ui.button("Pokušaj ponovno").clicked() {
            state.reload_posts();
        }
        return;
    }

    if state.posts.is_empty() {
        ui.colored_label(colors::TEXT_MUTED, "Nema postova za prikaz");
        return;
    }

    let posts = state.posts.clone();
    let user_id = state.user().map(|u| u.id);

    egui::ScrollArea::vertical().show(ui, |ui| {
        for post in &posts {
            egui::Frame::default()
                .fill(colors::CARD_BG)
                .corner_radius(6)
                .inner_margin(egui::Margin::same(12))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(
                        egui::RichText::new(&post.title)
                            .size(18.0)
                            .strong()
                            .color(colors::TEXT_PRIMARY),
                    );

                    let mut meta = Vec::new();
                    if let Some(author) = post.author_name() {
                        meta.push(author.to_string());
                    }
                    if let Some(category) = post.category_name() {
                        meta.push(category.to_string());
                    }
                    meta.push(post.created_display());
                    ui.colored_label(colors::TEXT_MUTED, meta.join(" · "));

                    ui.add_space(4.0);
                    ui.colored_label(colors::TEXT_SECONDARY, &post.content);

                    if !post.image.is_empty() {
                        let url =
                            state
                                .client
                                .file_url(&post.collection_id, &post.id, &post.image);
                        ui.add_space(4.0);
                        ui.hyperlink_to(format!("Slika: {}", post.image), url);
                    }

                    ui.add_space(6.0);
                    ui.horizontal(|ui| {
                        like_button::render(ui, state, &post.id);
                        if user_id.as_deref() == Some(post.author.as_str())
                            && ui.button("Uredi").clicked()
                        {
                            state.navigate(Route::EditPost(post.id.clone()));
                        }
                    });
                });
            ui.add_space(10.0);
        }
    });
}

fn render_category_filter(ui: &mut egui::Ui, state: &mut AppState) {
    let selected_name = state
        .category_filter
        .as_ref()
        .and_then(|id| state.categories.iter().find(|c| &c.id == id))
        .map(|c| c.name.clone())
        .unwrap_or_else(|| "Sve kategorije".to_string());

    let mut choice = state.category_filter.clone();
    ui.horizontal(|ui| {
        ui.colored_label(colors::TEXT_SECONDARY, "Kategorija:");
        egui::ComboBox::from_id_salt("category_filter")
            .selected_text(selected_name)
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut choice, None, "Sve kategorije");
                for category in &state.categories {
                    ui.selectable_value(
                        &mut choice,
                        Some(category.id.clone()),
                        &category.name,
                    );
                }
            });
    });
    if choice != state.category_filter {
        state.set_category_filter(choice);
    }
}
