use bevy_egui::egui;

use crate::catalog::DishCatalog;
use crate::model::{format_price, DishCategory};
use crate::session::FeedbackBoard;
use crate::state::AppState;
use crate::ui::widgets::{format_relative_time, scaled_margin, stars};

/// Only reachable through `SectionView::Admin`
pub fn render_admin_dashboard(ui: &mut egui::Ui, state: &mut AppState, feedback: &mut FeedbackBoard) {
    let ui_scale = state.config.ui_scale;
    let catalog = state.catalog().clone();

    ui.heading("Admin Dashboard");
    ui.add_space(scaled_margin(8.0, ui_scale));

    ui.horizontal_wrapped(|ui| {
        stat_card(ui, "Dishes", catalog.len().to_string(), ui_scale);
        stat_card(ui, "Average price", format_price(catalog.average_price_cents()), ui_scale);
        stat_card(ui, "Offers", catalog.offers().len().to_string(), ui_scale);
        stat_card(
            ui,
            "Average rating",
            feedback
                .average_rating()
                .map(|r| format!("{:.1} / 5", r))
                .unwrap_or_else(|| "-".to_string()),
            ui_scale,
        );
    });

    ui.add_space(scaled_margin(12.0, ui_scale));
    egui::CollapsingHeader::new("Dishes")
        .default_open(true)
        .show(ui, |ui| render_dish_table(ui, &catalog));

    egui::CollapsingHeader::new(format!("Feedback ({})", feedback.entries().len()))
        .default_open(true)
        .show(ui, |ui| {
            if feedback.entries().is_empty() {
                ui.weak("No feedback yet");
                return;
            }
            let mut remove = None;
            egui::Grid::new("feedback_moderation")
                .striped(true)
                .num_columns(5)
                .show(ui, |ui| {
                    for (index, entry) in feedback.entries().iter().enumerate() {
                        ui.label(&entry.author);
                        ui.label(stars(entry.rating));
                        ui.label(&entry.comment);
                        ui.weak(format_relative_time(entry.submitted_at.elapsed()));
                        if ui.small_button("Remove").clicked() {
                            remove = Some(index);
                        }
                        ui.end_row();
                    }
                });
            if let Some(entry) = remove.and_then(|index| feedback.remove(index)) {
                state.notify(format!("Removed feedback from {}", entry.author));
            }
        });
}

fn stat_card(ui: &mut egui::Ui, label: &str, value: String, ui_scale: f32) {
    egui::Frame::group(ui.style())
        .inner_margin(scaled_margin(12.0, ui_scale))
        .show(ui, |ui| {
            ui.set_min_width(scaled_margin(140.0, ui_scale));
            ui.weak(label);
            ui.heading(value);
        });
}

fn render_dish_table(ui: &mut egui::Ui, catalog: &DishCatalog) {
    ui.horizontal_wrapped(|ui| {
        for category in DishCategory::ALL {
            ui.weak(format!("{}: {}", category.label(), catalog.by_category(category).count()));
        }
    });
    egui::Grid::new("dish_table")
        .striped(true)
        .num_columns(7)
        .show(ui, |ui| {
            for header in ["Id", "Name", "Category", "Price", "kcal", "P / C / F (g)", "Allergens"] {
                ui.strong(header);
            }
            ui.end_row();
            for dish in catalog.dishes() {
                ui.monospace(&dish.id);
                ui.label(&dish.name);
                ui.label(dish.category.label());
                ui.label(dish.formatted_price());
                ui.label(dish.nutrition.calories.to_string());
                ui.label(format!(
                    "{:.0} / {:.0} / {:.0}",
                    dish.nutrition.protein_g, dish.nutrition.carbs_g, dish.nutrition.fat_g
                ));
                ui.label(dish.allergens.join(", "));
                ui.end_row();
            }
        });
}
