use bevy_egui::egui;

use crate::catalog::DishCatalog;
use crate::model::{format_price, Dish, Section};
use crate::session::FeedbackBoard;
use crate::state::AppState;
use crate::ui::widgets::{feedback_card, scaled_font, scaled_margin, star_rating};

const ACCENT: egui::Color32 = egui::Color32::from_rgb(225, 29, 72);
const MAX_VISIBLE_FEEDBACK: usize = 5;

pub fn render_hero(ui: &mut egui::Ui, state: &mut AppState) {
    let ui_scale = state.config.ui_scale;
    egui::Frame::none()
        .fill(if ui.visuals().dark_mode {
            egui::Color32::from_rgb(60, 20, 30)
        } else {
            egui::Color32::from_rgb(255, 228, 230)
        })
        .rounding(12.0)
        .inner_margin(scaled_margin(32.0, ui_scale))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new("Casa Sabores")
                        .size(scaled_font(40.0, ui_scale))
                        .strong()
                        .color(ACCENT),
                );
                ui.label(
                    egui::RichText::new("Traditional Spanish cooking, served with a view")
                        .size(scaled_font(18.0, ui_scale)),
                );
                ui.add_space(scaled_margin(12.0, ui_scale));
                ui.horizontal(|ui| {
                    // Center the two buttons
                    let width = scaled_margin(260.0, ui_scale);
                    ui.add_space(((ui.available_width() - width) / 2.0).max(0.0));
                    if ui.button("View the menu").clicked() {
                        state.navigate(Section::Menu);
                    }
                    if ui.button("Book a table").clicked() {
                        state.navigate(Section::Contact);
                    }
                });
            });
        });
}

pub fn render_special_offers(ui: &mut egui::Ui, catalog: &DishCatalog, ui_scale: f32) {
    if catalog.offers().is_empty() {
        return;
    }

    ui.heading("Special Offers");
    ui.add_space(scaled_margin(6.0, ui_scale));
    ui.horizontal_wrapped(|ui| {
        for offer in catalog.offers() {
            egui::Frame::group(ui.style())
                .inner_margin(scaled_margin(12.0, ui_scale))
                .show(ui, |ui| {
                    ui.set_width(scaled_margin(240.0, ui_scale));
                    ui.horizontal(|ui| {
                        ui.strong(&offer.title);
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(
                                egui::RichText::new(format!("-{}%", offer.discount_percent))
                                    .strong()
                                    .color(ACCENT),
                            );
                        });
                    });
                    ui.label(&offer.description);
                    if let Some(dish) = offer.dish_id.as_deref().and_then(|id| catalog.get(id)) {
                        ui.horizontal(|ui| {
                            ui.weak(&dish.name);
                            ui.label(
                                egui::RichText::new(dish.formatted_price()).strikethrough().weak(),
                            );
                            ui.strong(format_price(offer.discounted_price(dish.price_cents)));
                        });
                    }
                });
        }
    });
}

pub fn render_nutrition_panel(ui: &mut egui::Ui, dish: &Dish, ui_scale: f32) {
    let nutrition = &dish.nutrition;
    egui::Frame::group(ui.style())
        .inner_margin(scaled_margin(16.0, ui_scale))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.heading("Nutrition");
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(format!("{} kcal", nutrition.calories))
                        .size(scaled_font(24.0, ui_scale))
                        .strong(),
                );
                ui.weak("per serving");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.strong(dish.formatted_price());
                });
            });
            ui.label(&dish.description);
            ui.add_space(scaled_margin(8.0, ui_scale));

            let (protein, carbs, fat) = nutrition.energy_split();
            let bars = [
                ("Protein", nutrition.protein_g, protein, egui::Color32::from_rgb(59, 130, 246)),
                ("Carbs", nutrition.carbs_g, carbs, egui::Color32::from_rgb(234, 179, 8)),
                ("Fat", nutrition.fat_g, fat, egui::Color32::from_rgb(239, 68, 68)),
            ];
            egui::Grid::new("macros").num_columns(3).show(ui, |ui| {
                for (label, grams, share, color) in bars {
                    ui.label(label);
                    ui.label(format!("{:.1} g", grams));
                    ui.add(
                        egui::ProgressBar::new(share)
                            .desired_width(scaled_margin(180.0, ui_scale))
                            .fill(color)
                            .text(format!("{:.0}% of energy", share * 100.0)),
                    );
                    ui.end_row();
                }
                ui.label("Fibre");
                ui.label(format!("{:.1} g", nutrition.fiber_g));
                ui.end_row();
            });

            if !dish.ingredients.is_empty() {
                ui.add_space(scaled_margin(8.0, ui_scale));
                ui.strong("Ingredients");
                ui.label(dish.ingredients.join(", "));
            }

            ui.add_space(scaled_margin(8.0, ui_scale));
            ui.strong("Allergens");
            if dish.allergens.is_empty() {
                ui.weak("None declared");
            } else {
                ui.horizontal_wrapped(|ui| {
                    for allergen in &dish.allergens {
                        ui.label(
                            egui::RichText::new(allergen)
                                .background_color(egui::Color32::from_rgb(254, 243, 199))
                                .color(egui::Color32::from_rgb(146, 64, 14)),
                        );
                    }
                });
            }
        });
}

pub fn render_feedback_section(ui: &mut egui::Ui, state: &mut AppState, feedback: &mut FeedbackBoard) {
    let ui_scale = state.config.ui_scale;
    egui::Frame::group(ui.style())
        .inner_margin(scaled_margin(16.0, ui_scale))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.heading("Feedback");
                if let Some(average) = feedback.average_rating() {
                    ui.weak(format!(
                        "{:.1} / 5 from {} review(s)",
                        average,
                        feedback.entries().len()
                    ));
                }
            });

            ui.horizontal(|ui| {
                ui.label("Name:");
                ui.add(
                    egui::TextEdit::singleline(&mut state.feedback_author)
                        .hint_text("Anonymous")
                        .desired_width(scaled_margin(160.0, ui_scale)),
                );
                star_rating(ui, &mut state.feedback_rating, ui_scale);
            });
            ui.add(
                egui::TextEdit::multiline(&mut state.feedback_comment)
                    .hint_text("Tell us about your meal...")
                    .desired_rows(3)
                    .desired_width(f32::INFINITY),
            );
            if ui.button("Send feedback").clicked() {
                let result = feedback.submit(
                    &state.feedback_author,
                    state.feedback_rating,
                    &state.feedback_comment,
                );
                match result {
                    Ok(()) => {
                        state.reset_feedback_form();
                        state.notify("Thanks for your feedback!");
                    }
                    Err(e) => state.notify(format!("Feedback not sent: {}", e)),
                }
            }

            if !feedback.entries().is_empty() {
                ui.add_space(scaled_margin(8.0, ui_scale));
                for entry in feedback.entries().iter().take(MAX_VISIBLE_FEEDBACK) {
                    feedback_card(ui, entry);
                }
            }
        });
}
