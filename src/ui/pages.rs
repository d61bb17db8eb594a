use bevy_egui::egui;

use crate::model::{DishCategory, Section};
use crate::session::ContactMessage;
use crate::state::AppState;
use crate::ui::widgets::{scaled_font, scaled_margin};

pub fn render_menu(ui: &mut egui::Ui, state: &mut AppState) {
    let ui_scale = state.config.ui_scale;
    let catalog = state.catalog().clone();
    let mut show_in_gallery = None;

    ui.heading("Our Menu");
    ui.weak("Every dish can be explored in 3D from the home page.");
    ui.add_space(scaled_margin(8.0, ui_scale));

    for category in DishCategory::ALL {
        let mut dishes = catalog.by_category(category).peekable();
        if dishes.peek().is_none() {
            continue;
        }
        ui.add_space(scaled_margin(8.0, ui_scale));
        ui.label(
            egui::RichText::new(category.label())
                .size(scaled_font(20.0, ui_scale))
                .strong(),
        );
        ui.separator();

        for dish in dishes {
            let in_gallery = state.selection.is_selected(dish);
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.set_max_width(ui.available_width() * 0.75);
                    ui.horizontal(|ui| {
                        ui.strong(&dish.name);
                        if in_gallery {
                            ui.weak("(in gallery)");
                        }
                    });
                    ui.label(&dish.description);
                    ui.weak(format!("{} kcal", dish.nutrition.calories));
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("View").clicked() {
                        show_in_gallery = Some(dish);
                    }
                    ui.strong(dish.formatted_price());
                });
            });
            ui.add_space(scaled_margin(4.0, ui_scale));
        }
    }

    if let Some(dish) = show_in_gallery {
        state.selection.select(dish);
        state.navigate(Section::Home);
    }
}

pub fn render_about(ui: &mut egui::Ui, ui_scale: f32) {
    ui.heading("About Casa Sabores");
    ui.add_space(scaled_margin(8.0, ui_scale));
    ui.label(
        "Casa Sabores opened in 1998 as a six-table bodega. Today we still cook the \
         recipes of our grandparents: rice over orange-wood fire, slow stews and \
         desserts made every morning.",
    );
    ui.add_space(scaled_margin(6.0, ui_scale));
    ui.label(
        "Our produce comes from family farms within 80 km of the kitchen, and the \
         menu follows the seasons.",
    );
    ui.add_space(scaled_margin(12.0, ui_scale));
    egui::Grid::new("about_facts").num_columns(2).show(ui, |ui| {
        ui.strong("Head chef");
        ui.label("Marta Ibáñez");
        ui.end_row();
        ui.strong("Cuisine");
        ui.label("Valencian, Andalusian, Galician");
        ui.end_row();
        ui.strong("Seats");
        ui.label("64 inside, 30 on the terrace");
        ui.end_row();
    });
}

pub fn render_contact(ui: &mut egui::Ui, state: &mut AppState) {
    let ui_scale = state.config.ui_scale;
    ui.heading("Contact");
    ui.add_space(scaled_margin(8.0, ui_scale));

    ui.columns(2, |columns| {
        let ui = &mut columns[0];
        ui.strong("Find us");
        ui.label("Carrer de la Mar 12, 46001 València");
        ui.label("+34 960 000 000");
        ui.add_space(scaled_margin(8.0, ui_scale));
        ui.strong("Opening hours");
        egui::Grid::new("opening_hours").num_columns(2).show(ui, |ui| {
            for (days, hours) in [
                ("Mon - Thu", "13:00 - 16:00, 20:00 - 23:00"),
                ("Fri - Sat", "13:00 - 16:30, 20:00 - 00:00"),
                ("Sunday", "13:00 - 17:00"),
            ] {
                ui.label(days);
                ui.label(hours);
                ui.end_row();
            }
        });

        let ui = &mut columns[1];
        ui.strong("Write to us");
        egui::Grid::new("contact_form").num_columns(2).show(ui, |ui| {
            ui.label("Name");
            ui.text_edit_singleline(&mut state.contact.name);
            ui.end_row();
            ui.label("Email");
            ui.text_edit_singleline(&mut state.contact.email);
            ui.end_row();
        });
        ui.add(
            egui::TextEdit::multiline(&mut state.contact.message)
                .hint_text("Reservations, allergies, events...")
                .desired_rows(4)
                .desired_width(f32::INFINITY),
        );
        if ui.button("Send").clicked() {
            match state.contact.validate() {
                Ok(()) => {
                    let name = state.contact.name.trim().to_string();
                    state.contact = ContactMessage::default();
                    state.notify(format!("Thanks {}, we'll get back to you soon.", name));
                }
                Err(e) => state.notify(format!("Message not sent: {}", e)),
            }
        }
    });
}
