use bevy_egui::egui;

use crate::model::format_price;
use crate::session::{AuthProvider, CartAccess, IdentityChanged, SessionCart};
use crate::state::AppState;
use crate::ui::gallery::{cached_texture, render_viewer};
use crate::ui::widgets::scaled_margin;

/// Sign-in window. Returns the change to broadcast when sign-in succeeds.
pub fn render_sign_in_dialog(
    ctx: &egui::Context,
    state: &mut AppState,
    auth: &mut AuthProvider,
) -> Option<IdentityChanged> {
    if !state.show_sign_in_dialog {
        return None;
    }

    let mut changed = None;
    let mut submit = false;
    let mut cancel = false;

    egui::Window::new("Sign in")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::Grid::new("sign_in_form").num_columns(2).show(ui, |ui| {
                ui.label("Username:");
                ui.text_edit_singleline(&mut state.sign_in_username);
                ui.end_row();
                ui.label("Password:");
                let response = ui.add(
                    egui::TextEdit::singleline(&mut state.sign_in_password).password(true),
                );
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    submit = true;
                }
                ui.end_row();
            });

            if let Some(ref error) = state.sign_in_error {
                ui.colored_label(egui::Color32::from_rgb(220, 38, 38), error);
            }
            ui.weak("Demo accounts: user / user123, admin / admin123");

            ui.horizontal(|ui| {
                if ui.button("Sign in").clicked() {
                    submit = true;
                }
                if ui.button("Cancel").clicked() {
                    cancel = true;
                }
            });
        });

    if submit {
        match auth.sign_in(&state.sign_in_username, &state.sign_in_password) {
            Ok(identity) => {
                state.close_sign_in();
                state.notify(format!("Welcome, {}", identity.display_name));
                changed = Some(IdentityChanged(Some(identity)));
            }
            Err(e) => {
                state.sign_in_password.clear();
                state.sign_in_error = Some(e.to_string());
            }
        }
    } else if cancel {
        state.close_sign_in();
    }

    changed
}

/// Cart window; needs a `CartAccess` so it cannot open without cart capability
pub fn render_cart_window(
    ctx: &egui::Context,
    state: &mut AppState,
    _access: CartAccess,
    cart: &mut SessionCart,
) {
    if !state.show_cart_window {
        return;
    }

    let ui_scale = state.config.ui_scale;
    let mut open = true;
    let mut remove = None;
    let mut checkout = false;

    egui::Window::new("Your cart")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .default_width(scaled_margin(320.0, ui_scale))
        .anchor(egui::Align2::RIGHT_TOP, [-16.0, 56.0])
        .show(ctx, |ui| {
            if cart.is_empty() {
                ui.weak("Your cart is empty");
                return;
            }
            egui::Grid::new("cart_lines").num_columns(4).show(ui, |ui| {
                for line in cart.lines() {
                    ui.label(format!("{} x", line.quantity));
                    ui.label(&line.name);
                    ui.label(format_price(line.subtotal_cents()));
                    if ui.small_button("✖").on_hover_text("Remove").clicked() {
                        remove = Some(line.dish_id.clone());
                    }
                    ui.end_row();
                }
            });
            ui.separator();
            ui.horizontal(|ui| {
                ui.strong(format!("Total: {}", format_price(cart.total_cents())));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Checkout").clicked() {
                        checkout = true;
                    }
                });
            });
        });

    if let Some(dish_id) = remove {
        cart.remove_line(&dish_id);
    }
    if checkout {
        if let Some(summary) = cart.checkout() {
            state.notify(summary.message());
        }
        open = false;
    }
    state.show_cart_window = open;
}

/// Full-size viewer. Always uses the maximum zoom, whatever the inline zoom is.
pub fn render_full_size_viewer(ctx: &egui::Context, state: &mut AppState) {
    if !state.viewer.full_size_open {
        return;
    }

    let dish = state.selection.current().clone();
    let texture = cached_texture(ctx, &mut state.texture_cache, &dish);
    let screen = ctx.screen_rect();
    let size = egui::vec2(screen.width() * 0.7, screen.height() * 0.8);

    let mut open = true;
    egui::Window::new(&dish.name)
        .id(egui::Id::new("full_size_viewer"))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .fixed_size(size)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            let zoom = state.viewer.full_size_zoom();
            let height = (size.y - 40.0).max(100.0);
            render_viewer(ui, &texture, &mut state.viewer, zoom, height);
        });

    if !open || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        state.viewer.close_full_size();
    }
}
