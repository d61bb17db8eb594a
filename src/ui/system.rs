use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};
use std::time::Instant;

use crate::model::Section;
use crate::session::{AuthProvider, FeedbackBoard, IdentityChanged, RoleGate, SessionCart};
use crate::state::{AppState, SectionView, ThemePreference, DEFAULT_PANEL_MARGIN};
use crate::ui::admin::render_admin_dashboard;
use crate::ui::dialogs::{render_cart_window, render_full_size_viewer, render_sign_in_dialog};
use crate::ui::gallery::render_gallery;
use crate::ui::pages::{render_about, render_contact, render_menu};
use crate::ui::panels::{
    render_feedback_section, render_hero, render_nutrition_panel, render_special_offers,
};
use crate::ui::widgets::{scaled_font, scaled_margin, tab_button};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Main content never gets wider than this
const MAX_CONTENT_WIDTH: f32 = 1280.0;

#[allow(clippy::too_many_arguments)]
pub fn ui_system(
    mut contexts: EguiContexts,
    mut state: ResMut<AppState>,
    mut auth: ResMut<AuthProvider>,
    mut cart: ResMut<SessionCart>,
    mut feedback: ResMut<FeedbackBoard>,
    mut identity_events: EventWriter<IdentityChanged>,
    time: Res<Time>,
) {
    let ctx = contexts.ctx_mut();

    apply_style(ctx, &state);
    handle_shortcuts(ctx, &mut state);

    state.viewer.advance(time.delta_secs());
    state.expire_toasts(Instant::now());

    if let Some(change) = render_sign_in_dialog(ctx, &mut state, &mut auth) {
        identity_events.send(change);
    }
    let gate = RoleGate::new(auth.current());

    // Navigation bar
    let ui_scale = state.config.ui_scale;
    egui::TopBottomPanel::top("nav_bar")
        .frame(egui::Frame::side_top_panel(&ctx.style()).inner_margin(scaled_margin(
            DEFAULT_PANEL_MARGIN,
            ui_scale,
        )))
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new("Casa Sabores")
                        .size(scaled_font(20.0, ui_scale))
                        .strong()
                        .color(egui::Color32::from_rgb(225, 29, 72)),
                );
                ui.add_space(scaled_margin(16.0, ui_scale));

                let current = state.router.current();
                for section in Section::ALL {
                    // The admin tab is only offered to admins
                    if section == Section::Admin && !gate.can_view_admin() {
                        continue;
                    }
                    if tab_button(ui, current == section, section.label(), ui_scale).clicked() {
                        state.navigate(section);
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    match auth.current().cloned() {
                        Some(identity) => {
                            if ui.button("Sign out").clicked() {
                                auth.sign_out();
                                state.notify(format!("Goodbye, {}", identity.display_name));
                                identity_events.send(IdentityChanged(None));
                            }
                            ui.label(format!("{} ({:?})", identity.display_name, identity.role));
                        }
                        None => {
                            if ui.button("Sign in").clicked() {
                                state.open_sign_in();
                            }
                        }
                    }

                    if gate.can_use_cart() {
                        let label = format!("🛒 Cart ({})", cart.item_count());
                        if ui.button(label).clicked() {
                            state.show_cart_window = !state.show_cart_window;
                        }
                    }

                    let theme_label = match state.config.theme {
                        ThemePreference::Light => "🌙",
                        ThemePreference::Dark => "☀",
                    };
                    if ui.button(theme_label).on_hover_text("Toggle theme").clicked() {
                        state.config.theme = state.config.theme.toggled();
                        state.config.save();
                    }
                });
            });
        });

    // The nav bar may have signed out; everything below sees the new identity
    let gate = RoleGate::new(auth.current());
    if let Some(access) = gate.cart_access() {
        render_cart_window(ctx, &mut state, access, &mut cart);
    }
    render_full_size_viewer(ctx, &mut state);

    // Status bar
    egui::TopBottomPanel::bottom("status_bar")
        .exact_height(scaled_margin(24.0, ui_scale))
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                let who = auth
                    .current()
                    .map(|i| format!("Signed in as {}", i.username))
                    .unwrap_or_else(|| "Browsing as guest".to_string());
                ui.label(who);
                ui.separator();
                ui.label(format!(
                    "Dish {} of {}",
                    state.selection.index() + 1,
                    state.catalog().len()
                ));

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("v{}", VERSION));
                });
            });
        });

    // Main content
    let view = state.router.resolve(&gate);
    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let margin = ((ui.available_width() - MAX_CONTENT_WIDTH) / 2.0).max(0.0);
                egui::Frame::none()
                    .inner_margin(egui::Margin::symmetric(
                        margin + scaled_margin(16.0, ui_scale),
                        scaled_margin(16.0, ui_scale),
                    ))
                    .show(ui, |ui| match view {
                        SectionView::Home => {
                            render_home(ui, &mut state, &gate, &mut cart, &mut feedback)
                        }
                        SectionView::Menu => render_menu(ui, &mut state),
                        SectionView::About => render_about(ui, ui_scale),
                        SectionView::Contact => render_contact(ui, &mut state),
                        SectionView::Admin => render_admin_dashboard(ui, &mut state, &mut feedback),
                        // The router already followed redirects
                        SectionView::Redirect(_) => {}
                    });
            });
    });

    render_toasts(ctx, &state);
}

fn render_home(
    ui: &mut egui::Ui,
    state: &mut AppState,
    gate: &RoleGate,
    cart: &mut SessionCart,
    feedback: &mut FeedbackBoard,
) {
    let ui_scale = state.config.ui_scale;
    render_hero(ui, state);
    ui.add_space(scaled_margin(24.0, ui_scale));

    let catalog = state.catalog().clone();
    render_special_offers(ui, &catalog, ui_scale);
    ui.add_space(scaled_margin(24.0, ui_scale));

    // Gallery on the left, details on the right; stacked on narrow windows
    let wide = ui.available_width() > scaled_margin(900.0, ui_scale);
    if wide {
        ui.columns(2, |columns| {
            render_gallery(&mut columns[0], state, gate, cart);
            let dish = state.selection.current().clone();
            render_nutrition_panel(&mut columns[1], &dish, ui_scale);
            columns[1].add_space(scaled_margin(16.0, ui_scale));
            render_feedback_section(&mut columns[1], state, feedback);
        });
    } else {
        render_gallery(ui, state, gate, cart);
        ui.add_space(scaled_margin(16.0, ui_scale));
        let dish = state.selection.current().clone();
        render_nutrition_panel(ui, &dish, ui_scale);
        ui.add_space(scaled_margin(16.0, ui_scale));
        render_feedback_section(ui, state, feedback);
    }
}

fn render_toasts(ctx: &egui::Context, state: &AppState) {
    if state.toasts.is_empty() {
        return;
    }
    egui::Area::new(egui::Id::new("toasts"))
        .anchor(egui::Align2::RIGHT_BOTTOM, [-16.0, -40.0])
        .order(egui::Order::Foreground)
        .interactable(false)
        .show(ctx, |ui| {
            for toast in &state.toasts {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.label(&toast.message);
                });
                ui.add_space(4.0);
            }
        });
}

fn apply_style(ctx: &egui::Context, state: &AppState) {
    let ui_scale = state.config.ui_scale;
    let mut visuals = match state.config.theme {
        ThemePreference::Light => egui::Visuals::light(),
        ThemePreference::Dark => egui::Visuals::dark(),
    };
    visuals.selection.bg_fill = egui::Color32::from_rgb(225, 29, 72);

    let mut style = (*ctx.style()).clone();
    style.visuals = visuals;
    style.text_styles.insert(
        egui::TextStyle::Heading,
        egui::FontId::proportional(scaled_font(22.0, ui_scale)),
    );
    style.text_styles.insert(
        egui::TextStyle::Body,
        egui::FontId::proportional(scaled_font(14.0, ui_scale)),
    );
    style.text_styles.insert(
        egui::TextStyle::Button,
        egui::FontId::proportional(scaled_font(14.0, ui_scale)),
    );
    style.text_styles.insert(
        egui::TextStyle::Small,
        egui::FontId::proportional(scaled_font(12.0, ui_scale)),
    );
    style.text_styles.insert(
        egui::TextStyle::Monospace,
        egui::FontId::monospace(scaled_font(13.0, ui_scale)),
    );
    style.spacing.button_padding = egui::vec2(scaled_margin(8.0, ui_scale), scaled_margin(4.0, ui_scale));
    ctx.set_style(style);
}

fn handle_shortcuts(ctx: &egui::Context, state: &mut AppState) {
    // UI scale (Ctrl+Plus/Minus/0). Plus requires Shift on most keyboards.
    let increase_pressed = ctx.input_mut(|i| {
        i.consume_key(egui::Modifiers::COMMAND, egui::Key::Plus)
            || i.consume_key(egui::Modifiers::COMMAND | egui::Modifiers::SHIFT, egui::Key::Equals)
    });
    let decrease_pressed = ctx.input_mut(|i| i.consume_key(egui::Modifiers::COMMAND, egui::Key::Minus));
    let reset_pressed = ctx.input_mut(|i| i.consume_key(egui::Modifiers::COMMAND, egui::Key::Num0));

    let scale_changed = (increase_pressed && state.config.increase_ui_scale())
        || (decrease_pressed && state.config.decrease_ui_scale())
        || (reset_pressed && state.config.reset_ui_scale());
    if scale_changed {
        state.config.save();
    }

    // Arrow keys browse dishes on the home page unless a text field has focus
    if state.router.current() != Section::Home || ctx.wants_keyboard_input() {
        return;
    }
    let (left, right) = ctx.input(|i| {
        (
            i.key_pressed(egui::Key::ArrowLeft),
            i.key_pressed(egui::Key::ArrowRight),
        )
    });
    if left {
        state.selection.previous();
    }
    if right {
        state.selection.next();
    }
}

/// Observes identity changes: logs them and closes what the new identity may not use
pub fn identity_change_system(
    mut events: EventReader<IdentityChanged>,
    mut state: ResMut<AppState>,
    mut cart: ResMut<SessionCart>,
) {
    for IdentityChanged(identity) in events.read() {
        match identity {
            Some(identity) => info!("signed in as {} ({:?})", identity.username, identity.role),
            None => info!("signed out"),
        }

        let gate = RoleGate::new(identity.as_ref());
        if !gate.can_use_cart() {
            state.show_cart_window = false;
            if !cart.is_empty() {
                debug!("clearing cart with {} item(s)", cart.item_count());
                cart.clear();
            }
        }
    }
}
