use bevy_egui::egui;
use std::collections::HashMap;

use crate::imaging::dish_texture;
use crate::model::Dish;
use crate::session::{RoleGate, SessionCart};
use crate::state::{add_current_to_cart, AppState, ViewerState};
use crate::ui::widgets::{format_zoom, scaled_font, scaled_margin};

const DRAG_DEGREES_PER_POINT: f32 = 0.6;

/// Get the dish texture from the cache, creating it on first use
pub fn cached_texture(
    ctx: &egui::Context,
    cache: &mut HashMap<String, egui::TextureHandle>,
    dish: &Dish,
) -> egui::TextureHandle {
    cache
        .entry(dish.id.clone())
        .or_insert_with(|| dish_texture(ctx, dish))
        .clone()
}

/// Turntable viewer. The plate spins with `viewer.angle`, can be dragged
/// sideways, and is scaled by `zoom` relative to the available area.
pub fn render_viewer(
    ui: &mut egui::Ui,
    texture: &egui::TextureHandle,
    viewer: &mut ViewerState,
    zoom: f32,
    height: f32,
) {
    let size = egui::vec2(ui.available_width(), height);
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::drag());
    let response = response
        .on_hover_cursor(egui::CursorIcon::Grab)
        .on_hover_text("Drag to turn the plate");

    if response.dragged() {
        viewer.rotate_by(response.drag_delta().x * DRAG_DEGREES_PER_POINT);
    }

    if !ui.is_rect_visible(rect) {
        return;
    }

    let painter = ui.painter_at(rect);
    let dark = ui.visuals().dark_mode;
    let backdrop = if dark {
        egui::Color32::from_rgb(32, 30, 34)
    } else {
        egui::Color32::from_rgb(244, 238, 232)
    };
    painter.rect_filled(rect, 8.0, backdrop);

    // Spotlight behind the plate
    let center = rect.center();
    let min_side = rect.width().min(rect.height());
    painter.circle_filled(
        center,
        min_side * 0.48,
        egui::Color32::from_white_alpha(if dark { 10 } else { 60 }),
    );

    // Image fills 90% of the short side at maximum zoom
    let tex_size = texture.size_vec2();
    let fit = (min_side * 0.45 * zoom) / tex_size.x.max(tex_size.y);
    let draw_size = tex_size * fit;

    // Drop shadow slightly below the plate
    let shadow_radius = draw_size.x.max(draw_size.y) * 0.5;
    painter.circle_filled(
        center + egui::vec2(0.0, shadow_radius * 0.08),
        shadow_radius * 1.02,
        egui::Color32::from_black_alpha(if dark { 90 } else { 40 }),
    );

    let image_rect = egui::Rect::from_center_size(center, draw_size);
    egui::Image::from_texture(egui::load::SizedTexture::from_handle(texture))
        .rotate(viewer.angle.to_radians(), egui::Vec2::splat(0.5))
        .paint_at(ui, image_rect);

    painter.text(
        rect.right_bottom() - egui::vec2(10.0, 8.0),
        egui::Align2::RIGHT_BOTTOM,
        format!("{} · {:.0}°", format_zoom(zoom), viewer.angle),
        egui::FontId::proportional(12.0),
        ui.visuals().weak_text_color(),
    );
}

/// Dish gallery: title, zoom controls, viewer with prev/next, thumbnail strip.
/// The add-to-cart button only exists when the gate grants cart access.
pub fn render_gallery(
    ui: &mut egui::Ui,
    state: &mut AppState,
    gate: &RoleGate,
    cart: &mut SessionCart,
) {
    let ui_scale = state.config.ui_scale;
    let dish = state.selection.current().clone();
    let texture = cached_texture(ui.ctx(), &mut state.texture_cache, &dish);

    egui::Frame::group(ui.style())
        .inner_margin(scaled_margin(16.0, ui_scale))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            ui.horizontal_wrapped(|ui| {
                ui.vertical(|ui| {
                    ui.label(
                        egui::RichText::new(&dish.name)
                            .size(scaled_font(26.0, ui_scale))
                            .strong(),
                    );
                    ui.weak("Explora el plato en 3D y descubre sus detalles");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if let Some(access) = gate.cart_access() {
                        let button = egui::Button::new(
                            egui::RichText::new("🛒 Add to Cart").color(egui::Color32::WHITE),
                        )
                        .fill(egui::Color32::from_rgb(244, 63, 94));
                        if ui.add(button).clicked() {
                            let message = add_current_to_cart(&state.selection, access, cart);
                            state.notify(message);
                        }
                    }
                    if ui.button("⛶").on_hover_text("Full size").clicked() {
                        state.viewer.open_full_size();
                    }
                    if ui
                        .add_enabled(!state.viewer.zoom.is_max(), egui::Button::new("+"))
                        .on_hover_text("Zoom in")
                        .clicked()
                    {
                        state.viewer.zoom_in();
                    }
                    if ui
                        .add_enabled(!state.viewer.zoom.is_min(), egui::Button::new("-"))
                        .on_hover_text("Zoom out")
                        .clicked()
                    {
                        state.viewer.zoom_out();
                    }
                    if ui.small_button("Reset").clicked() {
                        state.viewer.reset_zoom();
                    }
                    ui.checkbox(&mut state.viewer.auto_rotate, "Spin");
                });
            });

            ui.add_space(scaled_margin(12.0, ui_scale));

            let viewer_height = scaled_margin(360.0, ui_scale);
            ui.horizontal(|ui| {
                let nav_size = egui::vec2(scaled_margin(32.0, ui_scale), viewer_height);
                if ui
                    .add_sized(nav_size, egui::Button::new("<"))
                    .on_hover_text("Previous dish")
                    .clicked()
                {
                    state.selection.previous();
                }

                let viewer_width = ui.available_width() - nav_size.x - ui.spacing().item_spacing.x;
                ui.allocate_ui(egui::vec2(viewer_width, viewer_height), |ui| {
                    let zoom = state.viewer.inline_zoom();
                    render_viewer(ui, &texture, &mut state.viewer, zoom, viewer_height);
                });

                if ui
                    .add_sized(nav_size, egui::Button::new(">"))
                    .on_hover_text("Next dish")
                    .clicked()
                {
                    state.selection.next();
                }
            });

            ui.add_space(scaled_margin(12.0, ui_scale));

            let catalog = state.catalog().clone();
            let mut clicked = None;
            egui::ScrollArea::horizontal()
                .id_salt("dish_thumbnails")
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        for (index, candidate) in catalog.dishes().iter().enumerate() {
                            let selected = state.selection.index() == index;
                            if ui.selectable_label(selected, &candidate.name).clicked() {
                                clicked = Some(index);
                            }
                        }
                    });
                });
            if let Some(index) = clicked {
                state.selection.select_index(index);
            }
        });
}
