use bevy_egui::egui;
use image::RgbaImage;

use crate::model::Dish;

use super::processing::dish_image;

pub fn rgba_to_texture(ctx: &egui::Context, name: &str, img: &RgbaImage) -> egui::TextureHandle {
    let size = [img.width() as usize, img.height() as usize];
    let color_image = egui::ColorImage::from_rgba_unmultiplied(size, img.as_raw());
    ctx.load_texture(name, color_image, egui::TextureOptions::LINEAR)
}

/// Texture for a dish, keyed by dish id so it can be cached
pub fn dish_texture(ctx: &egui::Context, dish: &Dish) -> egui::TextureHandle {
    let img = dish_image(dish);
    rgba_to_texture(ctx, &format!("dish_{}", dish.id), &img)
}
