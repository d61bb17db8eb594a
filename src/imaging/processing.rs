use image::{DynamicImage, Rgba, RgbaImage};

use crate::model::Dish;

const MAX_TEXTURE_SIZE: u32 = 2048;

/// Side length of generated plate images
pub const PLATE_IMAGE_SIZE: u32 = 256;

/// Decode a base64-encoded PNG/JPEG, shrinking it to fit the texture limit
pub fn decode_base64_image(base64_data: &str) -> Result<DynamicImage, String> {
    use base64::Engine;

    let bytes = base64::engine::general_purpose::STANDARD
        .decode(base64_data.trim())
        .map_err(|e| format!("Failed to decode base64: {}", e))?;

    let img = image::load_from_memory(&bytes).map_err(|e| format!("Invalid image: {}", e))?;

    let (width, height) = (img.width(), img.height());
    if width > MAX_TEXTURE_SIZE || height > MAX_TEXTURE_SIZE {
        let scale = (MAX_TEXTURE_SIZE as f32 / width as f32)
            .min(MAX_TEXTURE_SIZE as f32 / height as f32);
        let new_width = (width as f32 * scale) as u32;
        let new_height = (height as f32 * scale) as u32;
        Ok(img.resize(new_width, new_height, image::imageops::FilterType::Triangle))
    } else {
        Ok(img)
    }
}

/// Render a top-down plate with the dish's accent colour as the food.
/// Shading is a fake light from the upper left so the plate reads as round.
pub fn render_plate_image(accent: [u8; 3], size: u32) -> RgbaImage {
    let mut img = RgbaImage::new(size, size);
    let center = size as f32 / 2.0;
    let plate_radius = center * 0.96;
    let well_radius = plate_radius * 0.72;
    let food_radius = plate_radius * 0.58;
    let light = (-0.5f32, -0.6f32);

    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let dx = x as f32 + 0.5 - center;
        let dy = y as f32 + 0.5 - center;
        let dist = (dx * dx + dy * dy).sqrt();
        if dist > plate_radius {
            *pixel = Rgba([0, 0, 0, 0]);
            continue;
        }

        // Lambert-ish term from the direction to the pixel
        let (nx, ny) = if dist > 0.0 { (dx / dist, dy / dist) } else { (0.0, 0.0) };
        let facing = nx * light.0 + ny * light.1;

        if dist <= food_radius {
            let dome = 1.0 - (dist / food_radius).powi(2);
            let shade = 0.65 + 0.25 * dome + 0.15 * facing * (1.0 - dome);
            // Speckle so the food does not look flat
            let speckle = if (x * 7 + y * 13) % 17 == 0 { 0.85 } else { 1.0 };
            *pixel = Rgba([
                scale_channel(accent[0], shade * speckle),
                scale_channel(accent[1], shade * speckle),
                scale_channel(accent[2], shade * speckle),
                255,
            ]);
        } else if dist <= well_radius {
            let shade = 0.92 - 0.06 * facing;
            *pixel = Rgba([
                scale_channel(245, shade),
                scale_channel(243, shade),
                scale_channel(238, shade),
                255,
            ]);
        } else {
            let rim = (dist - well_radius) / (plate_radius - well_radius);
            let shade = 0.98 + 0.08 * facing * (1.0 - rim) - 0.12 * rim;
            let edge_alpha = ((plate_radius - dist) * 2.0).clamp(0.0, 1.0);
            *pixel = Rgba([
                scale_channel(250, shade),
                scale_channel(248, shade),
                scale_channel(244, shade),
                (edge_alpha * 255.0) as u8,
            ]);
        }
    }

    img
}

fn scale_channel(value: u8, factor: f32) -> u8 {
    (value as f32 * factor).round().clamp(0.0, 255.0) as u8
}

/// Photo if the dish has a decodable one, otherwise a generated plate
pub fn dish_image(dish: &Dish) -> RgbaImage {
    if let Some(ref data) = dish.image_data {
        match decode_base64_image(data) {
            Ok(img) => return img.to_rgba8(),
            Err(e) => bevy::log::warn!("dish '{}' photo unusable: {}", dish.id, e),
        }
    }
    render_plate_image(dish.accent_color, PLATE_IMAGE_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DishCategory;

    fn png_base64(width: u32, height: u32) -> String {
        use base64::Engine;

        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(width, height, Rgba([10, 20, 30, 255])));
        let mut bytes = Vec::new();
        img.write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        base64::engine::general_purpose::STANDARD.encode(&bytes)
    }

    #[test]
    fn test_plate_image_layout() {
        let img = render_plate_image([200, 0, 0], 64);
        assert_eq!(img.dimensions(), (64, 64));
        // Corners are outside the plate
        assert_eq!(img.get_pixel(0, 0)[3], 0);
        // Center is opaque food tinted by the accent
        let center = img.get_pixel(32, 32);
        assert_eq!(center[3], 255);
        assert!(center[0] > center[1]);
    }

    #[test]
    fn test_decode_base64_image() {
        let img = decode_base64_image(&png_base64(3, 2)).unwrap();
        assert_eq!((img.width(), img.height()), (3, 2));
        assert!(decode_base64_image("!!!").is_err());
        assert!(decode_base64_image("aGVsbG8=").is_err());
    }

    #[test]
    fn test_dish_image_falls_back_to_plate() {
        let mut dish = Dish::new("x", "X", DishCategory::Main, 100);
        assert_eq!(dish_image(&dish).dimensions(), (PLATE_IMAGE_SIZE, PLATE_IMAGE_SIZE));

        dish.image_data = Some("not an image".into());
        assert_eq!(dish_image(&dish).dimensions(), (PLATE_IMAGE_SIZE, PLATE_IMAGE_SIZE));

        dish.image_data = Some(png_base64(5, 4));
        assert_eq!(dish_image(&dish).dimensions(), (5, 4));
    }
}
