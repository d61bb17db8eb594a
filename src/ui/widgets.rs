use bevy_egui::egui;

use crate::session::FeedbackEntry;

/// Format zoom level as "1.5x"
pub fn format_zoom(level: f32) -> String {
    format!("{:.1}x", level)
}

/// Get a scaled font size with minimum of 12
pub fn scaled_font(base_size: f32, scale: f32) -> f32 {
    (base_size.max(12.0) * scale).max(12.0)
}

/// Get a scaled margin/spacing value
pub fn scaled_margin(base_size: f32, scale: f32) -> f32 {
    base_size * scale
}

/// Format a duration as a human-readable relative time string
pub fn format_relative_time(elapsed: std::time::Duration) -> String {
    let secs = elapsed.as_secs();

    if secs < 3 {
        "just now".to_string()
    } else if secs < 60 {
        format!("{} seconds ago", secs)
    } else if secs < 120 {
        "1 minute ago".to_string()
    } else if secs < 3600 {
        format!("{} minutes ago", secs / 60)
    } else if secs < 7200 {
        "1 hour ago".to_string()
    } else {
        format!("{} hours ago", secs / 3600)
    }
}

/// "★★★☆☆" for a 1-5 rating
pub fn stars(rating: u8) -> String {
    let filled = rating.min(5) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

/// Clickable five-star input
pub fn star_rating(ui: &mut egui::Ui, rating: &mut u8, ui_scale: f32) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = scaled_margin(2.0, ui_scale);
        for value in 1..=5u8 {
            let glyph = if value <= *rating { "★" } else { "☆" };
            let text = egui::RichText::new(glyph)
                .size(scaled_font(20.0, ui_scale))
                .color(egui::Color32::from_rgb(235, 170, 30));
            if ui
                .add(egui::Label::new(text).sense(egui::Sense::click()))
                .on_hover_text(format!("{} / 5", value))
                .clicked()
            {
                *rating = value;
            }
        }
    });
}

pub fn feedback_card(ui: &mut egui::Ui, entry: &FeedbackEntry) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.strong(&entry.author);
            ui.label(
                egui::RichText::new(stars(entry.rating))
                    .color(egui::Color32::from_rgb(235, 170, 30)),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.weak(format_relative_time(entry.submitted_at.elapsed()));
            });
        });
        ui.label(&entry.comment);
    });
}

/// Render a tab-style button used by the navigation bar
pub fn tab_button(
    ui: &mut egui::Ui,
    selected: bool,
    text: impl Into<String>,
    ui_scale: f32,
) -> egui::Response {
    let text = text.into();
    let padding = egui::vec2(scaled_margin(10.0, ui_scale), scaled_margin(5.0, ui_scale));
    let visuals = ui.visuals().clone();

    let text_color = if selected {
        egui::Color32::WHITE
    } else {
        visuals.text_color()
    };

    let galley = ui.painter().layout_no_wrap(
        text,
        egui::FontId::proportional(scaled_font(15.0, ui_scale)),
        text_color,
    );

    let desired_size = galley.size() + padding * 2.0;
    let (rect, response) = ui.allocate_exact_size(desired_size, egui::Sense::click());

    if ui.is_rect_visible(rect) {
        let accent = egui::Color32::from_rgb(225, 29, 72);
        let bg = if selected {
            accent
        } else if response.hovered() {
            visuals.widgets.hovered.weak_bg_fill
        } else {
            egui::Color32::TRANSPARENT
        };

        ui.painter().rect_filled(rect, egui::Rounding::same(6.0), bg);
        ui.painter().galley(rect.min + padding, galley, text_color);
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_format_zoom() {
        assert_eq!(format_zoom(0.5), "0.5x");
        assert_eq!(format_zoom(2.0), "2.0x");
    }

    #[test]
    fn test_relative_time() {
        assert_eq!(format_relative_time(Duration::from_secs(1)), "just now");
        assert_eq!(format_relative_time(Duration::from_secs(42)), "42 seconds ago");
        assert_eq!(format_relative_time(Duration::from_secs(90)), "1 minute ago");
        assert_eq!(format_relative_time(Duration::from_secs(600)), "10 minutes ago");
        assert_eq!(format_relative_time(Duration::from_secs(10_800)), "3 hours ago");
    }

    #[test]
    fn test_stars() {
        assert_eq!(stars(3), "★★★☆☆");
        assert_eq!(stars(9), "★★★★★");
    }

    #[test]
    fn test_scaled_font_minimum() {
        assert_eq!(scaled_font(10.0, 0.5), 12.0);
        assert_eq!(scaled_font(14.0, 2.0), 28.0);
    }
}
