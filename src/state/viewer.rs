use crate::session::{CartAccess, CartSink};
use crate::state::DishSelection;

/// Viewer magnification, stored in tenths so the bounds are exact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoomLevel(u8);

impl ZoomLevel {
    pub const MIN: ZoomLevel = ZoomLevel(5);
    pub const MAX: ZoomLevel = ZoomLevel(20);
    pub const DEFAULT: ZoomLevel = ZoomLevel(10);

    pub fn value(&self) -> f32 {
        f32::from(self.0) / 10.0
    }

    pub fn zoom_in(&mut self) {
        self.0 = (self.0 + 1).min(Self::MAX.0);
    }

    pub fn zoom_out(&mut self) {
        self.0 = self.0.saturating_sub(1).max(Self::MIN.0);
    }

    pub fn is_min(&self) -> bool {
        *self == Self::MIN
    }

    pub fn is_max(&self) -> bool {
        *self == Self::MAX
    }
}

impl Default for ZoomLevel {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Degrees per second for the turntable
pub const TURNTABLE_SPEED: f32 = 20.0;

/// Gallery viewer state: ambient zoom, full-size mode and turntable angle.
/// Zoom is left alone when the selected dish changes.
#[derive(Debug, Clone)]
pub struct ViewerState {
    pub zoom: ZoomLevel,
    pub full_size_open: bool,
    pub auto_rotate: bool,
    /// Turntable rotation in degrees, [0, 360)
    pub angle: f32,
}

impl Default for ViewerState {
    fn default() -> Self {
        Self {
            zoom: ZoomLevel::DEFAULT,
            full_size_open: false,
            auto_rotate: true,
            angle: 0.0,
        }
    }
}

impl ViewerState {
    pub fn zoom_in(&mut self) {
        self.zoom.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.zoom.zoom_out();
    }

    pub fn reset_zoom(&mut self) {
        self.zoom = ZoomLevel::DEFAULT;
    }

    pub fn open_full_size(&mut self) {
        self.full_size_open = true;
    }

    pub fn close_full_size(&mut self) {
        self.full_size_open = false;
    }

    /// Zoom used for the inline viewer
    pub fn inline_zoom(&self) -> f32 {
        self.zoom.value()
    }

    /// Zoom used for the full-size window; ignores the ambient zoom
    pub fn full_size_zoom(&self) -> f32 {
        ZoomLevel::MAX.value()
    }

    pub fn rotate_by(&mut self, degrees: f32) {
        self.angle = (self.angle + degrees).rem_euclid(360.0);
    }

    pub fn advance(&mut self, delta_secs: f32) {
        if self.auto_rotate {
            self.rotate_by(TURNTABLE_SPEED * delta_secs);
        }
    }
}

/// Sends the selected dish to the cart and returns the confirmation text.
/// Requires a `CartAccess`, so it cannot be reached without cart capability.
pub fn add_current_to_cart(
    selection: &DishSelection,
    _access: CartAccess,
    cart: &mut impl CartSink,
) -> String {
    let dish = selection.current();
    cart.add_item(dish);
    format!("{} added to cart!", dish.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::DishCatalog;
    use crate::model::{Dish, DishCategory, Identity, Role};
    use crate::session::{RoleGate, SessionCart};

    #[test]
    fn test_zoom_out_clamps_at_minimum() {
        let mut viewer = ViewerState::default();
        assert_eq!(viewer.inline_zoom(), 1.0);
        for _ in 0..5 {
            viewer.zoom_out();
        }
        assert_eq!(viewer.inline_zoom(), 0.5);
        for _ in 0..10 {
            viewer.zoom_out();
        }
        assert_eq!(viewer.inline_zoom(), 0.5);
        assert!(viewer.zoom.is_min());
    }

    #[test]
    fn test_zoom_in_clamps_at_maximum() {
        let mut viewer = ViewerState::default();
        for _ in 0..5 {
            viewer.zoom_out();
        }
        for _ in 0..20 {
            viewer.zoom_in();
        }
        assert_eq!(viewer.inline_zoom(), 2.0);
        assert!(viewer.zoom.is_max());
    }

    #[test]
    fn test_zoom_steps() {
        let mut zoom = ZoomLevel::default();
        zoom.zoom_in();
        zoom.zoom_in();
        assert!((zoom.value() - 1.2).abs() < 1e-6);
        zoom.zoom_out();
        assert!((zoom.value() - 1.1).abs() < 1e-6);
    }

    #[test]
    fn test_full_size_overrides_zoom() {
        let mut viewer = ViewerState::default();
        viewer.zoom_out();
        viewer.zoom_out();
        viewer.open_full_size();
        assert_eq!(viewer.full_size_zoom(), 2.0);
        assert!((viewer.inline_zoom() - 0.8).abs() < 1e-6);
        viewer.close_full_size();
        assert!(!viewer.full_size_open);
        assert!((viewer.inline_zoom() - 0.8).abs() < 1e-6);

        viewer.reset_zoom();
        assert_eq!(viewer.inline_zoom(), 1.0);
    }

    #[test]
    fn test_turntable_wraps() {
        let mut viewer = ViewerState::default();
        viewer.rotate_by(350.0);
        viewer.rotate_by(20.0);
        assert!((viewer.angle - 10.0).abs() < 1e-4);
        viewer.rotate_by(-20.0);
        assert!((viewer.angle - 350.0).abs() < 1e-4);

        viewer.auto_rotate = false;
        viewer.advance(1.0);
        assert!((viewer.angle - 350.0).abs() < 1e-4);
    }

    #[test]
    fn test_add_current_to_cart() {
        let catalog = DishCatalog::new(
            vec![
                Dish::new("a", "Tapas", DishCategory::Starter, 600),
                Dish::new("b", "Flan", DishCategory::Dessert, 450),
            ],
            Vec::new(),
        )
        .unwrap();
        let mut selection = DishSelection::new(catalog);
        selection.next();

        let user = Identity::new("u", "U", Role::User);
        let access = RoleGate::new(Some(&user)).cart_access().unwrap();
        let mut cart = SessionCart::default();

        let message = add_current_to_cart(&selection, access, &mut cart);
        assert_eq!(message, "Flan added to cart!");
        assert_eq!(cart.lines()[0].dish_id, "b");
    }
}
