use bevy::prelude::*;

use crate::model::{format_price, Dish};

/// Cart collaborator as seen from the gallery
pub trait CartSink {
    fn add_item(&mut self, dish: &Dish);
}

#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub dish_id: String,
    pub name: String,
    pub unit_price_cents: u32,
    pub quantity: u32,
}

impl CartLine {
    pub fn subtotal_cents(&self) -> u32 {
        self.unit_price_cents.saturating_mul(self.quantity)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderSummary {
    pub item_count: u32,
    pub total_cents: u32,
}

impl OrderSummary {
    pub fn message(&self) -> String {
        format!(
            "Order placed: {} item(s), {}",
            self.item_count,
            format_price(self.total_cents)
        )
    }
}

/// Cart contents for the current session. Never written to disk.
#[derive(Resource, Default, Debug)]
pub struct SessionCart {
    lines: Vec<CartLine>,
}

impl CartSink for SessionCart {
    fn add_item(&mut self, dish: &Dish) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.dish_id == dish.id) {
            line.quantity = line.quantity.saturating_add(1);
        } else {
            self.lines.push(CartLine {
                dish_id: dish.id.clone(),
                name: dish.name.clone(),
                unit_price_cents: dish.price_cents,
                quantity: 1,
            });
        }
    }
}

impl SessionCart {
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn item_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |count, l| count.saturating_add(l.quantity))
    }

    pub fn total_cents(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |total, l| total.saturating_add(l.subtotal_cents()))
    }

    pub fn remove_line(&mut self, dish_id: &str) {
        self.lines.retain(|l| l.dish_id != dish_id);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Empties the cart and returns what was ordered, or None for an empty cart
    pub fn checkout(&mut self) -> Option<OrderSummary> {
        if self.lines.is_empty() {
            return None;
        }
        let summary = OrderSummary {
            item_count: self.item_count(),
            total_cents: self.total_cents(),
        };
        self.lines.clear();
        Some(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DishCategory;

    #[test]
    fn test_add_item_accumulates_quantity() {
        let paella = Dish::new("paella", "Paella", DishCategory::Main, 1850);
        let flan = Dish::new("flan", "Flan", DishCategory::Dessert, 500);
        let mut cart = SessionCart::default();

        cart.add_item(&paella);
        cart.add_item(&flan);
        cart.add_item(&paella);

        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.total_cents(), 1850 * 2 + 500);
    }

    #[test]
    fn test_remove_and_clear() {
        let mut cart = SessionCart::default();
        cart.add_item(&Dish::new("a", "A", DishCategory::Main, 100));
        cart.add_item(&Dish::new("b", "B", DishCategory::Main, 200));

        cart.remove_line("a");
        assert_eq!(cart.total_cents(), 200);
        cart.clear();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_totals_saturate_instead_of_overflowing() {
        let mut cart = SessionCart::default();
        let yacht = Dish::new("yacht", "Yacht", DishCategory::Main, 3_000_000_000);
        cart.add_item(&yacht);
        cart.add_item(&yacht);
        assert_eq!(cart.lines()[0].subtotal_cents(), u32::MAX);
        cart.add_item(&Dish::new("a", "A", DishCategory::Drink, 550));
        assert_eq!(cart.total_cents(), u32::MAX);
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_checkout() {
        let mut cart = SessionCart::default();
        assert!(cart.checkout().is_none());

        cart.add_item(&Dish::new("a", "A", DishCategory::Drink, 550));
        cart.add_item(&Dish::new("a", "A", DishCategory::Drink, 550));
        let summary = cart.checkout().unwrap();
        assert_eq!(summary.item_count, 2);
        assert_eq!(summary.total_cents, 1100);
        assert_eq!(summary.message(), "Order placed: 2 item(s), 11.00 €");
        assert!(cart.is_empty());
    }
}
