use bevy::log::warn;

use crate::catalog::DishCatalog;
use crate::model::Dish;

/// The dish highlighted in the gallery. Always points into the catalog.
#[derive(Debug, Clone)]
pub struct DishSelection {
    catalog: DishCatalog,
    index: usize,
}

impl DishSelection {
    /// Starts on the first dish
    pub fn new(catalog: DishCatalog) -> Self {
        Self { catalog, index: 0 }
    }

    pub fn catalog(&self) -> &DishCatalog {
        &self.catalog
    }

    pub fn current(&self) -> &Dish {
        &self.catalog.dishes()[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_selected(&self, dish: &Dish) -> bool {
        self.current().id == dish.id
    }

    /// Selecting a dish outside the catalog is a caller bug: debug builds
    /// panic, release builds keep the current selection.
    pub fn select(&mut self, dish: &Dish) {
        match self.catalog.index_of(&dish.id) {
            Some(index) => self.index = index,
            None => {
                debug_assert!(false, "dish '{}' is not in the catalog", dish.id);
                warn!("ignoring selection of unknown dish '{}'", dish.id);
            }
        }
    }

    pub fn select_index(&mut self, index: usize) {
        if index < self.catalog.len() {
            self.index = index;
        } else {
            debug_assert!(false, "dish index {} out of range", index);
            warn!("ignoring selection of dish index {}", index);
        }
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.catalog.len();
    }

    pub fn previous(&mut self) {
        let len = self.catalog.len();
        self.index = (self.index + len - 1) % len;
    }
}
