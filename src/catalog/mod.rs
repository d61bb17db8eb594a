mod builtin;

use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

use crate::model::{Dish, DishCategory, SpecialOffer};

pub const MAX_DISCOUNT_PERCENT: u8 = 90;
/// 10 000.00 €
pub const MAX_PRICE_CENTS: u32 = 1_000_000;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("catalog contains no dishes")]
    Empty,
    #[error("duplicate dish id '{0}'")]
    DuplicateId(String),
    #[error("dish '{0}' has an empty name")]
    BlankName(String),
    #[error("dish '{dish_id}' costs {price_cents} cents (maximum {max})", max = MAX_PRICE_CENTS)]
    PriceTooHigh { dish_id: String, price_cents: u32 },
    #[error("offer '{offer}' references unknown dish '{dish_id}'")]
    UnknownOfferDish { offer: String, dish_id: String },
    #[error("offer '{offer}' has discount {percent}% (allowed 1-{max}%)", max = MAX_DISCOUNT_PERCENT)]
    InvalidDiscount { offer: String, percent: u8 },
}

#[derive(Deserialize)]
struct CatalogFile {
    dishes: Vec<Dish>,
    #[serde(default)]
    offers: Vec<SpecialOffer>,
}

/// Ordered, non-empty, immutable collection of dishes plus the current offers.
/// Cloning is cheap; all clones share the same data.
#[derive(Debug, Clone)]
pub struct DishCatalog {
    dishes: Arc<[Dish]>,
    offers: Arc<[SpecialOffer]>,
}

impl DishCatalog {
    pub fn new(dishes: Vec<Dish>, offers: Vec<SpecialOffer>) -> Result<Self, CatalogError> {
        if dishes.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for dish in &dishes {
            if dish.name.trim().is_empty() {
                return Err(CatalogError::BlankName(dish.id.clone()));
            }
            if dish.price_cents > MAX_PRICE_CENTS {
                return Err(CatalogError::PriceTooHigh {
                    dish_id: dish.id.clone(),
                    price_cents: dish.price_cents,
                });
            }
            if !seen.insert(dish.id.as_str()) {
                return Err(CatalogError::DuplicateId(dish.id.clone()));
            }
        }

        for offer in &offers {
            if offer.discount_percent == 0 || offer.discount_percent > MAX_DISCOUNT_PERCENT {
                return Err(CatalogError::InvalidDiscount {
                    offer: offer.title.clone(),
                    percent: offer.discount_percent,
                });
            }
            if let Some(ref dish_id) = offer.dish_id {
                if !seen.contains(dish_id.as_str()) {
                    return Err(CatalogError::UnknownOfferDish {
                        offer: offer.title.clone(),
                        dish_id: dish_id.clone(),
                    });
                }
            }
        }

        Ok(Self {
            dishes: dishes.into(),
            offers: offers.into(),
        })
    }

    /// The dishes shipped with the application
    pub fn builtin() -> Self {
        Self {
            dishes: builtin::dishes().into(),
            offers: builtin::offers().into(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.dishes, file.offers)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn dishes(&self) -> &[Dish] {
        &self.dishes
    }

    pub fn offers(&self) -> &[SpecialOffer] {
        &self.offers
    }

    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    pub fn get(&self, id: &str) -> Option<&Dish> {
        self.dishes.iter().find(|d| d.id == id)
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.dishes.iter().position(|d| d.id == id)
    }

    pub fn by_category(&self, category: DishCategory) -> impl Iterator<Item = &Dish> {
        self.dishes.iter().filter(move |d| d.category == category)
    }

    pub fn average_price_cents(&self) -> u32 {
        let total: u64 = self.dishes.iter().map(|d| u64::from(d.price_cents)).sum();
        (total / self.dishes.len() as u64) as u32
    }
}
