use serde::{Deserialize, Serialize};

/// Top-level views reachable from the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Home,
    Menu,
    About,
    Contact,
    Admin,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::Menu,
        Section::About,
        Section::Contact,
        Section::Admin,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Menu => "Menu",
            Section::About => "About",
            Section::Contact => "Contact",
            Section::Admin => "Admin",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DishCategory {
    Starter,
    Main,
    Dessert,
    Drink,
}

impl DishCategory {
    pub const ALL: [DishCategory; 4] = [
        DishCategory::Starter,
        DishCategory::Main,
        DishCategory::Dessert,
        DishCategory::Drink,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DishCategory::Starter => "Starters",
            DishCategory::Main => "Mains",
            DishCategory::Dessert => "Desserts",
            DishCategory::Drink => "Drinks",
        }
    }
}

/// Nutrition facts per serving
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Nutrition {
    pub calories: u32,
    pub protein_g: f32,
    pub carbs_g: f32,
    pub fat_g: f32,
    #[serde(default)]
    pub fiber_g: f32,
}

impl Nutrition {
    /// Share of energy coming from (protein, carbs, fat), using 4/4/9 kcal per gram.
    /// Returns zeros when no macronutrients are recorded.
    pub fn energy_split(&self) -> (f32, f32, f32) {
        let protein = self.protein_g * 4.0;
        let carbs = self.carbs_g * 4.0;
        let fat = self.fat_g * 9.0;
        let total = protein + carbs + fat;
        if total <= 0.0 {
            return (0.0, 0.0, 0.0);
        }
        (protein / total, carbs / total, fat / total)
    }
}

/// A menu item. Loaded once from the catalog and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: DishCategory,
    pub price_cents: u32,
    pub nutrition: Nutrition,
    #[serde(default)]
    pub allergens: Vec<String>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// RGB tint used when no photo is available
    #[serde(default = "default_accent")]
    pub accent_color: [u8; 3],
    /// Base64-encoded PNG/JPEG photo
    #[serde(default)]
    pub image_data: Option<String>,
}

fn default_accent() -> [u8; 3] {
    [200, 120, 60]
}

impl Dish {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: DishCategory,
        price_cents: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            category,
            price_cents,
            nutrition: Nutrition::default(),
            allergens: Vec::new(),
            ingredients: Vec::new(),
            accent_color: default_accent(),
            image_data: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_nutrition(mut self, nutrition: Nutrition) -> Self {
        self.nutrition = nutrition;
        self
    }

    pub fn with_allergens(mut self, allergens: &[&str]) -> Self {
        self.allergens = allergens.iter().map(|a| a.to_string()).collect();
        self
    }

    pub fn with_ingredients(mut self, ingredients: &[&str]) -> Self {
        self.ingredients = ingredients.iter().map(|i| i.to_string()).collect();
        self
    }

    pub fn with_accent(mut self, accent_color: [u8; 3]) -> Self {
        self.accent_color = accent_color;
        self
    }

    pub fn formatted_price(&self) -> String {
        format_price(self.price_cents)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecialOffer {
    pub title: String,
    pub description: String,
    pub discount_percent: u8,
    /// Dish the offer applies to, if any
    #[serde(default)]
    pub dish_id: Option<String>,
}

impl SpecialOffer {
    pub fn discounted_price(&self, price_cents: u32) -> u32 {
        let keep = 100 - u64::from(self.discount_percent.min(100));
        (u64::from(price_cents) * keep / 100) as u32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

/// The signed-in user. Absence of an identity is modelled as `Option<Identity>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub username: String,
    pub display_name: String,
    pub role: Role,
}

impl Identity {
    pub fn new(username: impl Into<String>, display_name: impl Into<String>, role: Role) -> Self {
        Self {
            username: username.into(),
            display_name: display_name.into(),
            role,
        }
    }
}

/// Format cents as "12.50 €"
pub fn format_price(cents: u32) -> String {
    format!("{}.{:02} €", cents / 100, cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_default_is_home() {
        assert_eq!(Section::default(), Section::Home);
        assert_eq!(Section::ALL.len(), 5);
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(1250), "12.50 €");
        assert_eq!(format_price(5), "0.05 €");
        assert_eq!(format_price(0), "0.00 €");
    }

    #[test]
    fn test_energy_split() {
        let nutrition = Nutrition {
            calories: 0,
            protein_g: 10.0,
            carbs_g: 10.0,
            fat_g: 0.0,
            fiber_g: 0.0,
        };
        let (p, c, f) = nutrition.energy_split();
        assert!((p - 0.5).abs() < 1e-6);
        assert!((c - 0.5).abs() < 1e-6);
        assert_eq!(f, 0.0);
        assert_eq!(Nutrition::default().energy_split(), (0.0, 0.0, 0.0));
    }

    #[test]
    fn test_discounted_price() {
        let offer = SpecialOffer {
            title: "Lunch".into(),
            description: String::new(),
            discount_percent: 20,
            dish_id: None,
        };
        assert_eq!(offer.discounted_price(1000), 800);
        assert_eq!(offer.discounted_price(u32::MAX), 3_435_973_836);
    }

    #[test]
    fn test_dish_serialization_defaults() {
        let json = r#"{
            "id": "soup",
            "name": "Soup",
            "description": "Hot",
            "category": "starter",
            "price_cents": 450,
            "nutrition": { "calories": 120, "protein_g": 3.0, "carbs_g": 12.0, "fat_g": 5.0 }
        }"#;
        let dish: Dish = serde_json::from_str(json).unwrap();
        assert_eq!(dish.category, DishCategory::Starter);
        assert!(dish.allergens.is_empty());
        assert!(dish.image_data.is_none());
        assert_eq!(dish.accent_color, [200, 120, 60]);
        assert_eq!(dish.nutrition.fiber_g, 0.0);
    }
}
