use crate::model::{Dish, DishCategory, Nutrition, SpecialOffer};

pub fn dishes() -> Vec<Dish> {
    vec![
        Dish::new("paella", "Paella Valenciana", DishCategory::Main, 1850)
            .with_description(
                "Saffron rice cooked over an open flame with chicken, rabbit, green beans and garrofó.",
            )
            .with_nutrition(Nutrition {
                calories: 640,
                protein_g: 34.0,
                carbs_g: 78.0,
                fat_g: 19.0,
                fiber_g: 5.5,
            })
            .with_ingredients(&["bomba rice", "chicken", "rabbit", "green beans", "saffron", "olive oil"])
            .with_allergens(&["celery"])
            .with_accent([232, 168, 40]),
        Dish::new("gazpacho", "Gazpacho Andaluz", DishCategory::Starter, 750)
            .with_description("Chilled tomato soup with cucumber, pepper, garlic and sherry vinegar.")
            .with_nutrition(Nutrition {
                calories: 180,
                protein_g: 3.5,
                carbs_g: 16.0,
                fat_g: 11.0,
                fiber_g: 3.2,
            })
            .with_ingredients(&["tomato", "cucumber", "green pepper", "garlic", "bread", "olive oil"])
            .with_allergens(&["gluten"])
            .with_accent([206, 52, 40]),
        Dish::new("tortilla", "Tortilla Española", DishCategory::Starter, 900)
            .with_description("Thick potato and onion omelette, golden outside and soft in the middle.")
            .with_nutrition(Nutrition {
                calories: 410,
                protein_g: 14.0,
                carbs_g: 32.0,
                fat_g: 25.0,
                fiber_g: 2.8,
            })
            .with_ingredients(&["potato", "egg", "onion", "olive oil"])
            .with_allergens(&["egg"])
            .with_accent([240, 200, 96]),
        Dish::new("pulpo", "Pulpo a la Gallega", DishCategory::Main, 2200)
            .with_description("Tender octopus on sliced potatoes with smoked paprika and sea salt.")
            .with_nutrition(Nutrition {
                calories: 380,
                protein_g: 36.0,
                carbs_g: 24.0,
                fat_g: 14.0,
                fiber_g: 2.1,
            })
            .with_ingredients(&["octopus", "potato", "smoked paprika", "sea salt", "olive oil"])
            .with_allergens(&["molluscs"])
            .with_accent([170, 70, 90]),
        Dish::new("churros", "Churros con Chocolate", DishCategory::Dessert, 650)
            .with_description("Crisp fried dough sticks served with thick hot chocolate for dipping.")
            .with_nutrition(Nutrition {
                calories: 520,
                protein_g: 7.0,
                carbs_g: 64.0,
                fat_g: 26.0,
                fiber_g: 3.0,
            })
            .with_ingredients(&["wheat flour", "sugar", "cinnamon", "dark chocolate", "milk"])
            .with_allergens(&["gluten", "milk"])
            .with_accent([120, 72, 40]),
        Dish::new("sangria", "Sangría de la Casa", DishCategory::Drink, 550)
            .with_description("Red wine with orange, lemon, apple and a touch of cinnamon.")
            .with_nutrition(Nutrition {
                calories: 160,
                protein_g: 0.2,
                carbs_g: 18.0,
                fat_g: 0.0,
                fiber_g: 0.4,
            })
            .with_ingredients(&["red wine", "orange", "lemon", "apple", "cinnamon"])
            .with_allergens(&["sulphites"])
            .with_accent([140, 20, 50]),
    ]
}

pub fn offers() -> Vec<SpecialOffer> {
    vec![
        SpecialOffer {
            title: "Paella Sunday".to_string(),
            description: "Every Sunday our paella is 20% off for tables of two or more.".to_string(),
            discount_percent: 20,
            dish_id: Some("paella".to_string()),
        },
        SpecialOffer {
            title: "Merienda".to_string(),
            description: "Churros con chocolate at 15% off between 17:00 and 19:00.".to_string(),
            discount_percent: 15,
            dish_id: Some("churros".to_string()),
        },
        SpecialOffer {
            title: "Menú del Día".to_string(),
            description: "Starter, main and drink on weekdays with 10% off the whole bill.".to_string(),
            discount_percent: 10,
            dish_id: None,
        },
    ]
}
