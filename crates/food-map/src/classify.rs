//! Keyword-based category and diet-type classification.
//!
//! Matching is a case-insensitive substring search, so `"pea"` also hits
//! `"peanut"`. The category table is scanned in order and the first category
//! with any keyword hit wins: `"Apple Juice"` is a beverage, not a fruit,
//! because beverages come first.

use food_model::{Category, DietType};

use crate::utils::normalize_text;

/// Category keyword table in priority order.
pub const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::Beverages,
        &[
            "tea", "coffee", "juice", "milk", "lassi", "shake", "drink", "smoothie", "cola",
            "water", "cooler",
        ],
    ),
    (
        Category::Breakfast,
        &[
            "breakfast", "porridge", "cereal", "oatmeal", "toast", "eggs", "pancake", "waffle",
            "paratha", "dosa", "idli", "upma", "poha",
        ],
    ),
    (
        Category::Fruits,
        &[
            "apple",
            "banana",
            "mango",
            "orange",
            "grape",
            "papaya",
            "watermelon",
            "pineapple",
            "guava",
            "berry",
        ],
    ),
    (
        Category::Vegetables,
        &[
            "carrot",
            "potato",
            "onion",
            "tomato",
            "cabbage",
            "spinach",
            "broccoli",
            "cauliflower",
            "bean",
            "pea",
        ],
    ),
    (
        Category::Dairy,
        &["cheese", "paneer", "yogurt", "curd", "milk", "ghee", "butter", "cream"],
    ),
    (
        Category::Grains,
        &[
            "rice", "wheat", "bread", "roti", "chapati", "cereal", "oats", "grain", "flour",
        ],
    ),
    (
        Category::Snacks,
        &[
            "samosa", "pakora", "chips", "snack", "fried", "crisp", "popcorn", "biscuit", "cookie",
        ],
    ),
    (
        Category::Desserts,
        &[
            "dessert",
            "sweet",
            "cake",
            "pie",
            "pudding",
            "candy",
            "chocolate",
            "ice cream",
            "pastry",
        ],
    ),
    (
        Category::Lunch,
        &["lunch", "curry", "dal", "sabzi", "biryani", "pulao", "khichdi"],
    ),
    (
        Category::Dinner,
        &["dinner", "curry", "dal", "sabzi", "biryani", "pulao", "khichdi"],
    ),
];

/// Heuristics applied when no keyword matched.
const FALLBACKS: &[(Category, &[&str])] = &[
    (
        Category::Lunch,
        &["curry", "dal", "sabzi", "biryani", "khichdi"],
    ),
    (Category::Breakfast, &["sandwich", "toast", "porridge"]),
];

const NON_VEGETARIAN_TERMS: &[&str] = &["chicken", "meat", "fish", "egg", "mutton"];
const VEGAN_TERMS: &[&str] = &["vegan", "tofu", "vegetable"];

fn first_match(name: &str, table: &[(Category, &[&str])]) -> Option<Category> {
    table
        .iter()
        .find(|(_, keywords)| contains_any(name, keywords))
        .map(|(category, _)| *category)
}

fn contains_any(name: &str, terms: &[&str]) -> bool {
    terms.iter().any(|term| name.contains(term))
}

/// Detects the category of a food from its name.
///
/// Total: names matching nothing are [`Category::Snacks`].
pub fn classify_category(name: &str) -> Category {
    let name = normalize_text(name);
    first_match(&name, CATEGORY_KEYWORDS)
        .or_else(|| first_match(&name, FALLBACKS))
        .unwrap_or_default()
}

/// Detects the diet type of a food from its name.
///
/// Any meat, fish or egg term makes the food non-vegetarian, even if a vegan
/// term is present too.
pub fn classify_diet(name: &str) -> DietType {
    let name = normalize_text(name);
    if contains_any(&name, NON_VEGETARIAN_TERMS) {
        DietType::NonVegetarian
    } else if contains_any(&name, VEGAN_TERMS) {
        DietType::Vegan
    } else {
        DietType::Vegetarian
    }
}
