//! Type-safe enumerations for food classification.
//!
//! Categories and diet types are stored as lowercase strings in the JSON
//! database; these enums give the rest of the workspace a closed set to
//! match on.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Food category shown in the mobile app's browse screens.
///
/// Declaration order matches the portion table and is used for report
/// ordering; it is NOT the keyword priority order used by the classifier.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Beverages,
    Breakfast,
    Lunch,
    Dinner,
    /// Fallback when no keyword or heuristic matches.
    #[default]
    Snacks,
    Desserts,
    Fruits,
    Vegetables,
    Dairy,
    Grains,
}

impl Category {
    /// All categories in declaration order.
    pub const ALL: [Category; 10] = [
        Category::Beverages,
        Category::Breakfast,
        Category::Lunch,
        Category::Dinner,
        Category::Snacks,
        Category::Desserts,
        Category::Fruits,
        Category::Vegetables,
        Category::Dairy,
        Category::Grains,
    ];

    /// Returns the serialized tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Beverages => "beverages",
            Category::Breakfast => "breakfast",
            Category::Lunch => "lunch",
            Category::Dinner => "dinner",
            Category::Snacks => "snacks",
            Category::Desserts => "desserts",
            Category::Fruits => "fruits",
            Category::Vegetables => "vegetables",
            Category::Dairy => "dairy",
            Category::Grains => "grains",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == normalized)
            .ok_or_else(|| ModelError::UnknownCategory(s.to_string()))
    }
}

/// Diet type derived from the food name.
///
/// Not persisted on its own; it drives the `vegetarian` / `vegan` flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DietType {
    #[default]
    Vegetarian,
    Vegan,
    NonVegetarian,
}

impl DietType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DietType::Vegetarian => "vegetarian",
            DietType::Vegan => "vegan",
            DietType::NonVegetarian => "non-vegetarian",
        }
    }

    /// Vegan food is also vegetarian.
    pub fn is_vegetarian(&self) -> bool {
        matches!(self, DietType::Vegetarian | DietType::Vegan)
    }

    pub fn is_vegan(&self) -> bool {
        matches!(self, DietType::Vegan)
    }
}

impl fmt::Display for DietType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_round_trips_through_str() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>(), Ok(category));
        }
        assert_eq!(" Dairy ".parse::<Category>(), Ok(Category::Dairy));
        assert!("Indian Food".parse::<Category>().is_err());
    }

    #[test]
    fn default_category_is_snacks() {
        assert_eq!(Category::default(), Category::Snacks);
    }

    #[test]
    fn diet_flags() {
        assert!(DietType::Vegan.is_vegetarian());
        assert!(DietType::Vegan.is_vegan());
        assert!(DietType::Vegetarian.is_vegetarian());
        assert!(!DietType::Vegetarian.is_vegan());
        assert!(!DietType::NonVegetarian.is_vegetarian());
    }
}
