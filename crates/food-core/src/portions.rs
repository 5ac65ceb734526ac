//! Portion hint tables.

use food_model::{Category, PortionHints};

/// Gram quantities per portion label, by category.
pub const CATEGORY_PORTIONS: &[(Category, &[(&str, f64)])] = &[
    (
        Category::Beverages,
        &[("1_cup", 240.0), ("1_glass", 200.0), ("half_cup", 120.0)],
    ),
    (
        Category::Breakfast,
        &[("1_serving", 100.0), ("1_plate", 150.0), ("half_plate", 75.0)],
    ),
    (
        Category::Lunch,
        &[("1_serving", 150.0), ("1_plate", 200.0), ("half_plate", 100.0)],
    ),
    (
        Category::Dinner,
        &[("1_serving", 150.0), ("1_plate", 200.0), ("half_plate", 100.0)],
    ),
    (
        Category::Snacks,
        &[("1_piece", 50.0), ("1_serving", 75.0), ("handful", 30.0)],
    ),
    (
        Category::Desserts,
        &[("1_piece", 50.0), ("1_serving", 100.0), ("1_spoon", 15.0)],
    ),
    (
        Category::Fruits,
        &[("1_medium", 150.0), ("1_small", 100.0), ("1_cup", 150.0)],
    ),
    (
        Category::Vegetables,
        &[("1_cup", 100.0), ("1_serving", 150.0), ("handful", 75.0)],
    ),
    (
        Category::Dairy,
        &[("1_cup", 240.0), ("1_glass", 200.0), ("half_cup", 120.0)],
    ),
    (
        Category::Grains,
        &[("1_cup", 200.0), ("1_serving", 100.0), ("handful", 50.0)],
    ),
];

/// Serving multipliers used by the quick profile.
pub const MULTIPLIER_PORTIONS: &[(&str, f64)] = &[("1x", 1.0), ("0.5x", 0.5), ("2x", 2.0)];

/// Gram portions for a category. Falls back to the snacks table.
pub fn category_portions(category: Category) -> PortionHints {
    let table = CATEGORY_PORTIONS
        .iter()
        .find(|(candidate, _)| *candidate == category)
        .or_else(|| {
            CATEGORY_PORTIONS
                .iter()
                .find(|(candidate, _)| *candidate == Category::Snacks)
        })
        .map(|(_, hints)| *hints)
        .unwrap_or(&[]);
    to_hints(table)
}

pub fn multiplier_portions() -> PortionHints {
    to_hints(MULTIPLIER_PORTIONS)
}

fn to_hints(table: &[(&str, f64)]) -> PortionHints {
    table
        .iter()
        .map(|(label, amount)| ((*label).to_string(), *amount))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_three_portions() {
        for category in Category::ALL {
            assert_eq!(category_portions(category).len(), 3, "{category}");
        }
    }

    #[test]
    fn breakfast_portions() {
        let hints = category_portions(Category::Breakfast);
        assert_eq!(hints["1_serving"], 100.0);
        assert_eq!(hints["1_plate"], 150.0);
        assert_eq!(hints["half_plate"], 75.0);
    }

    #[test]
    fn multipliers() {
        let hints = multiplier_portions();
        assert_eq!(hints["1x"], 1.0);
        assert_eq!(hints["0.5x"], 0.5);
        assert_eq!(hints["2x"], 2.0);
    }
}
