//! Column-to-nutrient field mapping.
//!
//! Source exports name the same nutrient differently (`Protein (g)`,
//! `protein_g`, `Proteins`). Each nutrient owns a priority-ordered list of
//! candidate columns; the first candidate holding a usable number wins.

use food_model::{Nutrient, Nutrition, Row};
use tracing::trace;

use crate::utils::{parse_number, round_to};

/// Candidate source columns per nutrient, highest priority first.
pub const NUTRIENT_COLUMNS: &[(Nutrient, &[&str])] = &[
    (Nutrient::Calories, &["Calories (kcal)", "calories", "Calories"]),
    (
        Nutrient::Carbohydrates,
        &["Carbohydrates (g)", "carbs_g", "Carbohydrates"],
    ),
    (Nutrient::Protein, &["Protein (g)", "protein_g", "Proteins"]),
    (Nutrient::Fat, &["Fats (g)", "fat_g", "Fats"]),
    (Nutrient::Fiber, &["Fibre (g)", "fiber_g", "Fibre"]),
    (Nutrient::Sugar, &["Free Sugar (g)", "sugar_g", "Sugars"]),
    (Nutrient::Sodium, &["Sodium (mg)", "sodium_mg", "Sodium"]),
    (Nutrient::Calcium, &["Calcium (mg)", "Calcium"]),
    (Nutrient::Iron, &["Iron (mg)", "Iron"]),
    (Nutrient::VitaminC, &["Vitamin C (mg)", "Vitamin C"]),
    (Nutrient::Folate, &["Folate (µg)", "Folate"]),
];

/// Columns that may carry the food's display name, highest priority first.
pub const NAME_COLUMNS: &[&str] = &["Dish Name", "meal_name", "Food_items", "food_name"];

/// Returns the candidate columns for a nutrient.
pub fn candidate_columns(nutrient: Nutrient) -> &'static [&'static str] {
    NUTRIENT_COLUMNS
        .iter()
        .find(|(candidate, _)| *candidate == nutrient)
        .map(|(_, columns)| *columns)
        .unwrap_or(&[])
}

/// Which nutrients to map and how precisely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingRules {
    /// Nutrients to look for, in output order.
    pub nutrients: Vec<Nutrient>,
    /// Decimal places for calories, protein, carbohydrates, fat and fiber.
    pub macro_decimals: u32,
    /// Decimal places for every other nutrient.
    pub other_decimals: u32,
    /// Per-nutrient precision that takes priority over the two above.
    pub overrides: Vec<(Nutrient, u32)>,
}

impl MappingRules {
    /// All nutrients at two decimals.
    pub fn migration() -> Self {
        Self {
            nutrients: Nutrient::ALL.to_vec(),
            macro_decimals: 2,
            other_decimals: 2,
            overrides: Vec::new(),
        }
    }

    /// Macros plus iron and calcium; macros and calcium at one decimal.
    pub fn quick() -> Self {
        Self {
            nutrients: vec![
                Nutrient::Calories,
                Nutrient::Carbohydrates,
                Nutrient::Protein,
                Nutrient::Fat,
                Nutrient::Fiber,
                Nutrient::Calcium,
                Nutrient::Iron,
            ],
            macro_decimals: 1,
            other_decimals: 2,
            overrides: vec![(Nutrient::Calcium, 1)],
        }
    }

    pub fn decimals_for(&self, nutrient: Nutrient) -> u32 {
        if let Some((_, decimals)) = self.overrides.iter().find(|(n, _)| *n == nutrient) {
            *decimals
        } else if nutrient.is_macro() {
            self.macro_decimals
        } else {
            self.other_decimals
        }
    }
}

impl Default for MappingRules {
    fn default() -> Self {
        Self::migration()
    }
}

/// Finds the first present, non-empty, numeric value among `columns`.
///
/// Absent and empty cells are treated alike; unparseable cells fall through
/// to the next candidate.
pub fn find_value(row: &Row, columns: &[&str]) -> Option<f64> {
    columns.iter().find_map(|column| {
        let raw = row.get(*column)?;
        let parsed = parse_number(raw);
        if parsed.is_none() && !raw.trim().is_empty() {
            trace!(column = %column, "ignoring non-numeric cell");
        }
        parsed
    })
}

/// Reads a single nutrient from a row, rounded per `rules`.
pub fn map_nutrient(row: &Row, nutrient: Nutrient, rules: &MappingRules) -> Option<f64> {
    find_value(row, candidate_columns(nutrient))
        .map(|value| round_to(value, rules.decimals_for(nutrient)))
        .filter(|value| value.is_finite())
}

/// Maps every nutrient in `rules` that the row provides.
///
/// Missing or unparseable nutrients are omitted, never zero-filled.
pub fn map_nutrition(row: &Row, rules: &MappingRules) -> Nutrition {
    let mut nutrition = Nutrition::new();
    for &nutrient in &rules.nutrients {
        if let Some(value) = map_nutrient(row, nutrient, rules) {
            nutrition.insert(nutrient, value);
        }
    }
    nutrition
}

/// Returns the trimmed display name from the first non-empty name column.
pub fn resolve_name(row: &Row) -> Option<String> {
    NAME_COLUMNS.iter().find_map(|column| {
        let value = row.get(*column)?.trim();
        (!value.is_empty()).then(|| value.to_string())
    })
}
