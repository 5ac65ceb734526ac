//! Canonical nutrition schema.
//!
//! Every nutrient has a fixed unit. Units are never inferred from source
//! data: a column named `Sodium` and one named `Sodium (mg)` both land in
//! [`Nutrient::Sodium`] with [`Unit::Milligram`].
//!
//! # JSON shape
//!
//! Calories serialize as a bare number; every other nutrient serializes as
//! `{"value": .., "unit": ..}`:
//!
//! ```json
//! {
//!   "calories": 168.0,
//!   "protein": { "value": 3.9, "unit": "g" },
//!   "sodium": { "value": 265.0, "unit": "mg" }
//! }
//! ```

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A nutrient in the canonical schema.
///
/// Declaration order is the key order in serialized nutrition maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Nutrient {
    Calories,
    Carbohydrates,
    Protein,
    Fat,
    Fiber,
    Sugar,
    Sodium,
    Calcium,
    Iron,
    VitaminC,
    Folate,
}

impl Nutrient {
    pub const ALL: [Nutrient; 11] = [
        Nutrient::Calories,
        Nutrient::Carbohydrates,
        Nutrient::Protein,
        Nutrient::Fat,
        Nutrient::Fiber,
        Nutrient::Sugar,
        Nutrient::Sodium,
        Nutrient::Calcium,
        Nutrient::Iron,
        Nutrient::VitaminC,
        Nutrient::Folate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Nutrient::Calories => "calories",
            Nutrient::Carbohydrates => "carbohydrates",
            Nutrient::Protein => "protein",
            Nutrient::Fat => "fat",
            Nutrient::Fiber => "fiber",
            Nutrient::Sugar => "sugar",
            Nutrient::Sodium => "sodium",
            Nutrient::Calcium => "calcium",
            Nutrient::Iron => "iron",
            Nutrient::VitaminC => "vitaminC",
            Nutrient::Folate => "folate",
        }
    }

    /// Fixed unit for this nutrient. Calories are unitless.
    pub fn unit(&self) -> Option<Unit> {
        match self {
            Nutrient::Calories => None,
            Nutrient::Carbohydrates
            | Nutrient::Protein
            | Nutrient::Fat
            | Nutrient::Fiber
            | Nutrient::Sugar => Some(Unit::Gram),
            Nutrient::Sodium | Nutrient::Calcium | Nutrient::Iron | Nutrient::VitaminC => {
                Some(Unit::Milligram)
            }
            Nutrient::Folate => Some(Unit::Microgram),
        }
    }

    /// Calories, protein, carbohydrates, fat and fiber.
    ///
    /// These get coarser rounding in the quick build profile.
    pub fn is_macro(&self) -> bool {
        matches!(
            self,
            Nutrient::Calories
                | Nutrient::Carbohydrates
                | Nutrient::Protein
                | Nutrient::Fat
                | Nutrient::Fiber
        )
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Mass unit attached to a measured nutrient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "g")]
    Gram,
    #[serde(rename = "mg")]
    Milligram,
    #[serde(rename = "µg", alias = "ug", alias = "mcg")]
    Microgram,
}

impl Unit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Gram => "g",
            Unit::Milligram => "mg",
            Unit::Microgram => "µg",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single nutrient value as it appears in the database.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NutrientValue {
    /// Unitless number (calories).
    Bare(f64),
    /// Number with its fixed unit.
    Measured { value: f64, unit: Unit },
}

impl NutrientValue {
    /// Builds the value shape the nutrient's unit calls for.
    pub fn for_nutrient(nutrient: Nutrient, value: f64) -> Self {
        match nutrient.unit() {
            Some(unit) => NutrientValue::Measured { value, unit },
            None => NutrientValue::Bare(value),
        }
    }

    pub fn value(&self) -> f64 {
        match self {
            NutrientValue::Bare(value) => *value,
            NutrientValue::Measured { value, .. } => *value,
        }
    }

    pub fn unit(&self) -> Option<Unit> {
        match self {
            NutrientValue::Bare(_) => None,
            NutrientValue::Measured { unit, .. } => Some(*unit),
        }
    }
}

/// Nutrition facts of one food item.
///
/// Only nutrients present in the source are stored; a missing nutrient is
/// unknown, not zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Nutrition {
    values: BTreeMap<Nutrient, NutrientValue>,
}

impl Nutrition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a value with the nutrient's fixed unit, replacing any
    /// previous value.
    pub fn insert(&mut self, nutrient: Nutrient, value: f64) {
        self.values
            .insert(nutrient, NutrientValue::for_nutrient(nutrient, value));
    }

    /// Builder-style [`Nutrition::insert`].
    #[must_use]
    pub fn with(mut self, nutrient: Nutrient, value: f64) -> Self {
        self.insert(nutrient, value);
        self
    }

    pub fn get(&self, nutrient: Nutrient) -> Option<f64> {
        self.values.get(&nutrient).map(NutrientValue::value)
    }

    pub fn entry(&self, nutrient: Nutrient) -> Option<&NutrientValue> {
        self.values.get(&nutrient)
    }

    pub fn contains(&self, nutrient: Nutrient) -> bool {
        self.values.contains_key(&nutrient)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Nutrient, &NutrientValue)> {
        self.values.iter().map(|(nutrient, value)| (*nutrient, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn units_are_fixed_per_nutrient() {
        assert_eq!(Nutrient::Calories.unit(), None);
        assert_eq!(Nutrient::Protein.unit(), Some(Unit::Gram));
        assert_eq!(Nutrient::Sugar.unit(), Some(Unit::Gram));
        assert_eq!(Nutrient::Sodium.unit(), Some(Unit::Milligram));
        assert_eq!(Nutrient::VitaminC.unit(), Some(Unit::Milligram));
        assert_eq!(Nutrient::Folate.unit(), Some(Unit::Microgram));
    }

    #[test]
    fn sugar_is_not_a_macro() {
        let macros: Vec<_> = Nutrient::ALL.into_iter().filter(Nutrient::is_macro).collect();
        assert_eq!(
            macros,
            vec![
                Nutrient::Calories,
                Nutrient::Carbohydrates,
                Nutrient::Protein,
                Nutrient::Fat,
                Nutrient::Fiber,
            ]
        );
    }

    #[test]
    fn insert_attaches_unit() {
        let nutrition = Nutrition::new()
            .with(Nutrient::Calories, 168.0)
            .with(Nutrient::Iron, 1.25);
        assert_eq!(
            nutrition.entry(Nutrient::Calories),
            Some(&NutrientValue::Bare(168.0))
        );
        assert_eq!(
            nutrition.entry(Nutrient::Iron),
            Some(&NutrientValue::Measured {
                value: 1.25,
                unit: Unit::Milligram
            })
        );
        assert_eq!(nutrition.len(), 2);
        assert!(!nutrition.contains(Nutrient::Fat));
    }
}
