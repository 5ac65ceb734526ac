//! The canonical food record.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::{Category, DietType};
use crate::nutrition::Nutrition;

/// Portion label to gram quantity or serving multiplier.
pub type PortionHints = BTreeMap<String, f64>;

/// Anything stored in the database under a display name.
///
/// Deduplication keys on the lowercased name.
pub trait NamedRecord {
    fn name(&self) -> &str;

    fn name_key(&self) -> String {
        self.name().to_lowercase()
    }
}

/// Stable record identifier (`food_0004`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FoodId(String);

impl FoodId {
    pub fn from_counter(counter: u32) -> Self {
        Self(format!("food_{counter:04}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FoodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One food item as consumed by the mobile app.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodRecord {
    pub id: FoodId,
    pub name: String,
    pub aliases: Vec<String>,
    pub category: Category,
    #[serde(skip)]
    pub diet_type: DietType,
    /// Present only for records built with the full migration profile.
    #[serde(flatten)]
    pub details: Option<FoodDetails>,
    pub portion_hints: PortionHints,
    pub nutrition: Nutrition,
    pub confidence: f64,
    pub source: String,
    pub last_verified: NaiveDate,
}

impl NamedRecord for FoodRecord {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Serving and dietary metadata written by the migration profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodDetails {
    pub cuisine: String,
    pub serving_size: u32,
    pub serving_size_unit: String,
    pub is_healthy: bool,
    pub vegetarian: bool,
    pub vegan: bool,
    pub gluten_free: bool,
    pub allergens: Vec<String>,
    /// Minutes.
    pub prep_time: u32,
    /// Minutes.
    pub cook_time: u32,
}
