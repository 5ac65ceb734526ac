//! Row to [`FoodRecord`] assembly.

use food_map::utils::parse_number;
use food_map::{classify_category, classify_diet, generate_aliases, map_nutrition, resolve_name};
use food_model::{DietType, FoodDetails, FoodRecord, Nutrient, Row, SourceKind};
use tracing::trace;

use crate::confidence::score_confidence;
use crate::context::BuildContext;

pub const DEFAULT_CUISINE: &str = "Indian";
pub const DEFAULT_SERVING_SIZE: u32 = 100;
pub const DEFAULT_SERVING_UNIT: &str = "g";
/// Minutes, used when a prep or cook time is absent or unreadable.
pub const DEFAULT_TIME_MINUTES: u32 = 5;

/// Why a row produced no record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkipReason {
    /// No name column held a non-empty value.
    MissingName,
    /// The name was already claimed earlier in the run.
    Duplicate,
    /// The profile requires calories and none were usable.
    MissingCalories,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::MissingName => "missing name",
            SkipReason::Duplicate => "duplicate name",
            SkipReason::MissingCalories => "missing calories",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    Built(Box<FoodRecord>),
    Skipped(SkipReason),
}

impl RowOutcome {
    pub fn record(self) -> Option<FoodRecord> {
        match self {
            RowOutcome::Built(record) => Some(*record),
            RowOutcome::Skipped(_) => None,
        }
    }
}

/// Builds one record from a raw row.
///
/// Ids and names are only consumed when a record is actually produced.
pub fn build_record(row: &Row, kind: SourceKind, ctx: &mut BuildContext) -> RowOutcome {
    let Some(name) = resolve_name(row) else {
        return RowOutcome::Skipped(SkipReason::MissingName);
    };

    let nutrition = map_nutrition(row, ctx.rules());
    if ctx.profile().requires_calories() && !nutrition.contains(Nutrient::Calories) {
        trace!(name = %name, "no calories, skipping row");
        return RowOutcome::Skipped(SkipReason::MissingCalories);
    }

    if !ctx.claim_name(&name) {
        trace!(name = %name, "name already claimed");
        return RowOutcome::Skipped(SkipReason::Duplicate);
    }

    let category = classify_category(&name);
    let diet_type = classify_diet(&name);
    let details = ctx
        .profile()
        .includes_details()
        .then(|| row_details(row, diet_type));
    let confidence = score_confidence(kind, &nutrition);

    let record = FoodRecord {
        id: ctx.next_id(),
        aliases: generate_aliases(&name),
        name,
        category,
        diet_type,
        details,
        portion_hints: ctx.profile().portion_hints(category),
        nutrition,
        confidence,
        source: kind.label().to_string(),
        last_verified: ctx.verified_on(),
    };
    RowOutcome::Built(Box::new(record))
}

fn row_details(row: &Row, diet_type: DietType) -> FoodDetails {
    let cuisine = non_empty(row, "cuisine").unwrap_or(DEFAULT_CUISINE);
    let is_healthy = non_empty(row, "is_healthy").is_none_or(|value| value != "0");
    FoodDetails {
        cuisine: cuisine.to_string(),
        serving_size: DEFAULT_SERVING_SIZE,
        serving_size_unit: DEFAULT_SERVING_UNIT.to_string(),
        is_healthy,
        vegetarian: diet_type.is_vegetarian(),
        vegan: diet_type.is_vegan(),
        gluten_free: true,
        allergens: Vec::new(),
        prep_time: minutes(row, "prep_time_min"),
        cook_time: minutes(row, "cook_time_min"),
    }
}

fn non_empty<'a>(row: &'a Row, column: &str) -> Option<&'a str> {
    row.get(column)
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
}

fn minutes(row: &Row, column: &str) -> u32 {
    non_empty(row, column)
        .and_then(parse_number)
        .filter(|value| *value >= 0.0 && *value <= f64::from(u32::MAX))
        .map_or(DEFAULT_TIME_MINUTES, |value| value.round() as u32)
}
