//! Serialized shape of built records.

use chrono::NaiveDate;
use food_core::{BuildContext, BuildProfile, build_record};
use food_model::{Row, SourceKind};

fn row(pairs: &[(&str, &str)]) -> Row {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

fn context(profile: BuildProfile) -> BuildContext {
    BuildContext::new(profile, NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()).with_first_id(4)
}

#[test]
fn migration_record_json() {
    let mut ctx = context(BuildProfile::Migration);
    let record = build_record(
        &row(&[
            ("Dish Name", "Masala Dosa"),
            ("Calories (kcal)", "168"),
            ("Protein (g)", "3.914"),
            ("Fats (g)", "6.5"),
            ("Folate (µg)", "12"),
        ]),
        SourceKind::Ifct,
        &mut ctx,
    )
    .record()
    .unwrap();

    let json = serde_json::to_string_pretty(&record).unwrap();
    insta::assert_snapshot!(json);
}

#[test]
fn quick_record_json() {
    let mut ctx = context(BuildProfile::Quick);
    let record = build_record(
        &row(&[
            ("meal_name", "Fruit and Nut Salad (large)"),
            ("calories", "212.36"),
            ("protein_g", "4.26"),
            ("carbs_g", "30.04"),
            ("fat_g", "8.96"),
            ("sodium_mg", "40"),
        ]),
        SourceKind::HealthyEating,
        &mut ctx,
    )
    .record()
    .unwrap();

    let json = serde_json::to_string_pretty(&record).unwrap();
    insta::assert_snapshot!(json);
}
