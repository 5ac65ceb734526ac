//! End-to-end tests for the build commands.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use food_cli::cli::{BuildArgs, StatsArgs};
use food_cli::commands::{run_generate, run_migrate, run_stats};
use serde_json::Value;
use tempfile::TempDir;

fn write(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

fn build_args(data_dir: &Path) -> BuildArgs {
    BuildArgs {
        data_dir: data_dir.to_path_buf(),
        verified_on: NaiveDate::from_ymd_opt(2026, 1, 15),
        ..BuildArgs::default()
    }
}

fn seed_sources(dir: &Path) {
    write(
        &dir.join("Indian_Food_Nutrition_Processed.csv"),
        "Dish Name,Calories (kcal),Carbohydrates (g),Protein (g),Fats (g)\n\
         Masala Dosa,168,25.1,3.9,6.2\n\
         Rice,130,28,2.7,0.3\n\
         Paneer Tikka,265,6,18,19\n",
    );
    write(
        &dir.join("healthy_eating_dataset.csv"),
        "meal_name,calories,protein_g,cuisine,is_healthy,prep_time_min\n\
         masala dosa,170,4,South Indian,1,20\n\
         Quinoa Salad,220,8,Mediterranean,1,15\n\
         ,90,1,,,\n",
    );
}

#[test]
fn migrate_merges_into_existing_database() {
    let dir = TempDir::new().unwrap();
    seed_sources(dir.path());
    let database = dir.path().join("foodDatabase.json");
    write(
        &database,
        r#"{
  "foodDatabase": {
    "version": "2.1",
    "totalFoods": 3,
    "foods": [
      {"id": "food_0001", "name": "Chai", "category": "beverages", "source": "manual", "confidence": 0.99},
      {"id": "food_0002", "name": "Coffee", "category": "beverages", "source": "manual", "confidence": 0.99},
      {"id": "food_0003", "name": "RICE", "category": "grains", "source": "manual", "confidence": 0.99, "favourite": true}
    ]
  },
  "appMeta": {"schema": 3}
}
"#,
    );

    let result = run_migrate(&build_args(dir.path())).unwrap();

    assert!(!result.has_errors);
    assert_eq!(result.merge.existing, 3);
    assert_eq!(result.merge.skipped_duplicates, 1);
    assert_eq!(result.merge.total, 6);
    assert!(result.bytes_written.is_some());

    let json = read_json(&database);
    let db = &json["foodDatabase"];
    assert_eq!(db["totalFoods"], 6);
    assert_eq!(db["version"], "2.1");
    assert_eq!(db["lastUpdated"], "2026-01-15");
    assert_eq!(json["appMeta"]["schema"], 3);

    let foods = db["foods"].as_array().unwrap();
    let names: Vec<_> = foods.iter().map(|f| f["name"].as_str().unwrap()).collect();
    assert_eq!(
        names,
        vec!["Chai", "Coffee", "RICE", "Masala Dosa", "Paneer Tikka", "Quinoa Salad"]
    );
    assert_eq!(foods[2]["favourite"], true);

    // Ids continue after the highest existing id.
    let dosa = &foods[3];
    assert_eq!(dosa["id"], "food_0004");
    assert_eq!(dosa["category"], "breakfast");
    assert_eq!(dosa["cuisine"], "Indian");
    assert_eq!(dosa["nutrition"]["calories"], 168.0);
    assert_eq!(dosa["nutrition"]["protein"]["unit"], "g");
    assert_eq!(dosa["confidence"], 0.95);
    assert_eq!(dosa["portionHints"]["1_plate"], 150.0);
}

#[test]
fn generate_writes_fresh_flat_database() {
    let dir = TempDir::new().unwrap();
    seed_sources(dir.path());
    let output = dir.path().join("out/generated.json");
    let args = BuildArgs {
        database: Some(output.clone()),
        ..build_args(dir.path())
    };

    let result = run_generate(&args).unwrap();

    assert!(!result.has_errors);
    let json = read_json(&output);
    assert_eq!(json["version"], "1.0");
    assert_eq!(json["totalFoods"], 4);
    let foods = json["foods"].as_array().unwrap();
    assert_eq!(foods[0]["id"], "food_0000");
    assert_eq!(foods[0]["portionHints"]["2x"], 2.0);
    assert!(foods[0].get("cuisine").is_none());
    assert_eq!(foods[3]["name"], "Quinoa Salad");
    assert_eq!(foods[3]["id"], "food_4000");
    assert_eq!(foods[3]["nutrition"]["protein"]["value"], 8.0);
}

#[test]
fn dry_run_leaves_database_untouched() {
    let dir = TempDir::new().unwrap();
    seed_sources(dir.path());
    let args = BuildArgs {
        dry_run: true,
        ..build_args(dir.path())
    };

    let result = run_migrate(&args).unwrap();

    assert_eq!(result.bytes_written, None);
    assert_eq!(result.merge.total, 4);
    assert!(!dir.path().join("foodDatabase.json").exists());
}

#[test]
fn unparseable_database_aborts_without_writing() {
    let dir = TempDir::new().unwrap();
    seed_sources(dir.path());
    let database = dir.path().join("foodDatabase.json");
    write(&database, "{ not json");

    let result = run_migrate(&build_args(dir.path()));

    assert!(result.is_err());
    assert_eq!(fs::read_to_string(&database).unwrap(), "{ not json");
}

#[test]
fn manifest_in_data_dir_is_used() {
    let dir = TempDir::new().unwrap();
    write(
        &dir.path().join("exports/rda.csv"),
        "Food_items,Calories,Iron\nSpinach Dal,120,2.5\n",
    );
    write(
        &dir.path().join("food-sources.toml"),
        "[database]\npath = \"db/foods.json\"\nverified_on = \"2026-02-01\"\n\n\
         [[sources]]\npath = \"exports/rda.csv\"\nkind = \"rda\"\nid_offset = 500\n\n\
         [[sources]]\npath = \"exports/not-yet-exported.csv\"\nkind = \"ifct\"\n",
    );
    let args = BuildArgs {
        data_dir: dir.path().to_path_buf(),
        ..BuildArgs::default()
    };

    let result = run_migrate(&args).unwrap();

    assert!(!result.has_errors);
    let json = read_json(&dir.path().join("db/foods.json"));
    let food = &json["foodDatabase"]["foods"][0];
    assert_eq!(food["id"], "food_0500");
    assert_eq!(food["source"], "RDA System");
    assert_eq!(food["lastVerified"], "2026-02-01");
    assert_eq!(food["confidence"], 0.72);
    assert_eq!(food["nutrition"]["iron"]["unit"], "mg");
}

#[test]
fn unreadable_source_marks_run_as_failed() {
    let dir = TempDir::new().unwrap();
    seed_sources(dir.path());
    write(
        &dir.path().join("indian_rda_based_diet_recommendation_system.csv"),
        "",
    );

    let result = run_migrate(&build_args(dir.path())).unwrap();

    assert!(result.has_errors);
    assert_eq!(result.merge.added, 4);
    assert!(dir.path().join("foodDatabase.json").exists());
}

#[test]
fn stats_reads_either_layout() {
    let dir = TempDir::new().unwrap();
    let flat = dir.path().join("flat.json");
    write(
        &flat,
        r#"{"version": "1.0", "totalFoods": 2, "foods": [
            {"name": "Idli", "category": "breakfast", "source": "IFCT2017", "confidence": 0.9},
            {"name": "Upma", "category": "breakfast", "source": "IFCT2017", "confidence": 0.8}
        ]}"#,
    );

    let stats = run_stats(&StatsArgs { database: flat }).unwrap();

    assert_eq!(stats.total, 2);
    assert_eq!(stats.by_category["breakfast"], 2);
    assert!((stats.mean_confidence.unwrap() - 0.85).abs() < 1e-9);

    let missing = run_stats(&StatsArgs {
        database: dir.path().join("absent.json"),
    });
    assert!(missing.is_err());
}
