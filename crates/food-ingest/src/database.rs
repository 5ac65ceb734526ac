//! The JSON food database document consumed by the mobile app.
//!
//! Two layouts exist in the wild and both are written back the way they were
//! read:
//!
//! - **Wrapped**: `{"foodDatabase": {"foods": [...], "totalFoods": N, ...}, ...}`
//! - **Flat**: `{"version": "1.0", "lastUpdated": "...", "totalFoods": N, "foods": [...]}`
//!
//! Fields this crate does not know about, on the document or on individual
//! food entries, survive a load/save cycle untouched and in their original
//! key order.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use chrono::NaiveDate;
use food_model::{FoodRecord, NamedRecord};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::error::{IngestError, Result};

const WRAPPER_KEY: &str = "foodDatabase";
const FOODS_KEY: &str = "foods";
const VERSION_KEY: &str = "version";
const LAST_UPDATED_KEY: &str = "lastUpdated";
const TOTAL_FOODS_KEY: &str = "totalFoods";
const DEFAULT_VERSION: &str = "1.0";

/// How the database object sits inside the JSON document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocumentLayout {
    /// Database nested under a top-level `foodDatabase` key.
    #[default]
    Wrapped,
    /// Database fields at the top level.
    Flat,
}

/// A food entry as stored on disk.
///
/// Entries are kept as raw JSON objects so that merging never rewrites
/// records this tool did not create.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoredFood(Map<String, Value>);

impl StoredFood {
    pub fn from_map(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Converts a freshly built record into its stored form.
    pub fn from_record(record: &FoodRecord) -> Result<Self> {
        match serde_json::to_value(record)
            .map_err(|source| IngestError::DatabaseSerialize { source })?
        {
            Value::Object(fields) => Ok(Self(fields)),
            other => Err(IngestError::DatabaseSerialize {
                source: serde::ser::Error::custom(format!(
                    "food record serialized to a non-object: {other}"
                )),
            }),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn f64_field(&self, key: &str) -> Option<f64> {
        self.0.get(key).and_then(Value::as_f64)
    }

    pub fn id(&self) -> Option<&str> {
        self.str_field("id")
    }
}

impl NamedRecord for StoredFood {
    /// Entries without a string `name` have an empty name.
    fn name(&self) -> &str {
        self.str_field("name").unwrap_or_default()
    }
}

/// A loaded database document plus the layout it was found in.
///
/// The database object (and the root object of the wrapped layout) stay raw
/// JSON, so key order and unknown fields survive a save. Only `foods`,
/// `totalFoods` and `lastUpdated` are rewritten, in place.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DatabaseDocument {
    pub layout: DocumentLayout,
    foods: Vec<StoredFood>,
    /// The database object; its `foods` entry is filled in on save.
    header: Map<String, Value>,
    /// Wrapped layout only; its `foodDatabase` entry is filled in on save.
    root: Map<String, Value>,
}

impl DatabaseDocument {
    /// An empty document in the given layout.
    pub fn empty(layout: DocumentLayout) -> Self {
        let mut header = Map::new();
        if layout == DocumentLayout::Flat {
            header.insert(VERSION_KEY.to_string(), Value::from(DEFAULT_VERSION));
        }
        Self {
            layout,
            header,
            ..Self::default()
        }
    }

    pub fn foods(&self) -> &[StoredFood] {
        &self.foods
    }

    /// Replaces the food list and refreshes the derived header fields.
    pub fn replace_foods(&mut self, foods: Vec<StoredFood>, updated_on: NaiveDate) {
        self.header.insert(
            LAST_UPDATED_KEY.to_string(),
            Value::from(updated_on.format("%Y-%m-%d").to_string()),
        );
        self.header
            .insert(TOTAL_FOODS_KEY.to_string(), Value::from(foods.len()));
        self.foods = foods;
    }

    /// Parses a document from JSON text; `path` is used for error reporting.
    pub fn from_json(text: &str, path: &Path) -> Result<Self> {
        let value: Value =
            serde_json::from_str(text).map_err(|source| IngestError::DatabaseParse {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_value(value, path)
    }

    fn from_value(value: Value, path: &Path) -> Result<Self> {
        let Value::Object(mut root) = value else {
            return Err(layout_error(path, "top level is not a JSON object"));
        };

        if let Some(inner) = root.get_mut(WRAPPER_KEY).map(Value::take) {
            let Value::Object(header) = inner else {
                return Err(layout_error(path, "`foodDatabase` is not an object"));
            };
            let (foods, header) = split_foods(header, path)?;
            return Ok(Self {
                layout: DocumentLayout::Wrapped,
                foods,
                header,
                root,
            });
        }

        if root.contains_key(FOODS_KEY) {
            let (foods, header) = split_foods(root, path)?;
            return Ok(Self {
                layout: DocumentLayout::Flat,
                foods,
                header,
                root: Map::new(),
            });
        }

        Err(layout_error(
            path,
            "expected a `foodDatabase` object or a `foods` array",
        ))
    }

    /// Serializes the document in its layout.
    pub fn to_value(&self) -> Result<Value> {
        let foods = serde_json::to_value(&self.foods)
            .map_err(|source| IngestError::DatabaseSerialize { source })?;
        let mut database = self.header.clone();
        database.insert(FOODS_KEY.to_string(), foods);
        match self.layout {
            DocumentLayout::Flat => Ok(Value::Object(database)),
            DocumentLayout::Wrapped => {
                let mut root = self.root.clone();
                root.insert(WRAPPER_KEY.to_string(), Value::Object(database));
                Ok(Value::Object(root))
            }
        }
    }
}

/// Takes the food entries out of a database object, leaving their key in
/// place.
fn split_foods(
    mut header: Map<String, Value>,
    path: &Path,
) -> Result<(Vec<StoredFood>, Map<String, Value>)> {
    let foods = match header.get_mut(FOODS_KEY) {
        Some(value) => serde_json::from_value(value.take()).map_err(|source| {
            IngestError::DatabaseParse {
                path: path.to_path_buf(),
                source,
            }
        })?,
        None => Vec::new(),
    };
    Ok((foods, header))
}

fn layout_error(path: &Path, reason: &str) -> IngestError {
    IngestError::DatabaseLayout {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}

/// Loads the database document at `path`.
///
/// A missing file yields an empty document in `missing_layout`. Any other
/// read or parse failure is an error: the caller must not overwrite a
/// document it could not read.
pub fn load_database(path: &Path, missing_layout: DocumentLayout) -> Result<DatabaseDocument> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
            info!(path = %path.display(), "no existing database, starting empty");
            return Ok(DatabaseDocument::empty(missing_layout));
        }
        Err(error) => return Err(IngestError::read(path, error)),
    };
    let value: Value = serde_json::from_reader(BufReader::new(file)).map_err(|source| {
        IngestError::DatabaseParse {
            path: path.to_path_buf(),
            source,
        }
    })?;
    let document = DatabaseDocument::from_value(value, path)?;
    debug!(
        path = %path.display(),
        foods = document.foods().len(),
        layout = ?document.layout,
        "loaded database"
    );
    Ok(document)
}

/// Writes the document as pretty-printed UTF-8 JSON, creating parent
/// directories as needed. Returns the number of bytes written.
pub fn save_database(path: &Path, document: &DatabaseDocument) -> Result<u64> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| IngestError::write(parent, e))?;
    }
    let value = document.to_value()?;
    let mut bytes = serde_json::to_vec_pretty(&value)
        .map_err(|source| IngestError::DatabaseSerialize { source })?;
    bytes.push(b'\n');

    let file = File::create(path).map_err(|e| IngestError::write(path, e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(&bytes)
        .and_then(|()| writer.flush())
        .map_err(|e| IngestError::write(path, e))?;

    info!(
        path = %path.display(),
        foods = document.foods().len(),
        bytes = bytes.len(),
        "database saved"
    );
    Ok(bytes.len() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: Value) -> Result<DatabaseDocument> {
        DatabaseDocument::from_value(value, Path::new("foodDatabase.json"))
    }

    #[test]
    fn detects_wrapped_layout() {
        let document = parse(json!({
            "foodDatabase": { "foods": [{ "id": "food_0001", "name": "Chai" }], "totalFoods": 1 },
            "meta": { "owner": "app" }
        }))
        .unwrap();

        assert_eq!(document.layout, DocumentLayout::Wrapped);
        assert_eq!(document.foods().len(), 1);
        assert_eq!(document.foods()[0].name(), "Chai");
        assert_eq!(document.to_value().unwrap()["meta"]["owner"], "app");
    }

    #[test]
    fn detects_flat_layout() {
        let document = parse(json!({
            "version": "1.0",
            "lastUpdated": "2026-01-17",
            "totalFoods": 0,
            "foods": []
        }))
        .unwrap();

        assert_eq!(document.layout, DocumentLayout::Flat);
        assert_eq!(document.to_value().unwrap()["version"], "1.0");
    }

    #[test]
    fn version_is_not_interpreted() {
        let document = parse(json!({
            "foodDatabase": { "version": 2, "foods": [] }
        }))
        .unwrap();

        assert_eq!(document.to_value().unwrap()["foodDatabase"]["version"], 2);
    }

    #[test]
    fn key_order_survives_save() {
        let text = r#"{
  "meta": { "owner": "app" },
  "foodDatabase": {
    "schemaNotes": "v2",
    "foods": [{ "name": "Chai", "id": "food_0001" }],
    "lastUpdated": "2025-12-01",
    "totalFoods": 1,
    "version": 3
  },
  "trailer": true
}"#;
        let mut document = DatabaseDocument::from_json(text, Path::new("db.json")).unwrap();
        let foods = document.foods().to_vec();
        document.replace_foods(foods, NaiveDate::from_ymd_opt(2026, 1, 15).unwrap());

        let value = document.to_value().unwrap();
        let root_keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(root_keys, vec!["meta", "foodDatabase", "trailer"]);
        let database_keys: Vec<_> = value["foodDatabase"]
            .as_object()
            .unwrap()
            .keys()
            .cloned()
            .collect();
        assert_eq!(
            database_keys,
            vec!["schemaNotes", "foods", "lastUpdated", "totalFoods", "version"]
        );
        let food_keys: Vec<_> = value["foodDatabase"]["foods"][0]
            .as_object()
            .unwrap()
            .keys()
            .cloned()
            .collect();
        assert_eq!(food_keys, vec!["name", "id"]);
        assert_eq!(value["foodDatabase"]["lastUpdated"], "2026-01-15");
    }

    #[test]
    fn rejects_unknown_layout() {
        assert!(matches!(
            parse(json!({ "items": [] })),
            Err(IngestError::DatabaseLayout { .. })
        ));
        assert!(matches!(
            parse(json!([1, 2, 3])),
            Err(IngestError::DatabaseLayout { .. })
        ));
    }

    #[test]
    fn unknown_fields_survive_round_trip() {
        let input = json!({
            "foodDatabase": {
                "foods": [{ "id": "food_0001", "name": "Chai", "glycemicIndex": 41 }],
                "totalFoods": 1,
                "schemaNotes": "v2"
            },
            "meta": { "owner": "app" }
        });
        let document = parse(input.clone()).unwrap();
        assert_eq!(document.to_value().unwrap(), input);
    }

    #[test]
    fn replace_foods_refreshes_header() {
        let mut document = DatabaseDocument::empty(DocumentLayout::Flat);
        let foods = vec![StoredFood::from_map(
            json!({ "name": "Rice" }).as_object().cloned().unwrap(),
        )];
        document.replace_foods(foods, NaiveDate::from_ymd_opt(2026, 1, 15).unwrap());

        let value = document.to_value().unwrap();
        assert_eq!(value["totalFoods"], 1);
        assert_eq!(value["lastUpdated"], "2026-01-15");
        assert_eq!(value["version"], "1.0");
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["version", "lastUpdated", "totalFoods", "foods"]);
    }

    #[test]
    fn stored_food_without_name_has_empty_name() {
        let food = StoredFood::from_map(json!({ "id": "food_0009" }).as_object().cloned().unwrap());
        assert_eq!(food.name(), "");
        assert_eq!(food.id(), Some("food_0009"));
    }
}
