//! Source manifests: which CSV exports to read and where the database lives.
//!
//! ```toml
//! [database]
//! path = "data/foodDatabase.json"
//! verified_on = "2026-01-15"
//!
//! [[sources]]
//! path = "Indian_Food_Nutrition_Processed.csv"
//! kind = "ifct"
//! id_offset = 4
//! ```
//!
//! Relative paths resolve against the manifest's own directory.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use food_model::SourceKind;
use serde::{Deserialize, Serialize};

use crate::error::{IngestError, Result};

/// File name looked up in the data directory when no manifest is given.
pub const DEFAULT_MANIFEST_NAME: &str = "food-sources.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceManifest {
    pub database: DatabaseSection,
    #[serde(default)]
    pub sources: Vec<SourceEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseSection {
    pub path: PathBuf,
    /// Stamp written to `lastVerified`; defaults to the run date.
    #[serde(default)]
    pub verified_on: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceEntry {
    pub path: PathBuf,
    pub kind: SourceKind,
    /// First id counter value for this source. The counter never moves
    /// backwards, so a lower offset than the running counter is ignored.
    #[serde(default)]
    pub id_offset: Option<u32>,
}

impl SourceEntry {
    pub fn new(path: impl Into<PathBuf>, kind: SourceKind) -> Self {
        Self {
            path: path.into(),
            kind,
            id_offset: None,
        }
    }

    #[must_use]
    pub fn with_id_offset(mut self, offset: u32) -> Self {
        self.id_offset = Some(offset);
        self
    }
}

impl SourceManifest {
    /// Resolves relative paths against `base`.
    #[must_use]
    pub fn resolved_against(mut self, base: &Path) -> Self {
        self.database.path = resolve(base, &self.database.path);
        for source in &mut self.sources {
            source.path = resolve(base, &source.path);
        }
        self
    }
}

fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

/// Loads and validates a manifest, resolving paths against its directory.
pub fn load_manifest(path: &Path) -> Result<SourceManifest> {
    let text = std::fs::read_to_string(path).map_err(|e| IngestError::read(path, e))?;
    let manifest: SourceManifest =
        toml::from_str(&text).map_err(|source| IngestError::Manifest {
            path: path.to_path_buf(),
            source,
        })?;

    if manifest.sources.is_empty() {
        return Err(IngestError::InvalidManifest {
            path: path.to_path_buf(),
            reason: "no [[sources]] listed".to_string(),
        });
    }

    let base = path.parent().unwrap_or_else(|| Path::new(""));
    Ok(manifest.resolved_against(base))
}

/// The well-known exports in `data_dir`, in priority order.
///
/// All sources share one id counter starting at `first_id`.
pub fn default_manifest(data_dir: &Path, database: &Path, first_id: u32) -> SourceManifest {
    let sources = SourceKind::ALL
        .into_iter()
        .enumerate()
        .map(|(idx, kind)| {
            let entry = SourceEntry::new(data_dir.join(kind.default_file_name()), kind);
            if idx == 0 {
                entry.with_id_offset(first_id)
            } else {
                entry
            }
        })
        .collect();
    SourceManifest {
        database: DatabaseSection {
            path: database.to_path_buf(),
            verified_on: None,
        },
        sources,
    }
}
