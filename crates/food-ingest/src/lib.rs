//! Food data ingestion utilities.
//!
//! This crate owns everything that touches the filesystem:
//!
//! - **CSV Loading**: Read nutrition exports into untyped row maps
//! - **Source Manifests**: Describe which exports to read and how
//! - **Database Document**: Load, update and save the app's JSON database
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use food_ingest::{DocumentLayout, load_database, load_manifest, read_csv_rows};
//!
//! let manifest = load_manifest(Path::new("food-sources.toml"))?;
//! for source in &manifest.sources {
//!     let table = read_csv_rows(&source.path)?;
//!     println!("{}: {} rows", source.kind, table.rows.len());
//! }
//! let document = load_database(&manifest.database.path, DocumentLayout::Wrapped)?;
//! ```

#![deny(unsafe_code)]

mod csv;
mod database;
mod error;
mod manifest;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use self::csv::{CsvTable, read_csv_reader, read_csv_rows};

// === Database Document ===
pub use database::{DatabaseDocument, DocumentLayout, StoredFood, load_database, save_database};

// === Source Manifests ===
pub use manifest::{
    DEFAULT_MANIFEST_NAME, DatabaseSection, SourceEntry, SourceManifest, default_manifest,
    load_manifest,
};
