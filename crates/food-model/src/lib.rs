//! Core types for the food database.
//!
//! Everything downstream (mapping, building, merging, persistence) speaks in
//! terms of these types: a [`FoodRecord`] carries its [`Category`],
//! [`Nutrition`] facts, portion hints and provenance.

#![deny(unsafe_code)]

pub mod enums;
pub mod error;
pub mod nutrition;
pub mod record;
pub mod source;

pub use enums::{Category, DietType};
pub use error::ModelError;
pub use nutrition::{Nutrient, NutrientValue, Nutrition, Unit};
pub use record::{FoodDetails, FoodId, FoodRecord, NamedRecord, PortionHints};
pub use source::SourceKind;

use std::collections::BTreeMap;

/// A raw source row: column name to cell text.
pub type Row = BTreeMap<String, String>;
