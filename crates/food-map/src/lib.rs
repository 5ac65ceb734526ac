//! Mapping from heterogeneous CSV rows to the canonical food schema.
//!
//! - [`fields`]: priority-ordered column candidates per nutrient, numeric
//!   parsing and rounding
//! - [`classify`]: keyword-table category and diet-type detection
//! - [`aliases`]: bounded lowercase lookup aliases
//!
//! Everything here is pure: the same input always yields the same output and
//! no function fails.

#![deny(unsafe_code)]

pub mod aliases;
pub mod classify;
pub mod fields;
pub mod utils;

pub use aliases::{MAX_ALIASES, generate_aliases};
pub use classify::{CATEGORY_KEYWORDS, classify_category, classify_diet};
pub use fields::{
    MappingRules, NAME_COLUMNS, NUTRIENT_COLUMNS, candidate_columns, map_nutrition,
    resolve_name,
};
