//! Building, merging and summarizing food records.
//!
//! A run threads one [`BuildContext`] through every source: rows become
//! [`FoodRecord`](food_model::FoodRecord)s via [`build_record`], sources are
//! processed in order by [`build_sources`], and the result is folded into a
//! database document by [`merge_into_document`].

#![deny(unsafe_code)]

pub mod builder;
pub mod confidence;
pub mod context;
pub mod merge;
pub mod pipeline;
pub mod portions;
pub mod profile;
pub mod stats;

pub use builder::{RowOutcome, SkipReason, build_record};
pub use confidence::score_confidence;
pub use context::BuildContext;
pub use merge::{MergeOutcome, merge_records};
pub use pipeline::{
    BuildOutput, MergeSummary, PROGRESS_INTERVAL, SourceReport, SourceStatus, build_rows,
    build_source, build_sources, merge_into_document,
};
pub use portions::{category_portions, multiplier_portions};
pub use profile::BuildProfile;
pub use stats::DatabaseStats;
