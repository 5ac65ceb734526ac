use std::path::PathBuf;

use food_core::{BuildProfile, DatabaseStats, MergeSummary, SourceReport};

/// Outcome of a `migrate` or `generate` run.
#[derive(Debug)]
pub struct RunResult {
    pub profile: BuildProfile,
    pub database_path: PathBuf,
    pub sources: Vec<SourceReport>,
    pub merge: MergeSummary,
    pub stats: DatabaseStats,
    /// `None` on a dry run.
    pub bytes_written: Option<u64>,
    pub has_errors: bool,
}
