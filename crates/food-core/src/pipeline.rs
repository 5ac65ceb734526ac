//! Source-by-source build and the final document merge.
//!
//! Each source is isolated: a source that cannot be read is recorded in its
//! report and the remaining sources still run.

use std::path::PathBuf;

use chrono::NaiveDate;
use food_ingest::{DatabaseDocument, IngestError, SourceEntry, StoredFood, read_csv_rows};
use food_model::{FoodRecord, Row, SourceKind};
use tracing::{debug, error, info, info_span, warn};

use crate::builder::{RowOutcome, SkipReason, build_record};
use crate::context::BuildContext;
use crate::merge::merge_records;

/// Progress is logged every this many built records per source.
pub const PROGRESS_INTERVAL: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SourceStatus {
    #[default]
    Processed,
    /// The file does not exist; not an error.
    Missing,
    /// The file exists but could not be read.
    Failed(String),
}

/// What happened to one source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceReport {
    pub kind: SourceKind,
    pub path: PathBuf,
    pub status: SourceStatus,
    pub rows_read: usize,
    /// Records the CSV parser rejected.
    pub unreadable: usize,
    pub built: usize,
    pub duplicates: usize,
    pub unnamed: usize,
    pub missing_calories: usize,
}

impl SourceReport {
    pub fn new(kind: SourceKind, path: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            path: path.into(),
            status: SourceStatus::Processed,
            rows_read: 0,
            unreadable: 0,
            built: 0,
            duplicates: 0,
            unnamed: 0,
            missing_calories: 0,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.status, SourceStatus::Failed(_))
    }

    fn count_skip(&mut self, reason: SkipReason) {
        match reason {
            SkipReason::MissingName => self.unnamed += 1,
            SkipReason::Duplicate => self.duplicates += 1,
            SkipReason::MissingCalories => self.missing_calories += 1,
        }
    }
}

/// Records built across all sources, in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BuildOutput {
    pub records: Vec<FoodRecord>,
    pub sources: Vec<SourceReport>,
}

impl BuildOutput {
    pub fn has_failures(&self) -> bool {
        self.sources.iter().any(SourceReport::is_failed)
    }
}

/// Builds records from already-read rows.
pub fn build_rows(
    rows: &[Row],
    kind: SourceKind,
    ctx: &mut BuildContext,
    report: &mut SourceReport,
) -> Vec<FoodRecord> {
    let mut records = Vec::new();
    for row in rows {
        report.rows_read += 1;
        match build_record(row, kind, ctx) {
            RowOutcome::Built(record) => {
                records.push(*record);
                report.built += 1;
                if report.built % PROGRESS_INTERVAL == 0 {
                    info!(source = %kind, built = report.built, "processing");
                }
            }
            RowOutcome::Skipped(reason) => report.count_skip(reason),
        }
    }
    records
}

/// Reads and builds one source.
pub fn build_source(entry: &SourceEntry, ctx: &mut BuildContext) -> (Vec<FoodRecord>, SourceReport) {
    let span = info_span!("source", kind = %entry.kind.as_str(), path = %entry.path.display());
    let _guard = span.enter();

    let mut report = SourceReport::new(entry.kind, &entry.path);
    let table = match read_csv_rows(&entry.path) {
        Ok(table) => table,
        Err(IngestError::FileNotFound { .. }) => {
            warn!("source file not found, skipping");
            report.status = SourceStatus::Missing;
            return (Vec::new(), report);
        }
        Err(err) => {
            error!(error = %err, "source could not be read");
            report.status = SourceStatus::Failed(err.to_string());
            return (Vec::new(), report);
        }
    };

    ctx.begin_source(entry.id_offset);
    report.unreadable = table.skipped_records;
    let records = build_rows(&table.rows, entry.kind, ctx, &mut report);
    info!(
        rows = report.rows_read,
        built = report.built,
        duplicates = report.duplicates,
        unnamed = report.unnamed,
        "source complete"
    );
    (records, report)
}

/// Builds every source in order with one shared context.
pub fn build_sources(entries: &[SourceEntry], ctx: &mut BuildContext) -> BuildOutput {
    let mut output = BuildOutput::default();
    for entry in entries {
        let (records, report) = build_source(entry, ctx);
        output.records.extend(records);
        output.sources.push(report);
    }
    debug!(
        sources = output.sources.len(),
        records = output.records.len(),
        profile = %ctx.profile(),
        "build finished"
    );
    output
}

/// Counts from folding new records into a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MergeSummary {
    pub existing: usize,
    pub added: usize,
    pub skipped_duplicates: usize,
    pub total: usize,
}

/// Appends `records` to the document's foods, skipping names it already
/// holds, and refreshes `totalFoods` and `lastUpdated`.
pub fn merge_into_document(
    document: &mut DatabaseDocument,
    records: &[FoodRecord],
    updated_on: NaiveDate,
) -> Result<MergeSummary, IngestError> {
    let new = records
        .iter()
        .map(StoredFood::from_record)
        .collect::<Result<Vec<_>, _>>()?;
    let existing = document.foods().to_vec();
    let existing_count = existing.len();

    let outcome = merge_records(existing, new);
    let summary = MergeSummary {
        existing: existing_count,
        added: outcome.records.len() - existing_count,
        skipped_duplicates: outcome.skipped_duplicates,
        total: outcome.records.len(),
    };
    document.replace_foods(outcome.records, updated_on);
    info!(
        existing = summary.existing,
        added = summary.added,
        total = summary.total,
        "merged into database"
    );
    Ok(summary)
}
