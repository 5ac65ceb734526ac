//! CSV file reading into untyped row maps.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use food_model::Row;
use tracing::{debug, warn};

use crate::error::{IngestError, Result};

/// Rows read from one CSV source.
#[derive(Debug, Clone, Default)]
pub struct CsvTable {
    /// Header names, trimmed and BOM-stripped, in file order.
    pub headers: Vec<String>,
    /// One map per readable record.
    pub rows: Vec<Row>,
    /// Records the CSV parser rejected (bad quoting, invalid UTF-8).
    pub skipped_records: usize,
}

impl CsvTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Reads a CSV file with a single header row.
///
/// Ragged rows are accepted: missing trailing cells are simply absent from
/// the row map. Records the parser cannot decode are skipped and counted.
pub fn read_csv_rows(path: &Path) -> Result<CsvTable> {
    let file = File::open(path).map_err(|e| IngestError::read(path, e))?;
    read_csv_reader(file, path)
}

/// Reads CSV data from any reader; `path` is used for error reporting.
pub fn read_csv_reader<R: Read>(reader: R, path: &Path) -> Result<CsvTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|source| IngestError::CsvParse {
            path: path.to_path_buf(),
            source,
        })?
        .iter()
        .map(normalize_header)
        .collect();

    if headers.iter().all(String::is_empty) {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    let mut table = CsvTable {
        headers,
        ..CsvTable::default()
    };

    for (index, record) in reader.records().enumerate() {
        let record = match record {
            Ok(record) => record,
            Err(error) => {
                warn!(
                    path = %path.display(),
                    record = index + 1,
                    %error,
                    "skipping unreadable CSV record"
                );
                table.skipped_records += 1;
                continue;
            }
        };
        let mut row = Row::new();
        for (header, value) in table.headers.iter().zip(record.iter()) {
            if header.is_empty() {
                continue;
            }
            row.entry(header.clone())
                .or_insert_with(|| value.trim().to_string());
        }
        table.rows.push(row);
    }

    debug!(
        path = %path.display(),
        columns = table.headers.len(),
        rows = table.rows.len(),
        skipped = table.skipped_records,
        "read CSV source"
    );
    Ok(table)
}

/// Trims whitespace and a leading byte-order mark.
fn normalize_header(value: &str) -> String {
    value.trim_start_matches('\u{feff}').trim().to_string()
}
