//! Error types for food data ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading sources or the database document.
///
/// Row-level problems never surface here; they are skipped and counted.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write file.
    #[error("failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Parsing Errors ===
    /// CSV header could not be read.
    #[error("failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// CSV file has no header row.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    // === Database Document Errors ===
    /// Database document is not valid JSON.
    #[error("failed to parse database {path}: {source}")]
    DatabaseParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Database JSON has neither a `foodDatabase` object nor a `foods` array.
    #[error("unrecognized database layout in {path}: {reason}")]
    DatabaseLayout { path: PathBuf, reason: String },

    /// Failed to serialize the database document.
    #[error("failed to serialize database: {source}")]
    DatabaseSerialize {
        #[source]
        source: serde_json::Error,
    },

    // === Manifest Errors ===
    /// Source manifest is not valid TOML for the expected schema.
    #[error("failed to parse manifest {path}: {source}")]
    Manifest {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Manifest parsed but is unusable.
    #[error("invalid manifest {path}: {reason}")]
    InvalidManifest { path: PathBuf, reason: String },
}

impl IngestError {
    /// Maps an I/O error on `path` to `FileNotFound` or `FileRead`.
    pub(crate) fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound { path }
        } else {
            Self::FileRead { path, source }
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileWrite {
            path: path.into(),
            source,
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
