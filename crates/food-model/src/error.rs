use thiserror::Error;

/// Failure to read a model value from its textual form.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown category: {0}")]
    UnknownCategory(String),
    #[error("unknown source kind: {0}")]
    UnknownSourceKind(String),
}
