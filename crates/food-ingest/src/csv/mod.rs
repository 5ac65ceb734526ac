//! CSV reading utilities.

mod reader;

pub use reader::{CsvTable, read_csv_reader, read_csv_rows};
