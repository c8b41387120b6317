//! CSV ingestion.

mod reader;

pub use reader::{read_csv_table, validate_column_names};
