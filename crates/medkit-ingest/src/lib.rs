//! Loading of medkit input files.
//!
//! - **json**: arrays of records (patient and dosage files)
//! - **csv**: tabular input read into a Polars `DataFrame`
//! - **snapshot**: Parquet snapshot of a loaded table

pub mod csv;
pub mod error;
pub mod json;
pub mod snapshot;

pub use csv::{read_csv_table, validate_column_names};
pub use error::{IngestError, Result};
pub use json::load_records;
pub use snapshot::{read_snapshot, write_snapshot};
