//! Parquet snapshots of loaded tables.
//!
//! A snapshot lets a large CSV be parsed once and re-scanned cheaply.

use std::fs::File;
use std::path::Path;

use polars::prelude::{DataFrame, ParquetReader, ParquetWriter, SerReader};
use tracing::info;

use crate::error::{IngestError, Result};

/// Writes `df` to `path` as Parquet, replacing any existing file.
pub fn write_snapshot(df: &mut DataFrame, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| IngestError::from_io(path, e))?;
    let bytes = ParquetWriter::new(file)
        .finish(df)
        .map_err(|e| IngestError::Snapshot {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    info!(path = %path.display(), rows = df.height(), bytes, "wrote snapshot");
    Ok(())
}

/// Reads a snapshot written by [`write_snapshot`].
pub fn read_snapshot(path: &Path) -> Result<DataFrame> {
    let file = File::open(path).map_err(|e| IngestError::from_io(path, e))?;
    ParquetReader::new(file)
        .finish()
        .map_err(|e| IngestError::Snapshot {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}
