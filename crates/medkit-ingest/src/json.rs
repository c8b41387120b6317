//! JSON record files.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{IngestError, Result};

/// Loads a JSON array of records from `path`.
///
/// An empty array is returned as an empty `Vec`; deciding whether that is
/// "no data" is left to the pipeline.
pub fn load_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let file = File::open(path).map_err(|e| IngestError::from_io(path, e))?;
    let records: Vec<T> =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| IngestError::JsonParse {
            path: path.to_path_buf(),
            source,
        })?;
    debug!(path = %path.display(), records = records.len(), "loaded record file");
    Ok(records)
}
