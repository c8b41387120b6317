//! CSV file reading into Polars.

use std::path::Path;

use polars::prelude::*;

use crate::error::{IngestError, Result};

/// Rows sampled when inferring column types.
const INFER_SCHEMA_ROWS: usize = 100;

/// Fails with [`IngestError::FileNotFound`] before any parsing is attempted.
fn check_readable(path: &Path) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| IngestError::from_io(path, e))?;
    if metadata.is_dir() {
        return Err(IngestError::FileRead {
            path: path.to_path_buf(),
            source: std::io::Error::other("path is a directory"),
        });
    }
    Ok(())
}

/// Rejects tables with blank header cells.
pub fn validate_column_names(df: &DataFrame, path: &Path) -> Result<()> {
    for name in df.get_column_names() {
        if name.trim().is_empty() {
            return Err(IngestError::EmptyColumnName {
                path: path.to_path_buf(),
            });
        }
    }
    Ok(())
}

/// Reads a CSV file with a single header row into a `DataFrame`.
///
/// Column types are inferred; callers cast the columns they need.
pub fn read_csv_table(path: &Path) -> Result<DataFrame> {
    check_readable(path)?;

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(INFER_SCHEMA_ROWS))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    validate_column_names(&df, path)?;

    tracing::debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "loaded CSV table"
    );
    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_read_csv_table_single_header() {
        let file = create_temp_csv("BMI,Age,Glucose\n22.5,40,90\n31.0,55,120\n");
        let df = read_csv_table(file.path()).unwrap();

        assert_eq!(df.height(), 2);
        assert_eq!(df.width(), 3);
        assert_eq!(
            df.get_column_names()
                .iter()
                .map(|name| name.as_str())
                .collect::<Vec<_>>(),
            vec!["BMI", "Age", "Glucose"]
        );
    }

    #[test]
    fn test_read_csv_table_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_csv_table(&dir.path().join("patients_large.csv"));

        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }

    #[test]
    fn test_read_csv_table_directory() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_csv_table(dir.path());

        assert!(matches!(result, Err(IngestError::FileRead { .. })));
    }

    #[test]
    fn test_read_csv_table_header_only() {
        let file = create_temp_csv("BMI,Age,Glucose\n");
        let df = read_csv_table(file.path()).unwrap();

        assert_eq!(df.height(), 0);
        assert_eq!(df.width(), 3);
    }
}
