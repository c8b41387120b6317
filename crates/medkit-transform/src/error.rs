//! Error types for the dosage and cohort pipelines.

use medkit_ingest::IngestError;
use medkit_model::ParseMedicationError;
use polars::prelude::PolarsError;
use thiserror::Error;

/// A dosage record that cannot be evaluated.
#[derive(Debug, Error)]
pub enum DosageError {
    #[error("missing required field '{field}'")]
    MissingField { field: &'static str },

    /// A rule field is present but has the wrong JSON type.
    #[error("invalid value for '{field}': {value}")]
    InvalidField { field: &'static str, value: String },

    #[error(transparent)]
    UnknownMedication(#[from] ParseMedicationError),

    #[error("weight must be a positive number of kg, got {weight}")]
    InvalidWeight { weight: f64 },

    /// Failure of one record inside a batch.
    #[error("record {index}: {source}")]
    Record {
        index: usize,
        source: Box<DosageError>,
    },
}

impl DosageError {
    /// The record-level failure, unwrapping a batch [`DosageError::Record`].
    pub fn root(&self) -> &DosageError {
        match self {
            Self::Record { source, .. } => source.root(),
            other => other,
        }
    }
}

/// Failures of the cohort analyzer.
#[derive(Debug, Error)]
pub enum CohortError {
    /// Required columns are absent from the input table.
    #[error("missing required columns: {}", .missing.join(", "))]
    MissingColumns { missing: Vec<String> },

    #[error("invalid BMI range: min {min} must not exceed max {max}")]
    InvalidRange { min: f64, max: f64 },

    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error("DataFrame operation failed: {0}")]
    DataFrame(#[from] PolarsError),
}
