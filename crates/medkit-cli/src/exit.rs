//! Process exit codes.
//!
//! Load, schema and rule failures each get their own code so a calling
//! script can tell them apart. A run that produced no records exits with
//! [`SUCCESS`]; clap reserves `2` for usage errors.

use medkit_ingest::IngestError;
use medkit_transform::{CohortError, DosageError};

/// Run completed, with or without resulting records.
pub const SUCCESS: i32 = 0;

/// Category of a failed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Input file missing, unreadable or unparseable.
    Load,
    /// Required columns absent.
    Schema,
    /// A record could not be evaluated.
    Rule,
    /// Anything else (invalid options, output errors).
    Other,
}

impl FailureKind {
    /// Classifies an error by the first typed cause in its chain.
    pub fn classify(error: &anyhow::Error) -> Self {
        for cause in error.chain() {
            if let Some(err) = cause.downcast_ref::<CohortError>() {
                return match err {
                    CohortError::MissingColumns { .. } => Self::Schema,
                    CohortError::Ingest(_) => Self::Load,
                    CohortError::InvalidRange { .. } | CohortError::DataFrame(_) => Self::Other,
                };
            }
            if cause.downcast_ref::<DosageError>().is_some() {
                return Self::Rule;
            }
            if cause.downcast_ref::<IngestError>().is_some() {
                return Self::Load;
            }
        }
        Self::Other
    }

    pub const fn exit_code(self) -> i32 {
        match self {
            Self::Other => 1,
            Self::Load => 3,
            Self::Schema => 4,
            Self::Rule => 5,
        }
    }
}
