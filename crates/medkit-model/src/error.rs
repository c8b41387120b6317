use thiserror::Error;

/// Errors raised while constructing a BMI band table.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BandError {
    #[error("band table needs {expected} labels for {breakpoints} breakpoints, got {actual}")]
    LabelCount {
        breakpoints: usize,
        expected: usize,
        actual: usize,
    },
    #[error("breakpoints must be finite and strictly ascending (index {index})")]
    UnorderedBreakpoints { index: usize },
}

/// A medication name that is not in the dosing factor table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown medication '{0}'")]
pub struct ParseMedicationError(pub String);
