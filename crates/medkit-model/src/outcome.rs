//! Explicit success outcome for pipeline runs.
//!
//! A run that loads and evaluates cleanly but yields nothing is reported as
//! [`RunOutcome::NoData`], never as an error and never as an empty payload
//! that a caller could mistake for a failed load.

/// Successful result of one pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome<T> {
    /// The pipeline produced at least one record.
    Produced(T),
    /// Input was empty or every record was filtered out.
    NoData,
}

impl<T> RunOutcome<T> {
    pub fn is_no_data(&self) -> bool {
        matches!(self, Self::NoData)
    }

    /// Returns the payload, or `None` for [`RunOutcome::NoData`].
    pub fn produced(self) -> Option<T> {
        match self {
            Self::Produced(value) => Some(value),
            Self::NoData => None,
        }
    }

    pub fn as_ref(&self) -> RunOutcome<&T> {
        match self {
            Self::Produced(value) => RunOutcome::Produced(value),
            Self::NoData => RunOutcome::NoData,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> RunOutcome<U> {
        match self {
            Self::Produced(value) => RunOutcome::Produced(f(value)),
            Self::NoData => RunOutcome::NoData,
        }
    }
}
