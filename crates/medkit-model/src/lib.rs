pub mod cohort;
pub mod dosage;
pub mod error;
pub mod lenient;
pub mod options;
pub mod outcome;
pub mod patient;

pub use cohort::{
    BmiBand, BmiBands, CohortRow, CohortSummary, STANDARD_BMI_BREAKPOINTS, STANDARD_BMI_LABELS,
};
pub use dosage::{DosageBatch, DosageRequest, DosageResult, LOADING_DOSE_MULTIPLIER, Medication};
pub use error::{BandError, ParseMedicationError};
pub use lenient::FieldValue;
pub use options::{
    ADULT_AGE, CleaningOptions, CohortOptions, DEFAULT_MAX_BMI, DEFAULT_MIN_BMI,
};
pub use outcome::RunOutcome;
pub use patient::{CleanedPatient, RawPatient};
