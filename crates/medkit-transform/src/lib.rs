//! medkit transformation pipelines.
//!
//! - **cleaning**: patient name normalization, age coercion, filtering and deduplication
//! - **dosage**: weight-based dosage rules with loading doses and warnings
//! - **cohort**: schema validation, BMI range filtering, binning and aggregation

pub mod cleaning;
pub mod cohort;
pub mod dosage;
pub mod error;

pub use cleaning::{clean_patient, clean_patients, coerce_age, dedupe_records, title_case};
pub use cohort::{
    REQUIRED_COLUMNS, analyze_cohort_file, analyze_cohorts, assign_bmi_ranges, validate_schema,
};
pub use dosage::{calculate_all_dosages, calculate_dosage};
pub use error::{CohortError, DosageError};
