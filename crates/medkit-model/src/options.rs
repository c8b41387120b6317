//! Configuration options for the cleaning and cohort pipelines.

use serde::{Deserialize, Serialize};

use crate::cohort::BmiBands;

/// Minimum age kept by the patient cleaner.
pub const ADULT_AGE: u32 = 18;

/// Lowest BMI treated as plausible.
pub const DEFAULT_MIN_BMI: f64 = 10.0;

/// Highest BMI treated as plausible.
pub const DEFAULT_MAX_BMI: f64 = 60.0;

/// Options for the patient cleaner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleaningOptions {
    /// Records with a coerced age below this are dropped.
    pub min_age: u32,
}

impl Default for CleaningOptions {
    fn default() -> Self {
        Self { min_age: ADULT_AGE }
    }
}

impl CleaningOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min_age(mut self, min_age: u32) -> Self {
        self.min_age = min_age;
        self
    }
}

/// Options for the cohort analyzer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CohortOptions {
    /// Inclusive lower bound of the plausible BMI range.
    pub min_bmi: f64,
    /// Inclusive upper bound of the plausible BMI range.
    pub max_bmi: f64,
    /// Band table used to label each row.
    pub bands: BmiBands,
}

impl Default for CohortOptions {
    fn default() -> Self {
        Self {
            min_bmi: DEFAULT_MIN_BMI,
            max_bmi: DEFAULT_MAX_BMI,
            bands: BmiBands::standard(),
        }
    }
}

impl CohortOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bmi_range(mut self, min_bmi: f64, max_bmi: f64) -> Self {
        self.min_bmi = min_bmi;
        self.max_bmi = max_bmi;
        self
    }

    pub fn with_bands(mut self, bands: BmiBands) -> Self {
        self.bands = bands;
        self
    }
}
