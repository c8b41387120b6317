//! BMI band table and cohort aggregation rows.
//!
//! A band table is a list of interior breakpoints plus one label per
//! resulting interval. Intervals are left-closed: a value equal to a
//! breakpoint belongs to the band above it. The label count is checked
//! against the breakpoint count when the table is built, so a table that
//! would mislabel its intervals cannot exist.

use serde::{Deserialize, Serialize};

use crate::error::BandError;

/// Interior breakpoints of the standard adult BMI classification.
pub const STANDARD_BMI_BREAKPOINTS: [f64; 3] = [18.5, 25.0, 30.0];

/// Labels of the standard adult BMI classification, lowest band first.
pub const STANDARD_BMI_LABELS: [&str; 4] = ["Underweight", "Normal", "Overweight", "Obese"];

/// Ordered, contiguous BMI bands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BandTable", into = "BandTable")]
pub struct BmiBands {
    breakpoints: Vec<f64>,
    labels: Vec<String>,
}

/// Unchecked wire form of [`BmiBands`].
#[derive(Serialize, Deserialize)]
struct BandTable {
    breakpoints: Vec<f64>,
    labels: Vec<String>,
}

impl TryFrom<BandTable> for BmiBands {
    type Error = BandError;

    fn try_from(table: BandTable) -> Result<Self, Self::Error> {
        Self::new(table.breakpoints, table.labels)
    }
}

impl From<BmiBands> for BandTable {
    fn from(bands: BmiBands) -> Self {
        Self {
            breakpoints: bands.breakpoints,
            labels: bands.labels,
        }
    }
}

/// One interval of a band table.
#[derive(Debug, Clone, PartialEq)]
pub struct BmiBand<'a> {
    pub label: &'a str,
    /// Inclusive lower bound; `None` for the lowest band.
    pub lower: Option<f64>,
    /// Exclusive upper bound; `None` for the highest band.
    pub upper: Option<f64>,
}

impl BmiBand<'_> {
    /// Interval notation, e.g. `[18.5, 25)`.
    pub fn range_text(&self) -> String {
        match (self.lower, self.upper) {
            (None, Some(upper)) => format!("< {upper}"),
            (Some(lower), None) => format!(">= {lower}"),
            (Some(lower), Some(upper)) => format!("[{lower}, {upper})"),
            (None, None) => "all".to_string(),
        }
    }
}

impl BmiBands {
    /// Builds a band table, requiring `labels.len() == breakpoints.len() + 1`.
    pub fn new<S: Into<String>>(
        breakpoints: Vec<f64>,
        labels: impl IntoIterator<Item = S>,
    ) -> Result<Self, BandError> {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        let expected = breakpoints.len() + 1;
        if labels.len() != expected {
            return Err(BandError::LabelCount {
                breakpoints: breakpoints.len(),
                expected,
                actual: labels.len(),
            });
        }
        for (index, value) in breakpoints.iter().enumerate() {
            if !value.is_finite() || (index > 0 && *value <= breakpoints[index - 1]) {
                return Err(BandError::UnorderedBreakpoints { index });
            }
        }
        Ok(Self {
            breakpoints,
            labels,
        })
    }

    /// Underweight / Normal / Overweight / Obese at 18.5, 25 and 30.
    pub fn standard() -> Self {
        Self {
            breakpoints: STANDARD_BMI_BREAKPOINTS.to_vec(),
            labels: STANDARD_BMI_LABELS.iter().map(ToString::to_string).collect(),
        }
    }

    pub fn breakpoints(&self) -> &[f64] {
        &self.breakpoints
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Index of the band containing `value`.
    pub fn index_of(&self, value: f64) -> usize {
        self.breakpoints.partition_point(|breakpoint| *breakpoint <= value)
    }

    /// Label of the band containing `value`.
    pub fn classify(&self, value: f64) -> &str {
        &self.labels[self.index_of(value)]
    }

    /// Position of `label` in band order.
    pub fn position(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|candidate| candidate == label)
    }

    pub fn bands(&self) -> impl Iterator<Item = BmiBand<'_>> {
        self.labels.iter().enumerate().map(|(index, label)| BmiBand {
            label,
            lower: index.checked_sub(1).map(|prev| self.breakpoints[prev]),
            upper: self.breakpoints.get(index).copied(),
        })
    }
}

impl Default for BmiBands {
    fn default() -> Self {
        Self::standard()
    }
}

/// Aggregate statistics for one BMI band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CohortRow {
    pub bmi_range: String,
    pub avg_glucose: f64,
    pub patient_count: u64,
    pub avg_age: f64,
}

/// Result of a cohort analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CohortSummary {
    /// One row per non-empty band, in band order.
    pub rows: Vec<CohortRow>,
    /// Rows in the source table.
    pub source_rows: usize,
    /// Rows dropped for a missing or non-numeric required value.
    pub dropped_invalid: usize,
    /// Rows dropped for a BMI outside the plausible range.
    pub dropped_out_of_range: usize,
}

impl CohortSummary {
    /// Number of rows that reached aggregation.
    pub fn analyzed_rows(&self) -> u64 {
        self.rows.iter().map(|row| row.patient_count).sum()
    }
}
