//! Medication table and dosage record types.
//!
//! Dosing factors are expressed in mg per kg of body weight. The factor
//! table, the loading-dose set and the advisory warnings are all constant
//! data on [`Medication`], so lookups never allocate or recompute.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseMedicationError;
use crate::lenient::{self, FieldValue};

/// Multiplier applied to the base dosage when a loading dose is given.
pub const LOADING_DOSE_MULTIPLIER: f64 = 2.0;

/// Medications with a known weight-based dosing factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Medication {
    Epinephrine,
    Amiodarone,
    Lorazepam,
    Fentanyl,
    Lisinopril,
    Metformin,
    Oseltamivir,
    Sumatriptan,
    Albuterol,
    Ibuprofen,
    Sertraline,
    Levothyroxine,
}

impl Medication {
    pub const ALL: [Medication; 12] = [
        Medication::Epinephrine,
        Medication::Amiodarone,
        Medication::Lorazepam,
        Medication::Fentanyl,
        Medication::Lisinopril,
        Medication::Metformin,
        Medication::Oseltamivir,
        Medication::Sumatriptan,
        Medication::Albuterol,
        Medication::Ibuprofen,
        Medication::Sertraline,
        Medication::Levothyroxine,
    ];

    /// Lookup key as it appears in input records.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Epinephrine => "epinephrine",
            Self::Amiodarone => "amiodarone",
            Self::Lorazepam => "lorazepam",
            Self::Fentanyl => "fentanyl",
            Self::Lisinopril => "lisinopril",
            Self::Metformin => "metformin",
            Self::Oseltamivir => "oseltamivir",
            Self::Sumatriptan => "sumatriptan",
            Self::Albuterol => "albuterol",
            Self::Ibuprofen => "ibuprofen",
            Self::Sertraline => "sertraline",
            Self::Levothyroxine => "levothyroxine",
        }
    }

    /// Dosing factor in mg/kg.
    pub const fn factor_mg_per_kg(self) -> f64 {
        match self {
            Self::Epinephrine => 0.01,
            Self::Amiodarone => 5.00,
            Self::Lorazepam => 0.05,
            Self::Fentanyl => 0.001,
            Self::Lisinopril => 0.5,
            Self::Metformin => 10.0,
            Self::Oseltamivir => 2.5,
            Self::Sumatriptan => 1.0,
            Self::Albuterol => 0.1,
            Self::Ibuprofen => 5.0,
            Self::Sertraline => 1.5,
            Self::Levothyroxine => 0.02,
        }
    }

    pub const fn indication(self) -> &'static str {
        match self {
            Self::Epinephrine => "Anaphylaxis",
            Self::Amiodarone => "Cardiac arrest",
            Self::Lorazepam => "Seizures",
            Self::Fentanyl => "Pain",
            Self::Lisinopril => "Blood pressure",
            Self::Metformin => "Diabetes",
            Self::Oseltamivir => "Influenza",
            Self::Sumatriptan => "Migraine",
            Self::Albuterol => "Asthma",
            Self::Ibuprofen => "Pain/inflammation",
            Self::Sertraline => "Depression",
            Self::Levothyroxine => "Thyroid",
        }
    }

    /// Whether the first administration of this medication is a loading dose.
    pub const fn uses_loading_dose(self) -> bool {
        matches!(self, Self::Amiodarone | Self::Lorazepam | Self::Fentanyl)
    }

    /// Advisory attached to every dosage of this medication.
    pub const fn warning(self) -> Option<&'static str> {
        match self {
            Self::Epinephrine => Some("Monitor for arrhythmias"),
            Self::Amiodarone => Some("Monitor for hypotension"),
            Self::Fentanyl => Some("Monitor for respiratory depression"),
            _ => None,
        }
    }
}

impl FromStr for Medication {
    type Err = ParseMedicationError;

    /// Exact, case-sensitive match against [`Medication::key`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|medication| medication.key() == s)
            .ok_or_else(|| ParseMedicationError(s.to_string()))
    }
}

impl fmt::Display for Medication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A patient-medication record as read from the source file.
///
/// The rule fields are optional and keep mistyped values, so a missing or
/// malformed value surfaces as a rule failure naming the field rather than
/// as a parse error for the file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DosageRequest {
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(default)]
    pub weight: Option<FieldValue<f64>>,
    #[serde(default)]
    pub medication: Option<FieldValue<String>>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub condition: Option<String>,
    #[serde(default)]
    pub is_first_dose: Option<FieldValue<bool>>,
    #[serde(default, deserialize_with = "lenient::text_list")]
    pub allergies: Vec<String>,
}

/// A request augmented with the computed dosage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DosageResult {
    pub name: Option<String>,
    /// Body weight in kg.
    pub weight: f64,
    pub medication: Medication,
    pub condition: Option<String>,
    pub is_first_dose: bool,
    pub allergies: Vec<String>,
    /// `weight × factor`, in mg.
    pub base_dosage: f64,
    pub loading_dose_applied: bool,
    /// Dose to administer, in mg.
    pub final_dosage: f64,
    pub warnings: Vec<String>,
}

/// Every record of a batch with the summed final dosage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DosageBatch {
    pub results: Vec<DosageResult>,
    /// Sum of `final_dosage` across `results`, in mg.
    pub total_medication: f64,
}
