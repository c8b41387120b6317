//! Patient records before and after cleaning.

use serde::{Deserialize, Serialize};

use crate::lenient;

/// A patient record as read from the source file.
///
/// `age` is kept as raw JSON so that string, numeric, null and missing
/// forms can all be coerced by the cleaner instead of failing the load.
/// Text fields accept any JSON value; non-strings are rendered as text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawPatient {
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(default)]
    pub age: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub gender: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub diagnosis: Option<String>,
}

/// A patient record after normalization, coercion and filtering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CleanedPatient {
    /// Title-cased name.
    pub name: String,
    pub age: u32,
    pub gender: Option<String>,
    pub diagnosis: Option<String>,
}
