//! Patient record cleaning.
//!
//! Cleaning never fails on a bad record: names are title-cased, ages are
//! coerced (anything unparseable becomes 0), minors are dropped, and exact
//! duplicates are removed keeping the first occurrence.

use std::collections::HashSet;

use medkit_model::{CleanedPatient, CleaningOptions, RawPatient, RunOutcome};
use serde_json::Value;
use tracing::{debug, info};

/// Capitalizes the first letter of each whitespace-separated word and
/// lowercases the rest. Non-alphabetic characters and whitespace are kept.
pub fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut seen_letter = false;
    for ch in name.chars() {
        if ch.is_whitespace() {
            seen_letter = false;
            out.push(ch);
        } else if !ch.is_alphabetic() {
            out.push(ch);
        } else if seen_letter {
            out.extend(ch.to_lowercase());
        } else {
            // Multi-char expansions (ß -> SS) keep only their first char upper.
            let mut upper = ch.to_uppercase();
            out.extend(upper.next());
            out.extend(upper.flat_map(char::to_lowercase));
            seen_letter = true;
        }
    }
    out
}

/// Coerces a raw age to a non-negative integer, falling back to 0.
///
/// Integers are taken as is, floats are truncated and strings must parse
/// as an integer after trimming. Negative values clamp to 0.
pub fn coerce_age(value: Option<&Value>) -> u32 {
    let parsed = match value {
        Some(Value::Number(number)) => number
            .as_i64()
            .or_else(|| number.as_u64().map(|v| i64::try_from(v).unwrap_or(i64::MAX)))
            .or_else(|| {
                number
                    .as_f64()
                    .filter(|v| v.is_finite())
                    .map(|v| v.trunc() as i64)
            }),
        Some(Value::String(text)) => text.trim().parse::<i64>().ok(),
        _ => None,
    };
    parsed.map_or(0, |age| u32::try_from(age.max(0)).unwrap_or(u32::MAX))
}

/// Normalizes one record without filtering it.
pub fn clean_patient(raw: RawPatient) -> CleanedPatient {
    CleanedPatient {
        name: title_case(raw.name.as_deref().unwrap_or_default()),
        age: coerce_age(raw.age.as_ref()),
        gender: raw.gender,
        diagnosis: raw.diagnosis,
    }
}

/// Drops records equal in every field to an earlier record.
pub fn dedupe_records(records: Vec<CleanedPatient>) -> Vec<CleanedPatient> {
    let mut seen = HashSet::with_capacity(records.len());
    records
        .into_iter()
        .filter(|record| seen.insert(record.clone()))
        .collect()
}

/// Runs the full cleaning pipeline.
///
/// Returns [`RunOutcome::NoData`] when the input is empty or no record
/// survives filtering.
pub fn clean_patients(
    raw: Vec<RawPatient>,
    options: &CleaningOptions,
) -> RunOutcome<Vec<CleanedPatient>> {
    let input = raw.len();
    let adults: Vec<CleanedPatient> = raw
        .into_iter()
        .map(clean_patient)
        .filter(|patient| patient.age >= options.min_age)
        .collect();
    let filtered = input - adults.len();
    let cleaned = dedupe_records(adults);
    let duplicates = input - filtered - cleaned.len();
    debug!(min_age = options.min_age, filtered, duplicates, "cleaning rules applied");
    info!(input, output = cleaned.len(), "patient cleaning complete");

    if cleaned.is_empty() {
        RunOutcome::NoData
    } else {
        RunOutcome::Produced(cleaned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn title_case_words() {
        assert_eq!(title_case("john smith"), "John Smith");
        assert_eq!(title_case("JANE  DOE"), "Jane  Doe");
        assert_eq!(title_case("o'neil mcdonald-jones"), "O'neil Mcdonald-jones");
        assert_eq!(title_case("  leading"), "  Leading");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn title_case_multi_char_uppercase() {
        assert_eq!(title_case("ßmith"), "Ssmith");
        assert_eq!(title_case("Ssmith"), "Ssmith");
        assert_eq!(title_case("élodie ØSTBY"), "Élodie Østby");
    }

    #[test]
    fn title_case_skips_leading_punctuation() {
        assert_eq!(title_case("(john) 3rd"), "(John) 3Rd");
    }

    #[test]
    fn coerce_age_forms() {
        assert_eq!(coerce_age(Some(&json!("32"))), 32);
        assert_eq!(coerce_age(Some(&json!(" 45 "))), 45);
        assert_eq!(coerce_age(Some(&json!(40))), 40);
        assert_eq!(coerce_age(Some(&json!(40.9))), 40);
        assert_eq!(coerce_age(Some(&json!("forty"))), 0);
        assert_eq!(coerce_age(Some(&json!("32.5"))), 0);
        assert_eq!(coerce_age(Some(&json!(-3))), 0);
        assert_eq!(coerce_age(Some(&json!(true))), 0);
        assert_eq!(coerce_age(Some(&Value::Null)), 0);
        assert_eq!(coerce_age(None), 0);
    }

    #[test]
    fn clean_patient_preserves_other_fields() {
        let raw = RawPatient {
            name: Some("john smith".to_string()),
            age: Some(json!("32")),
            gender: Some("male".to_string()),
            diagnosis: Some("flu".to_string()),
        };
        let cleaned = clean_patient(raw);
        assert_eq!(
            cleaned,
            CleanedPatient {
                name: "John Smith".to_string(),
                age: 32,
                gender: Some("male".to_string()),
                diagnosis: Some("flu".to_string()),
            }
        );
    }
}
