//! Weight-based dosage calculation.
//!
//! `base_dosage = weight × factor` and, for the first administration of a
//! loading-dose medication, `final_dosage = base_dosage × 2`. A record with
//! a missing or mistyped rule field or an unknown medication is rejected; a batch stops
//! at the first rejected record so the total is never computed over a
//! partial set.

use medkit_model::{
    DosageBatch, DosageRequest, DosageResult, FieldValue, LOADING_DOSE_MULTIPLIER, Medication,
    RunOutcome,
};
use tracing::{debug, info, warn};

use crate::error::DosageError;

fn required<'a, T>(
    value: &'a Option<FieldValue<T>>,
    field: &'static str,
) -> Result<&'a T, DosageError> {
    match value {
        None => Err(DosageError::MissingField { field }),
        Some(FieldValue::Valid(value)) => Ok(value),
        Some(FieldValue::Invalid(raw)) => Err(DosageError::InvalidField {
            field,
            value: raw.to_string(),
        }),
    }
}

/// Evaluates the dosage rules for one record.
pub fn calculate_dosage(request: &DosageRequest) -> Result<DosageResult, DosageError> {
    let weight = *required(&request.weight, "weight")?;
    let medication: Medication = required(&request.medication, "medication")?.parse()?;
    let is_first_dose = *required(&request.is_first_dose, "is_first_dose")?;
    if !weight.is_finite() || weight <= 0.0 {
        return Err(DosageError::InvalidWeight { weight });
    }

    let base_dosage = weight * medication.factor_mg_per_kg();
    let loading_dose_applied = is_first_dose && medication.uses_loading_dose();
    let final_dosage = if loading_dose_applied {
        base_dosage * LOADING_DOSE_MULTIPLIER
    } else {
        base_dosage
    };
    let warnings = medication
        .warning()
        .map(|warning| vec![warning.to_string()])
        .unwrap_or_default();

    Ok(DosageResult {
        name: request.name.clone(),
        weight,
        medication,
        condition: request.condition.clone(),
        is_first_dose,
        allergies: request.allergies.clone(),
        base_dosage,
        loading_dose_applied,
        final_dosage,
        warnings,
    })
}

/// Evaluates every record and sums the final dosages.
///
/// Fails on the first record that cannot be evaluated, reporting its index.
pub fn calculate_all_dosages(
    requests: &[DosageRequest],
) -> Result<RunOutcome<DosageBatch>, DosageError> {
    if requests.is_empty() {
        return Ok(RunOutcome::NoData);
    }
    let mut results = Vec::with_capacity(requests.len());
    let mut total_medication = 0.0;
    for (index, request) in requests.iter().enumerate() {
        let result = calculate_dosage(request).map_err(|source| {
            warn!(index, error = %source, "dosage record rejected");
            DosageError::Record {
                index,
                source: Box::new(source),
            }
        })?;
        debug!(
            index,
            medication = %result.medication,
            loading_dose = result.loading_dose_applied,
            final_dosage = result.final_dosage,
            "dosage calculated"
        );
        total_medication += result.final_dosage;
        results.push(result);
    }
    info!(records = results.len(), total_medication, "dosage batch complete");
    Ok(RunOutcome::Produced(DosageBatch {
        results,
        total_medication,
    }))
}
