use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info_span, trace};

use medkit_ingest::load_records;
use medkit_model::{CleaningOptions, CohortOptions, DosageRequest, RawPatient, RunOutcome};
use medkit_transform::{analyze_cohort_file, calculate_all_dosages, clean_patients};

use medkit_cli::logging::redact_value;
use medkit_cli::report::{
    cohort_exclusions, cohort_table, dosage_table, medications_table, patients_table,
};

use crate::cli::{CleanArgs, CohortArgs, DosageArgs};

pub fn run_clean(args: &CleanArgs) -> Result<()> {
    let _guard = info_span!("clean", path = %args.input.display()).entered();
    let raw: Vec<RawPatient> = load_records(&args.input)
        .with_context(|| format!("load patient records from {}", args.input.display()))?;
    let options = CleaningOptions::new().with_min_age(args.min_age);
    let outcome = clean_patients(raw, &options);
    if let RunOutcome::Produced(patients) = &outcome {
        for patient in patients {
            trace!(name = redact_value(&patient.name), age = patient.age, "cleaned patient");
        }
    }
    emit(outcome, args.json, "patient records", |patients| {
        println!("Cleaned Patient Data:");
        println!("{}", patients_table(patients));
    })
}

pub fn run_dosage(args: &DosageArgs) -> Result<()> {
    let _guard = info_span!("dosage", path = %args.input.display()).entered();
    let requests: Vec<DosageRequest> = load_records(&args.input)
        .with_context(|| format!("load medication records from {}", args.input.display()))?;
    let outcome = calculate_all_dosages(&requests).context("calculate dosages")?;
    emit(outcome, args.json, "medication records", |batch| {
        println!("Medication Dosages:");
        println!("{}", dosage_table(batch));
        println!("Total medication needed: {:.2} mg", batch.total_medication);
    })
}

pub fn run_cohort(args: &CohortArgs) -> Result<()> {
    let options = CohortOptions::new().with_bmi_range(args.min_bmi, args.max_bmi);
    let outcome = analyze_cohort_file(&args.input, &options, args.snapshot.as_deref())
        .with_context(|| format!("analyze cohorts in {}", args.input.display()))?;
    emit(outcome, args.json, "rows to aggregate", |summary| {
        println!("Cohort Analysis Results:");
        println!("{}", cohort_table(summary, &options.bands));
        println!("{}", cohort_exclusions(summary));
    })
}

pub fn run_medications() -> Result<()> {
    println!("{}", medications_table());
    Ok(())
}

/// Prints a produced result as a table or JSON; `NoData` prints a notice
/// (or `null` in JSON mode) and still succeeds.
fn emit<T: Serialize>(
    outcome: RunOutcome<T>,
    json: bool,
    what: &str,
    print_table: impl FnOnce(&T),
) -> Result<()> {
    match (outcome, json) {
        (RunOutcome::Produced(value), true) => {
            println!(
                "{}",
                serde_json::to_string_pretty(&value).context("serialize result")?
            );
        }
        (RunOutcome::Produced(value), false) => print_table(&value),
        (RunOutcome::NoData, true) => println!("null"),
        (RunOutcome::NoData, false) => println!("No {what} remained after processing."),
    }
    Ok(())
}
