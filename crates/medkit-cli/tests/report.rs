//! Tests for console report tables.

use medkit_cli::report::{
    cohort_exclusions, cohort_table, dosage_table, medications_table, patients_table,
};
use medkit_model::{
    BmiBands, CleanedPatient, CohortRow, CohortSummary, DosageBatch, DosageResult, Medication,
};

fn cohort_summary() -> CohortSummary {
    CohortSummary {
        rows: vec![
            CohortRow {
                bmi_range: "Normal".to_string(),
                avg_glucose: 95.5,
                patient_count: 3,
                avg_age: 41.0,
            },
            CohortRow {
                bmi_range: "Obese".to_string(),
                avg_glucose: 130.25,
                patient_count: 2,
                avg_age: 58.5,
            },
        ],
        source_rows: 7,
        dropped_invalid: 1,
        dropped_out_of_range: 1,
    }
}

#[test]
fn patients_table_lists_each_patient() {
    let patients = vec![CleanedPatient {
        name: "John Smith".to_string(),
        age: 32,
        gender: Some("male".to_string()),
        diagnosis: None,
    }];

    let rendered = patients_table(&patients).to_string();

    assert!(rendered.contains("John Smith"));
    assert!(rendered.contains("32"));
    assert!(rendered.contains("male"));
}

#[test]
fn dosage_table_includes_total() {
    let batch = DosageBatch {
        results: vec![DosageResult {
            name: Some("John Smith".to_string()),
            weight: 70.0,
            medication: Medication::Amiodarone,
            condition: Some("cardiac arrest".to_string()),
            is_first_dose: true,
            allergies: Vec::new(),
            base_dosage: 350.0,
            loading_dose_applied: true,
            final_dosage: 700.0,
            warnings: vec!["Monitor for hypotension".to_string()],
        }],
        total_medication: 700.0,
    };

    let rendered = dosage_table(&batch).to_string();

    assert!(rendered.contains("amiodarone"));
    assert!(rendered.contains("350.00"));
    assert!(rendered.contains("700.00"));
    assert!(rendered.contains("TOTAL"));
}

#[test]
fn cohort_table_shows_intervals_and_total() {
    let rendered = cohort_table(&cohort_summary(), &BmiBands::standard()).to_string();

    assert!(rendered.contains("Normal"));
    assert!(rendered.contains("[18.5, 25)"));
    assert!(rendered.contains(">= 30"));
    assert!(rendered.contains("130.25"));
    assert!(rendered.contains("TOTAL"));
    assert!(!rendered.contains("Underweight"));
}

#[test]
fn cohort_exclusions_line() {
    insta::assert_snapshot!(
        cohort_exclusions(&cohort_summary()),
        @"Rows: 7 read, 1 invalid, 1 outside BMI range"
    );
}

#[test]
fn medications_table_lists_all_twelve() {
    let rendered = medications_table().to_string();

    for medication in Medication::ALL {
        assert!(rendered.contains(medication.key()));
    }
}
