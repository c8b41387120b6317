//! Integration tests for record and table loading.

use std::fs;

use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};

use medkit_ingest::{IngestError, load_records, read_snapshot, write_snapshot};
use medkit_model::{DosageRequest, RawPatient};

#[test]
fn load_records_reads_patient_array() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("patients.json");
    fs::write(
        &path,
        r#"[
            {"name": "john smith", "age": "32", "gender": "male", "diagnosis": "flu"},
            {"name": "jane doe", "age": 17, "gender": "female", "diagnosis": "asthma"}
        ]"#,
    )
    .unwrap();

    let patients: Vec<RawPatient> = load_records(&path).unwrap();

    assert_eq!(patients.len(), 2);
    assert_eq!(patients[0].name.as_deref(), Some("john smith"));
    assert_eq!(patients[1].diagnosis.as_deref(), Some("asthma"));
}

#[test]
fn load_records_keeps_missing_dosage_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("meds.json");
    fs::write(
        &path,
        r#"[{"name": "John Smith", "medication": "epinephrine", "is_first_dose": false}]"#,
    )
    .unwrap();

    let requests: Vec<DosageRequest> = load_records(&path).unwrap();

    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].weight, None);
    assert!(requests[0].allergies.is_empty());
}

#[test]
fn load_records_empty_array_is_not_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("patients.json");
    fs::write(&path, "[]").unwrap();

    let patients: Vec<RawPatient> = load_records(&path).unwrap();

    assert!(patients.is_empty());
}

#[test]
fn load_records_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result: Result<Vec<RawPatient>, _> = load_records(&dir.path().join("patients.json"));

    assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
}

#[test]
fn load_records_malformed_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("patients.json");
    fs::write(&path, "{not json").unwrap();

    let result: Result<Vec<RawPatient>, _> = load_records(&path);

    assert!(matches!(result, Err(IngestError::JsonParse { .. })));
}

#[test]
fn snapshot_preserves_table() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("patients.parquet");
    let columns: Vec<Column> = vec![
        Series::new("BMI".into(), &[22.5f64, 31.0]).into_column(),
        Series::new("Age".into(), &[40i64, 55]).into_column(),
        Series::new("Glucose".into(), &[90i64, 120]).into_column(),
    ];
    let mut df = DataFrame::new(columns).unwrap();

    write_snapshot(&mut df, &path).unwrap();
    let loaded = read_snapshot(&path).unwrap();

    assert!(loaded.equals(&df));
}
