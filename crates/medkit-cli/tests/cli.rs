//! End-to-end tests running the `medkit` binary.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use medkit_cli::exit::FailureKind;

fn medkit(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_medkit"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("run medkit")
}

fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn clean_prints_json() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(
        dir.path(),
        "patients.json",
        r#"[
            {"name": "john smith", "age": "32", "gender": "male", "diagnosis": "flu"},
            {"name": "john smith", "age": 32, "gender": "male", "diagnosis": "flu"},
            {"name": "tim young", "age": "12", "gender": "male", "diagnosis": "flu"}
        ]"#,
    );

    let output = medkit(&["clean", arg(&input), "--json"]);

    assert_eq!(output.status.code(), Some(0));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        value,
        serde_json::json!([
            {"name": "John Smith", "age": 32, "gender": "male", "diagnosis": "flu"}
        ])
    );
}

#[test]
fn clean_tolerates_non_string_names() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(
        dir.path(),
        "patients.json",
        r#"[
            {"name": 42, "age": "30", "gender": "female", "diagnosis": "asthma"},
            {"name": "john smith", "age": 40, "gender": "male", "diagnosis": "flu"}
        ]"#,
    );

    let output = medkit(&["clean", arg(&input), "--json"]);

    assert_eq!(output.status.code(), Some(0));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value[0]["name"], "42");
    assert_eq!(value[1]["name"], "John Smith");
}

#[test]
fn clean_with_no_adults_succeeds_with_notice() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(
        dir.path(),
        "patients.json",
        r#"[{"name": "tim young", "age": "12", "gender": "male", "diagnosis": "flu"}]"#,
    );

    let output = medkit(&["clean", arg(&input)]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("No patient records remained"));
}

#[test]
fn clean_missing_file_is_load_failure() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("patients.json");

    let output = medkit(&["clean", arg(&missing)]);

    assert_eq!(output.status.code(), Some(FailureKind::Load.exit_code()));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("input file not found"));
}

#[test]
fn dosage_prints_total() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(
        dir.path(),
        "meds.json",
        r#"[
            {"name": "John Smith", "weight": 70.0, "medication": "amiodarone",
             "condition": "cardiac arrest", "is_first_dose": true, "allergies": []},
            {"name": "Jane Doe", "weight": 70.0, "medication": "epinephrine",
             "condition": "anaphylaxis", "is_first_dose": false, "allergies": ["penicillin"]}
        ]"#,
    );

    let output = medkit(&["dosage", arg(&input)]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Total medication needed: 700.70 mg"));
}

#[test]
fn dosage_unknown_medication_is_rule_failure() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(
        dir.path(),
        "meds.json",
        r#"[{"name": "John Smith", "weight": 70.0, "medication": "aspirin", "is_first_dose": false}]"#,
    );

    let output = medkit(&["dosage", arg(&input)]);

    assert_eq!(output.status.code(), Some(FailureKind::Rule.exit_code()));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("record 0: unknown medication 'aspirin'"));
}

#[test]
fn dosage_mistyped_weight_is_rule_failure() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(
        dir.path(),
        "meds.json",
        r#"[
            {"name": "Jane Doe", "weight": 70.0, "medication": "epinephrine",
             "is_first_dose": false, "allergies": null},
            {"name": "John Smith", "weight": "70", "medication": "epinephrine",
             "is_first_dose": false}
        ]"#,
    );

    let output = medkit(&["dosage", arg(&input)]);

    assert_eq!(output.status.code(), Some(FailureKind::Rule.exit_code()));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("record 1: invalid value for 'weight'"));
}

#[test]
fn cohort_missing_column_is_schema_failure() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(dir.path(), "patients_large.csv", "BMI,Age\n22.0,40\n");

    let output = medkit(&["cohort", arg(&input)]);

    assert_eq!(output.status.code(), Some(FailureKind::Schema.exit_code()));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("missing required columns: Glucose"));
}

#[test]
fn cohort_json_rows_in_band_order() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(
        dir.path(),
        "patients_large.csv",
        "BMI,Age,Glucose\n31.0,60,130\n17.0,20,80\n9.0,30,100\n",
    );
    let snapshot = dir.path().join("patients_large.parquet");

    let output = medkit(&["cohort", arg(&input), "--snapshot", arg(&snapshot), "--json"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(snapshot.exists());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let labels: Vec<&str> = value["rows"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["bmi_range"].as_str().unwrap())
        .collect();
    assert_eq!(labels, vec!["Underweight", "Obese"]);
    assert_eq!(value["dropped_out_of_range"], 1);
}
