//! Console tables for pipeline results.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use medkit_model::{BmiBands, CleanedPatient, CohortSummary, DosageBatch, Medication};

pub fn patients_table(patients: &[CleanedPatient]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Name"),
        header_cell("Age"),
        header_cell("Gender"),
        header_cell("Diagnosis"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for patient in patients {
        table.add_row(vec![
            Cell::new(&patient.name),
            Cell::new(patient.age),
            optional_cell(patient.gender.as_deref()),
            optional_cell(patient.diagnosis.as_deref()),
        ]);
    }
    table
}

pub fn dosage_table(batch: &DosageBatch) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Name"),
        header_cell("Medication"),
        header_cell("Base (mg)"),
        header_cell("Loading"),
        header_cell("Final (mg)"),
        header_cell("Warnings"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);
    align_column(&mut table, 4, CellAlignment::Right);
    for result in &batch.results {
        let loading = if result.loading_dose_applied {
            Cell::new("✓")
                .fg(Color::Green)
                .add_attribute(Attribute::Bold)
        } else {
            dim_cell("-")
        };
        let warnings = if result.warnings.is_empty() {
            dim_cell("-")
        } else {
            Cell::new(result.warnings.join(", ")).fg(Color::Yellow)
        };
        table.add_row(vec![
            optional_cell(result.name.as_deref()),
            Cell::new(result.medication),
            Cell::new(format!("{:.2}", result.base_dosage)),
            loading,
            Cell::new(format!("{:.2}", result.final_dosage)),
            warnings,
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        dim_cell("-"),
        Cell::new(format!("{:.2}", batch.total_medication)).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    table
}

pub fn cohort_table(summary: &CohortSummary, bands: &BmiBands) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("BMI range"),
        header_cell("Interval"),
        header_cell("Patients"),
        header_cell("Avg glucose"),
        header_cell("Avg age"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 2..5 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for row in &summary.rows {
        let interval = bands
            .bands()
            .find(|band| band.label == row.bmi_range)
            .map_or_else(|| "-".to_string(), |band| band.range_text());
        table.add_row(vec![
            Cell::new(&row.bmi_range)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            dim_cell(interval),
            Cell::new(row.patient_count),
            Cell::new(format!("{:.2}", row.avg_glucose)),
            Cell::new(format!("{:.2}", row.avg_age)),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(summary.analyzed_rows()).add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
    ]);
    table
}

/// One line describing rows excluded before aggregation.
pub fn cohort_exclusions(summary: &CohortSummary) -> String {
    format!(
        "Rows: {} read, {} invalid, {} outside BMI range",
        summary.source_rows, summary.dropped_invalid, summary.dropped_out_of_range
    )
}

pub fn medications_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Medication"),
        header_cell("mg/kg"),
        header_cell("Indication"),
        header_cell("Loading dose"),
        header_cell("Warning"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);
    for medication in Medication::ALL {
        table.add_row(vec![
            Cell::new(medication.key()),
            Cell::new(medication.factor_mg_per_kg()),
            Cell::new(medication.indication()),
            if medication.uses_loading_dose() {
                Cell::new("first dose").fg(Color::Green)
            } else {
                dim_cell("-")
            },
            optional_cell(medication.warning()),
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn optional_cell(value: Option<&str>) -> Cell {
    match value {
        Some(text) if !text.trim().is_empty() => Cell::new(text),
        _ => dim_cell("-"),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
