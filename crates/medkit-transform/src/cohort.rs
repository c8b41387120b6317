//! BMI cohort analysis.
//!
//! Pipeline: schema check, numeric coercion, plausible-range filter,
//! band labelling, then one pass over the labelled rows accumulating
//! glucose, age and row count per band. Bands with no rows are omitted and
//! the remaining rows are returned in band order.

use std::path::Path;

use medkit_ingest::{read_csv_table, read_snapshot, write_snapshot};
use medkit_model::{BmiBands, CohortOptions, CohortRow, CohortSummary, RunOutcome};
use polars::prelude::{DataFrame, DataType, IntoColumn, IntoLazy, NamedFrom, Series, col, lit};
use tracing::{debug, info, info_span, warn};

use crate::error::CohortError;

/// Columns every cohort table must carry.
pub const REQUIRED_COLUMNS: [&str; 3] = ["BMI", "Age", "Glucose"];

const BMI_RANGE: &str = "bmi_range";

/// Fails with every required column that is absent, in declared order.
pub fn validate_schema(df: &DataFrame) -> Result<(), CohortError> {
    let present = df.get_column_names();
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|required| !present.iter().any(|name| name.as_str() == **required))
        .map(ToString::to_string)
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(CohortError::MissingColumns { missing })
    }
}

/// Adds a `bmi_range` label column derived from the `BMI` column.
pub fn assign_bmi_ranges(df: &DataFrame, bands: &BmiBands) -> Result<DataFrame, CohortError> {
    let bmi = df.column("BMI")?.as_materialized_series().f64()?;
    let labels: Vec<Option<&str>> = bmi
        .into_iter()
        .map(|value| value.map(|v| bands.classify(v)))
        .collect();
    let mut labelled = df.clone();
    labelled.with_column(Series::new(BMI_RANGE.into(), labels).into_column())?;
    Ok(labelled)
}

/// Runs the cohort analysis over an in-memory table.
pub fn analyze_cohorts(
    df: &DataFrame,
    options: &CohortOptions,
) -> Result<RunOutcome<CohortSummary>, CohortError> {
    validate_schema(df)?;
    let (min, max) = (options.min_bmi, options.max_bmi);
    if !(min.is_finite() && max.is_finite()) || min > max {
        return Err(CohortError::InvalidRange { min, max });
    }

    let source_rows = df.height();
    let valid = df
        .clone()
        .lazy()
        .select([
            col("BMI").cast(DataType::Float64),
            col("Age").cast(DataType::Float64),
            col("Glucose").cast(DataType::Float64),
        ])
        .filter(
            col("BMI")
                .is_not_null()
                .and(col("Age").is_not_null())
                .and(col("Glucose").is_not_null()),
        )
        .collect()?;
    let dropped_invalid = source_rows - valid.height();
    if dropped_invalid > 0 {
        warn!(rows = dropped_invalid, "dropped rows with missing or non-numeric values");
    }

    let in_range = valid
        .lazy()
        .filter(col("BMI").gt_eq(lit(min)).and(col("BMI").lt_eq(lit(max))))
        .collect()?;
    let dropped_out_of_range = source_rows - dropped_invalid - in_range.height();
    debug!(
        min_bmi = min,
        max_bmi = max,
        rows = dropped_out_of_range,
        "dropped rows outside plausible BMI range"
    );

    if in_range.height() == 0 {
        info!(source_rows, "no rows left to aggregate");
        return Ok(RunOutcome::NoData);
    }

    let labelled = assign_bmi_ranges(&in_range, &options.bands)?;
    let rows = aggregate_bands(&labelled, &options.bands)?;

    let summary = CohortSummary {
        rows,
        source_rows,
        dropped_invalid,
        dropped_out_of_range,
    };
    info!(
        source_rows,
        analyzed_rows = summary.analyzed_rows(),
        bands = summary.rows.len(),
        "cohort analysis complete"
    );
    Ok(RunOutcome::Produced(summary))
}

#[derive(Debug, Clone, Copy, Default)]
struct BandTotals {
    count: u64,
    glucose: f64,
    age: f64,
}

/// Mean glucose, row count and mean age per non-empty band, in band order.
fn aggregate_bands(
    labelled: &DataFrame,
    bands: &BmiBands,
) -> Result<Vec<CohortRow>, CohortError> {
    let labels = labelled.column(BMI_RANGE)?.as_materialized_series().str()?;
    let ages = labelled.column("Age")?.as_materialized_series().f64()?;
    let glucose = labelled.column("Glucose")?.as_materialized_series().f64()?;

    let mut totals = vec![BandTotals::default(); bands.labels().len()];
    for ((label, age), glucose) in labels.into_iter().zip(ages).zip(glucose) {
        let (Some(label), Some(age), Some(glucose)) = (label, age, glucose) else {
            continue;
        };
        let Some(index) = bands.position(label) else {
            continue;
        };
        let band = &mut totals[index];
        band.count += 1;
        band.glucose += glucose;
        band.age += age;
    }

    Ok(bands
        .labels()
        .iter()
        .zip(totals)
        .filter(|(_, band)| band.count > 0)
        .map(|(label, band)| {
            let count = band.count as f64;
            CohortRow {
                bmi_range: label.clone(),
                avg_glucose: band.glucose / count,
                patient_count: band.count,
                avg_age: band.age / count,
            }
        })
        .collect())
}

/// Loads a CSV table and analyzes it.
///
/// When `snapshot` is set the loaded table is written there as Parquet and
/// the analysis runs over the re-read snapshot.
pub fn analyze_cohort_file(
    path: &Path,
    options: &CohortOptions,
    snapshot: Option<&Path>,
) -> Result<RunOutcome<CohortSummary>, CohortError> {
    let span = info_span!("cohort", path = %path.display());
    let _guard = span.enter();

    let mut df = read_csv_table(path)?;
    validate_schema(&df)?;
    if let Some(snapshot) = snapshot {
        write_snapshot(&mut df, snapshot)?;
        df = read_snapshot(snapshot)?;
    }
    analyze_cohorts(&df, options)
}
