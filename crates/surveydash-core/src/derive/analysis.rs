use arrow::array::Array;
use serde::Serialize;

use crate::charts::{ChartKind, ChartPoint, ChartSpec};
use crate::dataset::Dataset;
use crate::derive::counts::category_counts;
use crate::errors::DataError;
use crate::schema::{COL_DOB, COL_GENDER, COL_LAND, COL_NAME, COL_TOTAL_COWS};

/// Shown while no analysis kind is selected.
pub const PLACEHOLDER_TITLE: &str = "Select an analysis option";

/// The demographic/asset analyses offered by the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisKind {
    Gender,
    Age,
    Livestock,
    Land,
}

impl AnalysisKind {
    /// Parse a picker literal; anything unrecognized reads as no selection.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "gender" => Some(Self::Gender),
            "age" => Some(Self::Age),
            "livestock" => Some(Self::Livestock),
            "land" => Some(Self::Land),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gender => "gender",
            Self::Age => "age",
            Self::Livestock => "livestock",
            Self::Land => "land",
        }
    }
}

/// Chart for the selected analysis kind over the whole dataset; no
/// selection yields the placeholder.
pub fn analysis_chart(
    dataset: &Dataset,
    kind: Option<AnalysisKind>,
) -> Result<ChartSpec, DataError> {
    match kind {
        Some(AnalysisKind::Gender) => histogram(dataset, COL_GENDER, "Gender Distribution"),
        Some(AnalysisKind::Age) => histogram(dataset, COL_DOB, "Age Distribution"),
        Some(AnalysisKind::Livestock) => livestock_chart(dataset),
        Some(AnalysisKind::Land) => land_chart(dataset),
        None => Ok(ChartSpec::placeholder(PLACEHOLDER_TITLE)),
    }
}

/// Count-per-category histogram, categories in first-seen row order.
///
/// The age variant buckets raw date-of-birth values, not computed ages:
/// the report has always shown birth-date frequencies under that title.
fn histogram(dataset: &Dataset, column: &str, title: &str) -> Result<ChartSpec, DataError> {
    let points = category_counts(dataset, column)?
        .into_iter()
        .map(|(label, count)| ChartPoint::new(label, count as f64))
        .collect();
    Ok(ChartSpec {
        kind: ChartKind::Histogram,
        title: title.to_string(),
        x_label: column.to_string(),
        y_label: "Count".to_string(),
        points,
    })
}

/// One bar per row (not aggregated by household): member name against their
/// cow count. Rows with a missing or unparseable count are skipped.
fn livestock_chart(dataset: &Dataset) -> Result<ChartSpec, DataError> {
    let names = dataset.string_column(COL_NAME)?;
    let cows = dataset.string_column(COL_TOTAL_COWS)?;
    let mut points = Vec::new();
    for row in 0..dataset.num_rows() {
        if names.is_null(row) || cows.is_null(row) {
            continue;
        }
        let Ok(count) = cows.value(row).trim().parse::<f64>() else {
            continue;
        };
        points.push(ChartPoint::new(names.value(row), count));
    }
    Ok(ChartSpec {
        kind: ChartKind::Bar,
        title: "Livestock Ownership".to_string(),
        x_label: COL_NAME.to_string(),
        y_label: COL_TOTAL_COWS.to_string(),
        points,
    })
}

fn land_chart(dataset: &Dataset) -> Result<ChartSpec, DataError> {
    let points = category_counts(dataset, COL_LAND)?
        .into_iter()
        .map(|(label, count)| ChartPoint::new(label, count as f64))
        .collect();
    Ok(ChartSpec {
        kind: ChartKind::Pie,
        title: "Land Ownership".to_string(),
        x_label: COL_LAND.to_string(),
        y_label: "Count".to_string(),
        points,
    })
}
