use std::collections::HashMap;

use arrow::array::{Array, StringArray};
use serde::Serialize;

use crate::charts::{ChartKind, ChartPoint, ChartSpec};
use crate::dataset::Dataset;
use crate::derive::counts::value_counts;
use crate::derive::details::detail_rows;
use crate::errors::DataError;
use crate::schema::{COL_NAME, UNVERIFIED, VERIFIED};

/// Shown while no verification column is selected.
pub const PLACEHOLDER_TITLE: &str = "Select a column to analyze verification";

/// Verified/unverified cell counts for one member of the selected
/// household, tallied across every status column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerificationSummaryRow {
    pub name: String,
    pub verified: u64,
    pub unverified: u64,
}

/// Per-member verification tallies for the selected household.
///
/// Rows are grouped by distinct Name in first-seen order; rows without a
/// Name are skipped, matching the member list. Cells equal to neither
/// literal count in neither column. With no status columns in the schema
/// every member tallies 0/0.
pub fn verification_summary(
    dataset: &Dataset,
    mobile: Option<&str>,
) -> Result<Vec<VerificationSummaryRow>, DataError> {
    if mobile.is_none() {
        return Ok(Vec::new());
    }
    let household = Dataset::from_batch(detail_rows(dataset, mobile)?);
    let names = household.string_column(COL_NAME)?;
    let status_arrays: Vec<&StringArray> = household
        .status_columns()
        .iter()
        .map(|column| household.string_column(column))
        .collect::<Result<_, _>>()?;

    let mut slots: HashMap<String, usize> = HashMap::new();
    let mut summary: Vec<VerificationSummaryRow> = Vec::new();
    for row in 0..household.num_rows() {
        if names.is_null(row) {
            continue;
        }
        let name = names.value(row);
        let slot = match slots.get(name) {
            Some(&slot) => slot,
            None => {
                slots.insert(name.to_string(), summary.len());
                summary.push(VerificationSummaryRow {
                    name: name.to_string(),
                    verified: 0,
                    unverified: 0,
                });
                summary.len() - 1
            }
        };
        for column in &status_arrays {
            if column.is_null(row) {
                continue;
            }
            match column.value(row) {
                VERIFIED => summary[slot].verified += 1,
                UNVERIFIED => summary[slot].unverified += 1,
                _ => {}
            }
        }
    }
    Ok(summary)
}

/// Frequency breakdown of one status column over the whole dataset: a bar
/// chart plus the "{value}: {count}" text block, both ordered descending by
/// count.
///
/// An unknown column name is a [`DataError::ColumnNotFound`], unlike an
/// unknown mobile.
pub fn verification_chart(
    dataset: &Dataset,
    column: Option<&str>,
) -> Result<(ChartSpec, String), DataError> {
    let Some(column) = column else {
        return Ok((ChartSpec::placeholder(PLACEHOLDER_TITLE), String::new()));
    };
    let counts = value_counts(dataset, column)?;
    let spec = ChartSpec {
        kind: ChartKind::Bar,
        title: format!("Verification Status in {column}"),
        x_label: "Status".to_string(),
        y_label: "Count".to_string(),
        points: counts
            .iter()
            .map(|(value, count)| ChartPoint::new(value.as_str(), *count as f64))
            .collect(),
    };
    let text = counts
        .iter()
        .map(|(value, count)| format!("{value}: {count}"))
        .collect::<Vec<_>>()
        .join("\n");
    Ok((spec, text))
}
