use std::collections::HashSet;

use arrow::array::Array;

use crate::dataset::Dataset;
use crate::errors::DataError;
use crate::schema::{COL_MOBILE, COL_NAME};

/// Distinct non-empty member names of the selected household, in first-seen
/// row order.
///
/// No selection means no members; an unknown mobile likewise yields an
/// empty list. Neither is an error.
pub fn list_members(dataset: &Dataset, mobile: Option<&str>) -> Result<Vec<String>, DataError> {
    let Some(mobile) = mobile else {
        return Ok(Vec::new());
    };
    let mobiles = dataset.string_column(COL_MOBILE)?;
    let names = dataset.string_column(COL_NAME)?;
    let mut seen: HashSet<&str> = HashSet::new();
    let mut members = Vec::new();
    for row in 0..dataset.num_rows() {
        if mobiles.is_null(row) || mobiles.value(row) != mobile {
            continue;
        }
        if names.is_null(row) {
            continue;
        }
        let name = names.value(row);
        if name.is_empty() {
            continue;
        }
        if seen.insert(name) {
            members.push(name.to_string());
        }
    }
    Ok(members)
}
