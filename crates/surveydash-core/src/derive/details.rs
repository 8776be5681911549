use arrow::array::BooleanArray;
use arrow::compute::filter_record_batch;
use arrow::record_batch::RecordBatch;

use crate::dataset::Dataset;
use crate::errors::DataError;
use crate::schema::COL_MOBILE;

/// Every row of the selected household, all columns, in original file
/// order. An absent selection yields a zero-row batch with the full schema.
pub fn detail_rows(dataset: &Dataset, mobile: Option<&str>) -> Result<RecordBatch, DataError> {
    let mask = household_mask(dataset, mobile)?;
    Ok(filter_record_batch(dataset.batch(), &mask)?)
}

/// Row mask selecting the household; an absent selection selects nothing.
pub(crate) fn household_mask(
    dataset: &Dataset,
    mobile: Option<&str>,
) -> Result<BooleanArray, DataError> {
    let mobiles = dataset.string_column(COL_MOBILE)?;
    let mask = match mobile {
        Some(selected) => mobiles.iter().map(|v| Some(v == Some(selected))).collect(),
        None => (0..dataset.num_rows()).map(|_| Some(false)).collect(),
    };
    Ok(mask)
}
