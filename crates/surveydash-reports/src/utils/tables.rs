use arrow::array::{Array, StringArray};
use arrow::record_batch::RecordBatch;

/// Column names of a batch, in schema order.
pub fn batch_columns(batch: &RecordBatch) -> Vec<String> {
    batch
        .schema()
        .fields()
        .iter()
        .map(|field| field.name().to_string())
        .collect()
}

/// Cell values of a batch, row-major. Dataset batches are all-Utf8; a
/// column that is not reads as all-missing rather than panicking.
pub fn batch_rows(batch: &RecordBatch) -> Vec<Vec<Option<String>>> {
    let columns: Vec<Option<&StringArray>> = batch
        .columns()
        .iter()
        .map(|column| column.as_any().downcast_ref::<StringArray>())
        .collect();
    (0..batch.num_rows())
        .map(|row| {
            columns
                .iter()
                .map(|column| {
                    column.and_then(|array| {
                        if array.is_null(row) {
                            None
                        } else {
                            Some(array.value(row).to_string())
                        }
                    })
                })
                .collect()
        })
        .collect()
}
