use std::collections::HashMap;

use crate::dataset::Dataset;
use crate::errors::DataError;

/// Occurrence count per distinct value of `column`, in first-seen row
/// order. Nulls are excluded; duplicates are counted.
pub fn category_counts(dataset: &Dataset, column: &str) -> Result<Vec<(String, u64)>, DataError> {
    let values = dataset.string_column(column)?;
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(String, u64)> = Vec::new();
    for value in values.iter().flatten() {
        match slots.get(value) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                slots.insert(value, counts.len());
                counts.push((value.to_string(), 1));
            }
        }
    }
    Ok(counts)
}

/// Same counts ordered descending by count; ties keep first-seen order
/// (the sort is stable).
pub fn value_counts(dataset: &Dataset, column: &str) -> Result<Vec<(String, u64)>, DataError> {
    let mut counts = category_counts(dataset, column)?;
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use arrow::array::{ArrayRef, StringArray};
    use arrow::datatypes::{DataType, Field, Schema};
    use arrow::record_batch::RecordBatch;

    fn single_column(name: &str, values: Vec<Option<&str>>) -> Dataset {
        let schema = Schema::new(vec![Field::new(name, DataType::Utf8, true)]);
        let array = Arc::new(StringArray::from(values)) as ArrayRef;
        Dataset::from_batch(RecordBatch::try_new(Arc::new(schema), vec![array]).unwrap())
    }

    #[test]
    fn test_category_counts_first_seen_order() {
        let data = single_column(
            "Gender",
            vec![Some("F"), Some("M"), Some("F"), None, Some("M"), Some("F")],
        );
        let counts = category_counts(&data, "Gender").unwrap();
        assert_eq!(counts, vec![("F".to_string(), 3), ("M".to_string(), 2)]);
    }

    #[test]
    fn test_value_counts_descending() {
        let data = single_column(
            "ID Status",
            vec![
                Some("Unverified"),
                Some("Verified"),
                Some("Verified"),
                Some("Pending"),
            ],
        );
        let counts = value_counts(&data, "ID Status").unwrap();
        assert_eq!(counts[0], ("Verified".to_string(), 2));
        // Tie between Unverified and Pending resolves to first-seen order
        assert_eq!(counts[1], ("Unverified".to_string(), 1));
        assert_eq!(counts[2], ("Pending".to_string(), 1));
    }

    #[test]
    fn test_counts_exclude_nulls() {
        let data = single_column("Gender", vec![None, None, Some("F")]);
        let counts = category_counts(&data, "Gender").unwrap();
        assert_eq!(counts, vec![("F".to_string(), 1)]);
    }

    #[test]
    fn test_counts_missing_column() {
        let data = single_column("Gender", vec![Some("F")]);
        let err = value_counts(&data, "Nope").unwrap_err();
        assert!(matches!(err, DataError::ColumnNotFound(name) if name == "Nope"));
    }
}
