mod reader;

pub use reader::FileFormat;

use std::collections::HashSet;

use arrow::array::{Array, StringArray};
use arrow::compute::concat_batches;
use arrow::datatypes::SchemaRef;
use arrow::record_batch::RecordBatch;
use tracing::info;

use crate::errors::DataError;
use crate::schema::{COL_MOBILE, COL_NAME, REQUIRED_COLUMNS, STATUS_MARKER};

/// The survey table: loaded exactly once, never mutated afterwards.
///
/// Every column is nullable Utf8 and the original file row order is
/// preserved. All derivations borrow this immutably, so they can run in any
/// order (or concurrently) without coordination.
#[derive(Debug)]
pub struct Dataset {
    batch: RecordBatch,
}

/// One contact picker option: a household mobile with the name it was first
/// seen against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub mobile: String,
    pub name: String,
}

impl Dataset {
    /// Read a CSV or Parquet file (format detected from the extension) and
    /// validate the required-column contract.
    ///
    /// Missing required columns fail here, at load time, rather than on
    /// first use inside a derivation.
    pub fn load(path: &str) -> Result<Self, DataError> {
        let batches = reader::read_auto(path)?;
        if batches.is_empty() || batches.iter().all(|b| b.num_rows() == 0) {
            return Err(DataError::EmptyDataset(path.to_string()));
        }
        let schema = batches[0].schema();
        let batch = concat_batches(&schema, &batches)?;
        let dataset = Self::from_batch(batch);
        dataset.check_required_columns()?;
        info!(
            rows = dataset.num_rows(),
            columns = dataset.schema().fields().len(),
            path,
            "survey dataset loaded"
        );
        Ok(dataset)
    }

    /// Wrap an already-built batch.
    ///
    /// Skips the required-column check so partial tables can be assembled in
    /// tests and embedding code; derivations still report a missing column
    /// when they touch it.
    pub fn from_batch(batch: RecordBatch) -> Self {
        Self { batch }
    }

    fn check_required_columns(&self) -> Result<(), DataError> {
        let schema = self.batch.schema();
        for column in REQUIRED_COLUMNS {
            if schema.index_of(column).is_err() {
                return Err(DataError::ColumnNotFound(column.to_string()));
            }
        }
        Ok(())
    }

    pub fn num_rows(&self) -> usize {
        self.batch.num_rows()
    }

    pub fn schema(&self) -> SchemaRef {
        self.batch.schema()
    }

    pub fn batch(&self) -> &RecordBatch {
        &self.batch
    }

    /// Borrow a column as a string array.
    pub fn string_column(&self, name: &str) -> Result<&StringArray, DataError> {
        let index = self
            .batch
            .schema()
            .index_of(name)
            .map_err(|_| DataError::ColumnNotFound(name.to_string()))?;
        self.batch
            .column(index)
            .as_any()
            .downcast_ref::<StringArray>()
            .ok_or_else(|| DataError::TypeCastError(name.to_string(), "Utf8".to_string()))
    }

    /// Distinct (Mobile, Name) pairs in first-seen row order; rows missing
    /// either value are skipped.
    pub fn contacts(&self) -> Result<Vec<Contact>, DataError> {
        let mobiles = self.string_column(COL_MOBILE)?;
        let names = self.string_column(COL_NAME)?;
        let mut seen: HashSet<(&str, &str)> = HashSet::new();
        let mut contacts = Vec::new();
        for row in 0..self.num_rows() {
            if mobiles.is_null(row) || names.is_null(row) {
                continue;
            }
            let pair = (mobiles.value(row), names.value(row));
            if seen.insert(pair) {
                contacts.push(Contact {
                    mobile: pair.0.to_string(),
                    name: pair.1.to_string(),
                });
            }
        }
        Ok(contacts)
    }

    /// Distinct Mobile values in first-seen row order, for the contact
    /// picker.
    pub fn contact_options(&self) -> Result<Vec<String>, DataError> {
        let mobiles = self.string_column(COL_MOBILE)?;
        let mut seen: HashSet<&str> = HashSet::new();
        let mut options = Vec::new();
        for value in mobiles.iter().flatten() {
            if seen.insert(value) {
                options.push(value.to_string());
            }
        }
        Ok(options)
    }

    /// Names of every column containing the status marker, in schema order.
    pub fn status_columns(&self) -> Vec<String> {
        self.batch
            .schema()
            .fields()
            .iter()
            .filter(|f| f.name().contains(STATUS_MARKER))
            .map(|f| f.name().to_string())
            .collect()
    }
}
