//! File readers for the one-time dataset load.
//!
//! CSV files are read with a header-derived schema in which every column is
//! nullable Utf8; Parquet files are read row group by row group in parallel
//! and every column is cast to Utf8 afterwards, so both paths hand the same
//! all-string table to the dataset.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::sync::Arc;

use arrow::array::ArrayRef;
use arrow::compute::cast;
use arrow::csv::ReaderBuilder as CsvReaderBuilder;
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use rayon::prelude::*;

use crate::errors::DataError;

const BATCH_SIZE: usize = 8192;

/// File format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Csv,
    Parquet,
}

impl FileFormat {
    /// Detect format from file extension
    pub fn from_path(path: &str) -> Option<Self> {
        let path_lower = path.to_lowercase();
        if path_lower.ends_with(".csv") {
            Some(FileFormat::Csv)
        } else if path_lower.ends_with(".parquet") {
            Some(FileFormat::Parquet)
        } else {
            None
        }
    }
}

/// Detect the format from the extension and read the whole file.
pub(crate) fn read_auto(path: &str) -> Result<Vec<RecordBatch>, DataError> {
    let format = FileFormat::from_path(path)
        .ok_or_else(|| DataError::UnsupportedFormat(path.to_string()))?;
    match format {
        FileFormat::Csv => read_csv(path),
        FileFormat::Parquet => read_parquet(path),
    }
}

/// Generate an all-Utf8 schema from the CSV header row
fn csv_generate_schema(path: &str) -> Result<Schema, io::Error> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut lines = reader.lines();

    if let Some(first) = lines.next() {
        let header = first?;
        let fields: Vec<Field> = header
            .split(',')
            .map(|c| Field::new(c.trim(), DataType::Utf8, true))
            .collect();
        Ok(Schema::new(fields))
    } else {
        Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "CSV file is empty",
        ))
    }
}

fn read_csv(path: &str) -> Result<Vec<RecordBatch>, DataError> {
    let schema = Arc::new(csv_generate_schema(path)?);
    let file = File::open(path)?;
    let reader = CsvReaderBuilder::new(schema)
        .with_header(true)
        .with_batch_size(BATCH_SIZE)
        .build(file)?;

    let mut batches = Vec::new();
    for batch in reader {
        batches.push(batch?);
    }
    Ok(batches)
}

fn read_parquet(path: &str) -> Result<Vec<RecordBatch>, DataError> {
    let file = File::open(path)?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;
    let num_row_groups = builder.metadata().num_row_groups();
    drop(builder);

    let batches: Result<Vec<Vec<RecordBatch>>, DataError> = (0..num_row_groups)
        .into_par_iter()
        .map(|row_group| read_parquet_row_group(path, row_group))
        .collect();

    Ok(batches?.into_iter().flatten().collect())
}

/// Read a single Parquet row group; each worker opens its own file handle
fn read_parquet_row_group(path: &str, row_group: usize) -> Result<Vec<RecordBatch>, DataError> {
    let file = File::open(path)?;
    let reader = ParquetRecordBatchReaderBuilder::try_new(file)?
        .with_row_groups(vec![row_group])
        .with_batch_size(BATCH_SIZE)
        .build()?;

    let mut batches = Vec::new();
    for batch in reader {
        batches.push(normalize_utf8(&batch?)?);
    }
    Ok(batches)
}

/// Survey values are compared as strings; Parquet files may carry typed
/// columns, so every column is cast to nullable Utf8 after reading.
fn normalize_utf8(batch: &RecordBatch) -> Result<RecordBatch, DataError> {
    let fields: Vec<Field> = batch
        .schema()
        .fields()
        .iter()
        .map(|f| Field::new(f.name().as_str(), DataType::Utf8, true))
        .collect();
    let columns: Result<Vec<ArrayRef>, arrow::error::ArrowError> = batch
        .columns()
        .iter()
        .map(|column| cast(column.as_ref(), &DataType::Utf8))
        .collect();
    Ok(RecordBatch::try_new(Arc::new(Schema::new(fields)), columns?)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_file_format_detection() {
        assert_eq!(FileFormat::from_path("data.csv"), Some(FileFormat::Csv));
        assert_eq!(FileFormat::from_path("data.CSV"), Some(FileFormat::Csv));
        assert_eq!(
            FileFormat::from_path("data.parquet"),
            Some(FileFormat::Parquet)
        );
        assert_eq!(FileFormat::from_path("data.xlsx"), None);
        assert_eq!(FileFormat::from_path("data"), None);
    }

    #[test]
    fn test_csv_generate_schema_valid() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Mobile,Name, Gender").unwrap();
        writeln!(file, "111,Alice,F").unwrap();

        let schema = csv_generate_schema(file.path().to_str().unwrap()).unwrap();
        assert_eq!(schema.fields().len(), 3);
        assert_eq!(schema.field(0).name(), "Mobile");
        assert_eq!(schema.field(2).name(), "Gender");
        assert!(schema.fields().iter().all(|f| f.data_type() == &DataType::Utf8));
    }

    #[test]
    fn test_csv_generate_schema_empty_file() {
        let file = NamedTempFile::new().unwrap();
        let result = csv_generate_schema(file.path().to_str().unwrap());
        assert!(result.is_err());
    }

    #[test]
    fn test_read_csv_basic() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Mobile,Name").unwrap();
        writeln!(file, "111,Alice").unwrap();
        writeln!(file, "111,Bob").unwrap();

        let path = file.path().to_str().unwrap().to_string();
        let csv_path = format!("{path}.csv");
        std::fs::copy(&path, &csv_path).unwrap();

        let batches = read_auto(&csv_path).unwrap();
        std::fs::remove_file(&csv_path).unwrap();

        let total_rows: usize = batches.iter().map(|b| b.num_rows()).sum();
        assert_eq!(total_rows, 2);
        assert_eq!(batches[0].num_columns(), 2);
    }

    #[test]
    fn test_read_auto_unknown_extension() {
        let result = read_auto("survey.xlsx");
        assert!(matches!(result, Err(DataError::UnsupportedFormat(_))));
    }
}
