use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataError {
    /// A referenced column is missing from the dataset schema
    #[error("Column '{0}' not found in dataset")]
    ColumnNotFound(String),

    /// The column exists but could not be read as the expected type
    #[error("Failed to read column '{0}' as {1}")]
    TypeCastError(String, String),

    /// The Arrow kernel produced an error (e.g., unsupported cast)
    #[error("Arrow computation error: {0}")]
    ArrowError(#[from] arrow::error::ArrowError),

    /// Parquet reading error
    #[error("Parquet error: {0}")]
    ParquetError(#[from] parquet::errors::ParquetError),

    /// File reading or IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// The data file contains no rows
    #[error("Dataset at '{0}' contains no rows")]
    EmptyDataset(String),

    /// The file extension matches no supported format
    #[error("Could not detect file format of '{0}' (expected .csv or .parquet)")]
    UnsupportedFormat(String),
}
