use std::fs::File;
use std::io::Write;
use std::sync::Arc;

use arrow::array::{ArrayRef, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use surveydash_core::{DataError, Dataset};
use tempfile::tempdir;

const LAND_COL: &str = "Does the family own any agricultural land presently?";

fn write_survey_csv(path: &std::path::Path) {
    let mut file = File::create(path).unwrap();
    writeln!(
        file,
        "Mobile,Name,Gender,DOB,Total Cows,{LAND_COL},ID Status,Address Status"
    )
    .unwrap();
    writeln!(file, "111,Alice,F,1990-01-01,2,Yes,Verified,Unverified").unwrap();
    writeln!(file, "111,Bob,M,1992-05-10,3,Yes,Verified,Verified").unwrap();
    writeln!(file, "222,Carol,F,1985-03-15,0,No,Unverified,Pending").unwrap();
}

#[test]
fn test_load_csv() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("survey.csv");
    write_survey_csv(&path);

    let dataset = Dataset::load(path.to_str().unwrap()).unwrap();
    assert_eq!(dataset.num_rows(), 3);
    assert_eq!(dataset.schema().fields().len(), 8);
    assert_eq!(dataset.status_columns(), vec!["ID Status", "Address Status"]);

    let contacts = dataset.contacts().unwrap();
    assert_eq!(contacts.len(), 3);
    assert_eq!(dataset.contact_options().unwrap(), vec!["111", "222"]);
}

#[test]
fn test_load_missing_required_column() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("survey.csv");
    let mut file = File::create(&path).unwrap();
    writeln!(file, "Mobile,Name,Gender,DOB,Total Cows").unwrap();
    writeln!(file, "111,Alice,F,1990-01-01,2").unwrap();
    drop(file);

    let err = Dataset::load(path.to_str().unwrap()).unwrap_err();
    assert!(matches!(err, DataError::ColumnNotFound(name) if name == LAND_COL));
}

#[test]
fn test_load_header_only_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("survey.csv");
    let mut file = File::create(&path).unwrap();
    writeln!(file, "Mobile,Name,Gender,DOB,Total Cows,{LAND_COL}").unwrap();
    drop(file);

    let err = Dataset::load(path.to_str().unwrap()).unwrap_err();
    assert!(matches!(err, DataError::EmptyDataset(_)));
}

#[test]
fn test_load_unknown_extension() {
    let err = Dataset::load("survey.xlsx").unwrap_err();
    assert!(matches!(err, DataError::UnsupportedFormat(_)));
}

#[test]
fn test_load_missing_file() {
    let err = Dataset::load("nonexistent.csv").unwrap_err();
    assert!(matches!(err, DataError::IoError(_)));
}

#[test]
fn test_load_parquet_casts_to_strings() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("survey.parquet");

    // Typed columns on purpose: the loader must normalize them to Utf8
    let schema = Arc::new(Schema::new(vec![
        Field::new("Mobile", DataType::Utf8, true),
        Field::new("Name", DataType::Utf8, true),
        Field::new("Gender", DataType::Utf8, true),
        Field::new("DOB", DataType::Utf8, true),
        Field::new("Total Cows", DataType::Int64, true),
        Field::new(LAND_COL, DataType::Utf8, true),
        Field::new("ID Status", DataType::Utf8, true),
    ]));
    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(StringArray::from(vec![Some("111"), Some("222")])) as ArrayRef,
            Arc::new(StringArray::from(vec![Some("Alice"), Some("Carol")])),
            Arc::new(StringArray::from(vec![Some("F"), Some("F")])),
            Arc::new(StringArray::from(vec![Some("1990-01-01"), Some("1985-03-15")])),
            Arc::new(Int64Array::from(vec![Some(2), Some(0)])),
            Arc::new(StringArray::from(vec![Some("Yes"), Some("No")])),
            Arc::new(StringArray::from(vec![Some("Verified"), Some("Unverified")])),
        ],
    )
    .unwrap();

    let file = File::create(&path).unwrap();
    let mut writer = ArrowWriter::try_new(file, schema, None).unwrap();
    writer.write(&batch).unwrap();
    writer.close().unwrap();

    let dataset = Dataset::load(path.to_str().unwrap()).unwrap();
    assert_eq!(dataset.num_rows(), 2);
    let cows = dataset.string_column("Total Cows").unwrap();
    assert_eq!(cows.value(0), "2");
    assert_eq!(cows.value(1), "0");
}
