use arrow::record_batch::RecordBatch;
use chrono::Local;
use serde::Serialize;
use serde_json::Error;
use surveydash_core::Dataset;
use surveydash_core::charts::ChartSpec;
use surveydash_core::derive::VerificationSummaryRow;
use surveydash_core::surface::{OutputSlot, OutputValue};

use crate::Reporter;
use crate::utils::tables::{batch_columns, batch_rows};

#[derive(Serialize)]
pub struct JsonFormatter {
    version: String,
    timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    dataset: Option<DatasetInfo>,
    outputs: Vec<OutputEntry>,
}

#[derive(Serialize)]
struct DatasetInfo {
    rows: usize,
    columns: usize,
}

#[derive(Serialize)]
struct OutputEntry {
    slot: OutputSlot,
    #[serde(flatten)]
    payload: Payload,
}

#[derive(Serialize)]
#[serde(rename_all = "snake_case")]
enum Payload {
    Members(Vec<String>),
    Details {
        columns: Vec<String>,
        rows: Vec<Vec<Option<String>>>,
    },
    Summary(Vec<VerificationSummaryRow>),
    Chart(ChartSpec),
    Verification {
        chart: ChartSpec,
        counts: String,
    },
    Failed {
        message: String,
    },
}

impl JsonFormatter {
    pub fn new(version: String) -> Self {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        Self {
            version,
            timestamp,
            dataset: None,
            outputs: Vec::new(),
        }
    }

    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string_pretty(self)
    }
}

fn details_payload(batch: &RecordBatch) -> Payload {
    Payload::Details {
        columns: batch_columns(batch),
        rows: batch_rows(batch),
    }
}

impl Reporter for JsonFormatter {
    fn on_start(&self) {}

    fn on_dataset(&mut self, dataset: &Dataset) {
        self.dataset = Some(DatasetInfo {
            rows: dataset.num_rows(),
            columns: dataset.schema().fields().len(),
        });
    }

    fn on_output(&mut self, slot: OutputSlot, value: &OutputValue) {
        let payload = match value {
            OutputValue::Members(members) => Payload::Members(members.clone()),
            OutputValue::Details(batch) => details_payload(batch),
            OutputValue::Summary(summary) => Payload::Summary(summary.clone()),
            OutputValue::Chart(spec) => Payload::Chart(spec.clone()),
            OutputValue::Verification(spec, counts) => Payload::Verification {
                chart: spec.clone(),
                counts: counts.clone(),
            },
            OutputValue::Failed(message) => Payload::Failed {
                message: message.clone(),
            },
        };
        self.outputs.push(OutputEntry { slot, payload });
    }

    fn on_complete(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use surveydash_core::charts::{ChartKind, ChartPoint};

    #[test]
    fn test_json_output_shape() {
        let mut formatter = JsonFormatter::new("0.1.0".to_string());
        formatter.on_output(
            OutputSlot::MemberList,
            &OutputValue::Members(vec!["Alice".to_string(), "Bob".to_string()]),
        );
        formatter.on_output(
            OutputSlot::VerificationChart,
            &OutputValue::Verification(
                ChartSpec {
                    kind: ChartKind::Bar,
                    title: "Verification Status in ID Status".to_string(),
                    x_label: "Status".to_string(),
                    y_label: "Count".to_string(),
                    points: vec![ChartPoint::new("Verified", 2.0)],
                },
                "Verified: 2".to_string(),
            ),
        );

        let value: serde_json::Value =
            serde_json::from_str(&formatter.to_json().unwrap()).unwrap();
        assert_eq!(value["version"], "0.1.0");
        assert_eq!(value["outputs"][0]["slot"], "member_list");
        assert_eq!(value["outputs"][0]["members"][1], "Bob");
        assert_eq!(value["outputs"][1]["slot"], "verification_chart");
        assert_eq!(
            value["outputs"][1]["verification"]["chart"]["kind"],
            "bar"
        );
        assert_eq!(value["outputs"][1]["verification"]["counts"], "Verified: 2");
    }

    #[test]
    fn test_failed_output_serializes_message() {
        let mut formatter = JsonFormatter::new("0.1.0".to_string());
        formatter.on_output(
            OutputSlot::AnalysisChart,
            &OutputValue::Failed("Column 'Gender' not found in dataset".to_string()),
        );
        let value: serde_json::Value =
            serde_json::from_str(&formatter.to_json().unwrap()).unwrap();
        assert_eq!(
            value["outputs"][0]["failed"]["message"],
            "Column 'Gender' not found in dataset"
        );
    }
}
