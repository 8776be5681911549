use arrow::record_batch::RecordBatch;
use prettytable::{Cell, Row, Table};
use surveydash_core::Dataset;
use surveydash_core::charts::{ChartKind, ChartSpec};
use surveydash_core::derive::VerificationSummaryRow;
use surveydash_core::surface::{OutputSlot, OutputValue};

use crate::utils::tables::{batch_columns, batch_rows};
use crate::{Reporter, slot_heading};

const BAR_WIDTH: usize = 40;

pub struct StdOutFormatter {
    intro: String,
    intro_len: usize,
}

impl StdOutFormatter {
    pub fn new(version: String) -> Self {
        let s = format!("SurveyDash v{} - Household Survey Report", version);
        let n = s.len();
        Self {
            intro: s,
            intro_len: n,
        }
    }

    pub fn print_dataset(&self, rows: usize, columns: usize) {
        println!("Loaded {} rows, {} columns", rows, columns);
    }

    pub fn print_members(&self, members: &[String]) {
        if members.is_empty() {
            println!("  (no contact selected)");
            return;
        }
        for member in members {
            println!("  - {}", member);
        }
    }

    pub fn print_details(&self, batch: &RecordBatch) {
        if batch.num_rows() == 0 {
            println!("  (no rows)");
            return;
        }
        let mut table = Table::new();
        table.add_row(Row::new(
            batch_columns(batch)
                .iter()
                .map(|name| Cell::new(name))
                .collect(),
        ));
        for row in batch_rows(batch) {
            table.add_row(Row::new(
                row.iter()
                    .map(|value| Cell::new(value.as_deref().unwrap_or("")))
                    .collect(),
            ));
        }
        table.printstd();
    }

    pub fn print_summary(&self, summary: &[VerificationSummaryRow]) {
        if summary.is_empty() {
            println!("  (no contact selected)");
            return;
        }
        let mut table = Table::new();
        table.add_row(Row::new(vec![
            Cell::new("Name"),
            Cell::new("Verified"),
            Cell::new("Unverified"),
        ]));
        for row in summary {
            table.add_row(Row::new(vec![
                Cell::new(&row.name),
                Cell::new(&row.verified.to_string()),
                Cell::new(&row.unverified.to_string()),
            ]));
        }
        table.printstd();
    }

    pub fn print_chart(&self, spec: &ChartSpec) {
        println!("{} [{}]", spec.title, kind_label(spec.kind));
        if spec.points.is_empty() {
            println!("  (no data)");
            return;
        }
        let label_width = spec
            .points
            .iter()
            .map(|p| p.label.len())
            .max()
            .unwrap_or(0);
        let max = spec
            .points
            .iter()
            .map(|p| p.value)
            .fold(f64::NEG_INFINITY, f64::max);
        for point in &spec.points {
            let bar = if max > 0.0 {
                "#".repeat(((point.value / max) * BAR_WIDTH as f64).round() as usize)
            } else {
                String::new()
            };
            println!(
                "  {:<label_width$} | {:<BAR_WIDTH$} {}",
                point.label, bar, point.value
            );
        }
    }

    pub fn print_verification(&self, spec: &ChartSpec, counts: &str) {
        self.print_chart(spec);
        if !counts.is_empty() {
            println!("\nVerification Counts");
            println!("{}", counts);
        }
    }

    pub fn print_failed(&self, message: &str) {
        println!("  Error: {}", message);
    }
}

fn kind_label(kind: ChartKind) -> &'static str {
    match kind {
        ChartKind::Histogram => "histogram",
        ChartKind::Bar => "bar",
        ChartKind::Pie => "pie",
        ChartKind::Scatter => "scatter",
    }
}

impl Reporter for StdOutFormatter {
    fn on_start(&self) {
        let i = "=".repeat(self.intro_len);

        println!("{}", self.intro);
        println!("{}", i);
    }

    fn on_dataset(&mut self, dataset: &Dataset) {
        self.print_dataset(dataset.num_rows(), dataset.schema().fields().len());
    }

    fn on_output(&mut self, slot: OutputSlot, value: &OutputValue) {
        println!("\n{}", slot_heading(slot));
        match value {
            OutputValue::Members(members) => self.print_members(members),
            OutputValue::Details(batch) => self.print_details(batch),
            OutputValue::Summary(summary) => self.print_summary(summary),
            OutputValue::Chart(spec) => self.print_chart(spec),
            OutputValue::Verification(spec, counts) => self.print_verification(spec, counts),
            OutputValue::Failed(message) => self.print_failed(message),
        }
    }

    fn on_complete(&mut self) {
        println!("\n{}", "=".repeat(self.intro_len));
    }
}
