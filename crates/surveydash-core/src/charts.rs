//! Render-agnostic chart descriptions.
//!
//! A `ChartSpec` carries the computed series alongside the chart kind and
//! labels, so any frontend (terminal, JSON consumer) can draw it without
//! touching the dataset again.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Histogram,
    Bar,
    Pie,
    Scatter,
}

/// One mark of the series: a category or row label and its numeric value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

impl ChartPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<ChartPoint>,
}

impl ChartSpec {
    /// The empty scatter shown before a selection is made.
    pub fn placeholder(title: &str) -> Self {
        Self {
            kind: ChartKind::Scatter,
            title: title.to_string(),
            x_label: String::new(),
            y_label: String::new(),
            points: Vec::new(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.kind == ChartKind::Scatter && self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_shape() {
        let spec = ChartSpec::placeholder("Select an analysis option");
        assert_eq!(spec.kind, ChartKind::Scatter);
        assert_eq!(spec.title, "Select an analysis option");
        assert!(spec.points.is_empty());
        assert!(spec.is_placeholder());
    }
}
