//! The reactive surface: wires picker changes to derivations and output
//! slots.
//!
//! The wiring is an explicit table of (input, output slot, handler)
//! entries. Applying a selection event updates the owned state, re-runs
//! only the handlers bound to that input, and hands back the refreshed
//! slots. Nothing is cached: every value is recomputed from the immutable
//! dataset.

use arrow::record_batch::RecordBatch;
use serde::Serialize;
use tracing::error;

use crate::charts::ChartSpec;
use crate::dataset::Dataset;
use crate::derive::{
    AnalysisKind, VerificationSummaryRow, analysis_chart, detail_rows, list_members,
    verification_chart, verification_summary,
};
use crate::errors::DataError;

/// Current picker values; all empty until the user chooses. Owned by one
/// surface instance per session, never shared.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    pub contact: Option<String>,
    pub analysis: Option<AnalysisKind>,
    pub verification: Option<String>,
}

/// One user interaction with a picker. `None` clears the selection.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionEvent {
    Contact(Option<String>),
    Analysis(Option<AnalysisKind>),
    Verification(Option<String>),
}

/// The picker an event came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Contact,
    Analysis,
    Verification,
}

/// Where a derived value lands in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputSlot {
    MemberList,
    DetailRows,
    VerificationSummary,
    AnalysisChart,
    VerificationChart,
}

/// A freshly derived value, or the error placeholder for its slot.
#[derive(Debug, Clone, PartialEq)]
pub enum OutputValue {
    Members(Vec<String>),
    Details(RecordBatch),
    Summary(Vec<VerificationSummaryRow>),
    Chart(ChartSpec),
    Verification(ChartSpec, String),
    Failed(String),
}

type Handler = fn(&Dataset, &SelectionState) -> Result<OutputValue, DataError>;

/// The (input, output, handler) wiring: each picker drives a fixed set of
/// output slots.
const BINDINGS: &[(InputKind, OutputSlot, Handler)] = &[
    (InputKind::Contact, OutputSlot::MemberList, derive_members),
    (InputKind::Contact, OutputSlot::DetailRows, derive_details),
    (
        InputKind::Contact,
        OutputSlot::VerificationSummary,
        derive_summary,
    ),
    (
        InputKind::Analysis,
        OutputSlot::AnalysisChart,
        derive_analysis,
    ),
    (
        InputKind::Verification,
        OutputSlot::VerificationChart,
        derive_verification,
    ),
];

fn derive_members(dataset: &Dataset, state: &SelectionState) -> Result<OutputValue, DataError> {
    Ok(OutputValue::Members(list_members(
        dataset,
        state.contact.as_deref(),
    )?))
}

fn derive_details(dataset: &Dataset, state: &SelectionState) -> Result<OutputValue, DataError> {
    Ok(OutputValue::Details(detail_rows(
        dataset,
        state.contact.as_deref(),
    )?))
}

fn derive_summary(dataset: &Dataset, state: &SelectionState) -> Result<OutputValue, DataError> {
    Ok(OutputValue::Summary(verification_summary(
        dataset,
        state.contact.as_deref(),
    )?))
}

fn derive_analysis(dataset: &Dataset, state: &SelectionState) -> Result<OutputValue, DataError> {
    Ok(OutputValue::Chart(analysis_chart(dataset, state.analysis)?))
}

fn derive_verification(
    dataset: &Dataset,
    state: &SelectionState,
) -> Result<OutputValue, DataError> {
    let (spec, text) = verification_chart(dataset, state.verification.as_deref())?;
    Ok(OutputValue::Verification(spec, text))
}

/// One session's view over the dataset: the selection state plus the
/// dispatch logic. Synchronous and single-threaded; a failing derivation is
/// logged and confined to its own slot.
pub struct Surface<'a> {
    dataset: &'a Dataset,
    state: SelectionState,
}

impl<'a> Surface<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        Self {
            dataset,
            state: SelectionState::default(),
        }
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Apply one picker change and recompute the slots bound to it.
    pub fn apply(&mut self, event: SelectionEvent) -> Vec<(OutputSlot, OutputValue)> {
        let input = match event {
            SelectionEvent::Contact(value) => {
                self.state.contact = value;
                InputKind::Contact
            }
            SelectionEvent::Analysis(kind) => {
                self.state.analysis = kind;
                InputKind::Analysis
            }
            SelectionEvent::Verification(column) => {
                self.state.verification = column;
                InputKind::Verification
            }
        };
        self.run_bindings(|bound| bound == input)
    }

    /// Recompute every slot from the current state.
    pub fn refresh_all(&self) -> Vec<(OutputSlot, OutputValue)> {
        self.run_bindings(|_| true)
    }

    fn run_bindings(
        &self,
        matches: impl Fn(InputKind) -> bool,
    ) -> Vec<(OutputSlot, OutputValue)> {
        BINDINGS
            .iter()
            .filter(|(input, _, _)| matches(*input))
            .map(|(_, slot, handler)| {
                let value = handler(self.dataset, &self.state).unwrap_or_else(|err| {
                    error!(slot = ?slot, %err, "derivation failed");
                    OutputValue::Failed(err.to_string())
                });
                (*slot, value)
            })
            .collect()
    }
}
