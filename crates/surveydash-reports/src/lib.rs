pub mod formatters;
pub mod utils;

use surveydash_core::Dataset;
use surveydash_core::surface::{OutputSlot, OutputValue};

pub use formatters::{json::JsonFormatter, stdout::StdOutFormatter};

pub trait Reporter {
    fn on_start(&self);
    fn on_dataset(&mut self, dataset: &Dataset);
    fn on_output(&mut self, slot: OutputSlot, value: &OutputValue);
    fn on_complete(&mut self);
}

/// Section heading for an output slot, matching the report page layout.
pub fn slot_heading(slot: OutputSlot) -> &'static str {
    match slot {
        OutputSlot::MemberList => "Family Members",
        OutputSlot::DetailRows => "Family Member Details",
        OutputSlot::VerificationSummary => "Verification Summary",
        OutputSlot::AnalysisChart => "Data Analysis",
        OutputSlot::VerificationChart => "Verification Analysis",
    }
}
