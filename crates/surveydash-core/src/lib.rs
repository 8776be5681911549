pub mod charts;
pub mod dataset;
pub mod derive;
pub mod errors;
pub mod schema;
pub mod surface;

pub use charts::{ChartKind, ChartPoint, ChartSpec};
pub use dataset::{Contact, Dataset, FileFormat};
pub use derive::{
    AnalysisKind, VerificationSummaryRow, analysis_chart, detail_rows, list_members,
    verification_chart, verification_summary,
};
pub use errors::DataError;
pub use surface::{OutputSlot, OutputValue, SelectionEvent, SelectionState, Surface};
