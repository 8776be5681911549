//! The derivation functions at the heart of the report.
//!
//! Each one is a pure function of the immutable [`Dataset`](crate::Dataset)
//! and a small selection input; invoked twice with the same inputs it
//! returns identical output. An absent selection is a defined empty or
//! placeholder result, never an error.

pub mod analysis;
pub mod counts;
pub mod details;
pub mod members;
pub mod verification;

pub use analysis::{AnalysisKind, analysis_chart};
pub use counts::{category_counts, value_counts};
pub use details::detail_rows;
pub use members::list_members;
pub use verification::{VerificationSummaryRow, verification_chart, verification_summary};
