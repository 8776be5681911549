//! Column contract the dataset loader enforces.
//!
//! The survey sheet is free-form, but every derivation hard-codes the
//! columns below; they are named constants rather than configuration so the
//! contract is visible at compile time.

/// Household/group identifier; groups family members under one contact.
pub const COL_MOBILE: &str = "Mobile";

/// Respondent name within a household.
pub const COL_NAME: &str = "Name";

pub const COL_GENDER: &str = "Gender";

pub const COL_DOB: &str = "DOB";

pub const COL_TOTAL_COWS: &str = "Total Cows";

pub const COL_LAND: &str = "Does the family own any agricultural land presently?";

/// Any column whose name contains this substring is a verification-status
/// column.
pub const STATUS_MARKER: &str = "Status";

/// Exact cell literals counted by the verification summary.
pub const VERIFIED: &str = "Verified";
pub const UNVERIFIED: &str = "Unverified";

/// Columns that must be present for the report to function; checked once at
/// load time.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    COL_MOBILE,
    COL_NAME,
    COL_GENDER,
    COL_DOB,
    COL_TOTAL_COWS,
    COL_LAND,
];
