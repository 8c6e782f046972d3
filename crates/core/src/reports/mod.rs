//! Financial report generation.
//!
//! This module turns trial balance snapshots into reports:
//! - Account classification into balance sheet sections
//! - Normal-balance calculation
//! - Two-period balance sheet
//! - Net income
//! - Comparison periods
//! - Boundary validation of incoming rows

pub mod balance;
pub mod classification;
pub mod error;
pub mod period;
pub mod service;
pub mod types;
pub mod validation;

#[cfg(test)]
mod tests;

pub use balance::{NormalBalance, balance};
pub use classification::{
    AccountClass, NON_CURRENT_ASSET_TYPES, NON_CURRENT_LIABILITY_TYPES, NonCurrentKeywords,
    ParsedAccountCode, classify, classify_with,
};
pub use error::ReportError;
pub use period::{ReportPeriod, prior_year_end};
pub use service::{ReportService, compare_codes};
pub use types::*;
pub use validation::{
    MAX_AMOUNT, RawTrialBalanceAccount, TrialBalancePayload, ValidatedTrialBalance, ValidationWarning,
    parse_amount, validate_payload, validate_trial_balance,
};
