//! Report error types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised while validating trial balance input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportError {
    /// A required field is absent or empty.
    #[error("Row {row}: missing field `{field}`")]
    MissingField {
        /// Zero-based row index.
        row: usize,
        /// Field name.
        field: &'static str,
    },

    /// A debit or credit value is not numeric.
    #[error("Row {row} ({code}): `{field}` is not numeric: {value}")]
    NonNumericAmount {
        /// Zero-based row index.
        row: usize,
        /// Account code of the row.
        code: String,
        /// Field name.
        field: &'static str,
        /// Offending value as received.
        value: String,
    },

    /// A debit or credit exceeds the supported magnitude.
    #[error("Row {row} ({code}): `{field}` is out of range: {value}")]
    AmountOutOfRange {
        /// Zero-based row index.
        row: usize,
        /// Account code of the row.
        code: String,
        /// Field name.
        field: &'static str,
        /// Offending amount.
        value: Decimal,
    },

    /// The same account code appears twice in one snapshot.
    #[error("Duplicate account code in snapshot: {0}")]
    DuplicateAccountCode(String),

    /// Invalid date range.
    #[error("Invalid date range: previous period {previous} is not before {current}")]
    InvalidDateRange {
        /// Current period end date.
        current: NaiveDate,
        /// Previous period end date.
        previous: NaiveDate,
    },
}
