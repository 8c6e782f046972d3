//! Comparison periods for two-period reports.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::error::ReportError;

/// Current and previous snapshot dates of a comparative report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportPeriod {
    /// Current period end date.
    pub end_date: NaiveDate,
    /// Previous period end date.
    pub previous_end_date: NaiveDate,
}

impl ReportPeriod {
    /// Creates a report period.
    ///
    /// Without an explicit previous date, the comparison is against the
    /// close of the prior financial year (31 December of the year before).
    ///
    /// # Errors
    ///
    /// Returns `InvalidDateRange` if the previous date is not strictly
    /// before the current one.
    pub fn new(
        end_date: NaiveDate,
        previous_end_date: Option<NaiveDate>,
    ) -> Result<Self, ReportError> {
        let previous_end_date =
            previous_end_date.unwrap_or_else(|| prior_year_end(end_date));

        if previous_end_date >= end_date {
            return Err(ReportError::InvalidDateRange {
                current: end_date,
                previous: previous_end_date,
            });
        }

        Ok(Self {
            end_date,
            previous_end_date,
        })
    }
}

/// 31 December of the year before `date`.
#[must_use]
pub fn prior_year_end(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year() - 1, 12, 31).unwrap_or(NaiveDate::MIN)
}
