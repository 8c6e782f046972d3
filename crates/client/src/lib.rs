//! HTTP client for the accounting service.
//!
//! Fetches trial balance snapshots from
//! `GET {base_url}/journals/trial-balance?end_date=YYYY-MM-DD` and hands
//! them, validated, to the report engine.

pub mod client;
pub mod envelope;
pub mod error;

pub use client::{PeriodSnapshots, TrialBalanceClient};
pub use envelope::ApiResponse;
pub use error::ClientError;
