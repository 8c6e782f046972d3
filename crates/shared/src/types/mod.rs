//! Common types used across the application.

pub mod money;
pub mod report;

pub use money::{Currency, format_amount};
pub use report::PreviousNetIncome;
