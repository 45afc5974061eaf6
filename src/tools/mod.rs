//! Reporting tools
//!
//! Read-only views composed from the models and the calculator.

pub mod summary;

pub use summary::{day_summary, DaySummary, SummaryError};
