//! Period error types.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised by strict period parsing and range construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PeriodError {
    /// Token is not one of the supported period tokens.
    #[error("Unknown period token: {0}")]
    UnknownToken(String),

    /// Range start is after its end.
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidRange {
        /// Start date.
        start: NaiveDate,
        /// End date.
        end: NaiveDate,
    },
}
