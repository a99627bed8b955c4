//! Reporting periods.
//!
//! Maps a symbolic period token (`7d`, `current_month`, `6months`, ...) to a
//! concrete inclusive date range or to an ordered list of month buckets.

pub mod error;
pub mod resolver;
pub mod token;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::PeriodError;
pub use resolver::PeriodResolver;
pub use token::PeriodToken;
pub use types::{DateRange, MonthBucket};
