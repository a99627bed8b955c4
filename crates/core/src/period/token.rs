//! Period tokens.

use serde::{Deserialize, Serialize};

use super::error::PeriodError;

/// A symbolic reporting window.
///
/// Parsing with [`std::str::FromStr`] is strict. Callers that must never fail
/// (UI selectors fed by query strings) use [`PeriodToken::parse_range_or_default`]
/// or [`PeriodToken::parse_buckets_or_default`], which fall back to
/// `current_month` and `6months` respectively.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PeriodToken {
    /// The last 7 days up to today.
    #[serde(rename = "7d")]
    Last7Days,
    /// The last 30 days up to today.
    #[serde(rename = "30d")]
    Last30Days,
    /// The last 90 days up to today.
    #[serde(rename = "90d")]
    Last90Days,
    /// From the first of this month up to today.
    #[default]
    #[serde(rename = "current_month")]
    CurrentMonth,
    /// The whole previous calendar month.
    #[serde(rename = "last_month")]
    LastMonth,
    /// From January 1 up to today.
    #[serde(rename = "current_year")]
    CurrentYear,
    /// Six month buckets ending with the current month.
    #[serde(rename = "6months")]
    SixMonths,
    /// Twelve month buckets ending with the current month.
    #[serde(rename = "12months")]
    TwelveMonths,
}

impl PeriodToken {
    /// Every supported token.
    pub const ALL: [Self; 8] = [
        Self::Last7Days,
        Self::Last30Days,
        Self::Last90Days,
        Self::CurrentMonth,
        Self::LastMonth,
        Self::CurrentYear,
        Self::SixMonths,
        Self::TwelveMonths,
    ];

    /// Default for range-shaped reports.
    pub const DEFAULT_RANGE: Self = Self::CurrentMonth;

    /// Default for bucket-shaped reports.
    pub const DEFAULT_BUCKETS: Self = Self::SixMonths;

    /// Returns the wire form of the token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Last7Days => "7d",
            Self::Last30Days => "30d",
            Self::Last90Days => "90d",
            Self::CurrentMonth => "current_month",
            Self::LastMonth => "last_month",
            Self::CurrentYear => "current_year",
            Self::SixMonths => "6months",
            Self::TwelveMonths => "12months",
        }
    }

    /// Number of month buckets for bucket-shaped tokens.
    #[must_use]
    pub const fn bucket_count(self) -> Option<u32> {
        match self {
            Self::SixMonths => Some(6),
            Self::TwelveMonths => Some(12),
            _ => None,
        }
    }

    /// Number of trailing days for day-window tokens.
    #[must_use]
    pub const fn trailing_days(self) -> Option<u64> {
        match self {
            Self::Last7Days => Some(7),
            Self::Last30Days => Some(30),
            Self::Last90Days => Some(90),
            _ => None,
        }
    }

    /// Parses a token, falling back to `current_month` when it is unknown.
    pub fn parse_range_or_default(raw: &str) -> Self {
        raw.parse().unwrap_or_else(|_| {
            tracing::warn!(token = raw, fallback = Self::DEFAULT_RANGE.as_str(), "Unknown period token");
            Self::DEFAULT_RANGE
        })
    }

    /// Parses a bucket token, falling back to `6months` when it is unknown
    /// or not bucket-shaped.
    pub fn parse_buckets_or_default(raw: &str) -> Self {
        match raw.parse::<Self>() {
            Ok(token) if token.bucket_count().is_some() => token,
            _ => {
                tracing::warn!(
                    token = raw,
                    fallback = Self::DEFAULT_BUCKETS.as_str(),
                    "Not a bucket period token"
                );
                Self::DEFAULT_BUCKETS
            }
        }
    }
}

impl std::fmt::Display for PeriodToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PeriodToken {
    type Err = PeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|token| token.as_str() == trimmed)
            .ok_or_else(|| PeriodError::UnknownToken(s.to_string()))
    }
}
