//! Period resolution against a given "today".

use agencyhub_shared::types::Locale;
use chrono::{Datelike, Days, Months, NaiveDate};

use super::token::PeriodToken;
use super::types::{DateRange, MonthBucket};

/// Resolves period tokens into concrete dates.
///
/// Every function takes `today` explicitly so results are reproducible.
pub struct PeriodResolver;

impl PeriodResolver {
    /// Resolves a token to an inclusive date range.
    ///
    /// - `7d`/`30d`/`90d`: `[today - N days, today]`
    /// - `current_month`: `[first of month, today]`
    /// - `last_month`: the whole previous calendar month
    /// - `current_year`: `[January 1, today]`
    /// - `6months`/`12months`: `[first day of the oldest bucket, today]`
    #[must_use]
    pub fn range(token: PeriodToken, today: NaiveDate) -> DateRange {
        let start = match token {
            PeriodToken::Last7Days | PeriodToken::Last30Days | PeriodToken::Last90Days => {
                let days = token.trailing_days().unwrap_or(0);
                today.checked_sub_days(Days::new(days)).unwrap_or(NaiveDate::MIN)
            }
            PeriodToken::CurrentMonth => first_of_month(today),
            PeriodToken::LastMonth => {
                let start = months_before(first_of_month(today), 1);
                return DateRange {
                    start,
                    end: last_of_month(start),
                };
            }
            PeriodToken::CurrentYear => first_of_year(today),
            PeriodToken::SixMonths | PeriodToken::TwelveMonths => {
                let count = token.bucket_count().unwrap_or(1);
                months_before(first_of_month(today), count - 1)
            }
        };

        DateRange { start, end: today }
    }

    /// Resolves a token to the range it is compared against for KPI deltas.
    ///
    /// - day windows: the equally long window ending the day before
    /// - `current_month`: the whole previous month
    /// - `last_month`: the whole month before that
    /// - `current_year`: the whole previous year
    /// - bucket tokens: the N whole months before the oldest bucket
    #[must_use]
    pub fn previous_range(token: PeriodToken, today: NaiveDate) -> DateRange {
        let current = Self::range(token, today);
        let day_before = current.start.pred_opt().unwrap_or(NaiveDate::MIN);

        match token {
            PeriodToken::Last7Days | PeriodToken::Last30Days | PeriodToken::Last90Days => {
                let days = u64::try_from(current.days() - 1).unwrap_or(0);
                DateRange {
                    start: day_before.checked_sub_days(Days::new(days)).unwrap_or(NaiveDate::MIN),
                    end: day_before,
                }
            }
            PeriodToken::CurrentMonth | PeriodToken::LastMonth => DateRange {
                start: first_of_month(day_before),
                end: day_before,
            },
            PeriodToken::CurrentYear => DateRange {
                start: first_of_year(day_before),
                end: day_before,
            },
            PeriodToken::SixMonths | PeriodToken::TwelveMonths => {
                let count = token.bucket_count().unwrap_or(1);
                DateRange {
                    start: months_before(current.start, count),
                    end: day_before,
                }
            }
        }
    }

    /// Resolves a token to month buckets, oldest first.
    ///
    /// Tokens that are not bucket-shaped fall back to `6months`.
    #[must_use]
    pub fn buckets(token: PeriodToken, today: NaiveDate, locale: Locale) -> Vec<MonthBucket> {
        let count = token
            .bucket_count()
            .or(PeriodToken::DEFAULT_BUCKETS.bucket_count())
            .unwrap_or(6);
        Self::month_buckets(count, today, locale)
    }

    /// Builds `count` whole-month buckets ending with the month of `today`.
    #[must_use]
    pub fn month_buckets(count: u32, today: NaiveDate, locale: Locale) -> Vec<MonthBucket> {
        let current = first_of_month(today);

        (0..count)
            .rev()
            .map(|offset| {
                let start = months_before(current, offset);
                MonthBucket {
                    label: locale.month_abbreviation(start.month()).to_string(),
                    start,
                    end: last_of_month(start),
                }
            })
            .collect()
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.day0()))
}

fn first_of_year(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.ordinal0()))
}

fn last_of_month(date: NaiveDate) -> NaiveDate {
    first_of_month(date)
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(NaiveDate::MAX)
}

fn months_before(month_start: NaiveDate, months: u32) -> NaiveDate {
    month_start
        .checked_sub_months(Months::new(months))
        .unwrap_or(NaiveDate::MIN)
}
