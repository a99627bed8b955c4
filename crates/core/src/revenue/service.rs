//! Revenue service.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

use super::types::{OverdueSummary, PercentChange, RevenueSeries};
use crate::entities::{FinancialRecord, PaymentStatus};
use crate::period::{DateRange, MonthBucket};

/// Revenue aggregation over financial records.
pub struct RevenueService;

impl RevenueService {
    /// Returns true if the record counts as revenue within `range`.
    ///
    /// A record counts iff it is paid, has a payment date inside the range,
    /// and has a positive amount.
    #[must_use]
    pub fn is_counted(record: &FinancialRecord, range: &DateRange) -> bool {
        record.status == PaymentStatus::Paid
            && record.paid_date.is_some_and(|paid| range.contains(paid))
            && record.amount > Decimal::ZERO
    }

    /// Paid revenue received within `range`.
    #[must_use]
    pub fn total(records: &[FinancialRecord], range: &DateRange) -> Decimal {
        records
            .iter()
            .filter(|record| Self::is_counted(record, range))
            .map(|record| record.amount)
            .sum()
    }

    /// Paid revenue per bucket, in bucket order.
    #[must_use]
    pub fn bucket_totals(records: &[FinancialRecord], buckets: &[MonthBucket]) -> RevenueSeries {
        let (labels, totals): (Vec<_>, Vec<_>) = buckets
            .iter()
            .map(|bucket| (bucket.label.clone(), Self::total(records, &bucket.range())))
            .unzip();

        RevenueSeries { labels, totals }
    }

    /// Percent change from `previous` to `current`.
    ///
    /// `(current - previous) / previous * 100`, rounded half away from zero to
    /// one decimal. Without a positive baseline, or when the ratio does not
    /// fit in a `Decimal`, the result is [`PercentChange::NoPriorData`].
    #[must_use]
    pub fn percent_change(current: Decimal, previous: Option<Decimal>) -> PercentChange {
        match previous {
            Some(previous) if previous > Decimal::ZERO => current
                .checked_sub(previous)
                .and_then(|delta| delta.checked_div(previous))
                .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
                .map_or(PercentChange::NoPriorData, |change| {
                    PercentChange::Change(
                        change.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero),
                    )
                }),
            _ => PercentChange::NoPriorData,
        }
    }

    /// Records still owed after their due date.
    ///
    /// Counts records the backend flagged `overdue`, plus `pending` records
    /// whose due date is before `today`.
    #[must_use]
    pub fn overdue_payments(records: &[FinancialRecord], today: NaiveDate) -> OverdueSummary {
        records
            .iter()
            .filter(|record| match record.status {
                PaymentStatus::Overdue => true,
                PaymentStatus::Pending => record.due_date.is_some_and(|due| due < today),
                _ => false,
            })
            .fold(OverdueSummary::default(), |mut summary, record| {
                summary.count += 1;
                summary.total_amount += record.amount;
                summary
            })
    }
}
