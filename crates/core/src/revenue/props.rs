//! Property-based tests for revenue aggregation.

use agencyhub_shared::types::FinancialRecordId;
use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::service::RevenueService;
use super::types::PercentChange;
use crate::entities::{FinancialRecord, PaymentStatus};
use crate::period::DateRange;

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
}

/// Strategy for amounts between -1,000.00 and 1,000,000.00.
fn amount() -> impl Strategy<Value = Decimal> {
    (-100_000i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn status() -> impl Strategy<Value = PaymentStatus> {
    prop_oneof![
        Just(PaymentStatus::Paid),
        Just(PaymentStatus::Pending),
        Just(PaymentStatus::Overdue),
        Just(PaymentStatus::Cancelled),
        Just(PaymentStatus::Other),
    ]
}

fn paid_date() -> impl Strategy<Value = Option<NaiveDate>> {
    prop::option::of((0u64..365).prop_map(|offset| base_date() + Days::new(offset)))
}

fn record() -> impl Strategy<Value = FinancialRecord> {
    (status(), amount(), paid_date()).prop_map(|(status, amount, paid_date)| FinancialRecord {
        id: FinancialRecordId::from(1),
        client_id: None,
        description: None,
        amount,
        status,
        due_date: None,
        paid_date,
    })
}

fn range() -> impl Strategy<Value = DateRange> {
    (0u64..365, 0u64..120).prop_map(|(offset, len)| {
        let start = base_date() + Days::new(offset);
        DateRange {
            start,
            end: start + Days::new(len),
        }
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// The total equals the sum over exactly the records satisfying
    /// paid AND dated inside the range AND positive.
    #[test]
    fn prop_total_matches_inclusion_predicate(
        records in prop::collection::vec(record(), 0..40),
        range in range(),
    ) {
        let expected: Decimal = records
            .iter()
            .filter(|r| {
                r.status == PaymentStatus::Paid
                    && r.paid_date.is_some_and(|d| d >= range.start && d <= range.end)
                    && r.amount > Decimal::ZERO
            })
            .map(|r| r.amount)
            .sum();

        prop_assert_eq!(RevenueService::total(&records, &range), expected);
    }

    /// Breaking any single inclusion condition removes the record from the sum.
    #[test]
    fn prop_each_condition_is_required(
        amount in (1i64..100_000_000i64).prop_map(|c| Decimal::new(c, 2)),
        range in range(),
    ) {
        let included = FinancialRecord {
            id: FinancialRecordId::from(1),
            client_id: None,
            description: None,
            amount,
            status: PaymentStatus::Paid,
            due_date: None,
            paid_date: Some(range.start),
        };
        prop_assert_eq!(RevenueService::total(std::slice::from_ref(&included), &range), amount);

        let mut unpaid = included.clone();
        unpaid.status = PaymentStatus::Pending;
        let mut undated = included.clone();
        undated.paid_date = None;
        let mut outside = included.clone();
        outside.paid_date = range.end.succ_opt();
        let mut non_positive = included.clone();
        non_positive.amount = -amount;

        for excluded in [unpaid, undated, outside, non_positive] {
            prop_assert_eq!(RevenueService::total(&[excluded], &range), Decimal::ZERO);
        }
    }

    /// Percent change is the sentinel without a positive baseline, and the
    /// rounded formula otherwise.
    #[test]
    fn prop_percent_change_formula(
        current in amount(),
        previous in amount(),
    ) {
        let change = RevenueService::percent_change(current, Some(previous));
        if previous <= Decimal::ZERO {
            prop_assert_eq!(change, PercentChange::NoPriorData);
        } else {
            let expected = ((current - previous) / previous * Decimal::ONE_HUNDRED)
                .round_dp_with_strategy(1, rust_decimal::RoundingStrategy::MidpointAwayFromZero);
            prop_assert_eq!(change, PercentChange::Change(expected));
            prop_assert!(expected.scale() <= 1);
        }
    }
}
