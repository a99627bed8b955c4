//! Tests for period resolution.

use agencyhub_shared::types::Locale;
use chrono::NaiveDate;
use rstest::rstest;

use super::{DateRange, PeriodError, PeriodResolver, PeriodToken};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[rstest]
#[case("7d", PeriodToken::Last7Days)]
#[case("30d", PeriodToken::Last30Days)]
#[case("90d", PeriodToken::Last90Days)]
#[case("current_month", PeriodToken::CurrentMonth)]
#[case("last_month", PeriodToken::LastMonth)]
#[case("current_year", PeriodToken::CurrentYear)]
#[case("6months", PeriodToken::SixMonths)]
#[case("12months", PeriodToken::TwelveMonths)]
fn test_token_parses(#[case] raw: &str, #[case] expected: PeriodToken) {
    assert_eq!(raw.parse::<PeriodToken>().unwrap(), expected);
    assert_eq!(expected.to_string(), raw);
}

#[test]
fn test_strict_parse_rejects_unknown() {
    assert_eq!(
        "fortnight".parse::<PeriodToken>(),
        Err(PeriodError::UnknownToken("fortnight".to_string()))
    );
}

#[test]
fn test_range_fallback_is_current_month() {
    assert_eq!(
        PeriodToken::parse_range_or_default("fortnight"),
        PeriodToken::CurrentMonth
    );
    assert_eq!(
        PeriodToken::parse_range_or_default("90d"),
        PeriodToken::Last90Days
    );
}

#[test]
fn test_bucket_fallback_is_six_months() {
    assert_eq!(
        PeriodToken::parse_buckets_or_default("fortnight"),
        PeriodToken::SixMonths
    );
    assert_eq!(
        PeriodToken::parse_buckets_or_default("current_month"),
        PeriodToken::SixMonths
    );
    assert_eq!(
        PeriodToken::parse_buckets_or_default("12months"),
        PeriodToken::TwelveMonths
    );
}

#[test]
fn test_token_serde_uses_wire_form() {
    let json = serde_json::to_string(&PeriodToken::SixMonths).unwrap();
    assert_eq!(json, "\"6months\"");
    let token: PeriodToken = serde_json::from_str("\"last_month\"").unwrap();
    assert_eq!(token, PeriodToken::LastMonth);
}

#[rstest]
#[case(PeriodToken::Last7Days, date(2026, 3, 8))]
#[case(PeriodToken::Last30Days, date(2026, 2, 13))]
#[case(PeriodToken::Last90Days, date(2025, 12, 15))]
#[case(PeriodToken::CurrentMonth, date(2026, 3, 1))]
#[case(PeriodToken::CurrentYear, date(2026, 1, 1))]
#[case(PeriodToken::SixMonths, date(2025, 10, 1))]
#[case(PeriodToken::TwelveMonths, date(2025, 4, 1))]
fn test_range_ends_today(#[case] token: PeriodToken, #[case] start: NaiveDate) {
    let today = date(2026, 3, 15);
    let range = PeriodResolver::range(token, today);
    assert_eq!(range.start, start);
    assert_eq!(range.end, today);
}

#[test]
fn test_last_month_is_whole_previous_month() {
    let range = PeriodResolver::range(PeriodToken::LastMonth, date(2024, 3, 10));
    assert_eq!(range.start, date(2024, 2, 1));
    assert_eq!(range.end, date(2024, 2, 29));
}

#[test]
fn test_last_month_crosses_year() {
    let range = PeriodResolver::range(PeriodToken::LastMonth, date(2026, 1, 2));
    assert_eq!(range.start, date(2025, 12, 1));
    assert_eq!(range.end, date(2025, 12, 31));
}

#[test]
fn test_current_month_on_first_day_is_single_day() {
    let today = date(2026, 10, 1);
    let range = PeriodResolver::range(PeriodToken::CurrentMonth, today);
    assert_eq!(range.days(), 1);
    assert!(range.contains(today));
}

#[rstest]
#[case(PeriodToken::Last7Days, date(2026, 2, 28), date(2026, 3, 7))]
#[case(PeriodToken::CurrentMonth, date(2026, 2, 1), date(2026, 2, 28))]
#[case(PeriodToken::LastMonth, date(2026, 1, 1), date(2026, 1, 31))]
#[case(PeriodToken::CurrentYear, date(2025, 1, 1), date(2025, 12, 31))]
#[case(PeriodToken::SixMonths, date(2025, 4, 1), date(2025, 9, 30))]
fn test_previous_range(
    #[case] token: PeriodToken,
    #[case] start: NaiveDate,
    #[case] end: NaiveDate,
) {
    let previous = PeriodResolver::previous_range(token, date(2026, 3, 15));
    assert_eq!(previous, DateRange { start, end });
}

#[test]
fn test_previous_day_window_has_same_length() {
    let today = date(2026, 3, 15);
    for token in [
        PeriodToken::Last7Days,
        PeriodToken::Last30Days,
        PeriodToken::Last90Days,
    ] {
        let current = PeriodResolver::range(token, today);
        let previous = PeriodResolver::previous_range(token, today);
        assert_eq!(current.days(), previous.days());
        assert_eq!(previous.end.succ_opt().unwrap(), current.start);
    }
}

#[test]
fn test_six_month_buckets_cross_year() {
    let buckets = PeriodResolver::buckets(PeriodToken::SixMonths, date(2026, 2, 10), Locale::En);
    let labels: Vec<&str> = buckets.iter().map(|b| b.label.as_str()).collect();

    assert_eq!(labels, ["Sep", "Oct", "Nov", "Dec", "Jan", "Feb"]);
    assert_eq!(buckets[0].start, date(2025, 9, 1));
    assert_eq!(buckets[0].end, date(2025, 9, 30));
    assert_eq!(buckets[5].start, date(2026, 2, 1));
    assert_eq!(buckets[5].end, date(2026, 2, 28));
}

#[test]
fn test_twelve_month_buckets_are_contiguous() {
    let buckets =
        PeriodResolver::buckets(PeriodToken::TwelveMonths, date(2026, 10, 19), Locale::PtBr);
    assert_eq!(buckets.len(), 12);
    assert_eq!(buckets[0].label, "Nov");
    assert_eq!(buckets[11].label, "Out");

    for pair in buckets.windows(2) {
        assert_eq!(pair[0].end.succ_opt().unwrap(), pair[1].start);
    }
}

#[test]
fn test_non_bucket_token_falls_back_to_six_buckets() {
    let buckets = PeriodResolver::buckets(PeriodToken::Last7Days, date(2026, 10, 19), Locale::En);
    assert_eq!(buckets.len(), 6);
}

#[test]
fn test_bucket_range_covers_range_of_token() {
    let today = date(2026, 10, 19);
    let buckets = PeriodResolver::buckets(PeriodToken::SixMonths, today, Locale::En);
    let range = PeriodResolver::range(PeriodToken::SixMonths, today);
    assert_eq!(buckets[0].start, range.start);
    assert!(buckets[5].range().contains(range.end));
}

#[test]
fn test_date_range_new_rejects_inverted() {
    let result = DateRange::new(date(2026, 3, 2), date(2026, 3, 1));
    assert!(matches!(result, Err(PeriodError::InvalidRange { .. })));
    assert!(DateRange::new(date(2026, 3, 1), date(2026, 3, 1)).is_ok());
}
