// Rust guideline compliant 2026-10-13

//! Unit tests for the FSM module.
//!
//! These tests validate book status transitions and the due-date policy.

use chrono::{Datelike, FixedOffset, NaiveDate, TimeZone, Timelike, Utc};
use chrono_tz::America::New_York;
use proptest::prelude::*;
use stacks_core::fsm::{due_date_for, LOAN_PERIOD_DAYS};
use stacks_core::BookStatus;

#[test]
fn test_available_to_issued() {
    assert!(
        BookStatus::Available
            .can_transition_to(BookStatus::Issued)
            .is_ok(),
        "Should allow Available → Issued"
    );
}

#[test]
fn test_issued_to_available() {
    assert!(
        BookStatus::Issued
            .can_transition_to(BookStatus::Available)
            .is_ok(),
        "Should allow Issued → Available"
    );
}

#[test]
fn test_self_transitions_rejected() {
    assert!(BookStatus::Issued
        .can_transition_to(BookStatus::Issued)
        .is_err());
    assert!(BookStatus::Available
        .can_transition_to(BookStatus::Available)
        .is_err());
}

#[test]
fn test_valid_transitions() {
    assert_eq!(
        BookStatus::Available.valid_transitions(),
        vec![BookStatus::Issued]
    );
    assert_eq!(
        BookStatus::Issued.valid_transitions(),
        vec![BookStatus::Available]
    );
}

#[test]
fn test_initial_status_is_available() {
    assert_eq!(BookStatus::default(), BookStatus::Available);
}

#[test]
fn test_due_date_two_weeks() {
    let issued = Utc.with_ymd_and_hms(2024, 1, 20, 14, 5, 0).unwrap();
    let due = due_date_for(&issued, LOAN_PERIOD_DAYS);
    assert_eq!(
        (due.year(), due.month(), due.day()),
        (2024, 2, 3),
        "Issuing on 2024-01-20 should be due on 2024-02-03"
    );
}

#[test]
fn test_due_date_leap_day() {
    let issued = Utc.with_ymd_and_hms(2024, 2, 20, 0, 0, 0).unwrap();
    let due = due_date_for(&issued, LOAN_PERIOD_DAYS);
    assert_eq!((due.month(), due.day()), (3, 5));
}

#[test]
fn test_due_date_keeps_wall_clock_across_dst() {
    // Spring forward on 2024-03-10: EST (-05:00) to EDT (-04:00).
    let issued = New_York.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
    let due = due_date_for(&issued, LOAN_PERIOD_DAYS);
    assert_eq!(
        due.naive_local(),
        NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    );
    assert_eq!(due.with_timezone(&Utc), Utc.with_ymd_and_hms(2024, 3, 15, 16, 0, 0).unwrap());

    // Fall back on 2024-11-03: EDT to EST.
    let issued = New_York.with_ymd_and_hms(2024, 10, 27, 12, 0, 0).unwrap();
    let due = due_date_for(&issued, LOAN_PERIOD_DAYS);
    assert_eq!((due.day(), due.hour()), (10, 12));
    assert_eq!(due.with_timezone(&Utc), Utc.with_ymd_and_hms(2024, 11, 10, 17, 0, 0).unwrap());
}

#[test]
fn test_due_date_in_spring_forward_gap_uses_whole_days() {
    // 02:30 on 2024-03-10 does not exist in New York.
    let issued = New_York.with_ymd_and_hms(2024, 2, 25, 2, 30, 0).unwrap();
    let due = due_date_for(&issued, LOAN_PERIOD_DAYS);
    assert_eq!(due.with_timezone(&Utc), Utc.with_ymd_and_hms(2024, 3, 10, 7, 30, 0).unwrap());
    assert_eq!((due.day(), due.hour(), due.minute()), (10, 3, 30));
}

#[test]
fn test_due_date_in_fall_back_overlap_uses_whole_days() {
    // 01:30 on 2024-11-03 occurs twice in New York.
    let issued = New_York.with_ymd_and_hms(2024, 10, 20, 1, 30, 0).unwrap();
    let due = due_date_for(&issued, LOAN_PERIOD_DAYS);
    assert_eq!(due.with_timezone(&Utc), Utc.with_ymd_and_hms(2024, 11, 3, 5, 30, 0).unwrap());
}

proptest! {
    /// The due date lands exactly `period` calendar days later at the same
    /// wall-clock time, whatever the offset.
    #[test]
    fn prop_due_date_is_calendar_days(
        secs in 0i64..4_000_000_000i64,
        offset_minutes in -720i32..=840i32,
        period in 1u32..120u32,
    ) {
        let offset = FixedOffset::east_opt(offset_minutes * 60).unwrap();
        let issued = offset.timestamp_opt(secs, 0).unwrap();
        let due = due_date_for(&issued, period);

        let days = (due.date_naive() - issued.date_naive()).num_days();
        prop_assert_eq!(days, i64::from(period));
        prop_assert_eq!(due.time().hour(), issued.time().hour());
        prop_assert_eq!(due.time().minute(), issued.time().minute());
    }
}
