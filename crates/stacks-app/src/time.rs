// Rust guideline compliant 2026-10-14

//! Date formatting helpers for Stacks views.

use chrono::{DateTime, Local, Utc};
use chrono_humanize::{Accuracy, HumanTime, Tense};

/// Formats an instant as a local calendar date, e.g. `2024-02-03`.
#[must_use]
pub fn format_date(instant: DateTime<Utc>) -> String {
    instant.with_timezone(&Local).format("%Y-%m-%d").to_string()
}

/// Formats an instant as local date and time, e.g. `2024-01-20 12:00`.
#[must_use]
pub fn format_datetime(instant: DateTime<Utc>) -> String {
    instant.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}

/// Describes how long ago `instant` was relative to `now`, e.g. `3 hours ago`.
///
/// Instants in the future are described as `now`.
#[must_use]
pub fn humanize_since(instant: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(instant);
    if elapsed <= chrono::Duration::zero() {
        return "now".to_string();
    }
    HumanTime::from(elapsed).to_text_en(Accuracy::Rough, Tense::Past)
}

/// Describes the distance to a due date, e.g. `in 2 weeks` or `3 days ago`.
#[must_use]
pub fn humanize_due(due: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let remaining = due.signed_duration_since(now);
    if remaining >= chrono::Duration::zero() {
        HumanTime::from(remaining).to_text_en(Accuracy::Rough, Tense::Future)
    } else {
        HumanTime::from(-remaining).to_text_en(Accuracy::Rough, Tense::Past)
    }
}
