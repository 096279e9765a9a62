// Rust guideline compliant 2026-10-12

//! Identifier generation.
//!
//! IDs are decimal millisecond timestamps. A new ID is never smaller than
//! the largest numeric ID already issued in the same collection, so IDs stay
//! unique and sort in creation order even when the clock stalls or steps
//! backwards. Non-numeric IDs (imported data) are ignored for ordering.

use chrono::{DateTime, Utc};

/// Generates the next ID for a collection.
///
/// # Arguments
///
/// * `now` - Current instant
/// * `existing` - IDs already present in the collection
///
/// # Returns
///
/// A fresh ID that does not collide with any numeric ID in `existing`.
pub fn next_id<'a, I>(now: DateTime<Utc>, existing: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let candidate = u64::try_from(now.timestamp_millis()).unwrap_or(0);
    let floor = existing
        .into_iter()
        .filter_map(|id| id.parse::<u64>().ok())
        .max()
        .map_or(0, |max| max.saturating_add(1));

    candidate.max(floor).to_string()
}
