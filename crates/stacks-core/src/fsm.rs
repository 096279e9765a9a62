// Rust guideline compliant 2026-10-12

//! Finite State Machine module for book circulation.
//!
//! A book moves between two states:
//!
//! - Available → Issued (issue)
//! - Issued → Available (return)
//!
//! Every book starts out Available. This module also owns the due-date
//! policy applied when a book is issued.

use crate::{BookStatus, Error, Result};
use chrono::{DateTime, Days, Duration, TimeZone};

/// Default loan period in calendar days.
pub const LOAN_PERIOD_DAYS: u32 = 14;

impl BookStatus {
    /// Checks if a transition to the target status is valid.
    ///
    /// # Arguments
    ///
    /// * `target` - The target status to transition to
    ///
    /// # Errors
    ///
    /// Returns an error if the book is already in the target status.
    pub fn can_transition_to(&self, target: BookStatus) -> Result<()> {
        match (self, target) {
            (BookStatus::Available, BookStatus::Issued) => Ok(()),
            (BookStatus::Issued, BookStatus::Available) => Ok(()),
            _ => Err(Error::InvalidRecord(format!(
                "Cannot transition from {:?} to {:?}",
                self, target
            ))),
        }
    }

    /// Returns the list of valid target states for the current status.
    pub fn valid_transitions(&self) -> Vec<BookStatus> {
        match self {
            BookStatus::Available => vec![BookStatus::Issued],
            BookStatus::Issued => vec![BookStatus::Available],
        }
    }
}

/// Computes the due date for a loan issued at `issued`.
///
/// The period is added as calendar days in the time zone of `issued`, so a
/// loan that spans a daylight-saving change keeps its wall-clock time. If
/// the shifted local time does not exist in that zone, or occurs twice, the
/// period falls back to whole 24-hour days.
///
/// # Arguments
///
/// * `issued` - Issue instant
/// * `period_days` - Loan period in days
pub fn due_date_for<Tz: TimeZone>(issued: &DateTime<Tz>, period_days: u32) -> DateTime<Tz> {
    issued
        .clone()
        .checked_add_days(Days::new(u64::from(period_days)))
        .unwrap_or_else(|| issued.clone() + Duration::days(i64::from(period_days)))
}
