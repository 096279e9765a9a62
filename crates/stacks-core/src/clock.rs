// Rust guideline compliant 2026-10-15

//! Controllable time source for the library store.
//!
//! The store reads time through [`mockable::Clock`]; production code uses
//! [`mockable::DefaultClock`]. [`FixedClock`] is a manually driven clock for
//! tests and replays.

use chrono::{DateTime, Duration, Local, Utc};
use mockable::Clock;
use std::sync::{Arc, Mutex, MutexGuard};

/// A clock that only moves when told to.
///
/// Clones share the same instant, so a test can keep one handle while the
/// store owns another.
#[derive(Debug, Clone)]
pub struct FixedClock(Arc<Mutex<DateTime<Utc>>>);

impl FixedClock {
    /// Creates a clock pinned at `now`.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self(Arc::new(Mutex::new(now)))
    }

    /// Moves the clock to `now`.
    pub fn set(&self, now: DateTime<Utc>) {
        *self.lock_clock() = now;
    }

    /// Moves the clock forward.
    pub fn advance(&self, by: Duration) {
        *self.lock_clock() += by;
    }

    fn lock_clock(&self) -> MutexGuard<'_, DateTime<Utc>> {
        self.0
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.lock_clock()
    }
}
