//! Route identifier generation.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

/// Issues millisecond-timestamp identifiers that never repeat within the
/// process, even when several routes are saved in the same millisecond.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: AtomicI64,
}

impl IdGenerator {
    /// Create a generator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Next identifier: the current time in milliseconds, bumped past the
    /// previously issued value when the clock has not moved forward.
    pub fn next_id(&self) -> String {
        let now = Utc::now().timestamp_millis();
        let prev = self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now.max(last + 1))
            })
            .unwrap_or_else(|last| last);
        now.max(prev + 1).to_string()
    }
}
