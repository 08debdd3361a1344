//! Timestamp-based task identifiers.

use chrono::{DateTime, Utc};
use mockable::Clock;

use crate::board::{domain::TaskId, ports::TaskIdGenerator};

/// Issues the current Unix time in milliseconds as the task identifier.
///
/// Two tasks created within the same millisecond would collide, so every
/// identifier is bumped to at least one past the previous one. Identifiers
/// are therefore strictly increasing for the lifetime of the generator.
#[derive(Debug, Clone)]
pub struct ClockTaskIdGenerator<C: Clock> {
    clock: C,
    last_issued: Option<i64>,
}

impl<C: Clock> ClockTaskIdGenerator<C> {
    /// Creates a generator reading time from `clock`.
    #[must_use]
    pub const fn new(clock: C) -> Self {
        Self {
            clock,
            last_issued: None,
        }
    }
}

fn unix_millis(instant: DateTime<Utc>) -> i64 {
    instant.timestamp_millis()
}

impl<C: Clock> TaskIdGenerator for ClockTaskIdGenerator<C> {
    fn next_id(&mut self) -> TaskId {
        let now = unix_millis(self.clock.utc());
        let issued = match self.last_issued {
            Some(previous) if now <= previous => previous.saturating_add(1),
            _ => now,
        };
        self.last_issued = Some(issued);
        TaskId::new(issued.to_string())
    }
}
