//! Deterministic task identifiers for tests and demos.

use crate::board::{domain::TaskId, ports::TaskIdGenerator};

/// Issues `<prefix><n>` identifiers counting up from 1.
#[derive(Debug, Clone)]
pub struct SequentialTaskIdGenerator {
    prefix: String,
    next: u64,
}

impl SequentialTaskIdGenerator {
    /// Creates a generator producing `t1`, `t2`, ...
    #[must_use]
    pub fn new() -> Self {
        Self::with_prefix("t")
    }

    /// Creates a generator producing `<prefix>1`, `<prefix>2`, ...
    #[must_use]
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl Default for SequentialTaskIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskIdGenerator for SequentialTaskIdGenerator {
    fn next_id(&mut self) -> TaskId {
        let id = TaskId::new(format!("{}{}", self.prefix, self.next));
        self.next = self.next.saturating_add(1);
        id
    }
}
