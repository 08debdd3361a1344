//! Random task identifiers.

use uuid::Uuid;

use crate::board::{domain::TaskId, ports::TaskIdGenerator};

/// Issues random v4 UUIDs as task identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidTaskIdGenerator;

impl UuidTaskIdGenerator {
    /// Creates a generator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl TaskIdGenerator for UuidTaskIdGenerator {
    fn next_id(&mut self) -> TaskId {
        TaskId::new(Uuid::new_v4().to_string())
    }
}
