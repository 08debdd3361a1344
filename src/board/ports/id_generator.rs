//! Identifier allocation port for newly created tasks.

use crate::board::domain::TaskId;

/// Source of fresh task identifiers.
///
/// Implementations must never hand out the same identifier twice within one
/// board session.
pub trait TaskIdGenerator {
    /// Allocates the next identifier.
    fn next_id(&mut self) -> TaskId;
}

impl<G: TaskIdGenerator + ?Sized> TaskIdGenerator for Box<G> {
    fn next_id(&mut self) -> TaskId {
        (**self).next_id()
    }
}
