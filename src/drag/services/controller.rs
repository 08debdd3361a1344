//! Drag session controller that commits completed drops to the task store.

use std::sync::Arc;

use crate::board::{ports::TaskIdGenerator, services::TaskStore};
use crate::drag::domain::{DragSession, MoveRequest, PointerEvent};

/// Owns the single active drag session.
///
/// Events are applied in the order they arrive; each event observes the
/// session left by the previous one.
#[derive(Debug, Clone, Default)]
pub struct DragController {
    session: DragSession,
}

impl DragController {
    /// Creates a controller with no gesture in flight.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current session.
    #[must_use]
    pub const fn session(&self) -> &DragSession {
        &self.session
    }

    /// Feeds one pointer event through the session and commits any
    /// resulting move to `store`.
    ///
    /// Returns the move that was committed, if any. A drop whose move the
    /// store ignores, such as a stale drag of a task that has already left
    /// its origin, returns `None`.
    pub fn handle<G: TaskIdGenerator>(
        &mut self,
        event: PointerEvent,
        store: &mut TaskStore<G>,
    ) -> Option<MoveRequest> {
        let transition = std::mem::take(&mut self.session).handle(event);
        self.session = transition.session;
        tracing::debug!(
            highlighted = ?self.session.highlighted_section(),
            idle = self.session.is_idle(),
            "drag event handled"
        );

        let request = transition.commit?;
        let before = store.state();
        let after = store.relocate(request.from, request.to, &request.task_id);
        (!Arc::ptr_eq(&before, &after)).then_some(request)
    }

    /// Abandons any gesture in flight without touching the store.
    pub fn reset(&mut self) {
        self.session = DragSession::Idle;
    }
}
