//! Drag session state machine.

use super::{DragTransition, MoveRequest, PointerEvent};
use crate::board::domain::{Section, Task, TaskId};

/// Task being dragged together with the section it was picked up from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragPayload {
    task: Task,
    origin: Section,
}

impl DragPayload {
    /// Creates a payload.
    #[must_use]
    pub const fn new(task: Task, origin: Section) -> Self {
        Self { task, origin }
    }

    /// Returns the dragged task.
    #[must_use]
    pub const fn task(&self) -> &Task {
        &self.task
    }

    /// Returns the section the task was picked up from.
    #[must_use]
    pub const fn origin(&self) -> Section {
        self.origin
    }

    fn move_to(&self, destination: Section) -> Option<MoveRequest> {
        (destination != self.origin).then(|| MoveRequest {
            from: self.origin,
            to: destination,
            task_id: self.task.id().clone(),
        })
    }
}

/// Ephemeral state of a pointer-driven task relocation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragSession {
    /// No gesture in flight.
    #[default]
    Idle,
    /// A task is being dragged and no drop target is highlighted.
    Dragging {
        /// Dragged task and its origin.
        payload: DragPayload,
    },
    /// A task is being dragged over a section other than its origin.
    HoveringTarget {
        /// Dragged task and its origin.
        payload: DragPayload,
        /// Highlighted candidate section.
        target: Section,
    },
}

impl DragSession {
    /// Computes the session that follows `event`.
    ///
    /// Only a drop on a section other than the payload origin yields a
    /// [`MoveRequest`]. Every drop and every gesture end returns the session
    /// to [`DragSession::Idle`].
    #[must_use]
    pub fn handle(self, event: PointerEvent) -> DragTransition {
        match event {
            PointerEvent::GestureStart { task, section } => DragTransition::to(Self::Dragging {
                payload: DragPayload::new(task, section),
            }),
            PointerEvent::Enter { section } => DragTransition::to(self.enter(section)),
            PointerEvent::Leave {
                section,
                pointer,
                bounds,
            } => {
                let next = match self {
                    Self::HoveringTarget { payload, target }
                        if target == section && !bounds.contains(pointer) =>
                    {
                        Self::Dragging { payload }
                    }
                    unchanged => unchanged,
                };
                DragTransition::to(next)
            }
            PointerEvent::Drop { section } => DragTransition {
                commit: self.payload().and_then(|payload| payload.move_to(section)),
                session: Self::Idle,
            },
            PointerEvent::DropOutside | PointerEvent::GestureEnd => DragTransition::to(Self::Idle),
        }
    }

    fn enter(self, section: Section) -> Self {
        match self {
            Self::Idle => Self::Idle,
            Self::Dragging { payload } | Self::HoveringTarget { payload, .. } => {
                if section == payload.origin {
                    Self::Dragging { payload }
                } else {
                    Self::HoveringTarget {
                        payload,
                        target: section,
                    }
                }
            }
        }
    }

    /// Returns whether no gesture is in flight.
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns the drag payload, if a gesture is in flight.
    #[must_use]
    pub const fn payload(&self) -> Option<&DragPayload> {
        match self {
            Self::Idle => None,
            Self::Dragging { payload } | Self::HoveringTarget { payload, .. } => Some(payload),
        }
    }

    /// Returns the identifier of the dragged task.
    #[must_use]
    pub fn payload_task_id(&self) -> Option<&TaskId> {
        self.payload().map(|payload| payload.task.id())
    }

    /// Returns whether `task_id` is the task being dragged, so the card can
    /// be rendered as lifted.
    #[must_use]
    pub fn is_payload(&self, task_id: &TaskId) -> bool {
        self.payload_task_id() == Some(task_id)
    }

    /// Returns the section currently highlighted as a drop target.
    #[must_use]
    pub const fn highlighted_section(&self) -> Option<Section> {
        match self {
            Self::HoveringTarget { target, .. } => Some(*target),
            Self::Idle | Self::Dragging { .. } => None,
        }
    }

    /// Returns whether dropping on `section` would move the dragged task.
    #[must_use]
    pub fn can_accept_drop(&self, section: Section) -> bool {
        self.payload()
            .is_some_and(|payload| payload.origin != section)
    }
}
