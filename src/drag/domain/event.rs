//! Gesture input and transition output of the drag session.

use super::{Bounds, DragSession, Point};
use crate::board::domain::{Section, Task, TaskId};

/// Raw gesture forwarded by the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerEvent {
    /// The user picked up a task card.
    GestureStart {
        /// Task being dragged.
        task: Task,
        /// Section the card was picked up from.
        section: Section,
    },
    /// The pointer entered a section column.
    Enter {
        /// Column entered.
        section: Section,
    },
    /// The pointer left a section column or one of its children.
    Leave {
        /// Column that reported the leave.
        section: Section,
        /// Pointer position at the time of the event.
        pointer: Point,
        /// Current rectangle of the reporting column.
        bounds: Bounds,
    },
    /// The card was released over a section column.
    Drop {
        /// Column receiving the drop.
        section: Section,
    },
    /// The card was released somewhere that is not a section column.
    DropOutside,
    /// The gesture finished, with or without a drop.
    GestureEnd,
}

/// Store mutation produced by a completed drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRequest {
    /// Section the task was dragged from.
    pub from: Section,
    /// Section the task was dropped on.
    pub to: Section,
    /// Task to relocate.
    pub task_id: TaskId,
}

/// Result of feeding one event into a drag session.
#[derive(Debug, Clone, PartialEq)]
pub struct DragTransition {
    /// Session state after the event.
    pub session: DragSession,
    /// Move to commit to the task store, if the event completed one.
    pub commit: Option<MoveRequest>,
}

impl DragTransition {
    pub(crate) const fn to(session: DragSession) -> Self {
        Self {
            session,
            commit: None,
        }
    }
}
