//! Domain model for drag-and-drop gestures.
//!
//! A drag session is a single tagged value, so states such as "hovering
//! without a dragged task" cannot be represented.

mod event;
mod geometry;
mod session;

pub use event::{DragTransition, MoveRequest, PointerEvent};
pub use geometry::{Bounds, Point};
pub use session::{DragPayload, DragSession};
