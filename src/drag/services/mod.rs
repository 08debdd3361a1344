//! Application services for drag-and-drop gestures.

mod controller;

pub use controller::DragController;
