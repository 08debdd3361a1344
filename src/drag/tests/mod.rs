//! Unit tests for drag-and-drop gestures.
