//! Unit tests for the task creation form.

mod controller_tests;
