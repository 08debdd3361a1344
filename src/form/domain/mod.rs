//! Domain model for the task creation form.

mod form;

pub use form::{SubmitOutcome, TaskForm};
