//! Application services for the task creation form.

mod controller;

pub use controller::TaskFormController;
