//! Form controller that commits accepted drafts to the task store.

use crate::board::{domain::Priority, ports::TaskIdGenerator, services::TaskStore};
use crate::form::domain::{SubmitOutcome, TaskForm};

/// Drives the task creation form.
#[derive(Debug, Clone, Default)]
pub struct TaskFormController {
    form: TaskForm,
}

impl TaskFormController {
    /// Creates a controller whose blank draft preselects `blank_priority`.
    #[must_use]
    pub fn new(blank_priority: Priority) -> Self {
        Self {
            form: TaskForm::new(blank_priority),
        }
    }

    /// Returns the form state.
    #[must_use]
    pub const fn form(&self) -> &TaskForm {
        &self.form
    }

    /// Returns the form state for editing.
    pub const fn form_mut(&mut self) -> &mut TaskForm {
        &mut self.form
    }

    /// Submits the draft.
    ///
    /// A blank title is rejected silently: no task is created, no error is
    /// raised and the form stays open with its draft intact.
    pub fn submit<G: TaskIdGenerator>(&mut self, store: &mut TaskStore<G>) -> SubmitOutcome {
        let Some((section, draft)) = self.form.take_submission() else {
            tracing::debug!(open = self.form.is_open(), "form submission rejected");
            return SubmitOutcome::Rejected;
        };
        let task_id = store.create_task(section, draft);
        SubmitOutcome::Created(task_id)
    }
}
