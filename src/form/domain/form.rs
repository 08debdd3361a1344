//! Draft input held by the task creation form.

use crate::board::domain::{Priority, Section, TaskDraft, TaskId};

/// Result of submitting the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing was created; the form and its draft are unchanged.
    Rejected,
    /// A task was created with this identifier and the form was closed.
    Created(TaskId),
}

/// Modal form for creating a task in a chosen section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskForm {
    open: bool,
    target: Section,
    draft: TaskDraft,
    blank_priority: Priority,
}

impl Default for TaskForm {
    fn default() -> Self {
        Self::new(Priority::Low)
    }
}

impl TaskForm {
    /// Creates a closed form whose blank draft preselects `blank_priority`.
    #[must_use]
    pub fn new(blank_priority: Priority) -> Self {
        Self {
            open: false,
            target: Section::Todo,
            draft: Self::blank_draft(blank_priority),
            blank_priority,
        }
    }

    fn blank_draft(priority: Priority) -> TaskDraft {
        TaskDraft::default().with_priority(priority)
    }

    /// Opens the form targeting `section`. A draft left over from a
    /// cancelled form is kept.
    pub const fn open_for(&mut self, section: Section) {
        self.target = section;
        self.open = true;
    }

    /// Closes the form without creating anything.
    pub const fn cancel(&mut self) {
        self.open = false;
    }

    /// Replaces the draft title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    /// Replaces the draft description.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.draft.description = description.into();
    }

    /// Replaces the draft priority.
    pub const fn set_priority(&mut self, priority: Priority) {
        self.draft.priority = priority;
    }

    /// Returns whether the form is showing.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Returns the section a submitted task will be added to.
    #[must_use]
    pub const fn target(&self) -> Section {
        self.target
    }

    /// Returns the current draft.
    #[must_use]
    pub const fn draft(&self) -> &TaskDraft {
        &self.draft
    }

    /// Takes the draft for submission, resetting and closing the form.
    ///
    /// Returns `None` and leaves everything untouched when the form is
    /// closed or the title is blank after trimming.
    pub fn take_submission(&mut self) -> Option<(Section, TaskDraft)> {
        if !self.open || self.draft.has_blank_title() {
            return None;
        }
        let draft = std::mem::replace(&mut self.draft, Self::blank_draft(self.blank_priority));
        self.open = false;
        Some((self.target, draft))
    }
}
