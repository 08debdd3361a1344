//! Task record and the draft it is built from.

use super::{BoardError, TaskId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Priority {
    /// Needs attention first.
    High,
    /// Routine work.
    #[default]
    Low,
}

impl Priority {
    /// Returns the display and storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Low => "Low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Priority {
    type Error = BoardError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "High" => Ok(Self::High),
            "Low" => Ok(Self::Low),
            _ => Err(BoardError::InvalidPriority(value.to_owned())),
        }
    }
}

/// Person shown on a task card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignee {
    /// Stable identifier of the person.
    pub id: u32,
    /// Name shown on hover.
    #[serde(rename = "name")]
    pub display_name: String,
    /// Single glyph rendered as the avatar.
    #[serde(rename = "avatar")]
    pub avatar_glyph: String,
}

impl Assignee {
    /// Creates an assignee.
    #[must_use]
    pub fn new(id: u32, display_name: impl Into<String>, avatar_glyph: impl Into<String>) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            avatar_glyph: avatar_glyph.into(),
        }
    }
}

/// User-entered fields for a task that does not exist yet.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskDraft {
    /// Task title as typed.
    pub title: String,
    /// Free-form description, may be empty.
    pub description: String,
    /// Selected priority.
    pub priority: Priority,
}

impl TaskDraft {
    /// Creates a draft with an empty description and `Low` priority.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Returns whether the title is blank after trimming whitespace.
    #[must_use]
    pub fn has_blank_title(&self) -> bool {
        self.title.trim().is_empty()
    }
}

/// Values stamped onto every task created from a draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDefaults {
    /// Category assigned to new tasks.
    pub category: String,
    /// Placeholder assignees attached to new tasks.
    pub assignees: Vec<Assignee>,
}

/// Parameter object for reconstructing a task with every attribute given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Task identifier.
    pub id: TaskId,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Task priority.
    pub priority: Priority,
    /// Task category.
    pub category: String,
    /// Number of comments.
    pub comment_count: u32,
    /// Number of attachments.
    pub attachment_count: u32,
    /// Assignees in display order.
    pub assignees: Vec<Assignee>,
}

/// A card on the board.
///
/// Tasks never change after creation. Which section a task belongs to is
/// not stored here; it is implied by the section list holding it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    #[serde(default)]
    description: String,
    priority: Priority,
    #[serde(default = "default_category")]
    category: String,
    #[serde(rename = "comments", default)]
    comment_count: u32,
    #[serde(rename = "files", default)]
    attachment_count: u32,
    #[serde(default)]
    assignees: Vec<Assignee>,
}

fn default_category() -> String {
    crate::config::DEFAULT_CATEGORY.to_owned()
}

impl Task {
    /// Builds a new task from a draft.
    ///
    /// Comment and attachment counts start at zero; the category and
    /// assignees come from `defaults`.
    #[must_use]
    pub fn from_draft(id: TaskId, draft: TaskDraft, defaults: &TaskDefaults) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            priority: draft.priority,
            category: defaults.category.clone(),
            comment_count: 0,
            attachment_count: 0,
            assignees: defaults.assignees.clone(),
        }
    }

    /// Reconstructs a task with every attribute supplied.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            priority: data.priority,
            category: data.category,
            comment_count: data.comment_count,
            attachment_count: data.attachment_count,
            assignees: data.assignees,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the category.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns the number of comments.
    #[must_use]
    pub const fn comment_count(&self) -> u32 {
        self.comment_count
    }

    /// Returns the number of attachments.
    #[must_use]
    pub const fn attachment_count(&self) -> u32 {
        self.attachment_count
    }

    /// Returns the assignees in display order.
    #[must_use]
    pub fn assignees(&self) -> &[Assignee] {
        &self.assignees
    }
}
