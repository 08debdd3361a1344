//! Identifier and section types for the board domain.

use super::BoardError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of a task, unique within a session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Wraps an existing identifier string.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One of the three fixed task-list buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Section {
    /// Work not yet started.
    #[serde(rename = "todo")]
    Todo,
    /// Work currently underway.
    #[serde(rename = "in-progress")]
    InProgress,
    /// Finished work.
    #[serde(rename = "done")]
    Done,
}

impl Section {
    /// Every section in display order.
    pub const ALL: [Self; 3] = [Self::Todo, Self::InProgress, Self::Done];

    /// Returns the canonical section key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::Done => "done",
        }
    }

    /// Returns the column heading shown for this section.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Todo => "To Do",
            Self::InProgress => "On Progress",
            Self::Done => "Done",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Section {
    type Error = BoardError;

    /// Parses a section key.
    ///
    /// Accepts the canonical keys as well as the legacy `to-do` and
    /// `on-progress` spellings.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "todo" | "to-do" => Ok(Self::Todo),
            "in-progress" | "on-progress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            _ => Err(BoardError::InvalidSection(value.to_owned())),
        }
    }
}
