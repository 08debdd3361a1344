//! Board configuration.
//!
//! Every field has a default matching the stock board, so an empty JSON
//! object is a valid configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::domain::{Assignee, Priority, TaskDefaults};

/// Category stamped onto tasks when none is configured.
pub const DEFAULT_CATEGORY: &str = "general";

/// Errors returned while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration document could not be parsed.
    #[error("invalid board configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Tunable defaults for a board session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Category assigned to newly created tasks.
    pub default_category: String,
    /// Placeholder assignees attached to newly created tasks.
    pub default_assignees: Vec<Assignee>,
    /// Priority preselected in a blank form draft.
    pub default_priority: Priority,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            default_category: DEFAULT_CATEGORY.to_owned(),
            default_assignees: vec![
                Assignee::new(1, "John", "👨‍💻"),
                Assignee::new(2, "Sarah", "👩‍💼"),
            ],
            default_priority: Priority::Low,
        }
    }
}

impl BoardConfig {
    /// Parses a configuration from JSON, defaulting absent fields.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the document is not valid JSON
    /// or a field has the wrong type.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Sets the default category.
    #[must_use]
    pub fn with_default_category(mut self, category: impl Into<String>) -> Self {
        self.default_category = category.into();
        self
    }

    /// Sets the placeholder assignees.
    #[must_use]
    pub fn with_default_assignees(mut self, assignees: impl IntoIterator<Item = Assignee>) -> Self {
        self.default_assignees = assignees.into_iter().collect();
        self
    }

    /// Sets the priority preselected in a blank form draft.
    #[must_use]
    pub const fn with_default_priority(mut self, priority: Priority) -> Self {
        self.default_priority = priority;
        self
    }

    /// Returns the values stamped onto every new task.
    #[must_use]
    pub fn task_defaults(&self) -> TaskDefaults {
        TaskDefaults {
            category: self.default_category.clone(),
            assignees: self.default_assignees.clone(),
        }
    }
}
