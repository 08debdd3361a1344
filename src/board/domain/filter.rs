//! Filter criteria and the read-side projection over section lists.

use super::{BoardError, Priority, Task};
use serde::{Deserialize, Serialize};
use std::fmt;

const ALL: &str = "all";

/// Priority constraint selected in the priority filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PriorityFilter {
    /// Every priority passes.
    #[default]
    All,
    /// Only tasks with exactly this priority pass.
    Only(Priority),
}

impl PriorityFilter {
    /// Returns whether `priority` passes this filter.
    #[must_use]
    pub fn admits(self, priority: Priority) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == priority,
        }
    }
}

impl TryFrom<&str> for PriorityFilter {
    type Error = BoardError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if value == ALL {
            return Ok(Self::All);
        }
        Priority::try_from(value).map(Self::Only)
    }
}

impl TryFrom<String> for PriorityFilter {
    type Error = BoardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl From<PriorityFilter> for String {
    fn from(value: PriorityFilter) -> Self {
        value.to_string()
    }
}

impl fmt::Display for PriorityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL),
            Self::Only(priority) => f.write_str(priority.as_str()),
        }
    }
}

/// Category constraint selected in the category filter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    /// Every category passes.
    #[default]
    All,
    /// Only tasks in exactly this category pass.
    Only(String),
}

impl CategoryFilter {
    /// Returns whether `category` passes this filter.
    #[must_use]
    pub fn admits(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        if value == ALL {
            Self::All
        } else {
            Self::Only(value.to_owned())
        }
    }
}

impl From<String> for CategoryFilter {
    fn from(value: String) -> Self {
        if value == ALL { Self::All } else { Self::Only(value) }
    }
}

impl From<CategoryFilter> for String {
    fn from(value: CategoryFilter) -> Self {
        match value {
            CategoryFilter::All => ALL.to_owned(),
            CategoryFilter::Only(category) => category,
        }
    }
}

/// Active filter selections. Defaults to all priorities, all categories and
/// an empty search.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    /// Priority constraint.
    #[serde(rename = "priority")]
    pub priority_filter: PriorityFilter,
    /// Category constraint.
    #[serde(rename = "category")]
    pub category_filter: CategoryFilter,
    /// Free-text search, matched case-insensitively.
    #[serde(rename = "search")]
    pub search_text: String,
}

impl FilterCriteria {
    /// Returns whether `task` passes all three predicates.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        self.matches_needle(task, &self.search_text.to_lowercase())
    }

    /// Returns whether no constraint is active.
    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        *self == Self::default()
    }

    /// Returns a copy with one field replaced.
    #[must_use]
    pub fn with_update(&self, update: FilterUpdate) -> Self {
        let mut next = self.clone();
        match update {
            FilterUpdate::Priority(priority) => next.priority_filter = priority,
            FilterUpdate::Category(category) => next.category_filter = category,
            FilterUpdate::Search(text) => next.search_text = text,
        }
        next
    }

    fn matches_needle(&self, task: &Task, needle: &str) -> bool {
        self.priority_filter.admits(task.priority())
            && self.category_filter.admits(task.category())
            && (needle.is_empty()
                || task.title().to_lowercase().contains(needle)
                || task.description().to_lowercase().contains(needle))
    }
}

/// Name of a single filter criteria field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    /// The priority select.
    Priority,
    /// The category select.
    Category,
    /// The search box.
    Search,
}

impl TryFrom<&str> for FilterField {
    type Error = BoardError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "priority" => Ok(Self::Priority),
            "category" => Ok(Self::Category),
            "search" => Ok(Self::Search),
            _ => Err(BoardError::UnknownFilterField(value.to_owned())),
        }
    }
}

/// Replacement value for one filter criteria field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterUpdate {
    /// New priority constraint.
    Priority(PriorityFilter),
    /// New category constraint.
    Category(CategoryFilter),
    /// New search text.
    Search(String),
}

impl FilterUpdate {
    /// Maps a raw field name and input value onto a typed update.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnknownFilterField`] for an unrecognised field
    /// and [`BoardError::InvalidPriority`] for a priority value other than
    /// `all`, `High` or `Low`.
    pub fn from_raw(field: &str, value: &str) -> Result<Self, BoardError> {
        Ok(match FilterField::try_from(field)? {
            FilterField::Priority => Self::Priority(PriorityFilter::try_from(value)?),
            FilterField::Category => Self::Category(CategoryFilter::from(value)),
            FilterField::Search => Self::Search(value.to_owned()),
        })
    }

    /// Returns the field this update replaces.
    #[must_use]
    pub const fn field(&self) -> FilterField {
        match self {
            Self::Priority(_) => FilterField::Priority,
            Self::Category(_) => FilterField::Category,
            Self::Search(_) => FilterField::Search,
        }
    }
}

/// Lazy view over the tasks of one section that pass the filter criteria.
///
/// A clone taken before iterating yields the same sequence again.
#[derive(Debug, Clone)]
pub struct VisibleTasks<'a> {
    tasks: std::slice::Iter<'a, Task>,
    criteria: &'a FilterCriteria,
    needle: String,
}

/// Projects the visible subset of `tasks` under `criteria`, preserving order.
#[must_use]
pub fn visible_tasks<'a>(tasks: &'a [Task], criteria: &'a FilterCriteria) -> VisibleTasks<'a> {
    VisibleTasks {
        tasks: tasks.iter(),
        criteria,
        needle: criteria.search_text.to_lowercase(),
    }
}

impl<'a> Iterator for VisibleTasks<'a> {
    type Item = &'a Task;

    fn next(&mut self) -> Option<Self::Item> {
        let criteria = self.criteria;
        let needle = self.needle.as_str();
        self.tasks.find(|task| criteria.matches_needle(task, needle))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.tasks.size_hint().1)
    }
}

impl std::iter::FusedIterator for VisibleTasks<'_> {}
