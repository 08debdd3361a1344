//! Board aggregate and its pure transition function.

use super::{
    BoardError, BoardResult, FilterCriteria, FilterUpdate, Section, Task, TaskId, VisibleTasks,
    visible_tasks,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Mutation requested against the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardAction {
    /// Append a fully built task to a section.
    AddTask {
        /// Destination section.
        section: Section,
        /// Task to append.
        task: Task,
    },
    /// Relocate a task to the end of another section.
    MoveTask {
        /// Section currently holding the task.
        from: Section,
        /// Destination section.
        to: Section,
        /// Task to relocate.
        task_id: TaskId,
    },
    /// Replace one filter criteria field.
    SetFilter(FilterUpdate),
    /// Replace the whole board with a restored snapshot.
    LoadState(BoardSnapshot),
}

/// Immutable snapshot of every section list plus the active filter.
///
/// Section lists are reference counted: a transition copies only the lists
/// it changes, and unchanged lists stay shared with the previous state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoardState {
    todo: Arc<Vec<Task>>,
    in_progress: Arc<Vec<Task>>,
    done: Arc<Vec<Task>>,
    filter: FilterCriteria,
}

impl BoardState {
    /// Creates an empty board with default filters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Computes the state that follows `action`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::MalformedState`] when a loaded snapshot lacks a
    /// section key. Every other action is infallible.
    pub fn apply(&self, action: BoardAction) -> BoardResult<Self> {
        match action {
            BoardAction::AddTask { section, task } => Ok(self.add_task(section, task)),
            BoardAction::MoveTask { from, to, task_id } => Ok(self.move_task(from, to, &task_id)),
            BoardAction::SetFilter(update) => Ok(self.set_filter(update)),
            BoardAction::LoadState(snapshot) => Self::load(snapshot),
        }
    }

    /// Returns a board with `task` appended to `section`.
    ///
    /// A task whose id is already on the board is not added a second time.
    #[must_use]
    pub fn add_task(&self, section: Section, task: Task) -> Self {
        if self.find_task(task.id()).is_some() {
            return self.clone();
        }
        let mut list = self.list(section).as_ref().clone();
        list.push(task);
        self.with_list(section, list)
    }

    /// Returns a board with `task_id` moved from `from` to the end of `to`.
    ///
    /// Moving within one section, or moving a task that `from` does not
    /// hold, returns an equal board.
    #[must_use]
    pub fn move_task(&self, from: Section, to: Section, task_id: &TaskId) -> Self {
        if from == to {
            return self.clone();
        }
        let source = self.list(from);
        let Some(position) = source.iter().position(|task| task.id() == task_id) else {
            return self.clone();
        };

        let mut remaining = source.as_ref().clone();
        let moved = remaining.remove(position);
        let mut destination = self.list(to).as_ref().clone();
        destination.push(moved);

        self.with_list(from, remaining).with_list(to, destination)
    }

    /// Returns a board with one filter field replaced.
    #[must_use]
    pub fn set_filter(&self, update: FilterUpdate) -> Self {
        Self {
            filter: self.filter.with_update(update),
            ..self.clone()
        }
    }

    /// Builds a board from a restored snapshot.
    ///
    /// Keys that do not name a section are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::MalformedState`] naming the first section key
    /// the snapshot lacks, or [`BoardError::DuplicateSection`] when a
    /// section appears under both its current and legacy key.
    pub fn load(snapshot: BoardSnapshot) -> BoardResult<Self> {
        let mut lists: BTreeMap<Section, Vec<Task>> = BTreeMap::new();
        for (key, tasks) in snapshot.tasks {
            match Section::try_from(key.as_str()) {
                Ok(section) => {
                    if lists.contains_key(&section) {
                        tracing::warn!(
                            key = %key,
                            %section,
                            "section given twice in board snapshot"
                        );
                        return Err(BoardError::DuplicateSection { section });
                    }
                    lists.insert(section, tasks);
                }
                Err(_) => tracing::warn!(key = %key, "ignoring unknown section in board snapshot"),
            }
        }

        let mut take = |section: Section| {
            lists
                .remove(&section)
                .ok_or(BoardError::MalformedState { missing: section })
        };
        let todo = take(Section::Todo)?;
        let in_progress = take(Section::InProgress)?;
        let done = take(Section::Done)?;

        Ok(Self {
            todo: Arc::new(todo),
            in_progress: Arc::new(in_progress),
            done: Arc::new(done),
            filter: snapshot.filter,
        })
    }

    /// Captures the board as a serialisable snapshot.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        let tasks = Section::ALL
            .into_iter()
            .map(|section| (section.as_str().to_owned(), self.tasks(section).to_vec()))
            .collect();
        BoardSnapshot {
            tasks,
            filter: self.filter.clone(),
        }
    }

    /// Returns every task in `section`, in display order.
    #[must_use]
    pub fn tasks(&self, section: Section) -> &[Task] {
        self.list(section).as_slice()
    }

    /// Returns the active filter criteria.
    #[must_use]
    pub const fn filter(&self) -> &FilterCriteria {
        &self.filter
    }

    /// Returns the tasks of `section` that pass the active filter.
    #[must_use]
    pub fn visible(&self, section: Section) -> VisibleTasks<'_> {
        visible_tasks(self.tasks(section), &self.filter)
    }

    /// Returns how many tasks of `section` pass the active filter.
    #[must_use]
    pub fn visible_count(&self, section: Section) -> usize {
        self.visible(section).count()
    }

    /// Locates a task and the section holding it.
    #[must_use]
    pub fn find_task(&self, task_id: &TaskId) -> Option<(Section, &Task)> {
        Section::ALL.into_iter().find_map(|section| {
            self.tasks(section)
                .iter()
                .find(|task| task.id() == task_id)
                .map(|task| (section, task))
        })
    }

    /// Returns the total number of tasks across all sections.
    #[must_use]
    pub fn task_count(&self) -> usize {
        Section::ALL
            .into_iter()
            .map(|section| self.tasks(section).len())
            .sum()
    }

    /// Returns the distinct task categories in first-seen order.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for section in Section::ALL {
            for task in self.tasks(section) {
                if !categories.contains(&task.category()) {
                    categories.push(task.category());
                }
            }
        }
        categories
    }

    /// Returns whether both boards share the same storage for `section`.
    ///
    /// Renderers can use this to skip columns that did not change.
    #[must_use]
    pub fn shares_section(&self, other: &Self, section: Section) -> bool {
        Arc::ptr_eq(self.list(section), other.list(section))
    }

    const fn list(&self, section: Section) -> &Arc<Vec<Task>> {
        match section {
            Section::Todo => &self.todo,
            Section::InProgress => &self.in_progress,
            Section::Done => &self.done,
        }
    }

    fn with_list(&self, section: Section, list: Vec<Task>) -> Self {
        let mut next = self.clone();
        let slot = match section {
            Section::Todo => &mut next.todo,
            Section::InProgress => &mut next.in_progress,
            Section::Done => &mut next.done,
        };
        *slot = Arc::new(list);
        next
    }
}

/// Loosely typed board image used for bulk restore.
///
/// Section lists are keyed by section name so that a snapshot missing a
/// section can be represented and rejected on load.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// Task lists keyed by section name.
    pub tasks: BTreeMap<String, Vec<Task>>,
    /// Filter criteria to restore.
    #[serde(default)]
    pub filter: FilterCriteria,
}

impl BoardSnapshot {
    /// Decodes a snapshot from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Snapshot`] when the payload is not a valid
    /// snapshot document.
    pub fn from_json(json: &str) -> BoardResult<Self> {
        serde_json::from_str(json).map_err(|err| BoardError::Snapshot(err.to_string()))
    }

    /// Encodes the snapshot as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Snapshot`] if serialisation fails.
    pub fn to_json(&self) -> BoardResult<String> {
        serde_json::to_string(self).map_err(|err| BoardError::Snapshot(err.to_string()))
    }
}
