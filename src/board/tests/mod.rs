//! Unit tests for the task board.


use crate::board::domain::{PersistedTaskData, Priority, Task, TaskId};

/// Builds a task with every attribute given explicitly.
pub(super) fn task(id: &str, title: &str, priority: Priority, category: &str) -> Task {
    Task::from_persisted(PersistedTaskData {
        id: TaskId::new(id),
        title: title.to_owned(),
        description: String::new(),
        priority,
        category: category.to_owned(),
        comment_count: 0,
        attachment_count: 0,
        assignees: Vec::new(),
    })
}
