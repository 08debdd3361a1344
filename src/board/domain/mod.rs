//! Domain model for the task board.
//!
//! The board domain models tasks, the three fixed sections that hold them,
//! filter criteria, and the pure transition function over board snapshots.
//! Nothing here performs I/O or holds mutable shared state.

mod error;
mod filter;
mod ids;
mod state;
mod task;

pub use error::{BoardError, BoardResult};
pub use filter::{
    CategoryFilter, FilterCriteria, FilterField, FilterUpdate, PriorityFilter, VisibleTasks,
    visible_tasks,
};
pub use ids::{Section, TaskId};
pub use state::{BoardAction, BoardSnapshot, BoardState};
pub use task::{Assignee, PersistedTaskData, Priority, Task, TaskDefaults, TaskDraft};
