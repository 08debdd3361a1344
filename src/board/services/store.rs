//! The task store: sole owner of the authoritative board state.

use std::sync::Arc;

use crate::board::{
    domain::{
        BoardAction, BoardResult, BoardSnapshot, BoardState, FilterUpdate, Section, Task,
        TaskDefaults, TaskDraft, TaskId,
    },
    ports::TaskIdGenerator,
};
use crate::config::BoardConfig;

/// Holds the current board snapshot and applies mutations to it.
///
/// Every mutation swaps in a new [`BoardState`]; snapshots handed out earlier
/// stay valid. When an action leaves the board unchanged the previous `Arc`
/// is kept, so callers can detect no-ops with [`Arc::ptr_eq`].
#[derive(Debug, Clone)]
pub struct TaskStore<G: TaskIdGenerator> {
    state: Arc<BoardState>,
    ids: G,
    defaults: TaskDefaults,
}

impl<G: TaskIdGenerator> TaskStore<G> {
    /// Creates a store holding an empty board.
    #[must_use]
    pub fn new(ids: G, config: &BoardConfig) -> Self {
        Self {
            state: Arc::new(BoardState::new()),
            ids,
            defaults: config.task_defaults(),
        }
    }

    /// Returns the current board snapshot.
    #[must_use]
    pub fn state(&self) -> Arc<BoardState> {
        Arc::clone(&self.state)
    }

    /// Borrows the current board snapshot.
    #[must_use]
    pub fn current(&self) -> &BoardState {
        &self.state
    }

    /// Builds a task from `draft` and appends it to the named section.
    ///
    /// The store does not validate the title; callers reject blank titles
    /// before getting here.
    ///
    /// # Errors
    ///
    /// Returns [`crate::board::domain::BoardError::InvalidSection`] when
    /// `section` is not a known section key.
    pub fn add_task(&mut self, section: &str, draft: TaskDraft) -> BoardResult<Arc<BoardState>> {
        let target = Section::try_from(section)?;
        self.create_task(target, draft);
        Ok(self.state())
    }

    /// Builds a task from `draft`, appends it to `section` and returns its
    /// identifier.
    ///
    /// Identifiers already on the board, for instance ones brought in by a
    /// restored snapshot, are skipped.
    pub fn create_task(&mut self, section: Section, draft: TaskDraft) -> TaskId {
        let mut id = self.ids.next_id();
        while self.state.find_task(&id).is_some() {
            tracing::debug!(task_id = %id, "skipping identifier already on the board");
            id = self.ids.next_id();
        }
        let task = Task::from_draft(id.clone(), draft, &self.defaults);
        tracing::debug!(%section, task_id = %id, "adding task");
        self.commit(self.state.add_task(section, task));
        id
    }

    /// Moves a task between the named sections.
    ///
    /// Self-moves and moves of a task absent from `from` leave the board
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns [`crate::board::domain::BoardError::InvalidSection`] when
    /// either key is not a known section.
    pub fn move_task(
        &mut self,
        from: &str,
        to: &str,
        task_id: &TaskId,
    ) -> BoardResult<Arc<BoardState>> {
        let source = Section::try_from(from)?;
        let destination = Section::try_from(to)?;
        Ok(self.relocate(source, destination, task_id))
    }

    /// Moves a task between typed sections. See [`Self::move_task`].
    pub fn relocate(&mut self, from: Section, to: Section, task_id: &TaskId) -> Arc<BoardState> {
        let next = self.state.move_task(from, to, task_id);
        if self.commit(next) {
            tracing::debug!(%from, %to, %task_id, "moved task");
        } else {
            tracing::debug!(%from, %to, %task_id, "move ignored");
        }
        self.state()
    }

    /// Replaces one field of the filter criteria.
    pub fn set_filter(&mut self, update: FilterUpdate) -> Arc<BoardState> {
        tracing::debug!(field = ?update.field(), "updating filter");
        self.commit(self.state.set_filter(update));
        self.state()
    }

    /// Replaces one field of the filter criteria from raw input strings.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`FilterUpdate::from_raw`].
    pub fn set_filter_raw(&mut self, field: &str, value: &str) -> BoardResult<Arc<BoardState>> {
        let update = FilterUpdate::from_raw(field, value)?;
        Ok(self.set_filter(update))
    }

    /// Replaces the whole board with a restored snapshot.
    ///
    /// On failure the current board is left exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns [`crate::board::domain::BoardError::MalformedState`] when the
    /// snapshot lacks a section key.
    pub fn load_state(&mut self, snapshot: BoardSnapshot) -> BoardResult<Arc<BoardState>> {
        let next = BoardState::load(snapshot)?;
        tracing::debug!(tasks = next.task_count(), "loaded board snapshot");
        self.commit(next);
        Ok(self.state())
    }

    /// Applies a typed action through the board transition function.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`BoardState::apply`].
    pub fn dispatch(&mut self, action: BoardAction) -> BoardResult<Arc<BoardState>> {
        let next = self.state.apply(action)?;
        self.commit(next);
        Ok(self.state())
    }

    /// Captures the current board as a snapshot.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        self.state.snapshot()
    }

    /// Installs `next` unless it equals the current state. Returns whether
    /// the state changed.
    fn commit(&mut self, next: BoardState) -> bool {
        if next == *self.state {
            return false;
        }
        self.state = Arc::new(next);
        true
    }
}
