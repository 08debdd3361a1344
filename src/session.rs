//! Top-level board session.
//!
//! [`BoardSession`] owns the task store together with the drag and form
//! controllers. The presentation layer talks only to this type: it reads
//! column views and forwards gestures and form input unmodified.

use std::sync::Arc;

use mockable::DefaultClock;

use crate::board::{
    adapters::ClockTaskIdGenerator,
    domain::{BoardResult, BoardSnapshot, BoardState, Section, TaskDraft, TaskId, VisibleTasks},
    ports::TaskIdGenerator,
    services::TaskStore,
};
use crate::config::BoardConfig;
use crate::drag::{
    domain::{Bounds, DragSession, MoveRequest, Point, PointerEvent},
    services::DragController,
};
use crate::form::{
    domain::{SubmitOutcome, TaskForm},
    services::TaskFormController,
};

/// Render data for one section column.
#[derive(Debug, Clone)]
pub struct ColumnView<'a> {
    /// Section shown in the column.
    pub section: Section,
    /// Column heading.
    pub title: &'static str,
    /// Number of tasks passing the active filter.
    pub visible_count: usize,
    /// Tasks passing the active filter, in display order.
    pub tasks: VisibleTasks<'a>,
    /// Whether the column is highlighted as the pending drop target.
    pub highlighted: bool,
}

/// Single-user, in-memory board session.
#[derive(Debug)]
pub struct BoardSession<G: TaskIdGenerator = ClockTaskIdGenerator<DefaultClock>> {
    config: BoardConfig,
    store: TaskStore<G>,
    drag: DragController,
    form: TaskFormController,
}

impl BoardSession {
    /// Creates a session issuing timestamp-based task identifiers.
    #[must_use]
    pub fn new(config: BoardConfig) -> Self {
        Self::with_id_generator(ClockTaskIdGenerator::new(DefaultClock), config)
    }
}

impl<G: TaskIdGenerator> BoardSession<G> {
    /// Creates a session issuing identifiers from `ids`.
    #[must_use]
    pub fn with_id_generator(ids: G, config: BoardConfig) -> Self {
        let store = TaskStore::new(ids, &config);
        let form = TaskFormController::new(config.default_priority);
        Self {
            config,
            store,
            drag: DragController::new(),
            form,
        }
    }

    /// Returns the session configuration.
    #[must_use]
    pub const fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Returns the current board snapshot.
    #[must_use]
    pub fn state(&self) -> Arc<BoardState> {
        self.store.state()
    }

    /// Borrows the current board snapshot.
    #[must_use]
    pub fn board(&self) -> &BoardState {
        self.store.current()
    }

    /// Returns render data for `section`.
    #[must_use]
    pub fn column(&self, section: Section) -> ColumnView<'_> {
        let board = self.store.current();
        ColumnView {
            section,
            title: section.title(),
            visible_count: board.visible_count(section),
            tasks: board.visible(section),
            highlighted: self.drag.session().highlighted_section() == Some(section),
        }
    }

    /// Returns render data for every column in display order.
    #[must_use]
    pub fn columns(&self) -> [ColumnView<'_>; 3] {
        Section::ALL.map(|section| self.column(section))
    }

    /// Adds a task to the named section.
    ///
    /// # Errors
    ///
    /// See [`TaskStore::add_task`].
    pub fn add_task(&mut self, section: &str, draft: TaskDraft) -> BoardResult<Arc<BoardState>> {
        self.store.add_task(section, draft)
    }

    /// Moves a task between the named sections.
    ///
    /// # Errors
    ///
    /// See [`TaskStore::move_task`].
    pub fn move_task(
        &mut self,
        from: &str,
        to: &str,
        task_id: &TaskId,
    ) -> BoardResult<Arc<BoardState>> {
        self.store.move_task(from, to, task_id)
    }

    /// Applies a filter input change.
    ///
    /// # Errors
    ///
    /// See [`TaskStore::set_filter_raw`].
    pub fn set_filter(&mut self, field: &str, value: &str) -> BoardResult<Arc<BoardState>> {
        self.store.set_filter_raw(field, value)
    }

    /// Replaces the board with a restored snapshot.
    ///
    /// # Errors
    ///
    /// See [`TaskStore::load_state`].
    pub fn load_state(&mut self, snapshot: BoardSnapshot) -> BoardResult<Arc<BoardState>> {
        self.store.load_state(snapshot)
    }

    /// Replaces the board with a snapshot decoded from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`crate::board::domain::BoardError::Snapshot`] for an
    /// undecodable payload, otherwise see [`TaskStore::load_state`].
    pub fn restore_json(&mut self, json: &str) -> BoardResult<Arc<BoardState>> {
        let snapshot = BoardSnapshot::from_json(json)?;
        self.store.load_state(snapshot)
    }

    /// Encodes the current board as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`crate::board::domain::BoardError::Snapshot`] if encoding
    /// fails.
    pub fn snapshot_json(&self) -> BoardResult<String> {
        self.store.snapshot().to_json()
    }

    /// Returns the current drag session.
    #[must_use]
    pub const fn drag_session(&self) -> &DragSession {
        self.drag.session()
    }

    /// Starts dragging the task with `task_id` from the section holding it.
    ///
    /// Returns `false` and leaves the session untouched when the task is
    /// not on the board.
    pub fn start_drag(&mut self, task_id: &TaskId) -> bool {
        let Some((section, task)) = self.store.current().find_task(task_id) else {
            return false;
        };
        let event = PointerEvent::GestureStart {
            task: task.clone(),
            section,
        };
        self.drag.handle(event, &mut self.store);
        true
    }

    /// Forwards a pointer entering a section column.
    pub fn pointer_enter(&mut self, section: Section) {
        self.drag
            .handle(PointerEvent::Enter { section }, &mut self.store);
    }

    /// Forwards a pointer leaving a section column.
    pub fn pointer_leave(&mut self, section: Section, pointer: Point, bounds: Bounds) {
        let event = PointerEvent::Leave {
            section,
            pointer,
            bounds,
        };
        self.drag.handle(event, &mut self.store);
    }

    /// Forwards a drop on a section column and returns the committed move.
    pub fn drop_on(&mut self, section: Section) -> Option<MoveRequest> {
        self.drag
            .handle(PointerEvent::Drop { section }, &mut self.store)
    }

    /// Forwards a drop outside every section column.
    pub fn drop_outside(&mut self) {
        self.drag.handle(PointerEvent::DropOutside, &mut self.store);
    }

    /// Forwards the end of a drag gesture.
    pub fn end_drag(&mut self) {
        self.drag.handle(PointerEvent::GestureEnd, &mut self.store);
    }

    /// Returns the task creation form.
    #[must_use]
    pub const fn form(&self) -> &TaskForm {
        self.form.form()
    }

    /// Returns the task creation form for editing its draft.
    pub const fn form_mut(&mut self) -> &mut TaskForm {
        self.form.form_mut()
    }

    /// Opens the task creation form for `section`.
    pub const fn open_form(&mut self, section: Section) {
        self.form.form_mut().open_for(section);
    }

    /// Closes the task creation form without creating anything.
    pub const fn cancel_form(&mut self) {
        self.form.form_mut().cancel();
    }

    /// Submits the task creation form.
    pub fn submit_form(&mut self) -> SubmitOutcome {
        self.form.submit(&mut self.store)
    }
}
