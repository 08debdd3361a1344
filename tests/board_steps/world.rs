//! Shared world state for task board BDD scenarios.

use taskboard::{
    BoardConfig, BoardSession,
    board::{
        adapters::SequentialTaskIdGenerator,
        domain::{Section, TaskId},
    },
    drag::domain::MoveRequest,
    form::domain::SubmitOutcome,
};
use rstest::fixture;

/// Session type used by the BDD world.
pub type TestBoardSession = BoardSession<SequentialTaskIdGenerator>;

/// Scenario world for board behaviour tests.
pub struct BoardWorld {
    pub session: TestBoardSession,
    pub committed_moves: Vec<MoveRequest>,
    pub last_submit: Option<SubmitOutcome>,
}

impl BoardWorld {
    /// Creates a world around an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            session: BoardSession::with_id_generator(
                SequentialTaskIdGenerator::new(),
                BoardConfig::default(),
            ),
            committed_moves: Vec::new(),
            last_submit: None,
        }
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Parses a section key written in a scenario.
pub fn section(key: &str) -> Result<Section, eyre::Report> {
    Section::try_from(key).map_err(|err| eyre::eyre!("invalid section in scenario: {err}"))
}

/// Parses a comma-separated list of task ids written in a scenario.
pub fn task_ids(list: &str) -> Vec<TaskId> {
    list.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(TaskId::new)
        .collect()
}
