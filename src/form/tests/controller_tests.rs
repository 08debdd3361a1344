//! Tests for drafting and submitting tasks through the form.

use crate::board::{
    adapters::SequentialTaskIdGenerator,
    domain::{Priority, Section, TaskDraft, TaskId},
    services::TaskStore,
};
use crate::config::BoardConfig;
use crate::form::{
    domain::{SubmitOutcome, TaskForm},
    services::TaskFormController,
};
use eyre::{bail, ensure};
use rstest::{fixture, rstest};

type TestStore = TaskStore<SequentialTaskIdGenerator>;

#[fixture]
fn store() -> TestStore {
    TaskStore::new(SequentialTaskIdGenerator::new(), &BoardConfig::default())
}

#[fixture]
fn controller() -> TaskFormController {
    TaskFormController::new(Priority::Low)
}

#[rstest]
fn new_form_is_closed_with_blank_low_priority_draft(controller: TaskFormController) {
    let form = controller.form();
    assert!(!form.is_open());
    assert_eq!(form.draft(), &TaskDraft::default());
    assert_eq!(form.draft().priority, Priority::Low);
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\t\n")]
fn blank_title_is_rejected_silently(
    mut controller: TaskFormController,
    mut store: TestStore,
    #[case] title: &str,
) {
    controller.form_mut().open_for(Section::InProgress);
    controller.form_mut().set_title(title);
    controller.form_mut().set_description("kept");
    let before_form = controller.form().clone();
    let before_board = store.state();

    let outcome = controller.submit(&mut store);

    assert_eq!(outcome, SubmitOutcome::Rejected);
    assert_eq!(controller.form(), &before_form);
    assert!(controller.form().is_open());
    assert!(std::sync::Arc::ptr_eq(&before_board, &store.state()));
}

#[rstest]
fn submit_creates_task_in_target_section_and_resets(
    mut controller: TaskFormController,
    mut store: TestStore,
) -> eyre::Result<()> {
    let form = controller.form_mut();
    form.open_for(Section::Done);
    form.set_title("Release notes");
    form.set_description("v1.2");
    form.set_priority(Priority::High);

    let outcome = controller.submit(&mut store);

    ensure!(outcome == SubmitOutcome::Created(TaskId::new("t1")));
    let Some(created) = store.current().tasks(Section::Done).first() else {
        bail!("expected the new task in done");
    };
    ensure!(created.title() == "Release notes");
    ensure!(created.description() == "v1.2");
    ensure!(created.priority() == Priority::High);
    ensure!(!controller.form().is_open());
    ensure!(controller.form().draft() == &TaskDraft::default());
    Ok(())
}

#[rstest]
fn title_is_stored_as_typed(mut controller: TaskFormController, mut store: TestStore) {
    controller.form_mut().open_for(Section::Todo);
    controller.form_mut().set_title("  padded  ");
    controller.submit(&mut store);

    let titles: Vec<&str> = store
        .current()
        .tasks(Section::Todo)
        .iter()
        .map(|task| task.title())
        .collect();
    assert_eq!(titles, vec!["  padded  "]);
}

#[rstest]
fn submit_on_closed_form_is_rejected(mut controller: TaskFormController, mut store: TestStore) {
    controller.form_mut().set_title("Not shown");
    assert_eq!(controller.submit(&mut store), SubmitOutcome::Rejected);
    assert_eq!(store.current().task_count(), 0);
}

#[rstest]
fn cancel_closes_and_keeps_the_draft(mut controller: TaskFormController) {
    controller.form_mut().open_for(Section::Todo);
    controller.form_mut().set_title("Half typed");
    controller.form_mut().cancel();

    assert!(!controller.form().is_open());
    assert_eq!(controller.form().draft().title, "Half typed");

    controller.form_mut().open_for(Section::Done);
    assert_eq!(controller.form().target(), Section::Done);
    assert_eq!(controller.form().draft().title, "Half typed");
}

#[rstest]
fn reset_uses_configured_blank_priority(mut store: TestStore) {
    let mut controller = TaskFormController::new(Priority::High);
    controller.form_mut().open_for(Section::Todo);
    controller.form_mut().set_title("First");
    controller.form_mut().set_priority(Priority::Low);
    controller.submit(&mut store);

    assert_eq!(controller.form().draft().priority, Priority::High);
    assert_eq!(TaskForm::default().draft().priority, Priority::Low);
}

#[rstest]
fn submit_after_restore_creates_a_fresh_task(
    mut store: TestStore,
    mut controller: TaskFormController,
) -> eyre::Result<()> {
    store.create_task(Section::Todo, TaskDraft::new("Old"));
    let mut restored = TaskStore::new(SequentialTaskIdGenerator::new(), &BoardConfig::default());
    restored.load_state(store.snapshot())?;

    controller.form_mut().open_for(Section::Done);
    controller.form_mut().set_title("New");
    let outcome = controller.submit(&mut restored);

    ensure!(outcome == SubmitOutcome::Created(TaskId::new("t2")));
    ensure!(restored.current().task_count() == 2);
    ensure!(restored.current().tasks(Section::Done).len() == 1);
    Ok(())
}
