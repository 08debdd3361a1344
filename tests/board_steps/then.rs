//! Then steps for task board BDD scenarios.

use super::world::{BoardWorld, section, task_ids};
use rstest_bdd_macros::then;
use taskboard::{
    board::domain::{TaskDraft, TaskId},
    drag::domain::MoveRequest,
    form::domain::SubmitOutcome,
};

#[then(r#"the "{key}" section count is {count:u64}"#)]
fn section_count(world: &BoardWorld, key: String, count: u64) -> Result<(), eyre::Report> {
    let target = section(&key)?;
    let actual = u64::try_from(world.session.board().tasks(target).len())?;
    if actual != count {
        return Err(eyre::eyre!("expected {count} tasks in {key}, found {actual}"));
    }
    Ok(())
}

#[then(r#"the "{key}" section holds exactly "{ids}""#)]
fn section_holds(world: &BoardWorld, key: String, ids: String) -> Result<(), eyre::Report> {
    let target = section(&key)?;
    let actual: Vec<TaskId> = world
        .session
        .board()
        .tasks(target)
        .iter()
        .map(|task| task.id().clone())
        .collect();
    let expected = task_ids(&ids);
    if actual != expected {
        return Err(eyre::eyre!("expected {expected:?} in {key}, found {actual:?}"));
    }
    Ok(())
}

#[then(r#"the "{key}" section shows exactly "{ids}""#)]
fn section_shows(world: &BoardWorld, key: String, ids: String) -> Result<(), eyre::Report> {
    let target = section(&key)?;
    let actual: Vec<TaskId> = world
        .session
        .column(target)
        .tasks
        .map(|task| task.id().clone())
        .collect();
    let expected = task_ids(&ids);
    if actual != expected {
        return Err(eyre::eyre!(
            "expected {expected:?} visible in {key}, found {actual:?}"
        ));
    }
    Ok(())
}

#[then(r#"the highlighted section is "{key}""#)]
fn highlighted_section(world: &BoardWorld, key: String) -> Result<(), eyre::Report> {
    let target = section(&key)?;
    let actual = world.session.drag_session().highlighted_section();
    if actual != Some(target) {
        return Err(eyre::eyre!("expected {key} highlighted, found {actual:?}"));
    }
    Ok(())
}

#[then("no section is highlighted")]
fn nothing_highlighted(world: &BoardWorld) -> Result<(), eyre::Report> {
    if let Some(highlighted) = world.session.drag_session().highlighted_section() {
        return Err(eyre::eyre!("unexpected highlight on {highlighted}"));
    }
    Ok(())
}

#[then("a drag is in progress")]
fn drag_in_progress(world: &BoardWorld) -> Result<(), eyre::Report> {
    if world.session.drag_session().is_idle() {
        return Err(eyre::eyre!("expected an active drag session"));
    }
    Ok(())
}

#[then("no drag is in progress")]
fn drag_idle(world: &BoardWorld) -> Result<(), eyre::Report> {
    if !world.session.drag_session().is_idle() {
        return Err(eyre::eyre!(
            "expected idle drag session, found {:?}",
            world.session.drag_session()
        ));
    }
    Ok(())
}

#[then(r#"exactly one move of "{id}" from "{from}" to "{to}" was committed"#)]
fn one_move_committed(
    world: &BoardWorld,
    id: String,
    from: String,
    to: String,
) -> Result<(), eyre::Report> {
    let expected = vec![MoveRequest {
        from: section(&from)?,
        to: section(&to)?,
        task_id: TaskId::new(id),
    }];
    if world.committed_moves != expected {
        return Err(eyre::eyre!(
            "expected {expected:?}, committed {:?}",
            world.committed_moves
        ));
    }
    Ok(())
}

#[then("no move was committed")]
fn no_move_committed(world: &BoardWorld) -> Result<(), eyre::Report> {
    if !world.committed_moves.is_empty() {
        return Err(eyre::eyre!(
            "unexpected moves {:?}",
            world.committed_moves
        ));
    }
    Ok(())
}

#[then("the submission is rejected")]
fn submission_rejected(world: &BoardWorld) -> Result<(), eyre::Report> {
    if world.last_submit != Some(SubmitOutcome::Rejected) {
        return Err(eyre::eyre!(
            "expected rejection, got {:?}",
            world.last_submit
        ));
    }
    Ok(())
}

#[then(r#"the submission created "{id}""#)]
fn submission_created(world: &BoardWorld, id: String) -> Result<(), eyre::Report> {
    let expected = Some(SubmitOutcome::Created(TaskId::new(id)));
    if world.last_submit != expected {
        return Err(eyre::eyre!(
            "expected {expected:?}, got {:?}",
            world.last_submit
        ));
    }
    Ok(())
}

#[then("the form is still open")]
fn form_still_open(world: &BoardWorld) -> Result<(), eyre::Report> {
    if !world.session.form().is_open() {
        return Err(eyre::eyre!("expected the form to stay open"));
    }
    Ok(())
}

#[then("the form is closed")]
fn form_closed(world: &BoardWorld) -> Result<(), eyre::Report> {
    let form = world.session.form();
    if form.is_open() {
        return Err(eyre::eyre!("expected the form to be closed"));
    }
    if form.draft() != &TaskDraft::default() {
        return Err(eyre::eyre!("expected a blank draft, found {:?}", form.draft()));
    }
    Ok(())
}

#[then(r#"the form title is still "{title}""#)]
fn form_title_unchanged(world: &BoardWorld, title: String) -> Result<(), eyre::Report> {
    let actual = &world.session.form().draft().title;
    if *actual != title {
        return Err(eyre::eyre!("expected draft title {title:?}, found {actual:?}"));
    }
    Ok(())
}

#[then("the board holds no tasks")]
fn board_empty(world: &BoardWorld) -> Result<(), eyre::Report> {
    let count = world.session.board().task_count();
    if count != 0 {
        return Err(eyre::eyre!("expected an empty board, found {count} tasks"));
    }
    Ok(())
}
