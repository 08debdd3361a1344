//! When steps for task board BDD scenarios.

use super::world::{BoardWorld, section};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use taskboard::board::domain::{TaskDraft, TaskId};

#[when(r#"a task titled "{title}" is added to "{key}""#)]
fn add_task(world: &mut BoardWorld, title: String, key: String) -> Result<(), eyre::Report> {
    world
        .session
        .add_task(&key, TaskDraft::new(title))
        .wrap_err("add task")?;
    Ok(())
}

#[when(r#"task "{id}" is moved from "{from}" to "{to}""#)]
fn move_task(
    world: &mut BoardWorld,
    id: String,
    from: String,
    to: String,
) -> Result<(), eyre::Report> {
    world
        .session
        .move_task(&from, &to, &TaskId::new(id))
        .wrap_err("move task")?;
    Ok(())
}

#[when(r#"task "{id}" is picked up"#)]
fn pick_up(world: &mut BoardWorld, id: String) -> Result<(), eyre::Report> {
    if !world.session.start_drag(&TaskId::new(id.as_str())) {
        return Err(eyre::eyre!("task {id} is not on the board"));
    }
    Ok(())
}

#[when(r#"the pointer enters "{key}""#)]
fn pointer_enters(world: &mut BoardWorld, key: String) -> Result<(), eyre::Report> {
    let target = section(&key)?;
    world.session.pointer_enter(target);
    Ok(())
}

#[when(r#"the task is dropped on "{key}""#)]
fn dropped_on(world: &mut BoardWorld, key: String) -> Result<(), eyre::Report> {
    let target = section(&key)?;
    if let Some(request) = world.session.drop_on(target) {
        world.committed_moves.push(request);
    }
    world.session.end_drag();
    Ok(())
}

#[when("the task is dropped outside the board")]
fn dropped_outside(world: &mut BoardWorld) {
    world.session.drop_outside();
    world.session.end_drag();
}

#[when("the form is submitted")]
fn form_submitted(world: &mut BoardWorld) {
    world.last_submit = Some(world.session.submit_form());
}

#[when(r#"the "{field}" filter is set to "{value}""#)]
fn filter_set(world: &mut BoardWorld, field: String, value: String) -> Result<(), eyre::Report> {
    world
        .session
        .set_filter(&field, &value)
        .wrap_err("set filter")?;
    Ok(())
}
