//! Given steps for task board BDD scenarios.

use super::world::{BoardWorld, section};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskboard::board::domain::TaskDraft;

#[given("an empty board")]
fn empty_board(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    if world.session.board().task_count() != 0 {
        return Err(eyre::eyre!("scenario world did not start empty"));
    }
    Ok(())
}

#[given(r#"a task titled "{title}" in "{key}""#)]
fn task_in_section(
    world: &mut BoardWorld,
    title: String,
    key: String,
) -> Result<(), eyre::Report> {
    world
        .session
        .add_task(&key, TaskDraft::new(title))
        .wrap_err("add task in scenario setup")?;
    Ok(())
}

#[given(r#"the form is open for "{key}""#)]
fn form_open_for(world: &mut BoardWorld, key: String) -> Result<(), eyre::Report> {
    let target = section(&key)?;
    world.session.open_form(target);
    Ok(())
}

#[given(r#"the form title is "{title}""#)]
fn form_title(world: &mut BoardWorld, title: String) {
    world.session.form_mut().set_title(title);
}
