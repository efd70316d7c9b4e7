//! Given steps for task lifecycle BDD scenarios.

use super::world::{TaskLifecycleWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use tasktracker::task::domain::TaskStatus;

#[given("an empty task store")]
fn empty_task_store(world: &TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let tasks = run_async(world.service.get_all()).wrap_err("list tasks for empty store")?;
    if !tasks.is_empty() {
        return Err(eyre::eyre!("expected an empty store, found {} tasks", tasks.len()));
    }
    Ok(())
}

#[given(r#"a stored task described as "{description}""#)]
fn stored_task(world: &mut TaskLifecycleWorld, description: String) -> Result<(), eyre::Report> {
    let created = run_async(world.service.add(&description)).wrap_err("add task in scenario setup")?;
    world.current_task = Some(created);
    Ok(())
}

#[given(r#"the task status has been set to "{status}""#)]
fn task_status_has_been_set(
    world: &mut TaskLifecycleWorld,
    status: String,
) -> Result<(), eyre::Report> {
    let target = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))?;
    let id = world.current_task()?.id();
    let updated = run_async(world.service.update_status(id, target))
        .wrap_err("update task status in scenario setup")?;
    world.current_task = Some(updated);
    Ok(())
}

#[given("the task has been deleted")]
fn task_has_been_deleted(world: &mut TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let id = world.current_task()?.id();
    run_async(world.service.delete(id)).wrap_err("delete task in scenario setup")?;
    Ok(())
}
