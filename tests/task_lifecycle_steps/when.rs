//! When steps for task lifecycle BDD scenarios.

use super::world::{TaskLifecycleWorld, run_async};
use rstest_bdd_macros::when;
use tasktracker::task::domain::{TaskId, TaskStatus};

fn parse_status(status: &str) -> Result<TaskStatus, eyre::Report> {
    TaskStatus::try_from(status).map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))
}

#[when(r#"a task described as "{description}" is added"#)]
fn add_task(world: &mut TaskLifecycleWorld, description: String) {
    let result = run_async(world.service.add(&description));
    if let Ok(ref created) = result {
        world.current_task = Some(created.clone());
    }
    world.last_result = Some(result);
}

#[when("a task with a blank description is added")]
fn add_blank_task(world: &mut TaskLifecycleWorld) {
    world.last_result = Some(run_async(world.service.add("   ")));
}

#[when(r#"the task status is set to "{status}""#)]
fn set_task_status(world: &mut TaskLifecycleWorld, status: String) -> Result<(), eyre::Report> {
    let target = parse_status(&status)?;
    let id = world.current_task()?.id();
    let result = run_async(world.service.update_status(id, target));
    if let Ok(ref updated) = result {
        world.current_task = Some(updated.clone());
    }
    world.last_result = Some(result);
    Ok(())
}

#[when(r#"an unknown task status is set to "{status}""#)]
fn set_unknown_task_status(
    world: &mut TaskLifecycleWorld,
    status: String,
) -> Result<(), eyre::Report> {
    let target = parse_status(&status)?;
    world.last_result = Some(run_async(
        world.service.update_status(TaskId::new(), target),
    ));
    Ok(())
}

#[when("the task is deleted")]
fn delete_task(world: &mut TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let id = world.current_task()?.id();
    world.last_result = Some(run_async(world.service.delete(id)));
    Ok(())
}
