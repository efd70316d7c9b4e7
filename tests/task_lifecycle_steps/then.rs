//! Then steps for task lifecycle BDD scenarios.

use super::world::{TaskLifecycleWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::then;
use tasktracker::task::domain::TaskStatus;

#[then("the operation succeeds")]
fn operation_succeeds(world: &TaskLifecycleWorld) -> Result<(), eyre::Report> {
    match world.last_result()? {
        Ok(_) => Ok(()),
        Err(err) => Err(eyre::eyre!("expected success, got {err:?}")),
    }
}

#[then(r#"the operation fails with "{message}""#)]
fn operation_fails_with(world: &TaskLifecycleWorld, message: String) -> Result<(), eyre::Report> {
    match world.last_result()? {
        Ok(task) => Err(eyre::eyre!("expected failure, got {task:?}")),
        Err(err) if err.messages() == [message.as_str()] => Ok(()),
        Err(err) => Err(eyre::eyre!(
            "expected message {message:?}, got {:?}",
            err.messages()
        )),
    }
}

#[then("the store holds {count:usize} tasks")]
fn store_holds(world: &TaskLifecycleWorld, count: usize) -> Result<(), eyre::Report> {
    let tasks = run_async(world.service.get_all()).wrap_err("list tasks")?;
    if tasks.len() != count {
        return Err(eyre::eyre!("expected {count} tasks, found {}", tasks.len()));
    }
    Ok(())
}

#[then(r#"the task "{description}" has status "{status}""#)]
fn task_has_status(
    world: &TaskLifecycleWorld,
    description: String,
    status: String,
) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let tasks = run_async(world.service.get_all()).wrap_err("list tasks")?;
    let task = tasks
        .iter()
        .find(|task| task.description() == description)
        .ok_or_else(|| eyre::eyre!("no stored task described as {description:?}"))?;

    if task.status() != expected {
        return Err(eyre::eyre!(
            "expected status {}, found {}",
            expected.as_str(),
            task.status().as_str()
        ));
    }
    Ok(())
}
