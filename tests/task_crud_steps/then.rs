//! Then steps for task CRUD BDD scenarios.

use super::world::TaskWorld;
use axum::http::{Method, header};
use rstest_bdd_macros::then;
use serde_json::Value;

#[then("the response status is {code:u16}")]
fn response_status(world: &TaskWorld, code: u16) -> Result<(), eyre::Report> {
    let status = world.response()?.status;
    eyre::ensure!(
        status.as_u16() == code,
        "expected status {code}, found {status}"
    );
    Ok(())
}

#[then(r#"the task status is "{status}""#)]
fn task_status(world: &TaskWorld, status: String) -> Result<(), eyre::Report> {
    let task = world.response()?.json()?;
    eyre::ensure!(
        task.get("status").and_then(Value::as_str) == Some(status.as_str()),
        "expected status {status}, found {task}"
    );
    Ok(())
}

#[then(r#"the task description is "{description}""#)]
fn task_description(world: &TaskWorld, description: String) -> Result<(), eyre::Report> {
    let task = world.response()?.json()?;
    eyre::ensure!(
        task.get("description").and_then(Value::as_str) == Some(description.as_str()),
        "expected description {description}, found {task}"
    );
    Ok(())
}

#[then(r#"the response names the "{field}" field"#)]
fn names_field(world: &TaskWorld, field: String) -> Result<(), eyre::Report> {
    let errors = world.response()?.json()?;
    eyre::ensure!(
        errors.get(&field).is_some_and(Value::is_string),
        "expected an error for {field}, found {errors}"
    );
    Ok(())
}

#[then("the task board holds {count:usize} tasks")]
fn board_size(world: &mut TaskWorld, count: usize) -> Result<(), eyre::Report> {
    world.send(Method::GET, "/api/tasks", None)?;
    let listed = world.response()?.json()?;
    let found = listed
        .as_array()
        .map(Vec::len)
        .ok_or_else(|| eyre::eyre!("list body is not an array: {listed}"))?;
    eyre::ensure!(found == count, "expected {count} tasks, found {found}");
    Ok(())
}

#[then("the response carries a Basic challenge")]
fn basic_challenge(world: &TaskWorld) -> Result<(), eyre::Report> {
    let challenge = world
        .response()?
        .headers
        .get(header::WWW_AUTHENTICATE)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| eyre::eyre!("missing WWW-Authenticate header"))?;
    eyre::ensure!(
        challenge.starts_with("Basic "),
        "unexpected challenge {challenge}"
    );
    Ok(())
}

#[then(r#"the listed titles are "{titles}""#)]
fn listed_titles(world: &TaskWorld, titles: String) -> Result<(), eyre::Report> {
    let listed = world.response()?.json()?;
    let found: Vec<&str> = listed
        .as_array()
        .ok_or_else(|| eyre::eyre!("list body is not an array: {listed}"))?
        .iter()
        .filter_map(|task| task.get("title").and_then(Value::as_str))
        .collect();
    let expected: Vec<&str> = titles.split(", ").collect();
    eyre::ensure!(found == expected, "expected {expected:?}, found {found:?}");
    Ok(())
}
