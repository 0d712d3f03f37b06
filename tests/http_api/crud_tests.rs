//! End-to-end CRUD flows over the HTTP surface.

use super::helpers::{Call, app, create_task, id_of};
use axum::Router;
use axum::http::{Method, StatusCode};
use rstest::rstest;
use serde_json::{Value, json};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_update_delete_lifecycle(app: Router) -> Result<(), eyre::Report> {
    let created = create_task(
        &app,
        &json!({"title": "Finish homework", "description": "Math exercises page 24"}),
    )
    .await?;
    let id = id_of(&created)?;
    assert_eq!(created["title"], "Finish homework");
    assert_eq!(created["description"], "Math exercises page 24");
    assert_eq!(created["status"], "PENDING");
    assert_eq!(created["createdAt"], created["updatedAt"]);

    let updated = Call::new(Method::PUT, format!("/api/tasks/{id}"))
        .json(&json!({
            "title": "Finish homework",
            "description": null,
            "status": "IN_PROGRESS"
        }))
        .send(&app)
        .await?;
    assert_eq!(updated.status, StatusCode::OK);
    let body = updated.json()?;
    assert_eq!(body["status"], "IN_PROGRESS");
    assert_eq!(body["description"], "Math exercises page 24");
    assert_eq!(body["createdAt"], created["createdAt"]);

    let deleted = Call::new(Method::DELETE, format!("/api/tasks/{id}"))
        .send(&app)
        .await?;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);
    assert!(deleted.body.is_empty());

    let missing = Call::new(Method::GET, format!("/api/tasks/{id}"))
        .send(&app)
        .await?;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(missing.text(), "Task not found");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn get_returns_created_representation(app: Router) -> Result<(), eyre::Report> {
    let created = create_task(&app, &json!({"title": "Water plants", "status": "COMPLETED"})).await?;
    let id = id_of(&created)?;

    let fetched = Call::new(Method::GET, format!("/api/tasks/{id}"))
        .send(&app)
        .await?;

    assert_eq!(fetched.status, StatusCode::OK);
    let body = fetched.json()?;
    assert_eq!(body, created);
    assert_eq!(body["status"], "COMPLETED");
    assert!(body["description"].is_null());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_filters_by_status(app: Router) -> Result<(), eyre::Report> {
    for (title, status) in [("a", "PENDING"), ("b", "COMPLETED"), ("c", "PENDING")] {
        create_task(&app, &json!({"title": title, "status": status})).await?;
    }

    let listed = Call::new(Method::GET, "/api/tasks?status=PENDING")
        .send(&app)
        .await?;

    assert_eq!(listed.status, StatusCode::OK);
    let titles: Vec<Value> = listed
        .json()?
        .as_array()
        .ok_or_else(|| eyre::eyre!("list body is not an array"))?
        .iter()
        .map(|task| task["title"].clone())
        .collect();
    assert_eq!(titles, [json!("a"), json!("c")]);
    Ok(())
}

#[rstest]
#[case::second_page("/api/tasks?page=1&size=2", &["c", "d"])]
#[case::size_only("/api/tasks?size=3", &["a", "b", "c"])]
#[case::past_the_end("/api/tasks?page=9&size=2", &[])]
#[tokio::test(flavor = "multi_thread")]
async fn list_paginates(
    app: Router,
    #[case] uri: &'static str,
    #[case] expected: &[&str],
) -> Result<(), eyre::Report> {
    for title in ["a", "b", "c", "d", "e"] {
        create_task(&app, &json!({"title": title})).await?;
    }

    let listed = Call::new(Method::GET, uri).send(&app).await?;

    assert_eq!(listed.status, StatusCode::OK);
    let body = listed.json()?;
    let titles: Vec<&str> = body
        .as_array()
        .ok_or_else(|| eyre::eyre!("list body is not an array"))?
        .iter()
        .filter_map(|task| task["title"].as_str())
        .collect();
    assert_eq!(titles, expected);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn empty_store_lists_empty_array(app: Router) -> Result<(), eyre::Report> {
    let listed = Call::new(Method::GET, "/api/tasks").send(&app).await?;
    assert_eq!(listed.status, StatusCode::OK);
    assert_eq!(listed.json()?, json!([]));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn title_only_update_preserves_status(app: Router) -> Result<(), eyre::Report> {
    let created = create_task(
        &app,
        &json!({"title": "Draft", "description": "notes", "status": "IN_PROGRESS"}),
    )
    .await?;
    let id = id_of(&created)?;

    let updated = Call::new(Method::PUT, format!("/api/tasks/{id}"))
        .json(&json!({"title": "Final"}))
        .send(&app)
        .await?;

    let body = updated.json()?;
    assert_eq!(body["title"], "Final");
    assert_eq!(body["description"], "notes");
    assert_eq!(body["status"], "IN_PROGRESS");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn responses_carry_request_id(app: Router) -> Result<(), eyre::Report> {
    let response = Call::new(Method::GET, "/api/tasks").send(&app).await?;
    assert!(response.headers.contains_key("x-request-id"));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn pending_task_progresses_then_disappears(app: Router) -> Result<(), eyre::Report> {
    let created = create_task(&app, &json!({"title": "Finish homework", "status": "PENDING"})).await?;
    let uri = format!("/api/tasks/{}", id_of(&created)?);

    let progressed = Call::new(Method::PUT, uri.as_str())
        .json(&json!({"title": "Finish homework", "status": "IN_PROGRESS"}))
        .send(&app)
        .await?;
    assert_eq!(progressed.status, StatusCode::OK);
    let body = progressed.json()?;
    assert_eq!(body["status"], "IN_PROGRESS");
    assert!(body["description"].is_null());

    let deleted = Call::new(Method::DELETE, uri.as_str()).send(&app).await?;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);
    let missing = Call::new(Method::GET, uri.as_str()).send(&app).await?;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    Ok(())
}
