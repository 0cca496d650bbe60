use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers::{
        health::livez,
        tasks::{create_task, delete_task, get_task, list_tasks, update_task},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    // CORS configuration: any origin may call the API
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    // API routes with CORS
    let api_routes = Router::new()
        .route("/tasks", get(list_tasks).post(create_task))
        .route(
            "/tasks/{id}",
            get(get_task).put(update_task).delete(delete_task),
        )
        .layer(cors);

    Router::new()
        .route("/livez", get(livez))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::storage::SqliteTaskRepository;

    async fn test_app() -> Router {
        let repo = SqliteTaskRepository::new_in_memory().await.unwrap();
        create_app(AppState::new(Arc::new(repo)))
    }

    async fn post_task(app: &Router, body: serde_json::Value) -> Response {
        app.clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/tasks")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn get_json(app: &Router, uri: &str) -> Response {
        app.clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_livez() {
        let app = test_app().await;

        let response = get_json(&app, "/livez").await;

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_create_task_success() {
        let app = test_app().await;

        let response = post_task(
            &app,
            serde_json::json!({
                "title": "Buy groceries",
                "description": "Milk, Bread",
                "status": "pending"
            }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::CREATED);
        let task = body_json(response).await;
        assert_eq!(task["id"], 1);
        assert_eq!(task["title"], "Buy groceries");
        assert_eq!(task["description"], "Milk, Bread");
        assert_eq!(task["status"], "pending");
        assert!(task["created_at"].is_string());
        assert!(task.get("error").is_none());
    }

    #[tokio::test]
    async fn test_create_task_defaults_description_and_status() {
        let app = test_app().await;

        let response = post_task(&app, serde_json::json!({ "title": "Bare" })).await;

        assert_eq!(response.status(), StatusCode::CREATED);
        let task = body_json(response).await;
        assert_eq!(task["description"], "");
        assert_eq!(task["status"], "pending");
    }

    #[tokio::test]
    async fn test_create_task_missing_title() {
        let app = test_app().await;

        let response = post_task(&app, serde_json::json!({ "description": "No title" })).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "Title is required");
    }

    #[tokio::test]
    async fn test_create_task_empty_title_persists_nothing() {
        let app = test_app().await;

        let response = post_task(&app, serde_json::json!({ "title": "" })).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "Title is required");

        // No row was written.
        let response = get_json(&app, "/api/tasks").await;
        assert_eq!(body_json(response).await, serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_create_task_without_body() {
        let app = test_app().await;

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/tasks")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "Title is required");
    }

    #[tokio::test]
    async fn test_list_tasks_empty() {
        let app = test_app().await;

        let response = get_json(&app, "/api/tasks").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_list_tasks_most_recent_first() {
        let app = test_app().await;
        for title in ["Task 1", "Task 2", "Task 3"] {
            let response = post_task(&app, serde_json::json!({ "title": title })).await;
            assert_eq!(response.status(), StatusCode::CREATED);
        }

        let response = get_json(&app, "/api/tasks").await;

        assert_eq!(response.status(), StatusCode::OK);
        let tasks = body_json(response).await;
        let titles: Vec<&str> = tasks
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["title"].as_str().unwrap())
            .collect();
        assert_eq!(titles, ["Task 3", "Task 2", "Task 1"]);
    }

    #[tokio::test]
    async fn test_get_single_task() {
        let app = test_app().await;
        post_task(&app, serde_json::json!({ "title": "Specific Task" })).await;

        let response = get_json(&app, "/api/tasks/1").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["title"], "Specific Task");
    }

    #[tokio::test]
    async fn test_get_nonexistent_task() {
        let app = test_app().await;

        let response = get_json(&app, "/api/tasks/999").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["error"], "Task not found");
    }

    #[tokio::test]
    async fn test_create_then_get_round_trip() {
        let app = test_app().await;

        let created = body_json(
            post_task(
                &app,
                serde_json::json!({ "title": "Round trip", "status": "started" }),
            )
            .await,
        )
        .await;

        let fetched = body_json(get_json(&app, "/api/tasks/1").await).await;

        // Server-assigned fields come back identical, not re-generated.
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_update_task() {
        let app = test_app().await;
        post_task(&app, serde_json::json!({ "title": "Old Title" })).await;

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/api/tasks/1")
                    .header("Content-Type", "application/json")
                    .body(Body::from(
                        serde_json::json!({ "title": "New Title", "status": "completed" })
                            .to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let task = body_json(response).await;
        assert_eq!(task["title"], "New Title");
        assert_eq!(task["status"], "completed");
    }

    #[tokio::test]
    async fn test_update_partial_body_retains_other_fields() {
        let app = test_app().await;
        post_task(&app, serde_json::json!({ "title": "Old" })).await;

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/api/tasks/1")
                    .header("Content-Type", "application/json")
                    .body(Body::from(
                        serde_json::json!({ "status": "completed" }).to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let task = body_json(response).await;
        assert_eq!(task["title"], "Old");
        assert_eq!(task["status"], "completed");
    }

    #[tokio::test]
    async fn test_update_nonexistent_task() {
        let app = test_app().await;

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/api/tasks/999")
                    .header("Content-Type", "application/json")
                    .body(Body::from(
                        serde_json::json!({ "title": "Ghost" }).to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["error"], "Task not found");
    }

    #[tokio::test]
    async fn test_delete_task_is_terminal() {
        let app = test_app().await;
        post_task(&app, serde_json::json!({ "title": "To Delete" })).await;

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/api/tasks/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await["message"],
            "Task deleted successfully"
        );

        // Verify it's gone
        let response = get_json(&app, "/api/tasks/1").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_nonexistent_task() {
        let app = test_app().await;

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/api/tasks/999")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["error"], "Task not found");
    }

    #[tokio::test]
    async fn test_non_integer_id_is_rejected_without_crash() {
        let app = test_app().await;

        let response = get_json(&app, "/api/tasks/not-a-number").await;

        // Path extractor rejection, not a panic.
        assert!(response.status().is_client_error());
    }
}
