//! Task CRUD handlers.
//!
//! Each handler is a single request→response transform: parse the request,
//! call the repository, serialize the result. Handlers are stateless across
//! requests; the repository handle is the only shared resource.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use taskman_core::storage::RepositoryError;
use taskman_core::task::Task;

use crate::{
    handlers::AppError,
    models::{CreateTask, UpdateTask},
    state::AppState,
};

/// JSON error response `{"error": <message>}` (for validation errors).
fn error_response(
    status: StatusCode,
    message: impl Into<String>,
) -> (StatusCode, Json<serde_json::Value>) {
    let msg = message.into();
    tracing::warn!(status = %status, message = %msg, "API error");
    (status, Json(serde_json::json!({ "error": msg })))
}

/// List all tasks, most recent first (GET /api/tasks).
pub async fn list_tasks(State(state): State<AppState>) -> Result<Json<Vec<Task>>, AppError> {
    let tasks = state.task_repo.list_tasks().await?;

    Ok(Json(tasks))
}

/// Get a single task by ID (GET /api/tasks/{id}).
pub async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Task>, AppError> {
    let task = state.task_repo.get_task(id).await?;

    match task {
        Some(t) => Ok(Json(t)),
        None => Err(RepositoryError::NotFound {
            entity_type: "Task",
            id,
        }
        .into()),
    }
}

/// Create a new task (POST /api/tasks).
pub async fn create_task(
    State(state): State<AppState>,
    body: Result<Json<CreateTask>, JsonRejection>,
) -> Result<(StatusCode, Json<Task>), (StatusCode, Json<serde_json::Value>)> {
    // A missing or unparseable body is treated the same as a missing title.
    let draft = body
        .ok()
        .and_then(|Json(payload)| payload.into_draft())
        .ok_or_else(|| error_response(StatusCode::BAD_REQUEST, "Title is required"))?;

    tracing::debug!(title = %draft.title, "Received create task request");

    let task = state
        .task_repo
        .create_task(draft)
        .await
        .map_err(|e| error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    tracing::info!(task_id = task.id, title = %task.title, "Created new task");

    Ok((StatusCode::CREATED, Json(task)))
}

/// Update a task by ID (PUT /api/tasks/{id}).
///
/// Partial update: the patch is applied against the fetched record, so
/// fields absent from the body retain their stored value.
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    body: Result<Json<UpdateTask>, JsonRejection>,
) -> Result<Json<Task>, (StatusCode, Json<serde_json::Value>)> {
    let Json(payload) = body.map_err(|e| {
        error_response(
            StatusCode::BAD_REQUEST,
            format!("Failed to parse request body: {e}"),
        )
    })?;

    tracing::debug!(task_id = id, payload = ?payload, "Received update task request");

    let mut task = state
        .task_repo
        .get_task(id)
        .await
        .map_err(|e| error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?
        .ok_or_else(|| error_response(StatusCode::NOT_FOUND, "Task not found"))?;

    payload.apply_to(&mut task);

    state
        .task_repo
        .update_task(&task)
        .await
        .map_err(|e| error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    tracing::info!(task_id = id, "Updated task");

    Ok(Json(task))
}

/// Delete a task by ID (DELETE /api/tasks/{id}).
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, AppError> {
    tracing::debug!(task_id = id, "Received delete task request");

    state.task_repo.delete_task(id).await?;

    tracing::info!(task_id = id, "Deleted task");

    Ok(Json(
        serde_json::json!({ "message": "Task deleted successfully" }),
    ))
}
