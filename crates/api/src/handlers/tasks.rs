//! Task handlers.
//!
//! One function per method+path pair. Every store access happens inside a
//! single call into [`tasklist_domain::TaskStore`], which clones the
//! affected record before releasing its lock; the handlers only ever
//! serialize owned data.
//!
//! Body decoding is deliberately lenient: a malformed JSON body is treated
//! as the zero-value input rather than rejected, and the decode failure is
//! logged at debug level. Existing clients rely on that behavior.

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::de::DeserializeOwned;
use tasklist_domain::Task;

use crate::dto::request::{CreateTaskRequest, RenameTaskRequest};
use crate::dto::response::TaskResponse;
use crate::errors::ApiError;
use crate::state::AppState;

// =============================================================================
// Lenient Body Decoding
// =============================================================================

fn decode_or_default<T>(body: &[u8], endpoint: &'static str) -> T
where
    T: DeserializeOwned + Default,
{
    match serde_json::from_slice(body) {
        Ok(value) => value,
        Err(error) => {
            tracing::debug!(%error, endpoint, "request body did not decode, using defaults");
            T::default()
        }
    }
}

// =============================================================================
// List Tasks Handler
// =============================================================================

/// `GET /tasks`
///
/// Returns the full ordered sequence of tasks.
pub async fn list_tasks(State(state): State<AppState>) -> Json<Vec<TaskResponse>> {
    let tasks = state
        .store
        .list()
        .into_iter()
        .map(TaskResponse::from)
        .collect();

    Json(tasks)
}

// =============================================================================
// Create Task Handler
// =============================================================================

/// `POST /tasks`
///
/// Appends the submitted task to the end of the store and echoes the stored
/// record back. No uniqueness or non-empty validation is performed.
pub async fn create_task(State(state): State<AppState>, body: Bytes) -> Json<TaskResponse> {
    let request: CreateTaskRequest = decode_or_default(&body, "create_task");

    let stored = state.store.append(Task::from(request));

    tracing::debug!(id = %stored.id, "task appended");

    Json(TaskResponse::from(stored))
}

// =============================================================================
// Delete Task Handler
// =============================================================================

/// `DELETE /tasks/{id}`
///
/// Removes the first task with the given id. Responds 204 whether or not a
/// match was found; deletion gives no existence feedback.
pub async fn delete_task(State(state): State<AppState>, Path(id): Path<String>) -> StatusCode {
    let removed = state.store.remove(&id);

    tracing::debug!(%id, removed, "task delete requested");

    StatusCode::NO_CONTENT
}

// =============================================================================
// Toggle Done Handler
// =============================================================================

/// `PUT /tasks/{id}/done`
///
/// Flips the completion flag of the first task with the given id.
pub async fn toggle_task_done(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TaskResponse>, ApiError> {
    state
        .store
        .toggle_done(&id)
        .map(TaskResponse::from)
        .map(Json)
        .ok_or(ApiError::TaskNotFound)
}

// =============================================================================
// Rename Task Handler
// =============================================================================

/// `PUT /tasks/{id}/name`
///
/// Replaces the name of the first task with the given id, leaving the other
/// fields untouched. A malformed body renames to the empty string, like the
/// other lenient decodes.
pub async fn rename_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<TaskResponse>, ApiError> {
    let request: RenameTaskRequest = decode_or_default(&body, "rename_task");

    state
        .store
        .rename(&id, request.name)
        .map(TaskResponse::from)
        .map(Json)
        .ok_or(ApiError::TaskNotFound)
}

// =============================================================================
// Tests
// =============================================================================
