//! Routing definitions for the task API.
//!
//! This module wires handlers, middleware, and state into the Axum router.

use axum::Router;
use axum::http::{HeaderValue, Method, header};
use axum::middleware::from_fn;
use axum::routing::{delete, get, put};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::propagate_request_id;
use crate::state::AppState;

// =============================================================================
// Router Creation
// =============================================================================

/// Creates the API router with all routes and middleware.
///
/// # Examples
///
/// ```ignore
/// use tasklist_api::routes::create_router;
/// use tasklist_api::state::AppState;
/// use tasklist_domain::TaskStore;
///
/// let router = create_router(AppState::new(TaskStore::new()));
///
/// let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
/// axum::serve(listener, router).await?;
/// ```
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/tasks",
            get(handlers::list_tasks).post(handlers::create_task),
        )
        .route("/tasks/{id}", delete(handlers::delete_task))
        .route("/tasks/{id}/done", put(handlers::toggle_task_done))
        .route("/tasks/{id}/name", put(handlers::rename_task))
        .route("/health", get(handlers::health_check))
        .layer(from_fn(propagate_request_id))
        .layer(TraceLayer::new_for_http())
        .layer(create_cors_layer())
        .with_state(state)
}

/// Creates the CORS layer configuration.
///
/// The policy is pinned to the browser client: only
/// `http://localhost:3000` may call the API, with the four verbs the task
/// routes use and a `Content-Type` header, credentials included.
fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(HeaderValue::from_static("http://localhost:3000"))
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::PUT])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
}

// =============================================================================
// Tests
// =============================================================================
