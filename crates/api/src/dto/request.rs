use serde::{Deserialize, Serialize};

// =============================================================================
// Task Requests
// =============================================================================

/// Request body for creating a task.
///
/// Mirrors the task wire shape; absent fields fall back to the zero value,
/// so `{}` is a valid body describing an empty, not-done task.
///
/// # Examples
///
/// ```json
/// {
///   "id": "42",
///   "name": "Water the plants",
///   "done": false
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTaskRequest {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub done: bool,
}

/// Request body for renaming a task.
///
/// Only the `name` field is applied; anything else in the body is ignored.
///
/// # Examples
///
/// ```json
/// {
///   "name": "Water the plants twice"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameTaskRequest {
    #[serde(default)]
    pub name: String,
}

// =============================================================================
// Tests
// =============================================================================
