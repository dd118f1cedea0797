use serde::{Deserialize, Serialize};

// =============================================================================
// Task Responses
// =============================================================================

/// A task as it appears on the wire: `{"id", "name", "done"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskResponse {
    pub id: String,

    pub name: String,

    pub done: bool,
}

// =============================================================================
// Health Response
// =============================================================================

/// Response for the health endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,

    pub version: String,
}

impl HealthResponse {
    #[must_use]
    pub fn healthy(version: impl Into<String>) -> Self {
        Self {
            status: "healthy".to_string(),
            version: version.into(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
