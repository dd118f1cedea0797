use serde::{Deserialize, Serialize};

// =============================================================================
// Task
// =============================================================================

/// A single task record.
///
/// The identifier is caller-supplied and the store does not enforce
/// uniqueness; two tasks may share an `id`. Every field carries a serde
/// default so a partial (or empty) JSON object decodes to the zero value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub done: bool,
}

impl Task {
    /// Creates a task that has not been completed yet.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            done: false,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
