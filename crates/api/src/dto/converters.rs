use tasklist_domain::Task;

use super::request::CreateTaskRequest;
use super::response::TaskResponse;

// =============================================================================
// Task Conversion
// =============================================================================

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            name: task.name,
            done: task.done,
        }
    }
}

impl From<CreateTaskRequest> for Task {
    fn from(request: CreateTaskRequest) -> Self {
        Self {
            id: request.id,
            name: request.name,
            done: request.done,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
