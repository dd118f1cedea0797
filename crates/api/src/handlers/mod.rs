pub mod health;
pub mod tasks;

// Re-export handlers for convenient access
pub use health::health_check;
pub use tasks::{create_task, delete_task, list_tasks, rename_task, toggle_task_done};
