//! Request and response DTOs for the task API.
//!
//! All DTOs use serde for JSON serialization/deserialization. Request DTOs
//! default every field so that partial bodies decode without error.

pub mod converters;
pub mod request;
pub mod response;

pub use request::{CreateTaskRequest, RenameTaskRequest};
pub use response::{HealthResponse, TaskResponse};
