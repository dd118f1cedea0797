//! HTTP middleware for the task API.

pub mod request_id;

pub use request_id::{REQUEST_ID_HEADER, propagate_request_id};
