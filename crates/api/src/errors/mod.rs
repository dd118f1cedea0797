//! API error handling and response conversion.

pub mod api_error;

pub use api_error::ApiError;
