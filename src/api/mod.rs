//! HTTP-agnostic API layer
//!
//! This module provides typed request/response structures and pure business logic
//! handlers that can be used by any HTTP server implementation (`tiny_http`, the
//! host's own router, etc.) or directly by clients such as the CLI.
//!
//! ## Design
//!
//! - **Handlers are pure functions**: Take typed input, return `Result<T, ApiError>`
//! - **Types are framework-agnostic**: No HTTP types leak into this module
//! - **Errors carry HTTP semantics**: `ApiError` knows its status code for translation

mod error;
mod handlers;
mod types;

pub use error::{ApiError, ApiErrorData, ErrorCode};
pub use handlers::{filter_logs, get_level, level_details, list_levels, plugin_info, validate_level};
pub use types::{
    ApiResponse, FilterLogsData, FilterLogsRequest, LevelData, LevelDetail, LevelDetailsData,
    ValidationData,
};
