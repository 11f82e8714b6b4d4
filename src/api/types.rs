//! API request and response types
//!
//! All types are framework-agnostic and can be used by any client.

use serde::{Deserialize, Serialize};

use super::error::ApiErrorData;
use crate::core::models::{LogLevel, LogRecord};

// =============================================================================
// RESPONSE ENVELOPE
// =============================================================================

/// Standard API response envelope
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded
    pub success: bool,
    /// Response data (present on success)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error details (present on failure)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiErrorData>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a successful response
    #[must_use]
    pub const fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    /// Create an error response
    #[must_use]
    pub fn error(code: &str, message: &str) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ApiErrorData {
                code: code.to_string(),
                message: message.to_string(),
            }),
        }
    }
}

// =============================================================================
// REQUEST TYPES
// =============================================================================

/// Request body for filtering log records
#[derive(Debug, Deserialize)]
pub struct FilterLogsRequest {
    /// Minimum level name (no filtering when absent or unknown)
    #[serde(default)]
    pub min_level: Option<String>,
    /// Records to filter
    #[serde(default)]
    pub logs: Vec<LogRecord>,
}

// =============================================================================
// RESPONSE DATA TYPES
// =============================================================================

/// A level and its numeric severity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelData {
    /// Canonical level name
    pub name: String,
    /// Numeric severity
    pub value: u32,
}

/// A level with its slider placement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelDetail {
    /// Canonical level name
    pub name: String,
    /// Numeric severity
    pub value: u32,
    /// Slider position (0 = ALL)
    pub position: usize,
    /// Display color, CSS hex
    pub color: String,
}

impl From<LogLevel> for LevelDetail {
    fn from(level: LogLevel) -> Self {
        Self {
            name: level.name().to_string(),
            value: level.value(),
            position: level.slider_position(),
            color: level.color(),
        }
    }
}

/// Level detail endpoint response data
#[derive(Debug, Serialize, Deserialize)]
pub struct LevelDetailsData {
    /// Levels in slider order
    pub levels: Vec<LevelDetail>,
}

/// Validation endpoint response data
#[derive(Debug, Serialize, Deserialize)]
pub struct ValidationData {
    /// The name that was checked, as supplied
    pub name: String,
    /// Always true; invalid names are reported as errors
    pub valid: bool,
}

/// Filter endpoint response data
#[derive(Debug, Serialize, Deserialize)]
pub struct FilterLogsData {
    /// The requested minimum level
    pub min_level: Option<String>,
    /// Whether a threshold was applied
    pub applied: bool,
    /// Number of records received
    pub total: usize,
    /// Number of records kept
    pub retained: usize,
    /// Kept records, in their original order
    pub logs: Vec<LogRecord>,
}
