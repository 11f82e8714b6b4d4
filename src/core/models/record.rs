//! Log records consumed by the level filter
//!
//! Records come from the host's log storage; the plugin only reads them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::level::{DEFAULT_RECORD_LEVEL, LogLevel};

/// Anything that carries an optional level name
///
/// Implemented by [`LogRecord`]; host types can implement it to be filtered
/// by [`LevelRegistry::filter_by_minimum_level`](crate::core::services::LevelRegistry::filter_by_minimum_level).
pub trait Leveled {
    /// The record's level name as stored, if any
    fn level_name(&self) -> Option<&str>;

    /// The level name to filter on, falling back to `INFO`
    fn effective_level_name(&self) -> &str {
        self.level_name().unwrap_or(DEFAULT_RECORD_LEVEL.name())
    }
}

/// A single log entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    /// Storage identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// When the entry was logged
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<DateTime<Utc>>,
    /// Level name as stored by the host (may be absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    /// Log message
    #[serde(default)]
    pub message: String,
}

impl LogRecord {
    /// Create a record with a message and no level
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            id: None,
            time: None,
            level: None,
            message: message.into(),
        }
    }

    /// Set the level from a typed [`LogLevel`]
    #[must_use]
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = Some(level.name().to_string());
        self
    }

    /// Set the level from a raw name, known or not
    #[must_use]
    pub fn with_level_name(mut self, level: impl Into<String>) -> Self {
        self.level = Some(level.into());
        self
    }

    /// Set the storage identifier
    #[must_use]
    pub const fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }
}

impl Leveled for LogRecord {
    fn level_name(&self) -> Option<&str> {
        self.level.as_deref()
    }
}
