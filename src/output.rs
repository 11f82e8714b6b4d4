//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::{ColoredString, Colorize};
use serde::Serialize;

use crate::core::models::{DEFAULT_RECORD_LEVEL, LogLevel, LogRecord};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Level name painted in its display color
#[must_use]
pub fn paint(level: LogLevel) -> ColoredString {
    let (r, g, b) = level.rgb();
    level.name().truecolor(r, g, b).bold()
}

/// Record level label, painted in the color of the level it resolves to
///
/// Known names print canonically. Unknown names keep their text but take
/// the color of [`DEFAULT_RECORD_LEVEL`]; a missing name prints as that level.
#[must_use]
pub fn label_for(name: Option<&str>) -> ColoredString {
    match name.and_then(LogLevel::lookup) {
        Some(level) => paint(level),
        None => {
            let (r, g, b) = DEFAULT_RECORD_LEVEL.rgb();
            name.unwrap_or(DEFAULT_RECORD_LEVEL.name()).truecolor(r, g, b).bold()
        },
    }
}

/// Level table listing
#[derive(Debug, Serialize)]
pub struct LevelsResult {
    /// Levels, most restrictive first
    pub levels: Vec<LevelEntry>,
}

/// One row of the level table
#[derive(Debug, Serialize)]
pub struct LevelEntry {
    /// Canonical name
    pub name: &'static str,
    /// Numeric severity
    pub value: u32,
    /// Display color
    pub color: String,
    #[serde(skip)]
    level: LogLevel,
}

impl From<LogLevel> for LevelEntry {
    fn from(level: LogLevel) -> Self {
        Self {
            name: level.name(),
            value: level.value(),
            color: level.color(),
            level,
        }
    }
}

impl LevelsResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                for entry in &self.levels {
                    println!("{:<9} {:>6}", paint(entry.level), entry.value);
                }
            },
            OutputMode::Json => print_json(self),
        }
    }
}

/// Result of a level lookup or validation
#[derive(Debug, Serialize)]
pub struct LevelResult {
    /// Name as supplied
    pub name: String,
    /// Resolved level, absent when unknown
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<LogLevel>,
    /// Numeric severity, absent when unknown
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<u32>,
}

impl LevelResult {
    /// Build from a lookup
    #[must_use]
    pub fn new(name: &str, level: Option<LogLevel>) -> Self {
        Self {
            name: name.to_string(),
            level,
            value: level.map(LogLevel::value),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => match self.level {
                Some(level) => println!("{} = {}", paint(level), level.value()),
                None => println!("{} is not a supported level", self.name.yellow()),
            },
            OutputMode::Json => print_json(self),
        }
    }
}

/// Result of filtering records
#[derive(Debug, Serialize)]
pub struct FilterResult {
    /// Requested minimum level
    pub min_level: Option<String>,
    /// Whether a threshold was applied
    pub applied: bool,
    /// Records received
    pub total: usize,
    /// Records kept
    pub logs: Vec<LogRecord>,
}

impl FilterResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        for record in &self.logs {
            let name = record.level.as_deref();
            let label = label_for(name);
            match &record.time {
                Some(time) => println!("{} [{label}] {}", time.to_rfc3339(), record.message),
                None => println!("[{label}] {}", record.message),
            }
        }

        let summary = format!("{} of {} records", self.logs.len(), self.total);
        match (&self.min_level, self.applied) {
            (Some(level), true) => eprintln!("{summary} at or above {}", level.to_uppercase()),
            (Some(level), false) => eprintln!("{summary} (unknown level '{level}', not filtered)"),
            (None, _) => eprintln!("{summary} (no minimum level, not filtered)"),
        }
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// Create a success result
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// Create a failure result
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                if self.success {
                    println!("{} {}", "✓".green(), self.message);
                } else {
                    eprintln!("{} {}", "✗".red(), self.message);
                }
            },
            OutputMode::Json => print_json(self),
        }
    }
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("Error serializing output: {e}"),
    }
}
