//! Extended log levels
//!
//! The ten named severities understood by the plugin and their numeric
//! thresholds. Higher values are more restrictive: `OFF` filters everything,
//! `ALL` filters nothing.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Level assumed for records that carry no level of their own
pub const DEFAULT_RECORD_LEVEL: LogLevel = LogLevel::Info;

/// Extended log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    /// Everything, value 0
    All,
    /// Finest-grained tracing, value 1000
    Finest,
    /// Verbose diagnostics, value 3000
    Verbose,
    /// Trace, value 5000
    Trace,
    /// Debug, value 10000
    Debug,
    /// Info, value 20000
    Info,
    /// Warn, value 30000
    Warn,
    /// Error, value 40000
    Error,
    /// Fatal, value 50000
    Fatal,
    /// Nothing passes, value 60000
    Off,
}

/// Every level, most restrictive first
pub const SEVERITY_TABLE: [LogLevel; 10] = [
    LogLevel::Off,
    LogLevel::Fatal,
    LogLevel::Error,
    LogLevel::Warn,
    LogLevel::Info,
    LogLevel::Debug,
    LogLevel::Trace,
    LogLevel::Verbose,
    LogLevel::Finest,
    LogLevel::All,
];

/// Every level in slider order (least restrictive first)
pub const SLIDER_ORDER: [LogLevel; 10] = [
    LogLevel::All,
    LogLevel::Finest,
    LogLevel::Verbose,
    LogLevel::Trace,
    LogLevel::Debug,
    LogLevel::Info,
    LogLevel::Warn,
    LogLevel::Error,
    LogLevel::Fatal,
    LogLevel::Off,
];

impl LogLevel {
    /// Numeric severity threshold
    #[must_use]
    pub const fn value(self) -> u32 {
        match self {
            Self::Off => 60000,
            Self::Fatal => 50000,
            Self::Error => 40000,
            Self::Warn => 30000,
            Self::Info => 20000,
            Self::Debug => 10000,
            Self::Trace => 5000,
            Self::Verbose => 3000,
            Self::Finest => 1000,
            Self::All => 0,
        }
    }

    /// Canonical (uppercase) name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Off => "OFF",
            Self::Fatal => "FATAL",
            Self::Error => "ERROR",
            Self::Warn => "WARN",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
            Self::Trace => "TRACE",
            Self::Verbose => "VERBOSE",
            Self::Finest => "FINEST",
            Self::All => "ALL",
        }
    }

    /// Position on the level slider, 0 for `ALL` up to 9 for `OFF`
    #[must_use]
    pub const fn slider_position(self) -> usize {
        self as usize
    }

    /// Level at a slider position
    #[must_use]
    pub fn from_slider_position(position: usize) -> Option<Self> {
        SLIDER_ORDER.get(position).copied()
    }

    /// Display color as an `(r, g, b)` triple
    #[must_use]
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Off => (0x8c, 0x8c, 0x8c),
            Self::Fatal => (0xd3, 0x2f, 0x2f),
            Self::Error => (0xf4, 0x43, 0x36),
            Self::Warn => (0xff, 0x98, 0x00),
            Self::Info => (0x21, 0x96, 0xf3),
            Self::Debug => (0x4c, 0xaf, 0x50),
            Self::Trace => (0x9c, 0x27, 0xb0),
            Self::Verbose => (0x67, 0x3a, 0xb7),
            Self::Finest => (0x3f, 0x51, 0xb5),
            Self::All => (0x60, 0x7d, 0x8b),
        }
    }

    /// Display color as a CSS hex string, e.g. `#2196f3`
    #[must_use]
    pub fn color(self) -> String {
        let (r, g, b) = self.rgb();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Look up a level by name, ignoring case
    #[must_use]
    pub fn lookup(name: &str) -> Option<Self> {
        let upper = name.to_uppercase();
        SEVERITY_TABLE.iter().copied().find(|level| level.name() == upper)
    }

    /// Resolve a possibly missing or unknown name, falling back to
    /// [`DEFAULT_RECORD_LEVEL`]
    #[must_use]
    pub fn lookup_or_default(name: Option<&str>) -> Self {
        name.and_then(Self::lookup).unwrap_or(DEFAULT_RECORD_LEVEL)
    }

    /// Slider color for a level name; unknown or missing names get `INFO`'s
    #[must_use]
    pub fn color_for(name: Option<&str>) -> String {
        Self::lookup_or_default(name).color()
    }

    /// Slider position for a level name; unknown or missing names sit at `INFO`
    #[must_use]
    pub fn slider_position_for(name: Option<&str>) -> usize {
        Self::lookup_or_default(name).slider_position()
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for LogLevel {
    type Err = InvalidLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| InvalidLevelError::new(s))
    }
}

/// A level name that is empty or not in the severity table
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unsupported log level: {name}. Supported levels: {supported}")]
pub struct InvalidLevelError {
    /// The rejected name, as supplied
    pub name: String,
    /// Every supported name, comma-joined
    pub supported: String,
}

impl InvalidLevelError {
    /// Build the error for a rejected name
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let supported = SEVERITY_TABLE.iter().map(|l| l.name()).collect::<Vec<_>>().join(", ");
        Self {
            name: name.into(),
            supported,
        }
    }
}
