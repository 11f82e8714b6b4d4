//! Domain models for custom-log-levels
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`LogLevel`] - One of the ten extended severities
//! - [`LogRecord`] - A log entry supplied by the host
//! - [`Leveled`] - Anything the level filter can inspect

mod level;
mod record;

pub use level::{
    DEFAULT_RECORD_LEVEL, InvalidLevelError, LogLevel, SEVERITY_TABLE, SLIDER_ORDER,
};
pub use record::{Leveled, LogRecord};
