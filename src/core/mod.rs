//! Core domain logic for custom-log-levels
//!
//! This module contains pure business logic with no I/O dependencies.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`LogLevel`, `LogRecord`, `Leveled`)
//! - `services/` - The level registry (lookup, validation, filtering)

pub mod models;
pub mod services;
