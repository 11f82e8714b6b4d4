//! custom-log-levels - Extended log level support for test-reporting platforms
//!
//! This library provides the extended severity table (OFF through ALL, with
//! TRACE, VERBOSE and FINEST in between), level validation, minimum-level
//! filtering of log records, and the plugin's registration contract and
//! HTTP endpoints.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod api;
pub mod config;
pub mod core;
pub mod manifest;
pub mod output;
pub mod paths;
pub mod server;
