//! HTTP server adapters
//!
//! This module provides adapters that translate between HTTP frameworks
//! and the HTTP-agnostic API layer.
//!
//! Currently supported:
//! - `tiny_http` - Lightweight standalone server, for running the plugin
//!   endpoints outside the host

#[cfg(feature = "server")]
pub mod tiny_http;
