//! Serve command
//!
//! Runs the plugin endpoints on a local HTTP server.

use custom_log_levels::config::ServerConfig;
use custom_log_levels::manifest::API_NAMESPACE;

/// Start the standalone server
#[cfg(feature = "server")]
pub fn serve(config: &ServerConfig) -> anyhow::Result<()> {
    let addr = config.addr();
    println!("Serving custom log levels on http://{addr}{API_NAMESPACE}/levels");
    println!("Press Ctrl+C to stop");
    custom_log_levels::server::tiny_http::serve(&addr)
}

/// Start the standalone server
#[cfg(not(feature = "server"))]
pub fn serve(config: &ServerConfig) -> anyhow::Result<()> {
    anyhow::bail!(
        "cannot serve {API_NAMESPACE} on {}: built without the `server` feature",
        config.addr()
    )
}
