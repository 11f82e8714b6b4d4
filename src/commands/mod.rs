//! Command implementations

mod config_cmd;
mod filter;
mod levels;
mod manifest;
mod serve;

pub use config_cmd::config_cmd;
pub use filter::filter;
pub use levels::{levels, validate, value};
pub use manifest::manifest;
pub use serve::serve;
