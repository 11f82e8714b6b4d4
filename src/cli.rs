//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;
use custom_log_levels::config::PluginConfig;
use custom_log_levels::output::OutputMode;

/// custom-log-levels - Extended log level support
#[derive(Parser, Debug)]
#[command(
    name = "custom-log-levels",
    version,
    about = "Extended log level support",
    long_about = "Extended log levels for test reports.\n\n\
                  Levels run from ALL (0) through FINEST, VERBOSE, TRACE, DEBUG, INFO,\n\
                  WARN, ERROR and FATAL up to OFF (60000). Filtering keeps records\n\
                  at or above a minimum level."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (defaults to ~/.config/custom-log-levels/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List supported levels and their severities
    Levels,

    /// Show the numeric severity of a level
    Value {
        /// Level name (case-insensitive)
        name: String,
    },

    /// Check that a level name is supported
    Validate {
        /// Level name (case-insensitive)
        name: String,
    },

    /// Filter a JSON array of log records by minimum level
    Filter {
        /// Minimum level (defaults to filter.default_min_level from config)
        #[arg(short, long)]
        min_level: Option<String>,

        /// File with records; reads stdin when omitted or "-"
        file: Option<PathBuf>,
    },

    /// Print or check the plugin manifest (plugin.json)
    Manifest {
        /// Validate this manifest file instead of printing the built-in one
        #[arg(long)]
        check: Option<PathBuf>,
    },

    /// Serve the plugin endpoints over HTTP
    Serve {
        /// Interface to bind (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Manage the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Show version
    Version,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let config_path = cli.config.as_deref();

    match cli.command {
        Some(Command::Levels) => commands::levels(output_mode),
        Some(Command::Value { name }) => commands::value(&name, output_mode),
        Some(Command::Validate { name }) => commands::validate(&name, output_mode),
        Some(Command::Filter { min_level, file }) => {
            let config = PluginConfig::load(config_path)?;
            let min_level = min_level.or(config.filter.default_min_level);
            commands::filter(min_level.as_deref(), file.as_deref(), output_mode)
        },
        Some(Command::Manifest { check }) => commands::manifest(check.as_deref(), output_mode),
        Some(Command::Serve { host, port }) => {
            let mut config = PluginConfig::load(config_path)?;
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            commands::serve(&config.server)
        },
        Some(Command::Config { action }) => commands::config_cmd(action, config_path, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "plugin_id": custom_log_levels::manifest::PLUGIN_ID,
                    })
                );
            } else {
                println!("custom-log-levels v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("custom-log-levels v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'custom-log-levels --help' for usage");
                println!("Run 'custom-log-levels levels' to list supported levels");
            }
            Ok(())
        },
    }
}
