//! Config command

use std::path::Path;

use custom_log_levels::config::PluginConfig;
use custom_log_levels::output::{OperationResult, OutputMode};
use custom_log_levels::paths;

use crate::cli::ConfigAction;

/// Show or initialize the config file
pub fn config_cmd(action: ConfigAction, path: Option<&Path>, mode: OutputMode) -> anyhow::Result<()> {
    match action {
        ConfigAction::Show => {
            let config = PluginConfig::load(path)?;
            if mode == OutputMode::Json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                print!("{}", toml::to_string_pretty(&config)?);
            }
            Ok(())
        },
        ConfigAction::Init { force } => {
            let path = path.map_or_else(paths::config_file, Path::to_path_buf);
            if path.exists() && !force {
                let message = format!("{} already exists (use --force to overwrite)", path.display());
                if mode == OutputMode::Json {
                    OperationResult::failure(message.clone()).render(mode);
                }
                anyhow::bail!(message);
            }
            PluginConfig::default().save(&path)?;
            OperationResult::success(format!("Created {}", path.display())).render(mode);
            Ok(())
        },
    }
}
