//! Manifest command

use std::fs;
use std::path::Path;

use anyhow::Context;

use custom_log_levels::manifest::PluginManifest;
use custom_log_levels::output::{OperationResult, OutputMode};

/// Print the built-in manifest, or validate a manifest file
pub fn manifest(check: Option<&Path>, mode: OutputMode) -> anyhow::Result<()> {
    let Some(path) = check else {
        println!("{}", PluginManifest::current().to_json_pretty()?);
        return Ok(());
    };

    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let result = PluginManifest::from_json(&content).and_then(|m| m.validate());

    match result {
        Ok(()) => {
            OperationResult::success(format!("{} is a valid manifest", path.display()))
                .render(mode);
            Ok(())
        },
        Err(e) => {
            if mode == OutputMode::Json {
                OperationResult::failure(e.to_string()).render(mode);
            }
            Err(e.into())
        },
    }
}
