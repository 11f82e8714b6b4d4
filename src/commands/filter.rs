//! Filter command
//!
//! Reads a JSON array of log records and keeps those at or above the
//! minimum level.

use std::fs;
use std::io::Read as _;
use std::path::Path;

use anyhow::Context;

use custom_log_levels::core::models::LogRecord;
use custom_log_levels::core::services::LevelRegistry;
use custom_log_levels::output::{FilterResult, OutputMode};

/// Filter records from `file` (or stdin) by `min_level`
pub fn filter(min_level: Option<&str>, file: Option<&Path>, mode: OutputMode) -> anyhow::Result<()> {
    let content = read_input(file)?;
    let records: Vec<LogRecord> =
        serde_json::from_str(&content).context("expected a JSON array of log records")?;

    let registry = LevelRegistry::new();
    let applied = min_level.is_some_and(|name| registry.is_supported(name));
    if let (Some(name), false) = (min_level, applied) {
        log::warn!("unknown minimum level '{name}', records are not filtered");
    }

    let logs = registry.filter_by_minimum_level(&records, min_level);
    FilterResult {
        min_level: min_level.map(String::from),
        applied,
        total: records.len(),
        logs,
    }
    .render(mode);
    Ok(())
}

fn read_input(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) if path != Path::new("-") => {
            fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
        },
        _ => {
            let mut content = String::new();
            std::io::stdin().read_to_string(&mut content).context("failed to read stdin")?;
            Ok(content)
        },
    }
}
