//! Level commands: list, look up, validate

use custom_log_levels::core::models::SEVERITY_TABLE;
use custom_log_levels::core::services::LevelRegistry;
use custom_log_levels::output::{LevelEntry, LevelResult, LevelsResult, OperationResult, OutputMode};

/// List every supported level, most restrictive first
pub fn levels(mode: OutputMode) -> anyhow::Result<()> {
    let result = LevelsResult {
        levels: SEVERITY_TABLE.iter().copied().map(LevelEntry::from).collect(),
    };
    result.render(mode);
    Ok(())
}

/// Print the numeric severity of a level
pub fn value(name: &str, mode: OutputMode) -> anyhow::Result<()> {
    let level = LevelRegistry::new().level(name);
    LevelResult::new(name, level).render(mode);
    if level.is_none() {
        anyhow::bail!("unknown log level '{name}'");
    }
    Ok(())
}

/// Validate a level name, failing with the list of supported names
pub fn validate(name: &str, mode: OutputMode) -> anyhow::Result<()> {
    match LevelRegistry::new().validate_level(name) {
        Ok(()) => {
            OperationResult::success(format!("{} is a supported level", name.to_uppercase()))
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
