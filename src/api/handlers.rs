//! Pure API handlers
//!
//! These handlers contain business logic and are HTTP-agnostic.
//! They take typed input and return `Result<T, ApiError>`.

use crate::core::models::SLIDER_ORDER;
use crate::core::services::LevelRegistry;
use crate::manifest::PluginRegistration;

use super::error::ApiError;
use super::types::{
    FilterLogsData, FilterLogsRequest, LevelData, LevelDetail, LevelDetailsData, ValidationData,
};

const REGISTRY: LevelRegistry = LevelRegistry::new();

// =============================================================================
// LEVELS
// =============================================================================

/// List supported level names
///
/// Served as a bare JSON array, the shape the host's UI expects.
#[must_use]
pub fn list_levels() -> Vec<&'static str> {
    REGISTRY.supported_levels()
}

/// Every level with value, slider position and color
#[must_use]
pub fn level_details() -> LevelDetailsData {
    LevelDetailsData {
        levels: SLIDER_ORDER.iter().copied().map(LevelDetail::from).collect(),
    }
}

/// Get a single level by name
pub fn get_level(name: &str) -> Result<LevelData, ApiError> {
    REGISTRY
        .level(name)
        .map(|level| LevelData {
            name: level.name().to_string(),
            value: level.value(),
        })
        .ok_or_else(|| ApiError::not_found(format!("Log level '{name}' not found")))
}

/// Validate a level name
pub fn validate_level(name: &str) -> Result<ValidationData, ApiError> {
    REGISTRY.validate_level(name)?;
    Ok(ValidationData {
        name: name.to_string(),
        valid: true,
    })
}

// =============================================================================
// LOGS
// =============================================================================

/// Filter records by minimum level
///
/// Never fails: an unusable `min_level` returns every record with
/// `applied: false`.
#[must_use]
pub fn filter_logs(req: &FilterLogsRequest) -> FilterLogsData {
    let min_level = req.min_level.as_deref();
    let applied = min_level.is_some_and(|name| REGISTRY.is_supported(name));
    let logs = REGISTRY.filter_by_minimum_level(&req.logs, min_level);

    FilterLogsData {
        min_level: req.min_level.clone(),
        applied,
        total: req.logs.len(),
        retained: logs.len(),
        logs,
    }
}

// =============================================================================
// PLUGIN
// =============================================================================

/// Registration data for this plugin
#[must_use]
pub const fn plugin_info() -> PluginRegistration {
    PluginRegistration::current()
}
