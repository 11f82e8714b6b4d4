//! Level registry - lookup, validation and filtering
//!
//! Pure business logic over the fixed severity table. The registry holds no
//! mutable state, so a single value can be shared freely between callers.

use crate::core::models::{InvalidLevelError, Leveled, LogLevel, SEVERITY_TABLE};

/// Read-only view over the extended severity table
#[derive(Debug, Clone, Copy)]
pub struct LevelRegistry {
    table: &'static [LogLevel],
}

impl Default for LevelRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl LevelRegistry {
    /// Registry over the ten extended levels
    #[must_use]
    pub const fn new() -> Self {
        Self {
            table: &SEVERITY_TABLE,
        }
    }

    /// Names of every supported level, most restrictive first
    #[must_use]
    pub fn supported_levels(&self) -> Vec<&'static str> {
        self.table.iter().map(|level| level.name()).collect()
    }

    /// Typed lookup, ignoring case
    #[must_use]
    pub fn level(&self, name: &str) -> Option<LogLevel> {
        LogLevel::lookup(name).filter(|level| self.table.contains(level))
    }

    /// Numeric severity for a name, ignoring case
    #[must_use]
    pub fn level_value(&self, name: &str) -> Option<u32> {
        self.level(name).map(LogLevel::value)
    }

    /// Whether a name is in the table
    #[must_use]
    pub fn is_supported(&self, name: &str) -> bool {
        self.level(name).is_some()
    }

    /// Reject empty or unknown level names
    ///
    /// The error message lists every supported level so callers can present
    /// the valid choices.
    pub fn validate_level(&self, name: &str) -> Result<(), InvalidLevelError> {
        if name.is_empty() || !self.is_supported(name) {
            return Err(InvalidLevelError::new(name));
        }
        Ok(())
    }

    /// Keep the records at or above `min_level`
    ///
    /// A missing or unknown `min_level` disables filtering and every record is
    /// returned. Records without a level count as `INFO`; records whose level
    /// is not in the table are dropped. Relative order is preserved and the
    /// input is left untouched.
    #[must_use]
    pub fn filter_by_minimum_level<T>(&self, records: &[T], min_level: Option<&str>) -> Vec<T>
    where
        T: Leveled + Clone,
    {
        let Some(threshold) = min_level.and_then(|name| self.level_value(name)) else {
            log::debug!("no usable minimum level {min_level:?}, returning {} records", records.len());
            return records.to_vec();
        };

        let retained: Vec<T> = records
            .iter()
            .filter(|record| {
                let name = record.effective_level_name();
                match self.level_value(name) {
                    Some(value) => value >= threshold,
                    None => {
                        log::warn!("dropping record with unrecognized level '{name}'");
                        false
                    },
                }
            })
            .cloned()
            .collect();

        log::debug!(
            "kept {} of {} records at or above {threshold}",
            retained.len(),
            records.len()
        );
        retained
    }
}
