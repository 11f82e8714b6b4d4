//! Tests for the level registry

use custom_log_levels::core::models::{Leveled, LogLevel, LogRecord};
use custom_log_levels::core::services::LevelRegistry;

fn record(level: LogLevel, message: &str) -> LogRecord {
    LogRecord::new(message).with_level(level)
}

// =============================================================================
// SUPPORTED LEVELS
// =============================================================================

#[test]
fn test_supported_levels_are_the_ten_names() {
    let registry = LevelRegistry::new();
    let mut levels = registry.supported_levels();
    levels.sort_unstable();
    assert_eq!(
        levels,
        vec!["ALL", "DEBUG", "ERROR", "FATAL", "FINEST", "INFO", "OFF", "TRACE", "VERBOSE", "WARN"]
    );
}

#[test]
fn test_supported_levels_is_idempotent() {
    let registry = LevelRegistry::default();
    let first = registry.supported_levels();
    let _ = registry.level_value("trace");
    let _ = registry.validate_level("bogus");
    assert_eq!(registry.supported_levels(), first);
}

// =============================================================================
// LOOKUP
// =============================================================================

#[test]
fn test_level_value_known_names() {
    let registry = LevelRegistry::new();
    assert_eq!(registry.level_value("OFF"), Some(60000));
    assert_eq!(registry.level_value("VERBOSE"), Some(3000));
    assert_eq!(registry.level_value("FINEST"), Some(1000));
    assert_eq!(registry.level_value("ALL"), Some(0));
}

#[test]
fn test_level_value_unknown_names() {
    let registry = LevelRegistry::new();
    assert_eq!(registry.level_value("SEVERE"), None);
    assert_eq!(registry.level_value(""), None);
    assert_eq!(registry.level_value(" INFO"), None);
}

#[test]
fn test_level_typed_lookup() {
    let registry = LevelRegistry::new();
    assert_eq!(registry.level("warn"), Some(LogLevel::Warn));
    assert!(registry.is_supported("Debug"));
    assert!(!registry.is_supported("WARNING"));
}

#[test]
fn test_registry_lookup_matches_model_lookup() {
    let registry = LevelRegistry::new();
    for name in ["off", "Finest", "ALL", "severe", "", "info "] {
        assert_eq!(registry.level(name), LogLevel::lookup(name), "{name:?}");
    }
}

// =============================================================================
// VALIDATION
// =============================================================================

#[test]
fn test_validate_accepts_any_case() {
    let registry = LevelRegistry::new();
    assert!(registry.validate_level("verbose").is_ok());
    assert!(registry.validate_level("Fatal").is_ok());
}

#[test]
fn test_validate_rejects_empty() {
    let registry = LevelRegistry::new();
    let err = registry.validate_level("").unwrap_err();
    assert_eq!(err.name, "");
}

#[test]
fn test_validate_message_lists_every_level() {
    let registry = LevelRegistry::new();
    let message = registry.validate_level("SEVERE").unwrap_err().to_string();
    assert!(message.contains("SEVERE"));
    assert!(message.contains("OFF, FATAL, ERROR"));
    for name in registry.supported_levels() {
        assert!(message.contains(name), "missing {name} in {message}");
    }
}

// =============================================================================
// FILTERING
// =============================================================================

#[test]
fn test_filter_keeps_levels_at_or_above_minimum() {
    let registry = LevelRegistry::new();
    let records = vec![
        record(LogLevel::Error, "e"),
        record(LogLevel::Info, "i"),
        record(LogLevel::Debug, "d"),
        record(LogLevel::Warn, "w"),
    ];

    let kept = registry.filter_by_minimum_level(&records, Some("WARN"));
    let messages: Vec<&str> = kept.iter().map(|r| r.message.as_str()).collect();
    assert_eq!(messages, vec!["e", "w"]);
}

#[test]
fn test_filter_minimum_level_ignores_case() {
    let registry = LevelRegistry::new();
    let records = vec![record(LogLevel::Trace, "t"), record(LogLevel::Finest, "f")];
    let kept = registry.filter_by_minimum_level(&records, Some("trace"));
    assert_eq!(kept, vec![record(LogLevel::Trace, "t")]);
}

#[test]
fn test_filter_record_without_level_counts_as_info() {
    let registry = LevelRegistry::new();
    let records = vec![LogRecord::new("no level")];

    assert_eq!(registry.filter_by_minimum_level(&records, Some("DEBUG")).len(), 1);
    assert!(registry.filter_by_minimum_level(&records, Some("WARN")).is_empty());
}

#[test]
fn test_filter_without_minimum_returns_everything() {
    let registry = LevelRegistry::new();
    let records = vec![
        record(LogLevel::Finest, "f"),
        record(LogLevel::Fatal, "x"),
        LogRecord::new("none").with_level_name("SEVERE"),
    ];

    assert_eq!(registry.filter_by_minimum_level(&records, None), records);
    assert_eq!(registry.filter_by_minimum_level(&records, Some("bogus")), records);
}

#[test]
fn test_filter_empty_input() {
    let registry = LevelRegistry::new();
    let records: Vec<LogRecord> = Vec::new();
    assert!(registry.filter_by_minimum_level(&records, Some("TRACE")).is_empty());
}

#[test]
fn test_filter_drops_unrecognized_record_level() {
    let registry = LevelRegistry::new();
    let records = vec![
        LogRecord::new("odd").with_level_name("SEVERE"),
        record(LogLevel::Error, "e"),
    ];

    // Even ALL (0) cannot keep a record whose level has no value
    let kept = registry.filter_by_minimum_level(&records, Some("ALL"));
    assert_eq!(kept, vec![record(LogLevel::Error, "e")]);
}

#[test]
fn test_filter_record_level_ignores_case() {
    let registry = LevelRegistry::new();
    let records = vec![LogRecord::new("lower").with_level_name("error")];
    assert_eq!(registry.filter_by_minimum_level(&records, Some("WARN")).len(), 1);
}

#[test]
fn test_filter_off_and_all_thresholds() {
    let registry = LevelRegistry::new();
    let records = vec![
        record(LogLevel::Fatal, "x"),
        record(LogLevel::All, "a"),
        record(LogLevel::Off, "o"),
    ];

    let off = registry.filter_by_minimum_level(&records, Some("OFF"));
    assert_eq!(off, vec![record(LogLevel::Off, "o")]);
    assert_eq!(registry.filter_by_minimum_level(&records, Some("ALL")), records);
}

#[test]
fn test_filter_leaves_input_untouched() {
    let registry = LevelRegistry::new();
    let records = vec![record(LogLevel::Debug, "d"), record(LogLevel::Error, "e")];
    let before = records.clone();
    let _ = registry.filter_by_minimum_level(&records, Some("ERROR"));
    assert_eq!(records, before);
}

// =============================================================================
// CUSTOM LEVELED TYPES
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
struct HostLog {
    severity: Option<&'static str>,
}

impl Leveled for HostLog {
    fn level_name(&self) -> Option<&str> {
        self.severity
    }
}

#[test]
fn test_filter_accepts_any_leveled_type() {
    let registry = LevelRegistry::new();
    let logs = vec![
        HostLog {
            severity: Some("verbose"),
        },
        HostLog { severity: None },
        HostLog {
            severity: Some("FINEST"),
        },
    ];

    let kept = registry.filter_by_minimum_level(&logs, Some("VERBOSE"));
    assert_eq!(kept, vec![logs[0].clone(), logs[1].clone()]);
}

#[test]
fn test_effective_level_defaults_to_info() {
    assert_eq!(HostLog { severity: None }.effective_level_name(), "INFO");
    assert_eq!(
        HostLog {
            severity: Some("TRACE")
        }
        .effective_level_name(),
        "TRACE"
    );
}
