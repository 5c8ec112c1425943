//! # Configuration Tests

use std::io::Write;

use ls8sim_core::common::constants::INITIAL_SP;
use ls8sim_core::common::error::LoadError;
use ls8sim_core::config::{Config, ConfigError};
use ls8sim_core::core::Cpu;
use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert!(!config.general.trace_instructions);
    assert_eq!(config.general.max_steps, None);
    assert_eq!(config.system.initial_sp, INITIAL_SP);
}

#[test]
fn test_empty_json_is_default() {
    assert_eq!(Config::from_json_str("{}").unwrap(), Config::default());
}

#[test]
fn test_partial_json_keeps_other_defaults() {
    let config = Config::from_json_str(r#"{ "general": { "max_steps": 1000 } }"#).unwrap();
    assert_eq!(config.general.max_steps, Some(1000));
    assert!(!config.general.trace_instructions);
    assert_eq!(config.system.initial_sp, INITIAL_SP);
}

#[test]
fn test_full_json() {
    let config = Config::from_json_str(
        r#"{
            "general": { "trace_instructions": true, "max_steps": 42 },
            "system": { "initial_sp": 128 }
        }"#,
    )
    .unwrap();
    assert!(config.general.trace_instructions);
    assert_eq!(config.general.max_steps, Some(42));
    assert_eq!(config.system.initial_sp, 128);
}

#[test]
fn test_invalid_json() {
    let err = Config::from_json_str(r#"{ "system": { "initial_sp": 999 } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn test_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{ "system": {{ "initial_sp": 200 }} }}"#).unwrap();
    let config = Config::from_json_file(file.path()).unwrap();
    assert_eq!(config.system.initial_sp, 200);
}

#[test]
fn test_missing_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::from_json_file(dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Load(LoadError::NotFound { .. })));
}

#[test]
fn test_cpu_uses_configured_stack_pointer() {
    let config = Config::from_json_str(r#"{ "system": { "initial_sp": 100 } }"#).unwrap();
    let cpu = Cpu::new(&config);
    assert_eq!(cpu.regs.sp(), 100);
    assert_eq!(cpu.initial_sp(), 100);
}
