//! Tests for the config module

use super::loader::{load_or_default, load_with_warnings, RulesSource};
use super::types::*;
use crate::domain::value_objects::Platform;
use crate::error::ErrorKind;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_builtin_rules_cover_every_platform() {
    let config = RulesConfig::builtin();

    for platform in Platform::ALL {
        assert!(
            config
                .rules
                .iter()
                .any(|r| r.platform_code == platform.code_str()),
            "no builtin rule for {}",
            platform
        );
    }
    assert!(config.validate(std::path::Path::new("<builtin>")).is_ok());
}

#[test]
fn test_rules_parse_toml() {
    let toml = r#"
[[rules]]
platform_code = "0"
environment_variable_name = "USERPROFILE"
output_directory = "Documents"

[[rules]]
platform_code = "2"
environment_variable_name = "XDG_DATA_HOME"
output_directory = "mdgen"
"#;

    let config: RulesConfig = toml::from_str(toml).unwrap();

    assert_eq!(config.rules.len(), 2);
    assert_eq!(config.rules[1].environment_variable_name, "XDG_DATA_HOME");
    assert_eq!(config.rules[1].to_rule().output_directory(), "mdgen");
}

#[test]
fn test_empty_file_has_no_rules() {
    let config: RulesConfig = toml::from_str("").unwrap();
    assert!(config.rules.is_empty());
}

#[test]
fn test_load_with_warnings_reports_unknown_keys() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("rules.toml");
    fs::write(
        &path,
        r#"
[[rules]]
platform_code = "2"
environment_variable_name = "HOME"
output_directory = "Desktop"
output_directry = "typo"
"#,
    )
    .unwrap();

    let (config, warnings) = load_with_warnings(&path).unwrap();

    assert_eq!(config.rules.len(), 1);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "output_directry");
    assert_eq!(warnings[0].line, Some(6));
    assert_eq!(warnings[0].suggestion.as_deref(), Some("output_directory"));
}

#[test]
fn test_load_rejects_duplicate_platform_code() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("rules.toml");
    fs::write(
        &path,
        r#"
[[rules]]
platform_code = "2"
environment_variable_name = "HOME"
output_directory = "a"

[[rules]]
platform_code = "2"
environment_variable_name = "HOME"
output_directory = "b"
"#,
    )
    .unwrap();

    let err = RulesConfig::load(&path).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidRules);
    assert!(err.to_string().contains("duplicate rule for platform code 2"));
}

#[test]
fn test_load_rejects_blank_fields() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("rules.toml");
    fs::write(
        &path,
        r#"
[[rules]]
platform_code = "1"
environment_variable_name = ""
output_directory = "Desktop"
"#,
    )
    .unwrap();

    let err = RulesConfig::load(&path).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidRules);
}

#[test]
fn test_load_rejects_malformed_toml() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("rules.toml");
    fs::write(&path, "[[rules]\nplatform_code = ").unwrap();

    let err = RulesConfig::load(&path).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidRules);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let err = RulesConfig::load(std::path::Path::new("/nonexistent/mdgen/rules.toml")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
}

#[test]
fn test_load_or_default_prefers_explicit_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("rules.toml");
    fs::write(
        &path,
        r#"
[[rules]]
platform_code = "2"
environment_variable_name = "HOME"
output_directory = "explicit"
"#,
    )
    .unwrap();

    let loaded = load_or_default(Some(&path)).unwrap();

    assert_eq!(loaded.source, RulesSource::Explicit(path.clone()));
    assert_eq!(loaded.config.rules[0].output_directory, "explicit");
}

#[test]
fn test_load_or_default_explicit_error_propagates() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.toml");

    assert!(load_or_default(Some(&path)).is_err());
}
