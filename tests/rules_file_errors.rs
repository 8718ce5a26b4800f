//! A malformed rule file named by `MDGEN_RULES_FILE` must fail host
//! resolution instead of silently using the built-in rules.
//!
//! The process-wide rule table is loaded once, so this file holds a single
//! test that sets the environment before anything reads it.

use std::fs;

use mdgen::config::RULES_FILE_VAR;
use mdgen::{DefinitionPath, ErrorKind, RuleTable};
use tempfile::TempDir;

#[test]
fn malformed_rules_file_fails_default_resolution() {
    let dir = TempDir::new().unwrap();
    let rules = dir.path().join("rules.toml");
    fs::write(&rules, "[[rules]\nplatform_code = ").unwrap();

    std::env::set_var(RULES_FILE_VAR, &rules);
    std::env::set_var("HOME", dir.path());
    std::env::set_var("USERPROFILE", dir.path());

    let err = DefinitionPath::of("defs/api.json").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ConfigurationMissing);
    assert!(err.to_string().contains("rules"), "{}", err);

    let err = RuleTable::shared().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ConfigurationMissing);

    // An explicit output never consults the rule table.
    let path = DefinitionPath::of_with_output("defs/api.json", "/tmp/out").unwrap();
    assert_eq!(path.output_path(), "/tmp/out");
}
