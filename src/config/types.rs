//! Rule table configuration types

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::entities::DefaultOutputRule;
use crate::domain::value_objects::Platform;
use crate::error::{GeneratorError, GeneratorResult};

use super::loader::{self, ConfigWarning};

/// Rule table as written in `rules.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RulesConfig {
    #[serde(default)]
    pub rules: Vec<RuleEntry>,
}

/// One `[[rules]]` entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleEntry {
    pub platform_code: String,
    pub environment_variable_name: String,
    pub output_directory: String,
}

impl RuleEntry {
    pub fn new(platform: Platform, environment_variable_name: &str, output_directory: &str) -> Self {
        Self {
            platform_code: platform.code_str(),
            environment_variable_name: environment_variable_name.to_string(),
            output_directory: output_directory.to_string(),
        }
    }

    pub fn to_rule(&self) -> DefaultOutputRule {
        DefaultOutputRule::new(&self.environment_variable_name, &self.output_directory)
    }
}

impl RulesConfig {
    /// Defaults shipped with mdgen: the user's desktop on every platform.
    pub fn builtin() -> Self {
        Self {
            rules: vec![
                RuleEntry::new(Platform::Windows, "USERPROFILE", "Desktop"),
                RuleEntry::new(Platform::MacOs, "HOME", "Desktop"),
                RuleEntry::new(Platform::Linux, "HOME", "Desktop"),
            ],
        }
    }

    /// Load and validate a rule table file.
    pub fn load(path: &Path) -> GeneratorResult<Self> {
        Self::load_with_warnings(path).map(|(config, _)| config)
    }

    /// Load a rule table file, collecting unknown keys as warnings.
    pub fn load_with_warnings(path: &Path) -> GeneratorResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Check that every entry is complete and platform codes are unique.
    pub fn validate(&self, file: &Path) -> GeneratorResult<()> {
        let invalid = |message: String| GeneratorError::InvalidRules {
            file: file.to_path_buf(),
            message,
        };

        let mut seen = HashSet::new();
        for (index, entry) in self.rules.iter().enumerate() {
            if entry.platform_code.trim().is_empty() {
                return Err(invalid(format!("rule #{} has a blank platform_code", index + 1)));
            }
            if entry.environment_variable_name.trim().is_empty() {
                return Err(invalid(format!(
                    "rule for platform code {} has a blank environment_variable_name",
                    entry.platform_code
                )));
            }
            if entry.output_directory.trim().is_empty() {
                return Err(invalid(format!(
                    "rule for platform code {} has a blank output_directory",
                    entry.platform_code
                )));
            }
            if !seen.insert(entry.platform_code.as_str()) {
                return Err(invalid(format!(
                    "duplicate rule for platform code {}",
                    entry.platform_code
                )));
            }
        }
        Ok(())
    }
}
