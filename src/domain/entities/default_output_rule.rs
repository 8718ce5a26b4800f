//! DefaultOutputRule entity - one platform's configured output defaults
//!
//! A rule names the environment variable holding a base directory and the
//! directory (relative to that base) that generators write into when no
//! explicit output path is given.

use serde::{Deserialize, Serialize};

/// Platform-specific default output location
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DefaultOutputRule {
    environment_variable_name: String,
    output_directory: String,
}

impl DefaultOutputRule {
    pub fn new(
        environment_variable_name: impl Into<String>,
        output_directory: impl Into<String>,
    ) -> Self {
        Self {
            environment_variable_name: environment_variable_name.into(),
            output_directory: output_directory.into(),
        }
    }

    /// Name of the environment variable holding the base directory
    pub fn environment_variable_name(&self) -> &str {
        &self.environment_variable_name
    }

    /// Directory appended to the base directory
    pub fn output_directory(&self) -> &str {
        &self.output_directory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_accessors() {
        let rule = DefaultOutputRule::new("HOME", "Desktop");
        assert_eq!(rule.environment_variable_name(), "HOME");
        assert_eq!(rule.output_directory(), "Desktop");
    }

    #[test]
    fn rule_deserializes_from_toml() {
        let rule: DefaultOutputRule = toml::from_str(
            r#"
environment_variable_name = "USERPROFILE"
output_directory = "Desktop"
"#,
        )
        .unwrap();
        assert_eq!(rule, DefaultOutputRule::new("USERPROFILE", "Desktop"));
    }
}
