//! Rule table warning value object.

use std::fmt;
use std::path::PathBuf;

/// Non-fatal problem found while loading a rule table, such as an
/// unrecognized key. Loading still succeeds; the warning is reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    /// 1-indexed
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warning_display_with_line_and_suggestion() {
        let warning = ConfigWarning {
            key: "output_dir".to_string(),
            file: PathBuf::from("rules.toml"),
            line: Some(4),
            suggestion: Some("output_directory".to_string()),
        };
        assert_eq!(
            warning.to_string(),
            "unknown key 'output_dir' in rules.toml:4 (did you mean 'output_directory'?)"
        );
    }

    #[test]
    fn warning_display_bare() {
        let warning = ConfigWarning {
            key: "x".to_string(),
            file: PathBuf::from("rules.toml"),
            line: None,
            suggestion: None,
        };
        assert_eq!(warning.to_string(), "unknown key 'x' in rules.toml");
    }
}
