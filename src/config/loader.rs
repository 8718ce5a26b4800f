//! Rule table loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{GeneratorError, GeneratorResult};
use crate::infrastructure::fs::mdgen_config_dir;

use super::types::RulesConfig;

pub use crate::domain::value_objects::ConfigWarning;

/// Environment variable naming a rule table file
pub const RULES_FILE_VAR: &str = "MDGEN_RULES_FILE";

/// Where the effective rule table came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RulesSource {
    Explicit(PathBuf),
    Environment(PathBuf),
    User(PathBuf),
    Builtin,
}

impl std::fmt::Display for RulesSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RulesSource::Explicit(path) => write!(f, "{}", path.display()),
            RulesSource::Environment(path) => {
                write!(f, "{} (from {})", path.display(), RULES_FILE_VAR)
            }
            RulesSource::User(path) => write!(f, "{} (user config)", path.display()),
            RulesSource::Builtin => write!(f, "built-in defaults"),
        }
    }
}

/// Effective rule table with its origin and any non-fatal warnings
#[derive(Debug, Clone)]
pub struct LoadedRules {
    pub config: RulesConfig,
    pub source: RulesSource,
    pub warnings: Vec<ConfigWarning>,
}

/// Load a rule table and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> GeneratorResult<(RulesConfig, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: RulesConfig = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| GeneratorError::InvalidRules {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    config.validate(path)?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve the effective rule table:
/// 1. `explicit` path
/// 2. `MDGEN_RULES_FILE`
/// 3. User config (`<config dir>/mdgen/rules.toml`)
/// 4. Built-in defaults
///
/// Errors in an explicitly selected file (1, 2) are returned. A broken user
/// config is reported and skipped.
pub fn load_or_default(explicit: Option<&Path>) -> GeneratorResult<LoadedRules> {
    if let Some(path) = explicit {
        let (config, warnings) = load_with_warnings(path)?;
        return Ok(LoadedRules {
            config,
            source: RulesSource::Explicit(path.to_path_buf()),
            warnings,
        });
    }

    if let Some(path) = std::env::var_os(RULES_FILE_VAR).filter(|v| !v.is_empty()) {
        let path = PathBuf::from(path);
        let (config, warnings) = load_with_warnings(&path)?;
        return Ok(LoadedRules {
            config,
            source: RulesSource::Environment(path),
            warnings,
        });
    }

    if let Some(path) = user_rules_path() {
        if path.exists() {
            match load_with_warnings(&path) {
                Ok((config, warnings)) => {
                    return Ok(LoadedRules {
                        config,
                        source: RulesSource::User(path),
                        warnings,
                    });
                }
                Err(err) => warn!(error = %err, "ignoring user rule table"),
            }
        }
    }

    debug!("using built-in default output rules");
    Ok(LoadedRules {
        config: RulesConfig::builtin(),
        source: RulesSource::Builtin,
        warnings: Vec::new(),
    })
}

/// Location of the user's rule table
pub fn user_rules_path() -> Option<PathBuf> {
    mdgen_config_dir().map(|dir| dir.join("mdgen").join("rules.toml"))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "rules",
        "platform_code",
        "environment_variable_name",
        "output_directory",
    ];

    let mut best: Option<(&str, usize)> = None;
    for &candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    // Allow more slack for the long key names
    match best {
        Some((candidate, dist)) if dist <= (candidate.len() / 3).max(2) => {
            Some(candidate.to_string())
        }
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
