//! Configuration module for mdgen
//!
//! The only configurable data is the default output rule table.
//! Resolution order:
//! 1. `--rules` CLI flag (highest priority)
//! 2. `MDGEN_RULES_FILE` environment variable
//! 3. User config (`<config dir>/mdgen/rules.toml`)
//! 4. Built-in defaults (lowest priority)

mod loader;
#[cfg(test)]
mod tests;
mod types;

pub use loader::{
    load_or_default, load_with_warnings, user_rules_path, ConfigWarning, LoadedRules, RulesSource,
    RULES_FILE_VAR,
};
pub use types::{RuleEntry, RulesConfig};
