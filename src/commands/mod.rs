//! Subcommand implementations for the `mdgen` binary

mod paths;
mod rules;

pub use paths::cmd_paths;
pub use rules::cmd_rules;

use std::path::Path;

use anyhow::Result;
use mdgen::config;
use mdgen::infrastructure::RuleTable;

/// Load the effective rule table, reporting warnings on stderr.
fn load_rule_table(explicit: Option<&Path>) -> Result<(RuleTable, config::LoadedRules)> {
    let loaded = config::load_or_default(explicit)?;
    for warning in &loaded.warnings {
        eprintln!("Warning: {}", warning);
    }
    let table = RuleTable::from_loaded(&loaded);
    Ok((table, loaded))
}
