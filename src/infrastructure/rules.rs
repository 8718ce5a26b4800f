//! Rule table - the explicit platform code to default output rule mapping.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::OnceLock;

use tracing::{debug, error, warn};

use crate::config::{self, LoadedRules, RulesConfig};
use crate::domain::entities::DefaultOutputRule;
use crate::domain::ports::OutputRuleLookup;
use crate::error::{GeneratorError, GeneratorResult};

/// Default output rules keyed by platform code
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RuleTable {
    rules: BTreeMap<String, DefaultOutputRule>,
}

impl RuleTable {
    /// Build from a rule table, rejecting incomplete or duplicate entries.
    pub fn from_config(config: &RulesConfig, source: &Path) -> GeneratorResult<Self> {
        config.validate(source)?;
        Ok(Self::from_validated(config))
    }

    fn from_validated(config: &RulesConfig) -> Self {
        let rules = config
            .rules
            .iter()
            .map(|entry| (entry.platform_code.clone(), entry.to_rule()))
            .collect();
        Self { rules }
    }

    /// Table from the loader's output; the loader validates what it returns.
    pub fn from_loaded(loaded: &LoadedRules) -> Self {
        Self::from_validated(&loaded.config)
    }

    pub fn builtin() -> Self {
        Self::from_validated(&RulesConfig::builtin())
    }

    /// Process-wide table, loaded on first use through
    /// [`config::load_or_default`]. A selected rule file that fails to load
    /// fails every call for the lifetime of the process.
    pub fn shared() -> GeneratorResult<&'static RuleTable> {
        static SHARED: OnceLock<Result<RuleTable, String>> = OnceLock::new();
        let loaded = SHARED.get_or_init(|| match config::load_or_default(None) {
            Ok(loaded) => {
                for warning in &loaded.warnings {
                    warn!(%warning, "rule table warning");
                }
                debug!(source = %loaded.source, "loaded default output rules");
                Ok(Self::from_loaded(&loaded))
            }
            Err(err) => {
                error!(error = %err, "failed to load default output rules");
                Err(err.to_string())
            }
        });

        loaded
            .as_ref()
            .map_err(|message| GeneratorError::ConfigurationMissing {
                detail: format!("default output rules unavailable: {}", message),
            })
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rules in platform code order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DefaultOutputRule)> {
        self.rules.iter().map(|(code, rule)| (code.as_str(), rule))
    }
}

impl OutputRuleLookup for RuleTable {
    fn lookup(&self, platform_code: &str) -> Option<DefaultOutputRule> {
        self.rules.get(platform_code).cloned()
    }
}
