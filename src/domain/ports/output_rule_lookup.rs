//! Output rule lookup port - maps a platform code to its default output rule.

use crate::domain::entities::DefaultOutputRule;

/// Lookup of [`DefaultOutputRule`]s keyed by platform code.
///
/// Implementations must return at most one rule per code. Absence is
/// reported as `None`; callers decide how fatal that is.
pub trait OutputRuleLookup: Send + Sync {
    fn lookup(&self, platform_code: &str) -> Option<DefaultOutputRule>;
}
