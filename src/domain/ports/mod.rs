//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod environment;
pub mod output_rule_lookup;

pub use environment::Environment;
pub use output_rule_lookup::OutputRuleLookup;
