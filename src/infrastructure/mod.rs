//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `env` - Host environment (variables, path separator)
//! - `fs/` - Configuration directory lookup
//! - `rules` - Rule table implementing the output rule lookup

pub mod env;
pub mod fs;
pub mod rules;

// Re-export for convenience
pub use env::HostEnvironment;
pub use rules::RuleTable;
