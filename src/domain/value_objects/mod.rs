//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod config_warning;
mod definition_path;
mod platform;

pub use config_warning::ConfigWarning;
pub use definition_path::DefinitionPath;
pub use platform::Platform;
