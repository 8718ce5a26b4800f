//! mdgen - definition paths and the generator contract for markdown generators
//!
//! A generator reads a definition file and writes documents into an output
//! directory. [`DefinitionPath`] holds both locations, resolving the output
//! directory from the platform's default output rule when none is given.
//! [`Generator`] wraps the generation step so that any failure is reported
//! as a value instead of aborting the caller.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{execute, GenerationBatch, GenerationFailure, Generator, Outcome};
pub use domain::entities::DefaultOutputRule;
pub use domain::services::{resolve_default_output_path, DefaultOutputPathResolver};
pub use domain::value_objects::{DefinitionPath, Platform};
pub use error::{ErrorKind, GeneratorError, GeneratorResult};
pub use infrastructure::{HostEnvironment, RuleTable};
