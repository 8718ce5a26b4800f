//! Domain Services
//!
//! Stateless logic over domain types. Collaborators arrive through ports.

pub mod default_output_path;

pub use default_output_path::{resolve_default_output_path, DefaultOutputPathResolver};
