//! Host process environment

use crate::domain::ports::Environment;

/// [`Environment`] backed by `std::env` and the platform path separator.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostEnvironment;

impl Environment for HostEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }

    fn path_separator(&self) -> char {
        std::path::MAIN_SEPARATOR
    }
}
