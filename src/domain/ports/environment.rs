//! Environment port - the host process environment as seen by path resolution.

/// Read access to environment variables and the host path separator.
pub trait Environment: Send + Sync {
    /// Value of an environment variable, `None` when unset.
    fn var(&self, name: &str) -> Option<String>;

    /// Path separator of the host file system.
    fn path_separator(&self) -> char;
}
