//! Error types for mdgen
//!
//! Uses `thiserror` for library errors. Generation steps themselves return
//! `anyhow::Result`, and their failures are contained by
//! [`crate::application::generator::execute`] instead of propagating.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for mdgen operations
pub type GeneratorResult<T> = Result<T, GeneratorError>;

/// Coarse classification of a [`GeneratorError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    PlatformUnsupported,
    ConfigurationMissing,
    GenerationFailure,
    InvalidRules,
    Io,
}

/// Main error type for mdgen operations
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// A required string argument was blank
    #[error("invalid argument '{name}': {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    /// The host operating system is not one of the known platforms
    #[error("unsupported platform '{os}'")]
    PlatformUnsupported { os: String },

    /// No usable default output rule for the platform
    #[error("missing configuration: {detail}")]
    ConfigurationMissing { detail: String },

    /// A generation step failed
    #[error("generation failed in {generator}: {message}")]
    Generation { generator: String, message: String },

    /// Rule table could not be parsed or is inconsistent
    #[error("invalid rule table in {file}: {message}")]
    InvalidRules { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GeneratorError {
    pub(crate) fn blank(name: &'static str) -> Self {
        GeneratorError::InvalidArgument {
            name,
            reason: "must not be blank".to_string(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            GeneratorError::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            GeneratorError::PlatformUnsupported { .. } => ErrorKind::PlatformUnsupported,
            GeneratorError::ConfigurationMissing { .. } => ErrorKind::ConfigurationMissing,
            GeneratorError::Generation { .. } => ErrorKind::GenerationFailure,
            GeneratorError::InvalidRules { .. } => ErrorKind::InvalidRules,
            GeneratorError::Io(_) => ErrorKind::Io,
        }
    }
}
