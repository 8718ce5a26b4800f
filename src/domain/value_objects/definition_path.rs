//! Definition Path Value Object
//!
//! Pairs the location of a definition file with the directory a generator
//! writes its output into. The output path is either given explicitly or
//! resolved once, at construction, from the platform's default output rule.
//! A `DefinitionPath` never holds a blank output path: when resolution
//! fails, construction fails.

use serde::Serialize;
use tracing::debug;

use crate::domain::services::DefaultOutputPathResolver;
use crate::error::{GeneratorError, GeneratorResult};

/// Separator between the segments of a package name
pub const PACKAGE_DELIMITER: char = '.';

/// Input and output locations of one generation run
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DefinitionPath {
    file_path: String,
    output_path: String,
    #[serde(skip)]
    separator: char,
}

impl DefinitionPath {
    /// Definition file with the host's default output path.
    pub fn of(file_path: &str) -> GeneratorResult<Self> {
        Self::of_with_output(file_path, "")
    }

    /// Definition file with an explicit output path; a blank output path
    /// falls back to the host's default. The rule table is only loaded
    /// when that fallback is needed.
    pub fn of_with_output(file_path: &str, output_path: &str) -> GeneratorResult<Self> {
        Self::build(file_path, output_path, std::path::MAIN_SEPARATOR, || {
            DefaultOutputPathResolver::host()?.resolve()
        })
    }

    /// Construct with caller-supplied collaborators for default resolution.
    pub fn with_resolver(
        file_path: &str,
        output_path: &str,
        resolver: &DefaultOutputPathResolver<'_>,
    ) -> GeneratorResult<Self> {
        Self::build(file_path, output_path, resolver.path_separator(), || {
            resolver.resolve()
        })
    }

    fn build<F>(
        file_path: &str,
        output_path: &str,
        separator: char,
        resolve_default: F,
    ) -> GeneratorResult<Self>
    where
        F: FnOnce() -> GeneratorResult<String>,
    {
        if is_blank(file_path) {
            return Err(GeneratorError::blank("file_path"));
        }

        let output_path = if is_blank(output_path) {
            resolve_default()?
        } else {
            output_path.to_string()
        };
        debug!(file_path, output_path = %output_path, "definition path");

        Ok(Self {
            file_path: file_path.to_string(),
            output_path,
            separator,
        })
    }

    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    pub fn output_path(&self) -> &str {
        &self.output_path
    }

    /// Output path for a package, e.g. `org.thinkit.generator` becomes
    /// `<output>/org/thinkit/generator`. An empty package name yields the
    /// base output path.
    pub fn output_path_for(&self, package_name: &str) -> String {
        if package_name.is_empty() {
            return self.output_path.clone();
        }

        let mut path = String::with_capacity(self.output_path.len() + package_name.len() + 1);
        path.push_str(&self.output_path);
        path.push(self.separator);
        path.extend(package_name.chars().map(|c| {
            if c == PACKAGE_DELIMITER {
                self.separator
            } else {
                c
            }
        }));
        path
    }

    pub fn path_separator(&self) -> char {
        self.separator
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
