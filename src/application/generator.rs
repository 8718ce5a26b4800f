//! Generator contract
//!
//! A generation step reports `Ok(true)` on success, `Ok(false)` on a
//! recognized failure, and `Err` (or a panic) on anything unexpected.
//! [`execute`] runs a step and folds every one of those into an [`Outcome`];
//! nothing escapes to the caller. The [`Generator`] trait layers this over
//! a [`DefinitionPath`] so implementors only write [`Generator::run`].

use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, error};

use crate::domain::value_objects::DefinitionPath;
use crate::error::{ErrorKind, GeneratorError};

/// Detail of a contained generation failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationFailure {
    pub generator: String,
    /// Top-level error message
    pub message: String,
    /// Full error chain, outermost first
    pub causes: Vec<String>,
    pub panicked: bool,
}

impl GenerationFailure {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::GenerationFailure
    }
}

impl From<GenerationFailure> for GeneratorError {
    fn from(failure: GenerationFailure) -> Self {
        GeneratorError::Generation {
            generator: failure.generator,
            message: failure.message,
        }
    }
}

/// Result of running one generation step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The step reported success
    Completed,
    /// The step reported a recognized failure (`Ok(false)`)
    Declined,
    /// The step returned an error or panicked
    Failed(GenerationFailure),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Completed)
    }

    pub fn failure(&self) -> Option<&GenerationFailure> {
        match self {
            Outcome::Failed(failure) => Some(failure),
            _ => None,
        }
    }
}

/// Run `step`, containing any error or panic it raises.
pub fn execute<F>(generator: &str, step: F) -> Outcome
where
    F: FnOnce() -> anyhow::Result<bool>,
{
    let failure = match panic::catch_unwind(AssertUnwindSafe(step)) {
        Ok(Ok(true)) => {
            debug!(generator, "generation completed");
            return Outcome::Completed;
        }
        Ok(Ok(false)) => {
            debug!(generator, "generation declined");
            return Outcome::Declined;
        }
        Ok(Err(err)) => GenerationFailure {
            generator: generator.to_string(),
            message: err.to_string(),
            causes: err.chain().map(|cause| cause.to_string()).collect(),
            panicked: false,
        },
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            GenerationFailure {
                generator: generator.to_string(),
                causes: vec![message.clone()],
                message,
                panicked: true,
            }
        }
    };

    error!(
        generator,
        panicked = failure.panicked,
        causes = %failure.causes.join(": "),
        "unexpected error during generation; inspect the log to find and fix the cause"
    );
    Outcome::Failed(failure)
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "panic with non-string payload".to_string()
    }
}

/// A document generator reading from and writing to a [`DefinitionPath`].
pub trait Generator {
    fn definition_path(&self) -> &DefinitionPath;

    /// The generation work itself.
    fn run(&mut self) -> anyhow::Result<bool>;

    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Run the generator; `false` on any failure. Never panics or errors.
    fn execute(&mut self) -> bool {
        self.execute_with_outcome().is_success()
    }

    fn execute_with_outcome(&mut self) -> Outcome {
        let name = self.name().to_string();
        execute(&name, || self.run())
    }

    fn file_path(&self) -> &str {
        self.definition_path().file_path()
    }

    fn output_path(&self) -> &str {
        self.definition_path().output_path()
    }

    fn output_path_for(&self, package_name: &str) -> String {
        self.definition_path().output_path_for(package_name)
    }
}
