//! Generation Batch
//!
//! Runs several generators in sequence. A failing generator never stops the
//! ones after it; every outcome is collected into a [`BatchReport`].

use tracing::info;

use super::generator::{GenerationFailure, Generator, Outcome};

/// Outcome of one generator within a batch
#[derive(Debug, Clone)]
pub struct BatchEntry {
    pub generator: String,
    pub outcome: Outcome,
}

/// Result of a batch run
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub entries: Vec<BatchEntry>,
}

impl BatchReport {
    pub fn all_succeeded(&self) -> bool {
        self.entries.iter().all(|e| e.outcome.is_success())
    }

    pub fn succeeded(&self) -> impl Iterator<Item = &BatchEntry> {
        self.entries.iter().filter(|e| e.outcome.is_success())
    }

    /// Entries that did not complete, declined ones included
    pub fn failed(&self) -> impl Iterator<Item = &BatchEntry> {
        self.entries.iter().filter(|e| !e.outcome.is_success())
    }

    /// Failures raised as errors or panics
    pub fn failures(&self) -> impl Iterator<Item = &GenerationFailure> {
        self.entries.iter().filter_map(|e| e.outcome.failure())
    }
}

/// Ordered collection of generators
#[derive(Default)]
pub struct GenerationBatch<'a> {
    generators: Vec<Box<dyn Generator + 'a>>,
}

impl<'a> GenerationBatch<'a> {
    pub fn new() -> Self {
        Self {
            generators: Vec::new(),
        }
    }

    pub fn with(mut self, generator: impl Generator + 'a) -> Self {
        self.generators.push(Box::new(generator));
        self
    }

    pub fn push(&mut self, generator: Box<dyn Generator + 'a>) {
        self.generators.push(generator);
    }

    pub fn len(&self) -> usize {
        self.generators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }

    pub fn run(mut self) -> BatchReport {
        let mut report = BatchReport::default();
        for generator in &mut self.generators {
            let outcome = generator.execute_with_outcome();
            report.entries.push(BatchEntry {
                generator: generator.name().to_string(),
                outcome,
            });
        }

        info!(
            total = report.entries.len(),
            failed = report.failed().count(),
            "generation batch finished"
        );
        report
    }
}
