//! Application Layer
//!
//! Runs generators against resolved definition paths.
//!
//! - `generator` - The generator contract and the `execute` helper that
//!   contains every failure of a generation step
//! - `batch` - Sequential execution of many generators with a per-step report

pub mod batch;
pub mod generator;

pub use batch::{BatchEntry, BatchReport, GenerationBatch};
pub use generator::{execute, GenerationFailure, Generator, Outcome};
