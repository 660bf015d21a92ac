//! Error types for pipeline construction and execution.
//!
//! Configuration problems (duplicate stages, missing context entries) are
//! separated from run faults raised inside stage behaviors. Faults abort the
//! run and propagate to the invoker; there is no retry and no rollback.

use thiserror::Error;

use crate::pipeline::Phase;

/// Errors raised while building or driving the command pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Two stages registered under the same name within one phase.
    #[error("stage '{name}' is already registered in phase {phase:?}")]
    DuplicateStage { name: &'static str, phase: Phase },

    /// An entry of this type was already added to the context store this run.
    #[error("context store already holds an entry of type {type_name}")]
    DuplicateContextEntry { type_name: &'static str },

    /// `get` was called for a type never added to the context store.
    #[error("context store has no entry of type {type_name}")]
    ContextEntryNotFound { type_name: &'static str },

    /// Writing to the run's console failed.
    #[error("console write failed: {0}")]
    Console(#[from] std::io::Error),

    /// A stage raised an unhandled fault; the run is aborted.
    #[error(transparent)]
    Fault(#[from] anyhow::Error),
}

/// Errors from the declarative-metadata query operations.
#[derive(Debug, Error)]
pub enum MetadataError {
    /// The attributes container itself was absent.
    #[error("attributes container is absent")]
    NullContainer,

    /// No metadata of the requested type was registered on the container.
    #[error("no metadata of type {type_name}")]
    NotFound { type_name: &'static str },
}
