//! Error model for the pipeline shell command.
//!
//! `Execution` wraps opaque collaborator errors (runner, definition, graph
//! rendering) that flow through the command unchanged; every other variant is
//! raised by the shell itself.

use thiserror::Error;

/// Errors surfaced to the host shell by the pipeline command.
#[derive(Debug, Error)]
pub enum ShellError {
    /// No pipeline definition has been registered in this session.
    #[error("no pipeline definition is registered; register one before running")]
    NoDefinition,

    /// More than one definition is registered; resolution refuses to guess.
    #[error(
        "multiple pipeline definitions are registered ({}); exactly one is required",
        .names.join(", ")
    )]
    AmbiguousDefinition { names: Vec<String> },

    /// A definition with this name is already registered.
    #[error("a pipeline definition named '{0}' is already registered")]
    DuplicateDefinition(String),

    /// A registered factory failed to produce its definition.
    #[error("unable to construct pipeline definition '{name}': {source}")]
    Construction {
        name: String,
        #[source]
        source: anyhow::Error,
    },

    /// The dispatcher received a command it does not recognize.
    #[error("unknown pipeline command '{0}'")]
    UnknownCommand(String),

    /// A collaborator failed during initialization, pipeline build, run,
    /// or graph rendering.
    #[error(transparent)]
    Execution(#[from] anyhow::Error),

    /// Shared shell state was poisoned by a panicked thread.
    #[error("shell state lock poisoned")]
    LockPoisoned,
}

/// Convenience alias used throughout the shell crates.
pub type Result<T> = std::result::Result<T, ShellError>;
