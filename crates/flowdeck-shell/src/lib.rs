//! Interactive notebook shell extension for running data pipelines.
//!
//! The extension binds an interactive session to a pipeline execution
//! backend: users register a [`PipelineDefinition`] for the session, and the
//! `pipeline run` shell command builds it against a session-backed
//! [`DataRegistry`], executes it through a host-supplied runner, stores the
//! [`ExecutionResult`] for follow-up commands, and renders the execution
//! graph back into the notebook.
//!
//! Pipeline execution itself (scheduling, data movement, graph layout) lives
//! behind the [`PipelineRunner`] and [`ExecutionResult`] seams; this crate
//! only sequences a run and manages the surrounding session state.

pub mod command;
pub mod config;
pub mod data;
pub mod definition;
pub mod extension;
pub mod logging;
pub mod registry;
pub mod result;
pub mod runner;
pub mod session;
pub mod state;

pub use command::PipelineCommand;
pub use config::ExtensionConfig;
pub use data::DataRegistry;
pub use definition::{Pipeline, PipelineDefinition};
pub use extension::ShellExtension;
pub use logging::{LogControl, QuietGuard};
pub use registry::PipelineRegistry;
pub use result::{ExecutionGraph, ExecutionResult, Rendered};
pub use runner::{PipelineRunner, RunnerFactory};
pub use session::{SharedSession, ShellSession};
pub use state::ExtensionState;

pub use flowdeck_types::{PipelineOptions, Result, ShellError, Verbosity};
