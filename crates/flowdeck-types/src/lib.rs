//! Shared types for the flowdeck interactive pipeline shell.
//!
//! This crate is dependency-boundary-safe for both the shell extension and
//! host-side runner implementations.

pub mod errors;
pub mod options;
pub mod verbosity;

pub use errors::{Result, ShellError};
pub use options::PipelineOptions;
pub use verbosity::Verbosity;
