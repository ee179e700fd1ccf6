//! Runner seams for interactive pipeline execution.

use std::sync::Arc;

use flowdeck_types::PipelineOptions;

use crate::data::DataRegistry;
use crate::definition::Pipeline;
use crate::result::ExecutionResult;

/// Executes pipelines on behalf of the interactive shell.
///
/// Implementations own scheduling and data movement; the shell only sequences
/// one blocking run at a time through this trait.
pub trait PipelineRunner {
    /// Default execution options for pipelines built against this runner.
    fn options(&self) -> PipelineOptions;

    /// Execute a pipeline to completion and return its result handle.
    fn run(&self, pipeline: Box<dyn Pipeline>) -> anyhow::Result<Arc<dyn ExecutionResult>>;
}

/// Creates a runner bound to a session data registry.
///
/// A fresh runner is created for every `run` invocation so that it observes
/// the session variables as they exist at that moment.
pub trait RunnerFactory: Send + Sync {
    fn create(&self, data: DataRegistry) -> Box<dyn PipelineRunner>;
}
