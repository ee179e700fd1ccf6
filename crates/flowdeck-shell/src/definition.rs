//! Author-facing pipeline definition traits.

use std::any::Any;

use serde_json::Value;

use flowdeck_types::PipelineOptions;

use crate::data::DataRegistry;

/// An executable pipeline, opaque to the shell.
///
/// Runners downcast to their own concrete pipeline type via
/// [`Pipeline::as_any`]; the shell never inspects the plan.
pub trait Pipeline: Send {
    fn as_any(&self) -> &dyn Any;
}

/// A user-authored pipeline definition registered with the shell for the
/// current session.
pub trait PipelineDefinition: Send {
    /// Called once per run before the pipeline is built, with the session
    /// data registry and optional host-supplied arguments.
    fn initialize(&mut self, _data: &DataRegistry, _args: Option<&Value>) -> anyhow::Result<()> {
        Ok(())
    }

    /// Build the execution plan using the runner's execution options.
    fn build(&self, options: &PipelineOptions) -> anyhow::Result<Box<dyn Pipeline>>;
}
