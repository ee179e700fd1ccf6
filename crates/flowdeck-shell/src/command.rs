//! The `pipeline` shell command: dispatch plus the run sequencer.

use std::sync::{Arc, Mutex};

use serde_json::Value;

use flowdeck_types::{Result, ShellError};

use crate::data::DataRegistry;
use crate::logging::LogControl;
use crate::registry::PipelineRegistry;
use crate::result::Rendered;
use crate::runner::RunnerFactory;
use crate::session::SharedSession;
use crate::state::ExtensionState;

/// The one externally invocable entry point of the extension.
pub struct PipelineCommand {
    session: SharedSession,
    registry: Arc<Mutex<PipelineRegistry>>,
    state: Arc<ExtensionState>,
    runners: Arc<dyn RunnerFactory>,
    logs: Arc<LogControl>,
    args: Option<Value>,
}

impl PipelineCommand {
    pub(crate) fn new(
        session: SharedSession,
        registry: Arc<Mutex<PipelineRegistry>>,
        state: Arc<ExtensionState>,
        runners: Arc<dyn RunnerFactory>,
        logs: Arc<LogControl>,
        args: Option<Value>,
    ) -> Self {
        Self {
            session,
            registry,
            state,
            runners,
            logs,
            args,
        }
    }

    /// Evaluate a command string from the host shell.
    ///
    /// Only `run` is recognized; anything else fails with
    /// [`ShellError::UnknownCommand`] and performs no side effects.
    pub fn evaluate(&self, arguments: &str) -> Result<Rendered> {
        match arguments.trim() {
            "run" => self.run_pipeline(),
            other => Err(ShellError::UnknownCommand(other.to_string())),
        }
    }

    fn run_pipeline(&self) -> Result<Rendered> {
        // Concurrent `run`s are serialized instead of racing the result slot;
        // the lock is extension-wide, shared by every command binding.
        let _serial = self.state.lock_run()?;

        let (name, rendered) = {
            // Turn off the log spew from the execution backend for the
            // duration of the run; the guard restores the prior verbosity on
            // every exit path, including panics.
            let _quiet = self.logs.suppress()?;
            self.run_pipeline_core()?
        };
        tracing::info!(definition = name.as_str(), "Pipeline run complete");
        Ok(rendered)
    }

    fn run_pipeline_core(&self) -> Result<(String, Rendered)> {
        self.state.clear_result()?;

        let data = DataRegistry::new(Arc::clone(&self.session));
        let runner = self.runners.create(data.clone());

        let (name, mut definition) = self
            .registry
            .lock()
            .map_err(|_| ShellError::LockPoisoned)?
            .instantiate()?;

        definition.initialize(&data, self.args.as_ref())?;
        let pipeline = definition.build(&runner.options())?;

        let result = runner.run(pipeline)?;
        self.state.set_result(Arc::clone(&result))?;

        let rendered = result.graph()?.render()?;
        Ok((name, rendered))
    }
}
