//! Extension wiring: configuration, definition registry, result state, and
//! log control.

use std::sync::{Arc, Mutex};

use crate::command::PipelineCommand;
use crate::config::ExtensionConfig;
use crate::logging::LogControl;
use crate::registry::PipelineRegistry;
use crate::runner::RunnerFactory;
use crate::session::SharedSession;
use crate::state::ExtensionState;

/// The installed shell extension.
///
/// Owns everything that outlives a single command invocation: the definition
/// registry, the current-result slot, and the ambient log control. Commands
/// handed out by [`ShellExtension::command`] share this state.
pub struct ShellExtension {
    config: ExtensionConfig,
    registry: Arc<Mutex<PipelineRegistry>>,
    state: Arc<ExtensionState>,
    logs: Arc<LogControl>,
}

impl ShellExtension {
    /// Create the extension and install the global tracing subscriber.
    ///
    /// # Errors
    ///
    /// Fails if a global subscriber is already installed.
    pub fn init(config: ExtensionConfig) -> anyhow::Result<Self> {
        let logs = LogControl::init(config.log_level)?;
        Ok(Self::with_log_control(config, logs))
    }

    /// Create the extension against an existing log control, for hosts that
    /// manage the global subscriber themselves.
    pub fn with_log_control(config: ExtensionConfig, logs: LogControl) -> Self {
        Self {
            config,
            registry: Arc::new(Mutex::new(PipelineRegistry::new())),
            state: Arc::new(ExtensionState::new()),
            logs: Arc::new(logs),
        }
    }

    /// Definition registry for the current session.
    pub fn registry(&self) -> Arc<Mutex<PipelineRegistry>> {
        Arc::clone(&self.registry)
    }

    /// Current-result slot, read by follow-up commands.
    pub fn state(&self) -> Arc<ExtensionState> {
        Arc::clone(&self.state)
    }

    /// Ambient log control.
    pub fn log_control(&self) -> Arc<LogControl> {
        Arc::clone(&self.logs)
    }

    /// Bind the `pipeline` command to a live session and a runner factory.
    pub fn command(
        &self,
        session: SharedSession,
        runners: Arc<dyn RunnerFactory>,
    ) -> PipelineCommand {
        PipelineCommand::new(
            session,
            Arc::clone(&self.registry),
            Arc::clone(&self.state),
            runners,
            Arc::clone(&self.logs),
            self.config.args.clone(),
        )
    }
}
