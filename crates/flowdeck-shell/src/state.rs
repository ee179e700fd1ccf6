//! Process-wide extension state shared across shell commands.

use std::sync::{Arc, Mutex, MutexGuard};

use flowdeck_types::{Result, ShellError};

use crate::result::ExecutionResult;

/// Holds the most recent execution result for follow-up commands, and the
/// extension-wide run lock.
///
/// The run sequencer clears the result slot before each run and stores the
/// new result only after the run succeeds, so a failed run never leaves a
/// stale result addressable as "current". The run lock lives here rather
/// than on the command so that every command binding of one extension
/// serializes against the same lock.
#[derive(Default)]
pub struct ExtensionState {
    result: Mutex<Option<Arc<dyn ExecutionResult>>>,
    run_lock: Mutex<()>,
}

impl ExtensionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a result, replacing any prior value.
    pub fn set_result(&self, result: Arc<dyn ExecutionResult>) -> Result<()> {
        let mut slot = self.result.lock().map_err(|_| ShellError::LockPoisoned)?;
        *slot = Some(result);
        Ok(())
    }

    /// Clear the slot.
    pub fn clear_result(&self) -> Result<()> {
        let mut slot = self.result.lock().map_err(|_| ShellError::LockPoisoned)?;
        *slot = None;
        Ok(())
    }

    /// The most recent result, if a run has completed since the last clear.
    pub fn current_result(&self) -> Result<Option<Arc<dyn ExecutionResult>>> {
        let slot = self.result.lock().map_err(|_| ShellError::LockPoisoned)?;
        Ok(slot.clone())
    }

    /// Acquire the run lock, blocking while another run holds it.
    ///
    /// Held for the duration of one `run` sequence; the result slot and the
    /// ambient verbosity are only mutated under this lock.
    pub fn lock_run(&self) -> Result<MutexGuard<'_, ()>> {
        self.run_lock.lock().map_err(|_| ShellError::LockPoisoned)
    }
}
