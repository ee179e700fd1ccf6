//! Seam to the live interactive session owned by the host shell.

use std::sync::{Arc, Mutex};

use serde_json::Value;

/// The host shell's variable namespace.
///
/// The extension reads and writes named session variables through this trait;
/// the variable set itself is owned and mutated by the host.
pub trait ShellSession: Send {
    /// Names of all variables currently defined in the session.
    fn variable_names(&self) -> Vec<String>;

    /// Look up a variable by name.
    fn get_variable(&self, name: &str) -> Option<Value>;

    /// Define or replace a variable.
    fn set_variable(&mut self, name: &str, value: Value);
}

/// Shared handle to the host session, cloned into each command binding.
pub type SharedSession = Arc<Mutex<dyn ShellSession>>;
