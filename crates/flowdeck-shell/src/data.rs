//! Session-backed data registry mapping named variables to pipeline sources
//! and sinks.

use serde_json::Value;

use flowdeck_types::{Result, ShellError};

use crate::session::SharedSession;

/// Cheap, clonable handle over the session variable namespace.
///
/// Pipeline definitions use this as their source/sink namespace: reading a
/// name yields the current session value, writing a name defines or replaces
/// the session variable.
#[derive(Clone)]
pub struct DataRegistry {
    session: SharedSession,
}

impl DataRegistry {
    pub fn new(session: SharedSession) -> Self {
        Self { session }
    }

    /// Names of all variables currently visible in the session.
    pub fn names(&self) -> Result<Vec<String>> {
        let session = self.session.lock().map_err(|_| ShellError::LockPoisoned)?;
        Ok(session.variable_names())
    }

    /// Read a named session variable, if defined.
    pub fn read(&self, name: &str) -> Result<Option<Value>> {
        let session = self.session.lock().map_err(|_| ShellError::LockPoisoned)?;
        Ok(session.get_variable(name))
    }

    /// Define or replace a named session variable.
    pub fn write(&self, name: &str, value: Value) -> Result<()> {
        let mut session = self.session.lock().map_err(|_| ShellError::LockPoisoned)?;
        session.set_variable(name, value);
        Ok(())
    }
}
