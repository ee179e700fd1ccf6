//! Ambient log control with scoped suppression.
//!
//! The run sequencer forces the quietest level while a pipeline executes and
//! must restore the prior verbosity on every exit path, including panics.
//! [`QuietGuard`] realizes that as a drop guard over a
//! `tracing_subscriber::reload` handle.

use std::sync::Mutex;

use anyhow::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{reload, EnvFilter, Registry};

use flowdeck_types::{Result, ShellError, Verbosity};

/// Handle to the process-wide log filter.
pub struct LogControl {
    handle: reload::Handle<EnvFilter, Registry>,
    current: Mutex<String>,
    // Keeps the filter alive when the layer was never installed in a
    // global subscriber (embedding and tests).
    _layer: Option<reload::Layer<EnvFilter, Registry>>,
}

impl LogControl {
    /// Install the global tracing subscriber and return its control handle.
    ///
    /// Uses the `RUST_LOG` env var if set, otherwise falls back to the
    /// provided level.
    pub fn init(default: Verbosity) -> anyhow::Result<Self> {
        let directive = std::env::var(EnvFilter::DEFAULT_ENV)
            .ok()
            .filter(|raw| !raw.is_empty())
            .unwrap_or_else(|| default.directive().to_string());

        let (filter, handle) = reload::Layer::new(EnvFilter::new(&directive));
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(false))
            .try_init()
            .context("failed to install global tracing subscriber")?;

        Ok(Self {
            handle,
            current: Mutex::new(directive),
            _layer: None,
        })
    }

    /// Create a control handle without touching the global subscriber.
    ///
    /// `RUST_LOG` is not consulted; the filter starts at `default`.
    pub fn new(default: Verbosity) -> Self {
        let (layer, handle) =
            reload::Layer::<EnvFilter, Registry>::new(EnvFilter::new(default.directive()));
        Self {
            handle,
            current: Mutex::new(default.directive().to_string()),
            _layer: Some(layer),
        }
    }

    /// The currently active filter directive.
    pub fn directive(&self) -> Result<String> {
        let current = self.current.lock().map_err(|_| ShellError::LockPoisoned)?;
        Ok(current.clone())
    }

    /// Replace the active verbosity.
    pub fn set_verbosity(&self, verbosity: Verbosity) -> Result<()> {
        self.set_directive(verbosity.directive()).map(|_| ())
    }

    /// Force the quietest level until the returned guard is dropped.
    pub fn suppress(&self) -> Result<QuietGuard<'_>> {
        let prev = self.set_directive(Verbosity::Off.directive())?;
        Ok(QuietGuard {
            control: self,
            prev,
        })
    }

    /// Swap the filter and return the previous directive.
    fn set_directive(&self, directive: &str) -> Result<String> {
        let mut current = self.current.lock().map_err(|_| ShellError::LockPoisoned)?;
        self.handle
            .reload(EnvFilter::new(directive))
            .map_err(|e| ShellError::Execution(anyhow::Error::new(e)))?;
        Ok(std::mem::replace(&mut *current, directive.to_string()))
    }
}

/// Restores the prior verbosity on drop, whether the run returned, erred,
/// or panicked.
pub struct QuietGuard<'a> {
    control: &'a LogControl,
    prev: String,
}

impl Drop for QuietGuard<'_> {
    fn drop(&mut self) {
        let _ = self.control.set_directive(self.prev.as_str());
    }
}
