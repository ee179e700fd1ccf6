//! Ambient log verbosity levels.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Log verbosity for the shell's ambient tracing configuration.
///
/// Ordered from quietest to noisiest; `Off` is what the run sequencer forces
/// while a pipeline executes.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Verbosity {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl Verbosity {
    /// Filter directive understood by `tracing_subscriber::EnvFilter`.
    pub fn directive(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.directive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn off_is_the_quietest_level() {
        assert!(Verbosity::Off < Verbosity::Error);
        assert!(Verbosity::Info < Verbosity::Trace);
    }

    #[test]
    fn directives_parse_as_snake_case() {
        let v: Verbosity = serde_json::from_str("\"warn\"").expect("level should parse");
        assert_eq!(v, Verbosity::Warn);
        assert_eq!(v.to_string(), "warn");
    }

    #[test]
    fn default_is_info() {
        assert_eq!(Verbosity::default(), Verbosity::Info);
    }
}
