//! Execution options handed to pipeline definitions at build time.

use serde::{Deserialize, Serialize};

/// Runtime execution options supplied by the runner (not authored by the
/// pipeline definition itself).
///
/// Unknown settings are preserved in `extra` and passed through to the
/// execution backend untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineOptions {
    /// Job name reported to the execution backend.
    pub job_name: Option<String>,
    /// Worker parallelism hint; `None` lets the backend decide.
    pub parallelism: Option<u32>,
    /// Backend-specific settings, flattened at the top level.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_leave_everything_to_the_backend() {
        let opts = PipelineOptions::default();
        assert!(opts.job_name.is_none());
        assert!(opts.parallelism.is_none());
        assert!(opts.extra.is_empty());
    }

    #[test]
    fn unknown_settings_land_in_extra() {
        let opts: PipelineOptions =
            serde_json::from_str(r#"{"job_name":"wordcount","staging_bucket":"gs://tmp"}"#)
                .expect("options should parse");
        assert_eq!(opts.job_name.as_deref(), Some("wordcount"));
        assert_eq!(opts.extra["staging_bucket"], "gs://tmp");
    }
}
