//! Extension configuration parsing with environment variable substitution.

use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};

use flowdeck_types::Verbosity;

static ENV_VAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("valid env var regex"));

/// Host-facing settings for the shell extension.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtensionConfig {
    /// Baseline log verbosity when `RUST_LOG` is not set.
    pub log_level: Verbosity,
    /// Argument bag handed to every pipeline definition's `initialize`.
    pub args: Option<serde_json::Value>,
}

/// Substitute `${VAR_NAME}` patterns with environment variable values.
///
/// # Errors
///
/// Returns an error naming every referenced environment variable that is
/// not set.
pub fn substitute_env_vars(input: &str) -> Result<String> {
    let mut result = input.to_string();
    let mut missing = Vec::new();

    for cap in ENV_VAR_RE.captures_iter(input) {
        let var_name = &cap[1];
        match std::env::var(var_name) {
            Ok(val) => {
                result = result.replace(&cap[0], &val);
            }
            Err(_) => {
                missing.push(var_name.to_string());
            }
        }
    }

    if !missing.is_empty() {
        anyhow::bail!("Missing environment variable(s): {}", missing.join(", "));
    }

    Ok(result)
}

/// Parse an extension config YAML string (after env var substitution).
///
/// # Errors
///
/// Returns an error if env var substitution fails or the YAML is invalid.
pub fn parse_config_str(yaml_str: &str) -> Result<ExtensionConfig> {
    let substituted = substitute_env_vars(yaml_str)?;
    let config: ExtensionConfig =
        serde_yaml::from_str(&substituted).context("Failed to parse extension config YAML")?;
    Ok(config)
}

/// Parse an extension config YAML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the YAML is invalid.
pub fn parse_config(path: &Path) -> Result<ExtensionConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    parse_config_str(&content)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn env_vars_are_substituted() {
        std::env::set_var("FD_TEST_BUCKET", "gs://staging");
        let input = "args:\n  bucket: ${FD_TEST_BUCKET}";
        let result = substitute_env_vars(input).unwrap();
        assert!(result.contains("gs://staging"));
        assert!(!result.contains("${FD_TEST_BUCKET}"));
        std::env::remove_var("FD_TEST_BUCKET");
    }

    #[test]
    fn all_missing_env_vars_are_reported() {
        let input = "${FD_MISSING_X} and ${FD_MISSING_Y}";
        let err = substitute_env_vars(input).unwrap_err().to_string();
        assert!(err.contains("FD_MISSING_X"), "got: {err}");
        assert!(err.contains("FD_MISSING_Y"), "got: {err}");
    }

    #[test]
    fn plain_input_passes_through() {
        let input = "log_level: warn";
        assert_eq!(substitute_env_vars(input).unwrap(), input);
    }

    #[test]
    fn empty_mapping_yields_defaults() {
        let config = parse_config_str("{}").unwrap();
        assert_eq!(config, ExtensionConfig::default());
        assert_eq!(config.log_level, Verbosity::Info);
        assert!(config.args.is_none());
    }

    #[test]
    fn full_config_parses() {
        let yaml = "log_level: debug\nargs:\n  input: lines\n  sample: 100\n";
        let config = parse_config_str(yaml).unwrap();
        assert_eq!(config.log_level, Verbosity::Debug);
        assert_eq!(config.args, Some(json!({"input": "lines", "sample": 100})));
    }

    #[test]
    fn invalid_log_level_is_a_parse_error() {
        let err = parse_config_str("log_level: shouting").unwrap_err().to_string();
        assert!(err.contains("Failed to parse extension config YAML"), "got: {err}");
    }
}
