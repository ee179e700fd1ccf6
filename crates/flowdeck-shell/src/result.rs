//! Execution result and graph rendering seams.

use serde::{Deserialize, Serialize};

/// Notebook display payload produced by rendering an execution graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rendered {
    /// Mime type the host display layer should use.
    pub mime_type: String,
    /// Rendered content.
    pub content: String,
}

impl Rendered {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            mime_type: "text/plain".to_string(),
            content: content.into(),
        }
    }

    pub fn html(content: impl Into<String>) -> Self {
        Self {
            mime_type: "text/html".to_string(),
            content: content.into(),
        }
    }
}

/// Renderable view of an executed pipeline's graph.
pub trait ExecutionGraph {
    fn render(&self) -> anyhow::Result<Rendered>;
}

/// Handle to a completed or in-flight pipeline run.
///
/// Stored in [`ExtensionState`](crate::ExtensionState) after each run so that
/// follow-up shell commands can inspect the most recent execution.
pub trait ExecutionResult: Send + Sync {
    /// Build a renderable graph of the executed pipeline.
    fn graph(&self) -> anyhow::Result<Box<dyn ExecutionGraph>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_payloads_are_plain() {
        let rendered = Rendered::text("3 stages");
        assert_eq!(rendered.mime_type, "text/plain");
        assert_eq!(rendered.content, "3 stages");
    }

    #[test]
    fn html_payloads_carry_the_html_mime_type() {
        let rendered = Rendered::html("<svg/>");
        assert_eq!(rendered.mime_type, "text/html");
    }
}
