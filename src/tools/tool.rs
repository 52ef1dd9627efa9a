//! Tool abstraction exposed to the orchestration framework.

use std::time::Duration;

use async_trait::async_trait;

use crate::context::ToolContext;
use crate::error::KakaoError;

/// Errors surfaced by tool execution.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("Execution failed: {0}")]
    ExecutionFailed(String),

    #[error("Upstream unavailable: {0}")]
    Upstream(#[from] KakaoError),
}

/// Result of a tool execution.
#[derive(Debug, Clone)]
pub struct ToolOutput {
    pub result: serde_json::Value,
    pub duration: Duration,
}

impl ToolOutput {
    pub fn success(result: serde_json::Value, duration: Duration) -> Self {
        Self { result, duration }
    }

    pub fn text(text: impl Into<String>, duration: Duration) -> Self {
        Self {
            result: serde_json::Value::String(text.into()),
            duration,
        }
    }

    /// The textual content, if the result is a plain string.
    pub fn as_text(&self) -> Option<&str> {
        self.result.as_str()
    }
}

/// A capability the LLM can call by name with JSON parameters.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Unique tool name, as advertised to the model.
    fn name(&self) -> &str;

    /// Human/model-readable description of what the tool does.
    fn description(&self) -> &str;

    /// JSON Schema for the tool's parameters.
    fn parameters_schema(&self) -> serde_json::Value;

    /// Run the tool.
    async fn execute(
        &self,
        params: serde_json::Value,
        ctx: &ToolContext,
    ) -> Result<ToolOutput, ToolError>;
}

/// Extract a required string parameter.
pub fn require_str<'a>(params: &'a serde_json::Value, key: &str) -> Result<&'a str, ToolError> {
    params
        .get(key)
        .and_then(|v| v.as_str())
        .ok_or_else(|| ToolError::InvalidParameters(format!("missing string parameter: {key}")))
}

/// Extract a required integer parameter.
pub fn require_i64(params: &serde_json::Value, key: &str) -> Result<i64, ToolError> {
    params
        .get(key)
        .and_then(|v| v.as_i64())
        .ok_or_else(|| ToolError::InvalidParameters(format!("missing integer parameter: {key}")))
}
