//! Tool invocation context — minimal stub for tool execution.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Context for a single tool invocation.
///
/// The orchestration framework driving the tool owns the real job state;
/// this carries just enough identity for logging and correlation.
#[derive(Debug, Clone, Serialize)]
pub struct ToolContext {
    /// Unique invocation ID.
    pub invocation_id: Uuid,
    /// User ID that triggered the invocation.
    pub user_id: String,
    /// When the invocation was requested.
    pub requested_at: DateTime<Utc>,
    /// Metadata.
    pub metadata: serde_json::Value,
}

impl Default for ToolContext {
    fn default() -> Self {
        Self {
            invocation_id: Uuid::new_v4(),
            user_id: "default".to_string(),
            requested_at: Utc::now(),
            metadata: serde_json::Value::Null,
        }
    }
}

impl ToolContext {
    /// Create a context for a specific user.
    pub fn for_user(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            ..Default::default()
        }
    }
}
