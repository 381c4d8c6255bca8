//! Tool trait definition
//!
//! All tools implement this trait to provide a consistent interface. Tools
//! never fail outward: internal failures are converted to a textual error
//! message in the result so the interaction loop never sees partial failure.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Result of executing a tool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    /// The output of the tool
    pub output: String,
    /// Whether the tool execution resulted in an error
    pub is_error: bool,
}

impl ToolResult {
    /// Create a successful tool result
    pub fn success(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            is_error: false,
        }
    }

    /// Create an error tool result
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            output: message.into(),
            is_error: true,
        }
    }
}

/// Trait for tools the agent can invoke
///
/// Every tool is a function from text to text. The input is the raw
/// `Action Input` string produced by the decision engine.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Get the name of this tool
    fn name(&self) -> &str;

    /// Get a description of this tool
    fn description(&self) -> &str;

    /// Execute the tool with the given input
    async fn execute(&self, input: &str) -> ToolResult;
}
