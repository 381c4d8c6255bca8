//! Tool registry for managing available tools
//!
//! The registry holds all tools that are available to the agent and
//! dispatches invocations by name.

use std::collections::HashMap;
use std::sync::Arc;

use crate::core::{ProbeError, ProbeResult};

use super::tool::{Tool, ToolResult};

/// Registry that holds all available tools
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    /// Create a new empty tool registry
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Register a tool in the registry
    pub fn register<T: Tool + 'static>(&mut self, tool: T) {
        let name = tool.name().to_string();
        tracing::info!("Registering tool: {}", name);
        self.tools.insert(name, Arc::new(tool));
    }

    /// Get a tool by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    /// Execute a tool by name
    ///
    /// An unknown name is the one failure the registry surfaces as an error;
    /// everything that goes wrong inside a tool comes back as an error-flagged
    /// `ToolResult`.
    pub async fn execute(&self, name: &str, input: &str) -> ProbeResult<ToolResult> {
        let tool = self
            .tools
            .get(name)
            .ok_or_else(|| ProbeError::UnknownTool(name.to_string()))?;

        tracing::info!("Executing tool: {}", name);
        tracing::debug!("Input: {:?}", input);

        let result = tool.execute(input).await;

        tracing::debug!("Tool {} completed. Is error: {}", name, result.is_error);

        Ok(result)
    }

    /// Get the list of tool names
    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.keys().map(|s| s.as_str()).collect()
    }

    /// Get the number of registered tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct EchoTool;

    #[async_trait]
    impl Tool for EchoTool {
        fn name(&self) -> &str {
            "echo"
        }

        fn description(&self) -> &str {
            "Echo the input back"
        }

        async fn execute(&self, input: &str) -> ToolResult {
            ToolResult::success(input)
        }
    }

    #[test]
    fn test_empty_registry() {
        let registry = ToolRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert!(registry.get("nonexistent").is_none());
    }

    #[tokio::test]
    async fn test_execute_registered_tool() {
        let mut registry = ToolRegistry::new();
        registry.register(EchoTool);

        let result = registry.execute("echo", "hello").await.unwrap();
        assert_eq!(result.output, "hello");
        assert!(!result.is_error);
    }

    #[tokio::test]
    async fn test_execute_unknown_tool() {
        let registry = ToolRegistry::new();
        let err = registry.execute("missing", "input").await.unwrap_err();
        assert!(matches!(err, ProbeError::UnknownTool(name) if name == "missing"));
    }
}
