//! Local rule-based agent
//!
//! Wraps the decision engine, tool registry and loop controller behind the
//! `Agent` contract. Loop failures are encoded as a tagged response string,
//! never raised, so the harness can score every response uniformly.

use anyhow::Result;
use async_trait::async_trait;

use crate::agent::{LoopConfig, LoopController};
use crate::engine::DecisionEngine;
use crate::tools::ToolRegistry;

use super::Agent;

/// Rule-based local agent driving one loop controller per query
pub struct LocalAgent {
    id: String,
    engine: DecisionEngine,
    registry: ToolRegistry,
    config: LoopConfig,
}

impl LocalAgent {
    /// Create a local agent over a tool registry
    pub fn new(registry: ToolRegistry, config: LoopConfig) -> Self {
        Self {
            id: "local".to_string(),
            engine: DecisionEngine::new(),
            registry,
            config,
        }
    }

    /// Override the identifier recorded in the dataset
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}

#[async_trait]
impl Agent for LocalAgent {
    fn id(&self) -> &str {
        &self.id
    }

    async fn query(&self, prompt: &str) -> Result<String> {
        // Each query gets a fresh controller and transcript.
        let mut controller = LoopController::new(&self.engine, &self.registry, self.config.clone());
        match controller.run(prompt).await {
            Ok(answer) => Ok(answer),
            Err(e) => {
                tracing::error!("Local agent loop failed: {}", e);
                Ok(format!("[Local Agent Error] {}", e))
            }
        }
    }
}
