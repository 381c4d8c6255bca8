//! Hosted model wrapper
//!
//! Single-turn OpenAI chat-completions client with temperature fixed at 0
//! for reproducible sampling. API and network failures are encoded as a
//! tagged response string per the `Agent` contract.

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::core::{ProbeError, ProbeResult};

use super::Agent;

const DEFAULT_API_URL: &str = "https://api.openai.com";
const DEFAULT_MODEL: &str = "gpt-4o";

/// Hosted OpenAI model under test
pub struct OpenAiAgent {
    id: String,
    api_url: String,
    api_key: String,
    model: String,
    http: Client,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

impl OpenAiAgent {
    /// Create the wrapper from the environment
    ///
    /// Requires `OPENAI_API_KEY`; `OPENAI_API_URL` overrides the endpoint.
    pub fn from_env() -> ProbeResult<Self> {
        let api_key = std::env::var("OPENAI_API_KEY").map_err(|_| {
            ProbeError::InvalidConfig("OPENAI_API_KEY is not set".to_string())
        })?;
        let api_url =
            std::env::var("OPENAI_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        tracing::info!("Created OpenAI wrapper for model {}", DEFAULT_MODEL);
        Ok(Self {
            id: "openai".to_string(),
            api_url,
            api_key,
            model: DEFAULT_MODEL.to_string(),
            http: Client::new(),
        })
    }

    /// Set the model identifier sent to the API
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Send a single-turn chat completion request
    async fn chat(&self, prompt: &str) -> Result<String> {
        let body = serde_json::json!({
            "model": self.model,
            "messages": [{ "role": "user", "content": prompt }],
            "temperature": 0,
        });

        let url = format!("{}/v1/chat/completions", self.api_url);
        let resp = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .context("Chat completion request failed")?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            bail!("Chat completion returned {}: {}", status, text);
        }

        let parsed: ChatResponse = resp
            .json()
            .await
            .context("Failed to parse chat completion response")?;

        let content = parsed
            .choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .context("Chat completion response had no content")?;

        Ok(content.trim().to_string())
    }
}

#[async_trait]
impl Agent for OpenAiAgent {
    fn id(&self) -> &str {
        &self.id
    }

    async fn query(&self, prompt: &str) -> Result<String> {
        match self.chat(prompt).await {
            Ok(response) => Ok(response),
            Err(e) => {
                tracing::error!("OpenAI query failed: {:#}", e);
                Ok(format!("[OpenAI Error] {}", e))
            }
        }
    }
}
