// AI implementation using Groq
//
// This is the infrastructure implementation of BaseAI.
// What to do with the answer lives in domains/chat.

use anyhow::Result;
use async_trait::async_trait;
use groq_client::{ChatRequest, GroqClient, Message};

use super::BaseAI;

/// Groq implementation of AI capabilities
#[derive(Clone)]
pub struct GroqAI {
    client: GroqClient,
    model: String,
}

impl GroqAI {
    pub fn new(client: GroqClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }
}

#[async_trait]
impl BaseAI for GroqAI {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let request = ChatRequest::new(&self.model).message(Message::user(prompt));

        tracing::debug!(
            prompt_length = prompt.len(),
            model = %self.model,
            "Calling Groq API"
        );

        let response = self.client.chat_completion(request).await.map_err(|e| {
            tracing::error!(error = %e, model = %self.model, "Groq API call failed");
            anyhow::Error::new(e).context("Failed to call Groq API")
        })?;

        tracing::info!(
            response_length = response.content.len(),
            model = %self.model,
            total_tokens = response.usage.as_ref().map(|u| u.total_tokens),
            "Groq API response received"
        );

        Ok(response.content)
    }

    fn model(&self) -> &str {
        &self.model
    }
}
