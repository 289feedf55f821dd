use async_trait::async_trait;
use newsreel_common::{NewsreelError, Result};
use reqwest::Client;
use tracing::{debug, info};

use crate::llm_trait::CompletionBackend;
use crate::types::{CompletionReply, CompletionRequest};

/// Chat completions client bound to a single model
#[derive(Clone)]
pub struct CompletionClient {
    base_url: String,
    api_key: String,
    model: String,
    client: Client,
}

impl std::fmt::Debug for CompletionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionClient")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

impl CompletionClient {
    /// Create new completion client
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let model = model.into();
        let client = Client::builder()
            .build()
            .map_err(|e| NewsreelError::network(format!("Failed to create HTTP client: {}", e)))?;

        info!("Completion client initialized: {} (model: {})", base_url, model);
        Ok(Self {
            base_url,
            api_key: api_key.into(),
            model,
            client,
        })
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    /// Single request, no retries
    async fn send(&self, request: &CompletionRequest) -> Result<CompletionReply> {
        let url = self.completions_url();

        debug!(
            "Sending completion request - Model: {}, Prompt length: {}, Temperature: {}, Max tokens: {}",
            request.model,
            request.messages.iter().map(|m| m.content.len()).sum::<usize>(),
            request.temperature,
            request.max_tokens
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| NewsreelError::network(format!("Failed to send request: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NewsreelError::provider(status.as_u16(), body));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| NewsreelError::network(format!("Failed to read response body: {}", e)))?;

        let reply: CompletionReply = serde_json::from_slice(&body)
            .map_err(|e| NewsreelError::serialization(format!("Failed to parse response: {}", e)))?;

        debug!("Received completion reply - Shape: {}", reply.shape());
        Ok(reply)
    }
}

#[async_trait]
impl CompletionBackend for CompletionClient {
    async fn generate(&self, prompt: &str, temperature: f32, max_tokens: u32) -> Result<CompletionReply> {
        let request = CompletionRequest::new(self.model.clone(), prompt, temperature, max_tokens);
        self.send(&request).await
    }

    fn model(&self) -> &str {
        &self.model
    }
}
