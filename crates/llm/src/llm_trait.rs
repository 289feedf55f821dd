use newsreel_common::Result;
use crate::types::CompletionReply;
use async_trait::async_trait;

/// Common trait for completion backends
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Send one prompt and return the provider's raw reply
    async fn generate(&self, prompt: &str, temperature: f32, max_tokens: u32) -> Result<CompletionReply>;

    /// Model identifier bound to this backend
    fn model(&self) -> &str;
}
