use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::llm_trait::CompletionBackend;
use crate::prompts::{news_prompt, script_prompt};
use crate::reporter::ErrorReporter;
use crate::types::OperationProfile;

/// Low temperature for factual summaries
pub const NEWS_PROFILE: OperationProfile = OperationProfile {
    temperature: 0.3,
    max_tokens: 400,
};

/// Higher temperature for creative scripts
pub const SCRIPT_PROFILE: OperationProfile = OperationProfile {
    temperature: 0.6,
    max_tokens: 300,
};

/// News summary and video script operations.
///
/// Each operation is template, call, normalize. Every failure is reported
/// once through the caller's [`ErrorReporter`] and turned into `None`.
#[derive(Clone)]
pub struct NewsPipeline {
    news_backend: Arc<dyn CompletionBackend>,
    script_backend: Arc<dyn CompletionBackend>,
}

impl NewsPipeline {
    /// Create new pipeline from the summary and script backends
    pub fn new(news_backend: Arc<dyn CompletionBackend>, script_backend: Arc<dyn CompletionBackend>) -> Self {
        Self {
            news_backend,
            script_backend,
        }
    }

    /// Model used for news summaries
    pub fn news_model(&self) -> &str {
        self.news_backend.model()
    }

    /// Model used for video scripts
    pub fn script_model(&self) -> &str {
        self.script_backend.model()
    }

    /// Summarize the latest news about `topic`
    pub async fn summarize(&self, topic: &str, reporter: &dyn ErrorReporter) -> Option<String> {
        info!("Fetching news - Topic: {:?}", topic);
        let prompt = news_prompt(topic);

        match self
            .news_backend
            .generate(&prompt, NEWS_PROFILE.temperature, NEWS_PROFILE.max_tokens)
            .await
        {
            Ok(reply) => {
                let text = reply.text();
                if text.is_none() {
                    warn!("News reply had no usable text (shape: {})", reply.shape());
                }
                text
            }
            Err(e) => {
                reporter.report(&format!("Error fetching news: {}", e));
                None
            }
        }
    }

    /// Turn a news summary into a short video script.
    ///
    /// A missing summary short-circuits to `None` without calling the backend.
    pub async fn scriptify(&self, news_text: Option<&str>, reporter: &dyn ErrorReporter) -> Option<String> {
        let Some(news_text) = news_text else {
            debug!("No news text, skipping script generation");
            return None;
        };

        info!("Generating video script - News length: {}", news_text.len());
        let prompt = script_prompt(news_text);

        match self
            .script_backend
            .generate(&prompt, SCRIPT_PROFILE.temperature, SCRIPT_PROFILE.max_tokens)
            .await
        {
            Ok(reply) => {
                let text = reply.text();
                if text.is_none() {
                    warn!("Script reply had no usable text (shape: {})", reply.shape());
                }
                text
            }
            Err(e) => {
                reporter.report(&format!("Error generating video script: {}", e));
                None
            }
        }
    }

    /// Summarize `topic`, then script the summary
    pub async fn news_to_script(&self, topic: &str, reporter: &dyn ErrorReporter) -> Option<String> {
        let news = self.summarize(topic, reporter).await;
        self.scriptify(news.as_deref(), reporter).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockBackend;
    use crate::reporter::NoticeCollector;
    use serde_json::json;

    fn pipeline(news: &Arc<MockBackend>, script: &Arc<MockBackend>) -> NewsPipeline {
        NewsPipeline::new(news.clone(), script.clone())
    }

    #[tokio::test]
    async fn test_summarize_trims_direct_content() {
        let news = Arc::new(MockBackend::replying("news", json!({ "content": " Breaking: topic X update. " })));
        let script = Arc::new(MockBackend::replying("script", json!({})));
        let reporter = NoticeCollector::new();

        let result = pipeline(&news, &script).summarize("topic X", &reporter).await;

        assert_eq!(result.as_deref(), Some("Breaking: topic X update."));
        assert!(reporter.is_empty());
        assert_eq!(news.calls(), 1);
        assert_eq!(script.calls(), 0);
    }

    #[tokio::test]
    async fn test_summarize_uses_news_profile_and_prompt() {
        let news = Arc::new(MockBackend::replying("news", json!({ "content": "ok" })));
        let script = Arc::new(MockBackend::replying("script", json!({})));

        pipeline(&news, &script).summarize("solar storms", &NoticeCollector::new()).await;

        let (prompt, temperature, max_tokens) = news.last_call().unwrap();
        assert!(prompt.contains("'solar storms'"));
        assert_eq!(temperature, 0.3);
        assert_eq!(max_tokens, 400);
    }

    #[tokio::test]
    async fn test_scriptify_reads_choices_shape() {
        let news = Arc::new(MockBackend::replying("news", json!({})));
        let script = Arc::new(MockBackend::replying(
            "script",
            json!({ "choices": [ { "message": { "content": "Script body." } } ] }),
        ));
        let reporter = NoticeCollector::new();

        let result = pipeline(&news, &script)
            .scriptify(Some("Breaking: topic X update."), &reporter)
            .await;

        assert_eq!(result.as_deref(), Some("Script body."));
        let (prompt, temperature, max_tokens) = script.last_call().unwrap();
        assert!(prompt.contains("Breaking: topic X update."));
        assert_eq!(temperature, 0.6);
        assert_eq!(max_tokens, 300);
    }

    #[tokio::test]
    async fn test_unknown_shape_is_silent_none() {
        let news = Arc::new(MockBackend::replying("news", json!({})));
        let script = Arc::new(MockBackend::replying("script", json!({})));
        let reporter = NoticeCollector::new();

        let result = pipeline(&news, &script).summarize("topic X", &reporter).await;

        assert_eq!(result, None);
        assert!(reporter.is_empty());
    }

    #[tokio::test]
    async fn test_transport_error_reported_once() {
        let news = Arc::new(MockBackend::failing("news", "connection refused"));
        let script = Arc::new(MockBackend::replying("script", json!({})));
        let reporter = NoticeCollector::new();

        let result = pipeline(&news, &script).summarize("topic X", &reporter).await;

        assert_eq!(result, None);
        let messages = reporter.messages();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].starts_with("Error fetching news:"));
        assert!(messages[0].contains("connection refused"));
    }

    #[tokio::test]
    async fn test_script_error_reported_once() {
        let news = Arc::new(MockBackend::replying("news", json!({})));
        let script = Arc::new(MockBackend::failing("script", "rate limited"));
        let reporter = NoticeCollector::new();

        let result = pipeline(&news, &script).scriptify(Some("news"), &reporter).await;

        assert_eq!(result, None);
        let messages = reporter.messages();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].starts_with("Error generating video script:"));
    }

    #[tokio::test]
    async fn test_scriptify_none_skips_backend() {
        let news = Arc::new(MockBackend::replying("news", json!({})));
        let script = Arc::new(MockBackend::replying("script", json!({ "content": "never" })));
        let reporter = NoticeCollector::new();

        let result = pipeline(&news, &script).scriptify(None, &reporter).await;

        assert_eq!(result, None);
        assert_eq!(script.calls(), 0);
        assert!(reporter.is_empty());
    }

    #[tokio::test]
    async fn test_news_to_script_composes() {
        let news = Arc::new(MockBackend::replying("news", json!({ "content": "S" })));
        let script = Arc::new(MockBackend::replying(
            "script",
            json!({ "choices": [ { "message": { "content": " Hook. Story. Subscribe! " } } ] }),
        ));
        let reporter = NoticeCollector::new();

        let result = pipeline(&news, &script).news_to_script("topic", &reporter).await;

        assert_eq!(result.as_deref(), Some("Hook. Story. Subscribe!"));
        let (prompt, _, _) = script.last_call().unwrap();
        assert!(prompt.trim_end().ends_with("S"));
    }

    #[tokio::test]
    async fn test_news_to_script_short_circuits_on_failed_summary() {
        let news = Arc::new(MockBackend::failing("news", "boom"));
        let script = Arc::new(MockBackend::replying("script", json!({ "content": "never" })));
        let reporter = NoticeCollector::new();

        let result = pipeline(&news, &script).news_to_script("topic", &reporter).await;

        assert_eq!(result, None);
        assert_eq!(script.calls(), 0);
        assert_eq!(reporter.messages().len(), 1);
    }

    #[test]
    fn test_models_exposed() {
        let news = Arc::new(MockBackend::replying("gemini-2.0-flash-001", json!({})));
        let script = Arc::new(MockBackend::replying("gpt-4.1-mini", json!({})));
        let pipeline = pipeline(&news, &script);
        assert_eq!(pipeline.news_model(), "gemini-2.0-flash-001");
        assert_eq!(pipeline.script_model(), "gpt-4.1-mini");
    }
}
