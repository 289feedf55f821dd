//! Newsreel LLM Integration
//!
//! Chat completions client, reply normalization and the news/script pipeline

mod client;
mod llm_trait;
mod pipeline;
mod prompts;
mod reporter;
mod types;

#[cfg(any(test, feature = "test-util"))]
pub mod testing;

pub use client::CompletionClient;
pub use llm_trait::CompletionBackend;
pub use pipeline::{NewsPipeline, NEWS_PROFILE, SCRIPT_PROFILE};
pub use prompts::{news_prompt, script_prompt};
pub use reporter::{ErrorReporter, NoticeCollector, TracingReporter};
pub use types::{ChatMessage, CompletionReply, CompletionRequest, OperationProfile};
