//! Test doubles for code built on top of the pipeline

use async_trait::async_trait;
use newsreel_common::{NewsreelError, Result};
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::llm_trait::CompletionBackend;
use crate::types::CompletionReply;

/// Deterministic backend returning a canned reply and recording calls
pub struct MockBackend {
    model: String,
    reply: std::result::Result<Value, String>,
    calls: AtomicUsize,
    last_call: Mutex<Option<(String, f32, u32)>>,
}

impl MockBackend {
    pub fn replying(model: &str, reply: Value) -> Self {
        Self {
            model: model.to_string(),
            reply: Ok(reply),
            calls: AtomicUsize::new(0),
            last_call: Mutex::new(None),
        }
    }

    pub fn failing(model: &str, message: &str) -> Self {
        Self {
            model: model.to_string(),
            reply: Err(message.to_string()),
            calls: AtomicUsize::new(0),
            last_call: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Prompt, temperature and max_tokens of the most recent call
    pub fn last_call(&self) -> Option<(String, f32, u32)> {
        self.last_call.lock().ok().and_then(|last_call| last_call.clone())
    }
}

#[async_trait]
impl CompletionBackend for MockBackend {
    async fn generate(&self, prompt: &str, temperature: f32, max_tokens: u32) -> Result<CompletionReply> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last_call) = self.last_call.lock() {
            *last_call = Some((prompt.to_string(), temperature, max_tokens));
        }
        match &self.reply {
            Ok(value) => Ok(serde_json::from_value(value.clone())?),
            Err(message) => Err(NewsreelError::network(message.clone())),
        }
    }

    fn model(&self) -> &str {
        &self.model
    }
}
