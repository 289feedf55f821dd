use serde::{Deserialize, Serialize};

/// Chat completion request body
#[derive(Debug, Clone, Serialize)]
pub struct CompletionRequest {
    /// Model identifier (e.g., "gemini-2.0-flash-001")
    pub model: String,

    /// Conversation messages; a single user turn carrying the prompt
    pub messages: Vec<ChatMessage>,

    /// Temperature (0.0 - 1.0)
    pub temperature: f32,

    /// Maximum tokens to generate
    pub max_tokens: u32,
}

impl CompletionRequest {
    /// Build a single-turn request for `prompt`
    pub fn new(model: impl Into<String>, prompt: impl Into<String>, temperature: f32, max_tokens: u32) -> Self {
        Self {
            model: model.into(),
            messages: vec![ChatMessage::user(prompt)],
            temperature,
            max_tokens,
        }
    }
}

/// Chat message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Raw provider reply.
///
/// Variants are tried in order, so a body carrying both `content` and
/// `choices` is read as [`CompletionReply::Direct`]. Any JSON value that fits
/// neither known shape lands in [`CompletionReply::Unknown`] instead of
/// failing to decode. Only the first choice is ever inspected, so the rest
/// of the list stays untyped.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum CompletionReply {
    /// `{ "content": "..." }`
    Direct { content: String },

    /// `{ "choices": [ { "message": { "content": "..." } } ] }`
    Choices { choices: Vec<serde_json::Value> },

    /// Anything else
    Unknown(serde_json::Value),
}

impl CompletionReply {
    /// Extract the generated text, trimmed.
    ///
    /// Returns `None` for unrecognized shapes, an empty `choices` list, or
    /// text that is empty after trimming.
    pub fn text(&self) -> Option<String> {
        let raw = match self {
            Self::Direct { content } => content.as_str(),
            Self::Choices { choices } => choices.first()?.pointer("/message/content")?.as_str()?,
            Self::Unknown(_) => return None,
        };

        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    /// Name of the recognized shape, for logging
    pub fn shape(&self) -> &'static str {
        match self {
            Self::Direct { .. } => "content",
            Self::Choices { .. } => "choices",
            Self::Unknown(_) => "unknown",
        }
    }
}

/// Sampling parameters fixed per pipeline operation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperationProfile {
    /// Temperature (0.0 - 1.0)
    pub temperature: f32,

    /// Maximum tokens to generate
    pub max_tokens: u32,
}
