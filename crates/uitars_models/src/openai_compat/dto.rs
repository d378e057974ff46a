//! Data transfer objects for OpenAI-compatible chat completion APIs.

use serde::{Deserialize, Serialize};
use uitars_core::Message;

/// Outbound chat completion body.
///
/// Field order is fixed, so equal canonical input always serializes to the
/// same bytes.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest<'a> {
    /// Model identifier
    model: &'a str,
    /// Conversation messages in turn order
    messages: &'a [Message],
    /// Maximum tokens to generate
    max_tokens: u32,
    /// Sampling temperature
    temperature: f32,
}

impl<'a> ChatRequest<'a> {
    /// Creates a request body borrowing the model and messages.
    pub fn new(model: &'a str, messages: &'a [Message], max_tokens: u32, temperature: f32) -> Self {
        Self {
            model,
            messages,
            max_tokens,
            temperature,
        }
    }

    /// Number of messages in the body.
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }
}

/// The assistant message inside a choice. Only `content` is consumed.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionMessage {
    /// Generated text
    pub content: String,
    /// Role, normally "assistant"
    #[serde(default)]
    pub role: Option<String>,
}

/// A choice in the response.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    /// The generated message
    pub message: ChatCompletionMessage,
    /// Reason for finishing
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Chat completion response. Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    /// Response choices; only the first is ever read
    pub choices: Vec<ChatChoice>,
}
