//! Client for APIs that follow the OpenAI chat completions format.
//!
//! DashScope (Qwen-VL), vLLM, LM Studio and OpenAI itself all accept this
//! shape: `POST` a `{model, messages, max_tokens, temperature}` body, read
//! `choices[0].message.content` back.

mod client;
mod conversions;
mod dto;

pub use client::{
    CompletionClient, Endpoint, complete, inference_chat, inference_chat_structured,
};
pub use conversions::{check_roles, completion_text, to_chat_request};
pub use dto::{ChatChoice, ChatCompletionMessage, ChatRequest, ChatResponse};
